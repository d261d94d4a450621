//! Compiled contract artifacts and the factories used to deploy them, plus
//! the well-known addresses of the contracts we deploy against.

pub mod artifact;
pub mod factory;
pub mod networks;
pub mod superfluid;

pub use {
    artifact::{Artifact, Artifacts},
    factory::ContractFactory,
};

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact for contract {name:?} not found in {dir:?}")]
    NotFound { name: String, dir: PathBuf },
    #[error("multiple artifacts for contract {name:?}, use one of the fully qualified names: {}", candidates.join(", "))]
    Ambiguous {
        name: String,
        candidates: Vec<String>,
    },
    #[error("failed to read artifact {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse artifact {path:?}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("artifact {path:?} contains contract {found:?} instead of {expected:?}")]
    NameMismatch {
        path: PathBuf,
        expected: String,
        found: String,
    },
    #[error("contract {0:?} is abstract and can't be deployed")]
    Abstract(String),
    #[error("contract {name:?} must be linked against libraries first: {}", libraries.join(", "))]
    UnlinkedLibraries {
        name: String,
        libraries: Vec<String>,
    },
    #[error("contract {name:?} has invalid bytecode")]
    InvalidBytecode {
        name: String,
        #[source]
        source: alloy_primitives::hex::FromHexError,
    },
    #[error("contract {name:?} has no constructor but got {count} arguments")]
    NoConstructor { name: String, count: usize },
    #[error("constructor arguments don't match the ABI of contract {name:?}")]
    ConstructorArguments {
        name: String,
        #[source]
        source: alloy_dyn_abi::Error,
    },
}
