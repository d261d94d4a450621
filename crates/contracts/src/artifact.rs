//! Lookup of Hardhat compilation artifacts by contract name.
//!
//! Hardhat writes one JSON file per contract to
//! `<artifacts>/<source path>/<ContractName>.json`, e.g.
//! `artifacts/contracts/SuperAppPOC.sol/SuperAppPOC.json`. Contracts can be
//! referred to by their bare name as long as it is unique, or by their fully
//! qualified name (`contracts/SuperAppPOC.sol:SuperAppPOC`).

use {
    crate::ArtifactError,
    alloy_json_abi::JsonAbi,
    serde::Deserialize,
    std::{
        collections::BTreeMap,
        fs,
        path::{Path, PathBuf},
    },
};

/// Directory with build information that is not a contract artifact.
const BUILD_INFO_DIR: &str = "build-info";

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub contract_name: String,
    #[serde(default)]
    pub source_name: String,
    pub abi: JsonAbi,
    /// Hex encoded creation code. Stays a string because unlinked bytecode
    /// contains library placeholders that are not valid hex.
    pub bytecode: String,
    /// Library placeholders in the creation code, keyed by source file and
    /// then by library name.
    #[serde(default)]
    pub link_references: BTreeMap<String, BTreeMap<String, serde_json::Value>>,
}

impl Artifact {
    pub fn from_file(path: &Path) -> Result<Self, ArtifactError> {
        let content = fs::read(path).map_err(|source| ArtifactError::Io {
            path: path.to_owned(),
            source,
        })?;
        serde_json::from_slice(&content).map_err(|source| ArtifactError::Json {
            path: path.to_owned(),
            source,
        })
    }

    /// The `<source>:<contract>` name that identifies this artifact uniquely.
    /// Artifacts without a source name only have their bare name.
    pub fn fully_qualified_name(&self) -> String {
        if self.source_name.is_empty() {
            return self.contract_name.clone();
        }
        format!("{}:{}", self.source_name, self.contract_name)
    }

    /// Fully qualified names of all libraries the creation code still needs
    /// to be linked against.
    pub fn unlinked_libraries(&self) -> Vec<String> {
        self.link_references
            .iter()
            .flat_map(|(source, libraries)| {
                libraries.keys().map(move |library| format!("{source}:{library}"))
            })
            .collect()
    }
}

/// A directory of compilation artifacts.
#[derive(Clone, Debug)]
pub struct Artifacts {
    dir: PathBuf,
}

impl Artifacts {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Finds and reads the artifact of the contract with the given bare or
    /// fully qualified name.
    pub fn find(&self, name: &str) -> Result<Artifact, ArtifactError> {
        let (path, contract_name) = match name.rsplit_once(':') {
            Some((source, contract_name)) => (
                self.dir.join(source).join(format!("{contract_name}.json")),
                contract_name,
            ),
            None => (self.search(name)?, name),
        };
        if !path.is_file() {
            return Err(ArtifactError::NotFound {
                name: name.to_owned(),
                dir: self.dir.clone(),
            });
        }

        tracing::debug!(?path, "reading artifact");
        let artifact = Artifact::from_file(&path)?;
        if artifact.contract_name != contract_name {
            return Err(ArtifactError::NameMismatch {
                path,
                expected: contract_name.to_owned(),
                found: artifact.contract_name,
            });
        }
        Ok(artifact)
    }

    fn search(&self, name: &str) -> Result<PathBuf, ArtifactError> {
        let file_name = format!("{name}.json");
        let mut matches = Vec::new();
        collect_files(&self.dir, &file_name, &mut matches)?;

        match matches.len() {
            0 => Err(ArtifactError::NotFound {
                name: name.to_owned(),
                dir: self.dir.clone(),
            }),
            1 => Ok(matches.remove(0)),
            _ => {
                let mut candidates = matches
                    .iter()
                    .map(|path| self.fully_qualified_name(path, name))
                    .collect::<Vec<_>>();
                candidates.sort();
                Err(ArtifactError::Ambiguous {
                    name: name.to_owned(),
                    candidates,
                })
            }
        }
    }

    /// Derives `<source>:<contract>` from the location of an artifact file.
    fn fully_qualified_name(&self, path: &Path, name: &str) -> String {
        let source = path
            .parent()
            .and_then(|parent| parent.strip_prefix(&self.dir).ok())
            .map(|source| {
                source
                    .components()
                    .map(|component| component.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/")
            })
            .unwrap_or_default();
        format!("{source}:{name}")
    }
}

fn collect_files(
    dir: &Path,
    file_name: &str,
    matches: &mut Vec<PathBuf>,
) -> Result<(), ArtifactError> {
    let io_error = |source| ArtifactError::Io {
        path: dir.to_owned(),
        source,
    };
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        // A missing directory simply contains no artifacts.
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(err) => return Err(io_error(err)),
    };

    for entry in entries {
        let entry = entry.map_err(io_error)?;
        let path = entry.path();
        let entry_name = entry.file_name();
        let entry_name = entry_name.to_string_lossy();
        if entry.file_type().map_err(io_error)?.is_dir() {
            if entry_name != BUILD_INFO_DIR {
                collect_files(&path, file_name, matches)?;
            }
        } else if entry_name == file_name {
            matches.push(path);
        }
    }
    Ok(())
}
