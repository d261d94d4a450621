use {
    crate::{Artifact, ArtifactError},
    alloy_dyn_abi::{DynSolValue, JsonAbiExt},
    alloy_json_abi::JsonAbi,
    alloy_primitives::Bytes,
};

/// Everything needed to deploy new instances of a contract.
#[derive(Clone, Debug, PartialEq)]
pub struct ContractFactory {
    name: String,
    abi: JsonAbi,
    bytecode: Bytes,
}

impl ContractFactory {
    pub fn new(name: impl Into<String>, abi: JsonAbi, bytecode: Bytes) -> Self {
        Self {
            name: name.into(),
            abi,
            bytecode,
        }
    }

    pub fn from_artifact(artifact: Artifact) -> Result<Self, ArtifactError> {
        let libraries = artifact.unlinked_libraries();
        if !libraries.is_empty() {
            return Err(ArtifactError::UnlinkedLibraries {
                name: artifact.contract_name,
                libraries,
            });
        }

        let bytecode = artifact
            .bytecode
            .parse::<Bytes>()
            .map_err(|source| ArtifactError::InvalidBytecode {
                name: artifact.contract_name.clone(),
                source,
            })?;
        // Interfaces and abstract contracts compile to empty creation code.
        if bytecode.is_empty() {
            return Err(ArtifactError::Abstract(artifact.contract_name));
        }

        Ok(Self::new(artifact.contract_name, artifact.abi, bytecode))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytecode(&self) -> &Bytes {
        &self.bytecode
    }

    /// Creation code followed by the ABI encoded constructor arguments. This
    /// is the input of the transaction that deploys the contract.
    pub fn deploy_code(&self, args: &[DynSolValue]) -> Result<Bytes, ArtifactError> {
        let encoded_args = match &self.abi.constructor {
            Some(constructor) => constructor.abi_encode_input(args).map_err(|source| {
                ArtifactError::ConstructorArguments {
                    name: self.name.clone(),
                    source,
                }
            })?,
            None if args.is_empty() => Vec::new(),
            None => {
                return Err(ArtifactError::NoConstructor {
                    name: self.name.clone(),
                    count: args.len(),
                });
            }
        };

        let mut code = Vec::with_capacity(self.bytecode.len() + encoded_args.len());
        code.extend_from_slice(&self.bytecode);
        code.extend_from_slice(&encoded_args);
        Ok(code.into())
    }
}
