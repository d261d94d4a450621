//! The boundary between the deployment sequence and the chain.
//!
//! Abstracted behind a trait so the sequence can be unit tested with mocks.

use {
    alloy_dyn_abi::DynSolValue,
    alloy_primitives::{Address, TxHash},
    anyhow::Result,
    contracts::ContractFactory,
};

/// A sent contract creation transaction that is not confirmed yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingDeployment {
    pub tx_hash: TxHash,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Deployer: Send + Sync {
    /// Resolves the factory of the contract with the given name.
    async fn contract_factory(&self, name: &str) -> Result<ContractFactory>;

    /// Sends the transaction creating a new instance of the contract with the
    /// given constructor arguments.
    async fn deploy(
        &self,
        factory: &ContractFactory,
        args: Vec<DynSolValue>,
    ) -> Result<PendingDeployment>;

    /// Waits until the deployment is mined and returns the address of the
    /// new contract. Fails if the deployment reverted.
    async fn confirm(&self, deployment: PendingDeployment) -> Result<Address>;
}
