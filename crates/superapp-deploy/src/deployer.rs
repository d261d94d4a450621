use {
    crate::{
        arguments::Arguments,
        traits::{Deployer, PendingDeployment},
    },
    alloy_dyn_abi::DynSolValue,
    alloy_network::{EthereumWallet, ReceiptResponse, TransactionBuilder},
    alloy_primitives::{Address, TxHash},
    alloy_provider::{DynProvider, Provider, ProviderBuilder},
    alloy_rpc_types::{TransactionReceipt, TransactionRequest},
    anyhow::{Context, Result},
    contracts::{Artifacts, ContractFactory, networks, superfluid},
};

/// Deploys contracts from local artifacts through a JSON-RPC node.
pub struct AlloyDeployer {
    provider: DynProvider,
    from: Address,
    artifacts: Artifacts,
}

impl AlloyDeployer {
    pub async fn connect(args: &Arguments) -> Result<Self> {
        let builder = ProviderBuilder::new();
        let provider = match &args.private_key {
            Some(signer) => builder
                .wallet(EthereumWallet::new(signer.clone()))
                .connect_http(args.node_url.clone())
                .erased(),
            None => builder.connect_http(args.node_url.clone()).erased(),
        };

        Self::new(
            provider,
            args.private_key.as_ref().map(|signer| signer.address()),
            Artifacts::new(args.artifacts.clone()),
        )
        .await
    }

    /// Deploys from `from`, or from the node's first unlocked account if no
    /// sender is given.
    pub async fn new(
        provider: DynProvider,
        from: Option<Address>,
        artifacts: Artifacts,
    ) -> Result<Self> {
        let from = match from {
            Some(from) => from,
            // Development nodes sign for their own unlocked accounts.
            None => *provider
                .get_accounts()
                .await
                .context("could not fetch node accounts")?
                .first()
                .context("node has no unlocked accounts")?,
        };

        let chain_id = provider
            .get_chain_id()
            .await
            .context("could not fetch current chain id")?;
        tracing::info!(
            chain_id,
            network = networks::name(chain_id).unwrap_or("unknown"),
            ?from,
            "connected to node"
        );
        if chain_id != superfluid::mumbai::CHAIN_ID {
            tracing::warn!(
                chain_id,
                expected = superfluid::mumbai::CHAIN_ID,
                "the Superfluid addresses used as constructor arguments belong to a different chain"
            );
        }

        Ok(Self {
            provider,
            from,
            artifacts,
        })
    }

    fn deployment_request(
        &self,
        factory: &ContractFactory,
        args: &[DynSolValue],
    ) -> Result<TransactionRequest> {
        let code = factory.deploy_code(args)?;
        Ok(TransactionRequest::default()
            .with_from(self.from)
            .with_deploy_code(code))
    }

    /// Polls the node until the transaction is mined. Never times out.
    async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<TransactionReceipt> {
        loop {
            let receipt = self
                .provider
                .get_transaction_receipt(tx_hash)
                .await
                .with_context(|| format!("could not fetch receipt of transaction {tx_hash:?}"))?;
            if let Some(receipt) = receipt {
                return Ok(receipt);
            }
            tokio::time::sleep(self.provider.client().poll_interval()).await;
        }
    }
}

#[async_trait::async_trait]
impl Deployer for AlloyDeployer {
    async fn contract_factory(&self, name: &str) -> Result<ContractFactory> {
        let artifact = self.artifacts.find(name)?;
        tracing::debug!(
            name = artifact.fully_qualified_name(),
            "found contract artifact"
        );
        Ok(ContractFactory::from_artifact(artifact)?)
    }

    async fn deploy(
        &self,
        factory: &ContractFactory,
        args: Vec<DynSolValue>,
    ) -> Result<PendingDeployment> {
        let tx = self.deployment_request(factory, &args)?;
        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .context("could not send deployment transaction")?;
        tracing::debug!(tx_hash = ?pending.tx_hash(), "sent deployment transaction");

        Ok(PendingDeployment {
            tx_hash: *pending.tx_hash(),
        })
    }

    async fn confirm(&self, deployment: PendingDeployment) -> Result<Address> {
        let receipt = self.wait_for_receipt(deployment.tx_hash).await?;
        tracing::debug!(
            tx_hash = ?deployment.tx_hash,
            block = ?receipt.block_number(),
            gas_used = receipt.gas_used(),
            "deployment transaction mined"
        );

        anyhow::ensure!(
            receipt.status(),
            "deployment transaction {:?} reverted",
            deployment.tx_hash
        );
        receipt
            .contract_address()
            .with_context(|| format!("transaction {:?} created no contract", deployment.tx_hash))
    }
}
