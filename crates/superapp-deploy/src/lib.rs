pub mod arguments;
pub mod deployer;
pub mod traits;

use {
    alloy_dyn_abi::DynSolValue,
    alloy_primitives::{Address, address},
    anyhow::{Context, Result},
    contracts::superfluid::mumbai,
    deployer::AlloyDeployer,
    std::{io::Write, process::ExitCode},
    traits::Deployer,
};

pub const CONTRACT_NAME: &str = "SuperAppPOC";

pub const HOST: Address = mumbai::HOST;
pub const CFA: Address = mumbai::CFA;
pub const FDAIX: Address = mumbai::FDAIX;
/// Receives the flows redirected by the super app.
pub const RECEIVER: Address = address!("0x41A10AFC05B4c18eF384c1cA88E5AC6c116cF7bE");

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Constructor arguments of the super app: host, accepted token, receiver.
pub fn constructor_args() -> Vec<DynSolValue> {
    vec![
        DynSolValue::Address(HOST),
        DynSolValue::Address(FDAIX),
        DynSolValue::Address(RECEIVER),
    ]
}

pub async fn main(args: arguments::Arguments) -> ExitCode {
    ExitCode::from(deploy_and_report(&args, &mut std::io::stdout()).await)
}

/// Deploys through the configured node and writes the outcome to `out`.
/// Returns the exit status of the process.
pub async fn deploy_and_report(args: &arguments::Arguments, out: &mut impl Write) -> u8 {
    let result = deploy_through_node(args).await;
    report(&result, out)
}

async fn deploy_through_node(args: &arguments::Arguments) -> Result<Address> {
    let deployer = AlloyDeployer::connect(args)
        .await
        .context("failed to connect to node")?;
    run(&deployer).await
}

/// Deploys the super app and waits until the deployment is confirmed.
pub async fn run(deployer: &dyn Deployer) -> Result<Address> {
    tracing::debug!(
        host = ?HOST,
        cfa = ?CFA,
        token = ?FDAIX,
        receiver = ?RECEIVER,
        "deploying {CONTRACT_NAME}"
    );

    let factory = deployer
        .contract_factory(CONTRACT_NAME)
        .await
        .context("failed to resolve contract factory")?;
    tracing::debug!(
        name = factory.name(),
        bytecode_len = factory.bytecode().len(),
        "resolved contract factory"
    );

    let deployment = deployer
        .deploy(&factory, constructor_args())
        .await
        .context("failed to deploy contract")?;
    tracing::debug!(?deployment, "waiting for deployment to be confirmed");

    deployer
        .confirm(deployment)
        .await
        .context("failed to confirm deployment")
}

/// Writes the outcome of a deployment to `out` and returns the exit status of
/// the process.
pub fn report(result: &Result<Address>, out: &mut impl Write) -> u8 {
    let (line, status) = match result {
        Ok(address) => {
            tracing::info!(?address, "deployment confirmed");
            (format!("{CONTRACT_NAME} deployed to: {address}"), EXIT_SUCCESS)
        }
        Err(err) => {
            tracing::error!(?err, "error deploying contract");
            (format!("Error deploying contract: {err:#}"), EXIT_FAILURE)
        }
    };
    if let Err(err) = writeln!(out, "{line}") {
        tracing::warn!(?err, "failed to write deployment outcome");
    }
    status
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        alloy_json_abi::JsonAbi,
        alloy_primitives::{B256, Bytes},
        anyhow::anyhow,
        clap::Parser,
        contracts::ContractFactory,
        traits::{MockDeployer, PendingDeployment},
    };

    const DEPLOYED: Address = address!("0x9999999999999999999999999999999999999999");
    const TX_HASH: B256 = B256::repeat_byte(0xab);

    fn factory() -> ContractFactory {
        ContractFactory::new(
            CONTRACT_NAME,
            JsonAbi::default(),
            Bytes::from_static(&[0x60, 0x80]),
        )
    }

    fn output(result: &Result<Address>) -> (u8, String) {
        let mut out = Vec::new();
        let status = report(result, &mut out);
        (status, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn deploys_with_hardcoded_arguments() {
        observe::tracing::initialize_reentrant("superapp_deploy=debug");
        let mut deployer = MockDeployer::new();
        deployer
            .expect_contract_factory()
            .times(1)
            .withf(|name: &str| name == "SuperAppPOC")
            .returning(|_| Ok(factory()));
        deployer
            .expect_deploy()
            .times(1)
            .withf(|factory: &ContractFactory, args: &Vec<DynSolValue>| {
                factory.name() == "SuperAppPOC"
                    && *args
                        == [
                            DynSolValue::Address(address!(
                                "0xEB796bdb90fFA0f28255275e16936D25d3418603"
                            )),
                            DynSolValue::Address(address!(
                                "0x5D8B4C2554aeB7e86F387B4d6c00Ac33499Ed01f"
                            )),
                            DynSolValue::Address(address!(
                                "0x41A10AFC05B4c18eF384c1cA88E5AC6c116cF7bE"
                            )),
                        ]
            })
            .returning(|_, _| Ok(PendingDeployment { tx_hash: TX_HASH }));
        deployer
            .expect_confirm()
            .times(1)
            .withf(|deployment: &PendingDeployment| deployment.tx_hash == TX_HASH)
            .returning(|_| Ok(DEPLOYED));

        let result = run(&deployer).await;
        assert_eq!(result.as_ref().unwrap(), &DEPLOYED);

        let (status, out) = output(&result);
        assert_eq!(status, EXIT_SUCCESS);
        assert!(out.contains(&DEPLOYED.to_string()));
        assert!(out.starts_with("SuperAppPOC deployed to: "));
    }

    #[tokio::test]
    async fn fails_when_factory_cannot_be_resolved() {
        observe::tracing::initialize_reentrant("superapp_deploy=debug");
        let mut deployer = MockDeployer::new();
        deployer
            .expect_contract_factory()
            .times(1)
            .returning(|_| Err(anyhow!("artifact not found")));
        deployer.expect_deploy().never();
        deployer.expect_confirm().never();

        let result = run(&deployer).await;
        let (status, out) = output(&result);
        assert_eq!(status, EXIT_FAILURE);
        assert!(out.starts_with("Error deploying contract: "));
        assert!(out.contains("failed to resolve contract factory"));
        assert!(out.contains("artifact not found"));
    }

    #[tokio::test]
    async fn fails_when_deployment_cannot_be_sent() {
        observe::tracing::initialize_reentrant("superapp_deploy=debug");
        let mut deployer = MockDeployer::new();
        deployer
            .expect_contract_factory()
            .returning(|_| Ok(factory()));
        deployer
            .expect_deploy()
            .times(1)
            .returning(|_, _| Err(anyhow!("insufficient funds")));
        deployer.expect_confirm().never();

        let result = run(&deployer).await;
        let (status, out) = output(&result);
        assert_eq!(status, EXIT_FAILURE);
        assert!(out.contains("failed to deploy contract"));
        assert!(out.contains("insufficient funds"));
    }

    #[tokio::test]
    async fn fails_when_deployment_is_not_confirmed() {
        observe::tracing::initialize_reentrant("superapp_deploy=debug");
        let mut deployer = MockDeployer::new();
        deployer
            .expect_contract_factory()
            .returning(|_| Ok(factory()));
        deployer
            .expect_deploy()
            .returning(|_, _| Ok(PendingDeployment { tx_hash: TX_HASH }));
        deployer
            .expect_confirm()
            .times(1)
            .returning(|_| Err(anyhow!("deployment transaction reverted")));

        let result = run(&deployer).await;
        let (status, out) = output(&result);
        assert_eq!(status, EXIT_FAILURE);
        assert!(out.contains("failed to confirm deployment"));
        assert!(out.contains("reverted"));
        assert!(!out.contains("deployed to"));
    }

    #[tokio::test]
    async fn unreachable_node_exits_with_failure() {
        observe::tracing::initialize_reentrant("superapp_deploy=debug");
        // Nothing listens on port 1.
        let args = arguments::Arguments::try_parse_from([
            "superapp-deploy",
            "--node-url",
            "http://127.0.0.1:1",
        ])
        .unwrap();

        let mut out = Vec::new();
        let status = deploy_and_report(&args, &mut out).await;
        let out = String::from_utf8(out).unwrap();
        assert_eq!(status, EXIT_FAILURE);
        assert!(out.starts_with("Error deploying contract: "));
        assert!(out.contains("failed to connect to node"));
    }

    #[test]
    fn constructor_arguments_exclude_cfa() {
        let args = constructor_args();
        assert_eq!(args.len(), 3);
        assert!(!args.contains(&DynSolValue::Address(CFA)));
    }
}
