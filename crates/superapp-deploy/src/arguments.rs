use {
    alloy_signer_local::PrivateKeySigner,
    clap::Parser,
    std::{
        fmt::{self, Display, Formatter},
        path::PathBuf,
    },
    tracing::Level,
    url::Url,
};

#[derive(Parser)]
pub struct Arguments {
    /// The Ethereum node URL to connect to.
    #[clap(long, env, default_value = "http://localhost:8545")]
    pub node_url: Url,

    /// Private key of the account that deploys the contract. Without it the
    /// first account unlocked on the node is used.
    #[clap(long, env, hide_env_values = true)]
    pub private_key: Option<PrivateKeySigner>,

    /// Directory containing the compiled contract artifacts.
    #[clap(long, env, default_value = "artifacts")]
    pub artifacts: PathBuf,

    #[clap(
        long,
        env,
        default_value = "warn,superapp_deploy=debug,contracts=debug"
    )]
    pub log_filter: String,

    /// Log events at least this severe are written to stderr.
    #[clap(long, env, default_value = "error")]
    pub log_stderr_threshold: Level,

    #[clap(long, env, default_value = "false")]
    pub use_json_logs: bool,
}

impl Arguments {
    pub fn observe_config(&self) -> observe::Config {
        observe::Config::new(
            &self.log_filter,
            Some(self.log_stderr_threshold),
            self.use_json_logs,
        )
    }
}

impl Display for Arguments {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self {
            node_url,
            private_key,
            artifacts,
            log_filter,
            log_stderr_threshold,
            use_json_logs,
        } = self;

        writeln!(f, "node_url: {node_url}")?;
        writeln!(
            f,
            "private_key: {}",
            if private_key.is_some() { "SECRET" } else { "None" }
        )?;
        writeln!(f, "artifacts: {artifacts:?}")?;
        writeln!(f, "log_filter: {log_filter}")?;
        writeln!(f, "log_stderr_threshold: {log_stderr_threshold}")?;
        writeln!(f, "use_json_logs: {use_json_logs}")?;
        Ok(())
    }
}
