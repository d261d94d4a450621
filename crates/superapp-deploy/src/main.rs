use {clap::Parser, std::process::ExitCode};

#[tokio::main]
async fn main() -> ExitCode {
    let args = superapp_deploy::arguments::Arguments::parse();
    observe::tracing::initialize(&args.observe_config());
    tracing::info!("running superapp-deploy with validated arguments:\n{}", args);
    superapp_deploy::main(args).await
}
