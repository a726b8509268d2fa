use clap::Parser;
use std::process::ExitCode;

use landform_deployer::app;
use landform_deployer::blockchain::RpcClient;
use landform_deployer::cli::Cli;
use landform_deployer::config::loader::load_or_default;
use landform_deployer::config::schema::ObservabilityConfig;
use landform_deployer::observability::init_logging;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine; the variables may come from the shell.
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let config = load_or_default(cli.config.as_deref());

    let log_level = match &config {
        Ok(config) => config.observability.log_level.clone(),
        Err(_) => ObservabilityConfig::default().log_level,
    };
    init_logging(&log_level);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        network = %cli.network,
        "landform-deployer starting"
    );

    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr();

    let code = app::execute(
        &cli,
        config,
        |var| std::env::var(var).ok(),
        |network, timeout| RpcClient::connect(network.rpc_url.clone(), &network.wallet, timeout),
        &mut stdout,
        &mut stderr,
    )
    .await;

    ExitCode::from(code)
}
