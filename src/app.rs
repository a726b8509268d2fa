//! One deployment run, from parsed arguments to an exit code.
//!
//! Kept apart from `main` so the whole sequence can run against an
//! in-memory client and captured output streams.

use std::io::Write;
use std::time::Duration;

use crate::blockchain::DeploymentClient;
use crate::cli::Cli;
use crate::config::{ConfigError, DeployerConfig, NetworkDescriptor, NetworkRegistry};
use crate::deploy::{ConfirmationSettings, ContractFactory, DeployError, Deployer, Deployment};

/// Run one deployment and return the process exit code.
///
/// `lookup` reads environment variables; `connect` builds the chain client
/// for the resolved network. On success exactly one line is written to
/// `out`; on failure the error goes to `err` and the result
/// is non-zero.
pub async fn execute<L, C, K, O, E>(
    cli: &Cli,
    config: Result<DeployerConfig, ConfigError>,
    lookup: L,
    connect: K,
    out: &mut O,
    err: &mut E,
) -> u8
where
    L: Fn(&str) -> Option<String>,
    C: DeploymentClient,
    K: FnOnce(&NetworkDescriptor, Duration) -> C,
    O: Write,
    E: Write,
{
    match run(cli, config, lookup, connect, out).await {
        Ok(_) => 0,
        Err(e) => {
            tracing::error!(error = %e, "Deployment failed");
            report_error(&e, err);
            e.exit_code()
        }
    }
}

async fn run<L, C, K, O>(
    cli: &Cli,
    config: Result<DeployerConfig, ConfigError>,
    lookup: L,
    connect: K,
    out: &mut O,
) -> Result<Option<Deployment>, DeployError>
where
    L: Fn(&str) -> Option<String>,
    C: DeploymentClient,
    K: FnOnce(&NetworkDescriptor, Duration) -> C,
    O: Write,
{
    let mut config = config?;
    cli.apply(&mut config);

    let network = NetworkRegistry::new(&config).resolve(&cli.network, lookup)?;
    tracing::info!(
        network = %network.name,
        rpc_host = network.rpc_url.host_str().unwrap_or_default(),
        deployer = %network.wallet.address(),
        "Network resolved"
    );

    let deployment = &config.deployment;
    let factory = ContractFactory::from_artifacts(&deployment.artifacts_dir, &deployment.contract)?;

    if cli.dry_run {
        let request = factory.request();
        tracing::info!(
            contract = %request.contract,
            network = %network.name,
            gas_price_wei = request.gas.gas_price,
            gas_limit = request.gas.gas_limit,
            "Dry run, nothing submitted"
        );
        return Ok(None);
    }

    let client = connect(&network, Duration::from_secs(deployment.rpc_timeout_secs));
    let deployer = Deployer::new(&client, ConfirmationSettings::from(deployment));
    let result = deployer
        .deploy_and_report(&factory, network.chain_id, out)
        .await?;

    Ok(Some(result))
}

// Every error's Display already carries its cause.
fn report_error<E: Write>(error: &DeployError, err: &mut E) {
    let _ = writeln!(err, "Error: {}", error);
    let _ = err.flush();
}
