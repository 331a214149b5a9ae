use clap::Parser;
use std::sync::Arc;
use wgup_agent::{util, Agent, Config, Executor, ShellRunner};

#[derive(Debug, Parser)]
#[clap(name = "Wgup", about = "Wgup provisioning agent", version)]
pub struct Opt {
    /// Interface to provision.
    #[clap(help = "Name of the interface to bring up.")]
    pub interface: String,

    /// Dry-run switch.
    #[clap(help = "If true, print every command without running it.")]
    pub dry_run: String,
}

pub async fn run_cli() -> Result<(), anyhow::Error> {
    let opt = Opt::parse();

    util::init_logging().await?;

    let dry_run = util::parse_dry_run(&opt.dry_run)?;

    let config = Config::load(&opt.interface)?;
    tracing::info!("Configuration: {config:?}");

    let executor = Executor::new(Arc::new(ShellRunner), dry_run);
    let agent = Agent::new(config, executor);

    let shutdown = util::shutdown_signal_handler()?;
    tokio::select! {
        res = agent.run() => res?,
        () = shutdown => {
            tracing::info!("Shutdown signal received. Exiting.");
        }
    }

    Ok(())
}
