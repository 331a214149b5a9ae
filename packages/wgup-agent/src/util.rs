use crate::error::AgentError;
use std::{env, str::FromStr};
use tokio::signal::unix::{signal, Signal, SignalKind};
use tracing_subscriber::filter::EnvFilter;

const RUST_LOG: &str = "RUST_LOG";
const HUMAN_LOGGING: &str = "HUMAN_LOGGING";

pub async fn init_logging() -> anyhow::Result<()> {
    let filter = match env::var_os(RUST_LOG) {
        Some(_) => {
            EnvFilter::try_from_default_env().expect("Invalid `RUST_LOG` provided")
        }
        None => EnvFilter::new("info"),
    };

    let human_logging = env::var_os(HUMAN_LOGGING)
        .map(|s| {
            bool::from_str(s.to_str().unwrap())
                .expect("Expected `true` or `false` to be provided for `HUMAN_LOGGING`")
        })
        .unwrap_or(true);

    let sub = tracing_subscriber::fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(filter);

    if human_logging {
        sub.with_ansi(true)
            .with_level(true)
            .with_line_number(true)
            .init();
    } else {
        sub.with_ansi(false)
            .with_level(true)
            .with_line_number(true)
            .json()
            .init();
    }
    Ok(())
}

pub fn shutdown_signal_handler() -> std::io::Result<impl futures::Future<Output = ()>> {
    let mut sighup: Signal = signal(SignalKind::hangup())?;
    let mut sigterm: Signal = signal(SignalKind::terminate())?;
    let mut sigint: Signal = signal(SignalKind::interrupt())?;

    let future = async move {
        tokio::select! {
            _ = sighup.recv() => {
                tracing::info!("Received SIGHUP. Stopping keepalive tasks.");
            }
            _ = sigterm.recv() => {
                tracing::info!("Received SIGTERM. Stopping keepalive tasks.");
            }
            _ = sigint.recv() => {
                tracing::info!("Received SIGINT. Stopping keepalive tasks.");
            }
        }
    };

    Ok(future)
}

/// Parses the dry-run invocation argument. Accepts the usual boolean
/// spellings case-insensitively; anything else is rejected before the
/// agent takes any other action.
pub fn parse_dry_run(value: &str) -> Result<bool, AgentError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Ok(true),
        "0" | "f" | "false" => Ok(false),
        _ => Err(AgentError::InvalidDryRun(value.to_string())),
    }
}
