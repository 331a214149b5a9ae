use tracing::error;
use wgup_agent::AgentError;

#[tokio::main]
async fn main() {
    if let Err(err) = wgup_cli::cli::run_cli().await {
        error!("Error: {err:?}");
        let code = err
            .downcast_ref::<AgentError>()
            .map_or(1, AgentError::exit_code);
        std::process::exit(code);
    }
}
