use crate::{command, config::Peer, executor::Executor, AgentResult};
use std::time::Duration;

/// One keepalive loop for one peer. The interval is fixed when the task is
/// created and the loop never ends on its own; a failed probe propagates its
/// error out of the task instead.
pub async fn run(peer: Peer, executor: Executor) -> AgentResult<()> {
    let interval = Duration::from_secs(u64::from(peer.persistent_keepalive));

    loop {
        tokio::time::sleep(interval).await;
        executor.execute(&command::ping(&peer))?;
    }
}
