use crate::{config::Config, executor::Executor, keepalive, provision, AgentResult};
use tokio::task::JoinSet;

/// Lifecycle coordinator: provisioning first, then one keepalive task per
/// eligible peer for the rest of the process lifetime.
pub struct Agent {
    config: Config,
    executor: Executor,
}

impl Agent {
    pub fn new(config: Config, executor: Executor) -> Self {
        Self { config, executor }
    }

    pub async fn run(self) -> AgentResult<()> {
        provision::provision(&self.config, &self.executor)?;

        let mut tasks: JoinSet<AgentResult<()>> = JoinSet::new();
        for peer in self.config.peers.iter().filter(|p| p.wants_keepalive()) {
            println!("register peer to keepalive task set: {}", peer.name);
            tasks.spawn(keepalive::run(peer.clone(), self.executor.clone()));
        }

        // Keepalive tasks only ever finish by failing, so this loop blocks
        // until the process is killed, a probe fails, or the set was empty
        // to begin with. Returning drops the set and aborts any siblings.
        while let Some(res) = tasks.join_next().await {
            res??;
        }

        Ok(())
    }
}
