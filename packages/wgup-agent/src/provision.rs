use crate::{command, config::Config, executor::Executor, AgentResult};

/// Runs the fixed bring-up sequence. Steps are strictly ordered and the
/// first failure aborts everything after it; already-applied steps are not
/// rolled back.
pub fn provision(config: &Config, executor: &Executor) -> AgentResult<()> {
    executor.execute(&command::create_interface(config))?;
    executor.execute(&command::write_private_key(config))?;
    executor.execute(&command::set_private_key(config))?;

    for peer in &config.peers {
        executor.execute(&command::add_peer(config, peer))?;
    }

    executor.execute(&command::turn_on_interface(config))?;
    executor.execute(&command::show_status(config))?;

    Ok(())
}
