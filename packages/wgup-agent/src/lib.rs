pub(crate) mod agent;
pub(crate) mod constant;
pub(crate) mod error;

pub mod command;
pub mod config;
pub mod executor;
pub mod keepalive;
pub mod provision;
pub mod util;

pub type AgentResult<T> = core::result::Result<T, error::AgentError>;

pub use agent::Agent;
pub use config::{Config, Peer};
pub use error::AgentError;
pub use executor::{CommandRunner, Executor, ShellRunner};
