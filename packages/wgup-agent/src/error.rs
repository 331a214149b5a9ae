use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Only accept boolean value for dryRun, got: {0}")]
    InvalidDryRun(String),

    #[error("Fail to load config file {path}: {source}")]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed config at line {line}: {text}")]
    ConfigParse { line: usize, text: String },

    #[error("Command failed: `{command}`: {source}")]
    CommandFailed {
        command: String,
        source: std::io::Error,
    },

    #[error("Tokio task join error: {0}")]
    TokioJoin(#[from] tokio::task::JoinError),
}

impl AgentError {
    /// Process exit status for this failure. These codes are part of the
    /// observable contract and must stay stable.
    pub fn exit_code(&self) -> i32 {
        match self {
            AgentError::InvalidDryRun(_) => 3,
            AgentError::ConfigLoad { .. } | AgentError::ConfigParse { .. } => 1,
            AgentError::CommandFailed { .. } => 5,
            _ => 1,
        }
    }
}
