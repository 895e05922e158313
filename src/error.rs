use std::path::PathBuf;
use thiserror::Error;

/// Misuse of a container: reading from an empty stack or queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("undo stack is empty")]
    EmptyStack,
    #[error("task queue is empty")]
    EmptyQueue,
}

/// A shell line that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("missing {0}")]
    MissingArgument(&'static str),
    #[error("not a task number: {0}")]
    InvalidPosition(String),
}

/// Failure to load or write the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("config file already exists: {0}")]
    AlreadyExists(PathBuf),
    #[error("could not determine home directory")]
    NoHomeDir,
}
