use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchildkroeteError {
    #[error("Could not locate TortoiseGit (set tool_path in the config or pass --tool)")]
    ToolNotInstalled,

    #[error("Could not find a .git directory at or above: {path}")]
    RepositoryNotFound { path: PathBuf },

    #[error("Could not launch TortoiseGit: {reason}\n{command}")]
    LaunchFailed { command: String, reason: String },

    #[error("Action '{action}' needs a FILE argument")]
    MissingActiveFile { action: String },

    #[error("Unknown action: {name}")]
    UnknownAction { name: String },

    #[error("Bad config file {path}: {reason}")]
    ConfigError { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SchildkroeteError>;
