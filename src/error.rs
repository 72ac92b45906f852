use crate::checker::CheckCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IfwupError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Update check failed: {0}")]
    CheckFailed(CheckCode),

    #[error("Maintenance tool launch failed: {0}")]
    Launch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IfwupError>;
