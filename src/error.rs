use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Terminal too small (minimum 80x24)")]
    TerminalTooSmall,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Presenter failed: {0}")]
    Presenter(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
