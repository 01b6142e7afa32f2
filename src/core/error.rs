use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    /// The simulation service answered with something other than 200.
    #[error("HTTP status {status}")]
    Http { status: u16 },

    /// Connection failure, timeout, or a body that is not valid JSON.
    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Unexpected(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl From<reqwest::Error> for SimError {
    fn from(e: reqwest::Error) -> Self {
        SimError::Transport(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
