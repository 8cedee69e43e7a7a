use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any failed call to the key service. Network, status and timeout
    /// failures all end up here.
    #[error("Request failed: {message}")]
    Request {
        status: Option<u16>,
        message: String,
    },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Credential store error: {0}")]
    Credentials(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConsoleError {
    pub fn request(message: impl Into<String>) -> Self {
        ConsoleError::Request {
            status: None,
            message: message.into(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ConsoleError::Request { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ConsoleError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return ConsoleError::Decode(err.to_string());
        }
        ConsoleError::Request {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ConsoleError {
    fn from(err: serde_json::Error) -> Self {
        ConsoleError::Decode(err.to_string())
    }
}

impl From<toml::de::Error> for ConsoleError {
    fn from(err: toml::de::Error) -> Self {
        ConsoleError::Config(format!("Failed to parse config file: {err}"))
    }
}
