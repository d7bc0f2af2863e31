use std::fmt;
use std::io;

/// Various errors returned while talking to the wallabag server.
#[derive(Debug)]
pub enum ClientError {
    /// Error identifying that the previous request was not sent because no
    /// access token is available on the client.
    NeedsToken(String),

    /// A required environment variable was absent. The message names the
    /// variable so the user knows what to set.
    MissingConfig(String),

    /// General error message that encompasses I/O, transport, and parsing
    /// failures.
    General(String),

    /// Error status returned by the wallabag API.
    ApiError { status: u16, message: String },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClientError::NeedsToken(error) => write!(f, "{}", error),
            ClientError::MissingConfig(name) => {
                write!(f, "Missing required environment variable: {}", name)
            }
            ClientError::General(error) => write!(f, "{}", error),
            ClientError::ApiError { status, message } => {
                write!(f, "[{}] {}", status, message)
            }
        }
    }
}

impl From<String> for ClientError {
    fn from(err: String) -> ClientError {
        ClientError::General(err)
    }
}

impl From<&str> for ClientError {
    fn from(err: &str) -> ClientError {
        ClientError::General(String::from(err))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::General(err.to_string())
    }
}

impl From<io::Error> for ClientError {
    fn from(err: io::Error) -> Self {
        ClientError::General(err.to_string())
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> ClientError {
        ClientError::General(err.to_string())
    }
}
