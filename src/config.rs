use crate::client_error::ClientError;
use std::env;

/// Prefix applied to every environment variable the tool reads.
const ENV_PREFIX: &str = "WALLABAG_";

/// Server used when `WALLABAG_URL` is not set.
const DEFAULT_SERVER_URL: &str = "https://app.wallabag.it";

/// Credentials and server location, read once from the environment at startup
/// and passed by reference to the components that need them. Never persisted.
#[derive(Debug)]
pub struct Config {
    pub server_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub username: String,
    pub password: String,
}

impl Config {
    /// Build a config from `WALLABAG_*` environment variables.
    ///
    /// All values except the server URL are required; the first missing one
    /// produces a `MissingConfig` error naming the variable.
    pub fn from_env() -> Result<Config, ClientError> {
        Ok(Config {
            server_url: get_required("URL", Some(DEFAULT_SERVER_URL))?,
            client_id: get_required("CLIENT_ID", None)?,
            client_secret: get_required("CLIENT_SECRET", None)?,
            username: get_required("USERNAME", None)?,
            password: get_required("PASSWORD", None)?,
        })
    }
}

/// Look up a prefixed environment variable, falling back to `default` when it
/// is unset or empty. With no default, absence is a `MissingConfig` error.
fn get_required(name: &str, default: Option<&str>) -> Result<String, ClientError> {
    let key = format!("{}{}", ENV_PREFIX, name);

    match env::var(&key) {
        Ok(ref value) if !value.is_empty() => Ok(value.clone()),
        _ => match default {
            Some(default) => Ok(String::from(default)),
            None => Err(ClientError::MissingConfig(key)),
        },
    }
}
