extern crate serde;

use crate::client::Client;
use crate::client_error::ClientError;
use crate::config::Config;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Name of the cache file, created under the system temp directory.
const CACHE_FILE_NAME: &str = "wallabag_token.json";

/// An access token together with its expiration, as both returned from the
/// OAuth endpoint and persisted in the on-disk cache.
///
/// A record is only usable while `expiration` (unix seconds) is in the
/// future; callers should check `is_expired()` before sending the token.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TokenRecord {
    pub token: String,
    pub expiration: u64,
}

impl TokenRecord {
    /// Create a record from a freshly issued token, converting the server's
    /// relative `expires_in` into an absolute unix timestamp.
    pub fn new(token: String, expires_in: u64) -> TokenRecord {
        TokenRecord {
            token,
            expiration: unix_now() + expires_in,
        }
    }

    /// Whether the token has reached its expiration timestamp.
    pub fn is_expired(&self) -> bool {
        self.expiration <= unix_now()
    }
}

/// Current time as unix seconds.
pub(crate) fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_secs())
        .unwrap_or(0)
}

/// On-disk cache holding the most recently issued `TokenRecord`.
///
/// The file is not locked; concurrent invocations of the tool can race on the
/// read-then-write sequence. Acceptable for a single-user CLI.
pub struct TokenCache {
    path: PathBuf,
}

impl TokenCache {
    pub fn new(path: PathBuf) -> TokenCache {
        TokenCache { path }
    }

    /// Default cache location under the system temp directory.
    pub fn default_path() -> PathBuf {
        std::env::temp_dir().join(CACHE_FILE_NAME)
    }

    /// Read the cached record. A missing file and a file that fails to parse
    /// are both treated as "no cached token", forcing a refresh.
    pub fn load(&self) -> Option<TokenRecord> {
        let contents = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Persist a record, overwriting any previous cache file.
    pub fn store(&self, record: &TokenRecord) -> Result<(), ClientError> {
        let contents = serde_json::to_string(record)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

/// Produce a usable access token, refreshing through the API when needed.
///
/// A cached, unexpired record is used directly without any network call.
/// Otherwise a single OAuth password-grant request is made and the new record
/// overwrites the cache. Network or HTTP failure propagates to the caller;
/// there are no retries.
pub fn obtain_token(
    client: &mut Client,
    config: &Config,
    cache: &TokenCache,
) -> Result<String, ClientError> {
    if let Some(record) = cache.load() {
        if !record.is_expired() {
            client.set_access_token(record.token.clone());
            return Ok(record.token);
        }
    }

    let record = client.request_token(config)?;
    cache.store(&record)?;

    Ok(record.token)
}
