extern crate serde;
extern crate serde_json;

use crate::client_error::ClientError;
use crate::config::Config;
use crate::token_record::TokenRecord;
use reqwest;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default network timeout for API requests.
const DEFAULT_TIMEOUT: u64 = 30;

pub struct Client {
    access_token: Option<String>,
    server_url: String,
    timeout: u64,
}

impl Client {
    /// Create a new client for a wallabag server, without a token.
    pub fn new(server_url: String) -> Client {
        Client {
            access_token: None,
            server_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Client {
    /// Get the timeout for API requests.
    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    /// Set the timeout for API requests.
    pub fn set_timeout(&mut self, timeout: u64) {
        self.timeout = timeout;
    }

    /// Get the access token.
    pub fn access_token(&self) -> Option<String> {
        self.access_token.clone()
    }

    /// Set the access token, usually one loaded from the on-disk cache.
    pub fn set_access_token(&mut self, access_token: String) {
        self.access_token = Some(access_token);
    }

    /// Get the server base URL.
    pub fn server_url(&self) -> &str {
        &self.server_url
    }
}

/// Password-grant request body sent to the OAuth endpoint.
#[derive(Serialize)]
struct TokenRequest<'a> {
    grant_type: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
    username: &'a str,
    password: &'a str,
}

/// Fields we use from a successful OAuth response.
#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

/// Error object the OAuth endpoint sends back on a failed exchange.
#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
    error_description: Option<String>,
}

/// Body for the add-entry endpoint.
#[derive(Serialize)]
struct AddEntryRequest<'a> {
    url: &'a str,
}

impl Client {
    fn http_client(&self) -> Result<reqwest::Client, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout))
            .build()?;

        Ok(client)
    }

    /// Exchange the configured credentials for a new access token. Guarantees
    /// an access token is set on the client when it returns an `Result::Ok`.
    pub fn request_token(&mut self, config: &Config) -> Result<TokenRecord, ClientError> {
        let url = format!("{}/oauth/v2/token", self.server_url);
        let body = TokenRequest {
            grant_type: "password",
            client_id: &config.client_id,
            client_secret: &config.client_secret,
            username: &config.username,
            password: &config.password,
        };

        let client = self.http_client()?;
        let mut response = client.post(url.as_str()).json(&body).send()?;
        let status = response.status();
        let raw_response = response.text()?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ErrorResponse>(&raw_response) {
                Ok(error) => error.error_description.unwrap_or(error.error),
                Err(_) => raw_response,
            };

            return Err(ClientError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let api_response: TokenResponse = serde_json::from_str(&raw_response)?;
        let record = TokenRecord::new(api_response.access_token, api_response.expires_in);

        self.access_token = Some(record.token.clone());

        Ok(record)
    }

    /// Save a URL as a new entry on the wallabag server.
    ///
    /// The response body is discarded; success is a 2xx status.
    pub fn add_entry(&self, url: &str) -> Result<(), ClientError> {
        let token = match &self.access_token {
            Some(token) => token.clone(),
            None => {
                return Err(ClientError::NeedsToken(String::from(
                    "No access token available",
                )))
            }
        };

        let endpoint = format!("{}/api/entries", self.server_url);
        let client = self.http_client()?;

        let mut response = client
            .post(endpoint.as_str())
            .header("Authorization", String::from("Bearer ") + &token)
            .json(&AddEntryRequest { url })
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_else(|_| String::new());

            return Err(ClientError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}
