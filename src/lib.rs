//! # wallabag-cli
//!
//! Tiny command-line client for the [wallabag](https://wallabag.org)
//! bookmarking service: authenticate with the OAuth2 password grant, cache
//! the bearer token on disk, and save a URL as a new entry.
//!
//! You can read more about the wallabag API here:
//! [https://doc.wallabag.org/developer/api/oauth/](https://doc.wallabag.org/developer/api/oauth/)
//!
//! ### Example
//!
//! ```no_run
//! use wallabag_cli::{obtain_token, Client, Config, TokenCache};
//!
//! let config = Config::from_env().unwrap();
//! let cache = TokenCache::new(TokenCache::default_path());
//! let mut client = Client::new(config.server_url.clone());
//!
//! obtain_token(&mut client, &config, &cache).unwrap();
//! client.add_entry("https://example.com/article").unwrap();
//! ```

extern crate reqwest;
extern crate serde;
extern crate serde_json;

pub mod cli;
mod client;
mod client_error;
mod config;
mod token_record;

pub use client::Client;
pub use client_error::ClientError;
pub use config::Config;
pub use token_record::obtain_token;
pub use token_record::TokenCache;
pub use token_record::TokenRecord;
