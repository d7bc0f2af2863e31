use std::env;
use std::process;

use wallabag_cli::cli::{self, Command};
use wallabag_cli::{obtain_token, Client, ClientError, Config, TokenCache};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let command = match cli::parse(&args) {
        Some(command) => command,
        None => {
            eprint!("{}", cli::USAGE);
            process::exit(1);
        }
    };

    if let Err(error) = run(command) {
        eprintln!("{}", error);
        process::exit(1);
    }
}

fn run(command: Command) -> Result<(), ClientError> {
    let config = Config::from_env()?;
    let cache = TokenCache::new(TokenCache::default_path());
    let mut client = Client::new(config.server_url.clone());

    obtain_token(&mut client, &config, &cache)?;

    match command {
        Command::Add { url } => client.add_entry(&url)?,
    }

    Ok(())
}
