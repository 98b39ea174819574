use std::io;
use std::process::ExitCode;

use authgen::{digest, Error};
use clap::Parser;
use log::{error, info};

/// Checks a secret (read from stdin) against a salt and hash
#[derive(Debug, Parser)]
#[command(author, about, version)]
struct Args {
    /// Hex SHA-256 of secret followed by salt
    #[clap(long, required = true)]
    hash: String,
    #[clap(long, required = true)]
    salt: String,
}

fn main() -> ExitCode {
    env_logger::init();

    let Args { hash, salt } = Args::parse();

    match read_secret().and_then(|secret| digest::verify(&secret, &salt, &hash)) {
        Ok(()) => {
            info!("secret accepted");
            println!("valid");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("invalid: {e}");
            ExitCode::FAILURE
        }
    }
}

fn read_secret() -> Result<String, Error> {
    let mut secret = String::new();
    io::stdin().read_line(&mut secret)?;
    let len = secret.trim_end_matches(['\r', '\n']).len();
    secret.truncate(len);
    Ok(secret)
}
