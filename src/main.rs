use std::io::{self, Write};
use std::process::ExitCode;

use authgen::{Credentials, Error};
use clap::Parser;
use log::error;

/// Prints a fresh salt, secret and the SHA-256 of secret followed by salt
#[derive(Debug, Parser)]
#[command(author, about, version)]
struct Args {}

fn main() -> ExitCode {
    env_logger::init();
    let Args {} = Args::parse();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Error> {
    let creds = Credentials::generate()?;
    let mut out = io::stdout().lock();
    write!(out, "{creds}")?;
    out.flush()?;
    Ok(())
}
