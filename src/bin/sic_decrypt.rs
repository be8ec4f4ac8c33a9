//! Prints the decrypted XML of a SafeInCloud database
//!
//! The password may be given on the CLI, which is insecure. Without it
//! the password is read from the terminal.

use clap::Parser;
use safeincloud_rs::{Container, Password, Unlocked};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum Error {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Database(#[from] safeincloud_rs::Error),
}

/// Decrypt a SafeInCloud.db file and print its XML
#[derive(Parser, Debug)]
#[command(name = "sic-decrypt", version, about, long_about = None)]
struct Args {
    /// Path to the SafeInCloud.db file
    file: PathBuf,

    /// Database password, prompted for when missing
    password: Option<String>,

    /// Write the XML to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the XML exactly as stored, without re-indenting
    #[arg(long)]
    raw: bool,

    /// Log level (error, warn, info, debug, trace), overridden by RUST_LOG
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_password(args: &mut Args) -> Result<Password, Error> {
    match args.password.take() {
        Some(pw) => Ok(Password::from(pw)),
        None => {
            let pw = rpassword::prompt_password("Password: ")?;
            Ok(Password::from(pw))
        }
    }
}

fn document(unlocked: &Container<Unlocked>, raw: bool) -> Result<Vec<u8>, Error> {
    if raw {
        Ok(unlocked.raw_xml().to_vec())
    } else {
        Ok(unlocked
            .canonical_xml()
            .map_err(safeincloud_rs::Error::from)?)
    }
}

fn run(mut args: Args) -> Result<(), Error> {
    let container = safeincloud_rs::open(&args.file).map_err(safeincloud_rs::Error::from)?;
    let password = read_password(&mut args)?;
    let unlocked = container
        .unlock(&password)
        .map_err(safeincloud_rs::Error::from)?;
    let xml = document(&unlocked, args.raw)?;

    let mut output: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout().lock()),
    };
    output.write_all(&xml)?;
    output.write_all(b"\n")?;
    output.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
