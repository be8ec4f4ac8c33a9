//! Prints the unencrypted header of a SafeInCloud database
//!
//! Primarily for investigating the container format.

use clap::Parser;
use std::path::PathBuf;

/// Print the unencrypted fields of a SafeInCloud.db file
#[derive(Parser, Debug)]
#[command(name = "sic-dump-header", version, about, long_about = None)]
struct Args {
    /// Path to the SafeInCloud.db file
    file: PathBuf,
}

fn main() -> Result<(), safeincloud_rs::Error> {
    let args = Args::parse();
    let container = safeincloud_rs::open(&args.file)?;
    let header = container.header();
    println!("Magic: {}", safeincloud_rs::binary::SAFEINCLOUD_MAGIC_NUMBER);
    println!("Version: {}", container.version());
    println!("Salt: {}", hex::encode(&header.salt));
    println!("IV: {}", hex::encode(&header.iv));
    println!("Secret Salt: {}", hex::encode(&header.secret_salt));
    println!("Encrypted secrets: {} bytes", container.encrypted_secrets_len());
    println!("Encrypted payload: {} bytes", container.encrypted_payload_len());
    Ok(())
}
