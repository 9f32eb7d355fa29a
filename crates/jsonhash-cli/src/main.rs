//! jsonhash
//!
//! Command-line front end for canonical JSON hashing:
//! - `hash` prints the digest of each document (stdin by default)
//! - `compare` checks two documents for structural equality
//! - `verify` checks a document against a known digest
//!
//! Exit status is 0 on success, 2 when `compare` or `verify` find a
//! mismatch, and 1 on any error.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use jsonhash_types::Algorithm;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

#[derive(Parser)]
#[command(name = "jsonhash", version, about = "Order-independent hashing of JSON documents")]
struct Args {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Digest algorithm: sha1, sha256 or sha512
    #[arg(short, long, global = true)]
    algorithm: Option<Algorithm>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Hash JSON documents (`-` or no file reads stdin)
    Hash { files: Vec<PathBuf> },

    /// Check whether two documents are structurally equal
    Compare { lhs: PathBuf, rhs: PathBuf },

    /// Check a document against an expected digest
    Verify { file: PathBuf, digest: String },
}

fn main() {
    let args = Args::parse();
    match run(args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(2),
        Err(e) => {
            eprintln!("{e:#}");
            std::process::exit(1);
        }
    }
}

fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_env("JSONHASH_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<bool> {
    let config = CliConfig::load_or_default(args.config.as_deref())?.with_algorithm(args.algorithm);
    init_tracing(&config);
    tracing::debug!("Using configuration {:?}", config);

    match args.command {
        Command::Hash { files } => {
            let results = commands::hash_files(&files, config.algorithm)?;
            let labelled = config.labels_for(results.len());
            for (path, digest) in results {
                if labelled {
                    println!("{}  {}", digest, path.display());
                } else {
                    println!("{}", digest);
                }
            }
            Ok(true)
        }

        Command::Compare { lhs, rhs } => {
            let equal = commands::compare_files(&lhs, &rhs, config.algorithm)?;
            println!("{}", if equal { "equal" } else { "different" });
            Ok(equal)
        }

        Command::Verify { file, digest } => {
            let ok = commands::verify_file(&file, &digest)?;
            println!("{}", if ok { "OK" } else { "MISMATCH" });
            Ok(ok)
        }
    }
}
