//! Command-line front-end for CipherKit.
//!
//! Transforms text files line by line with a shared keyword, and checks
//! candidate keywords against the keyword rules.
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]

use std::path::PathBuf;

use cipherkit_core::{Keyword, Mode};
use clap::{Args, Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

mod files;

#[derive(Debug, Parser)]
#[command(name = "cipherkit", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Encipher a text file line by line
    Encipher(TransformArgs),

    /// Decipher a text file line by line
    Decipher(TransformArgs),

    /// Check a candidate keyword against the keyword rules
    Validate {
        /// The candidate to check
        candidate: String,
    },
}

#[derive(Debug, Args)]
struct TransformArgs {
    /// Path of the file to read
    input: PathBuf,

    /// Path of the file to write; anything but a .txt extension is
    /// normalized to one unless the file already exists
    output: PathBuf,

    /// The keyword driving both cipher stages
    #[arg(short, long, env = "CIPHERKIT_KEYWORD")]
    keyword: Keyword,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Commands::Encipher(args) => transform(args, Mode::Encipher),
        Commands::Decipher(args) => transform(args, Mode::Decipher),
        Commands::Validate { candidate } => validate(&candidate),
    }
}

fn transform(args: TransformArgs, mode: Mode) -> Result<()> {
    let output = files::normalize_output_path(args.output);
    let lines = files::transform_file(&args.input, &output, &args.keyword, mode)?;
    println!(
        "{mode} complete: {lines} lines written to {}",
        output.display()
    );
    Ok(())
}

fn validate(candidate: &str) -> Result<()> {
    match Keyword::parse(candidate) {
        Ok(keyword) => {
            println!("{keyword} is a valid keyword");
            Ok(())
        }
        Err(error) => {
            Err(eyre::Report::new(error).wrap_err(format!("{candidate} is not a valid keyword")))
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
