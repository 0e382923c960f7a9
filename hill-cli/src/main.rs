mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

/// Padding symbol code used when a message does not fill the last block (`!`).
const DEFAULT_FILL: u32 = 28;

#[derive(Parser)]
#[command(name = "hill")]
#[command(about = "Hill cipher over a 29-symbol alphabet")]
#[command(version)]
struct Args {
    /// Log at debug level (RUST_LOG still takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encrypt and decrypt the reference message with the 7x7 reference key
    Demo,
    /// Encrypt a message
    Encrypt {
        /// Text made of A-Z, space, '.' and '!'
        #[arg(long)]
        message: String,
        /// JSON key file, an array of rows such as [[3,3],[2,5]]; defaults to the reference key
        #[arg(long)]
        key: Option<PathBuf>,
        /// Code padding the last block
        #[arg(long, default_value_t = DEFAULT_FILL)]
        fill: u32,
    },
    /// Decrypt a message produced by `encrypt` with the same key
    Decrypt {
        #[arg(long)]
        message: String,
        #[arg(long)]
        key: Option<PathBuf>,
        #[arg(long, default_value_t = DEFAULT_FILL)]
        fill: u32,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Log to stderr (override with `RUST_LOG=trace`).
    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match args.command {
        Command::Demo => commands::run_demo(DEFAULT_FILL),
        Command::Encrypt { message, key, fill } => {
            commands::run_encrypt(&message, key.as_deref(), fill)
        }
        Command::Decrypt { message, key, fill } => {
            commands::run_decrypt(&message, key.as_deref(), fill)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
