//! Roster CLI
//!
//! Interactive menu for managing the student roster.

use std::io;

use clap::Parser;
use roster::{Config, Session};
use tracing_subscriber::{fmt, EnvFilter};

/// Roster CLI
#[derive(Parser, Debug)]
#[command(name = "roster-cli")]
#[command(about = "Interactive student roster with flat-file persistence")]
#[command(version)]
struct Args {
    /// Data file used for save/load
    #[arg(short = 'f', long, default_value = Config::DEFAULT_DATA_FILE)]
    data_file: String,

    /// Maximum number of students
    #[arg(short, long, default_value_t = Config::DEFAULT_CAPACITY)]
    capacity: usize,

    /// Do not load the data file on startup
    #[arg(long)]
    no_autoload: bool,
}

fn main() {
    // Logs go to stderr so the menu on stdout stays readable
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("Roster CLI v{}", roster::VERSION);
    tracing::debug!("Data file: {}", args.data_file);

    let config = Config::builder()
        .data_file(&args.data_file)
        .capacity(args.capacity)
        .autoload(!args.no_autoload)
        .build();

    let stdin = io::stdin();
    let mut session = match Session::new(config, stdin.lock(), io::stdout()) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to start session: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = session.run() {
        tracing::error!("Session error: {}", e);
        std::process::exit(1);
    }
}
