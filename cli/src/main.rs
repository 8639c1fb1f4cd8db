use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod decode;
mod encode;
mod error;
mod layout;
mod mask;
mod output;
mod utils;

use error::Result;

#[derive(Parser)]
#[command(name = "mrzpack")]
#[command(
    about = "Disclosed passport data in zero-knowledge proof public inputs",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode disclosed data from a proof's public inputs
    Decode {
        #[command(flatten)]
        config: decode::Config,
    },
    /// Encode fields into public-input entries
    Encode {
        #[command(flatten)]
        config: encode::Config,
    },
    /// Show where each field sits in the public inputs
    Layout {
        #[command(flatten)]
        config: layout::Config,
    },
    /// Build the disclose mask the prover feeds to the circuit
    Mask {
        #[command(flatten)]
        config: mask::Config,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decode { config } => {
            decode::execute(config)?;
        }
        Commands::Encode { config } => {
            encode::execute(config)?;
        }
        Commands::Layout { config } => {
            layout::execute(config)?;
        }
        Commands::Mask { config } => {
            mask::execute(config)?;
        }
    }

    Ok(())
}
