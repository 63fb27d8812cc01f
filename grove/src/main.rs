mod input;
mod names;
mod outline;
mod xml;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the element outline of an XML document.
    Outline(outline::Outline),
    /// List the distinct element names of an XML document, in document
    /// order.
    Names(names::Names),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("GROVE_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Outline(outline) => {
            outline.run()?;
        }
        Commands::Names(names) => {
            names.run()?;
        }
    }
    Ok(())
}
