//! DocuHub server CLI.

use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
};

use clap::Parser;
use docuhub_server::{DEFAULT_CONFIG_FILE, ServerConfig};

/// Command-line interface for the DocuHub server.
#[derive(Parser)]
#[command(
    name = "docuhub-server",
    version,
    about = "Serve the DocuHub editor and its configuration"
)]
struct Cli {
    /// Path to configuration file (defaults to ./docuhub.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on, overriding `site_addr`
    #[arg(long)]
    addr: Option<SocketAddr>,

    /// Directory of the built site, overriding `site_root`
    #[arg(long)]
    site_root: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> log::Level {
    match verbose {
        0 => log::Level::Info,
        1 => log::Level::Debug,
        _ => log::Level::Trace,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    simple_logger::init_with_level(log_level(cli.verbose))?;

    let config = match &cli.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?,
    }
    .with_overrides(cli.addr, cli.site_root);

    docuhub_server::serve(config).await?;
    Ok(())
}
