//! Command-line and environment configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Serves the habitable Kepler exoplanet candidates as JSON.
#[derive(Parser, Debug, Clone)]
#[command(name = "kepler")]
#[command(about = "Serves habitable Kepler exoplanet candidates as JSON")]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "LISTEN", default_value = "0.0.0.0:8000")]
    pub listen: SocketAddr,

    /// Kepler cumulative KOI table (CSV), relative to the working directory
    #[arg(long, env = "CATALOG_PATH", default_value = "data/kepler_exoplanets_nasa.csv")]
    pub catalog: PathBuf,

    /// Directory holding the whitelisted front-end assets
    #[arg(long, env = "PUBLIC_DIR", default_value = "public")]
    pub public_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}
