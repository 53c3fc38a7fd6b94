//! Command-line arguments and the pieces built from them.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use fleet_core::{FleetConfig, FleetResult, load_config};
use fleet_route::{OsrmClient, RouteProvider, RouteResult, StraightLineProvider};
use tracing::info;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Simulated vehicle fleet with road-following movement", long_about = None)]
pub struct Args {
    /// JSON file with `FleetConfig` overrides.  Missing keys keep their defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Address to listen on.
    #[arg(long, default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// Base URL of an OSRM server, e.g. `http://osrm:5000`.  Without it
    /// vehicles follow straight lines.
    #[arg(long)]
    pub osrm_url: Option<String>,

    /// Per-request timeout for the routing service.
    #[arg(long, default_value_t = 5)]
    pub route_timeout_secs: u64,

    /// RNG seed; overrides the config file.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[arg(long, default_value = "info")]
    pub log: String,
}

impl Args {
    /// The config file if one was given, else defaults; `--seed` applied
    /// on top.
    pub fn fleet_config(&self) -> FleetResult<FleetConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => FleetConfig::default(),
        };
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

/// OSRM when `--osrm-url` is set, straight lines otherwise.
pub fn build_provider(args: &Args) -> RouteResult<Box<dyn RouteProvider>> {
    match &args.osrm_url {
        Some(url) => {
            let timeout = Duration::from_secs(args.route_timeout_secs);
            info!(%url, ?timeout, "routing via OSRM");
            Ok(Box::new(OsrmClient::new(url.as_str(), timeout)?))
        }
        None => {
            info!("no OSRM url given, routing along straight lines");
            Ok(Box::new(StraightLineProvider::default()))
        }
    }
}
