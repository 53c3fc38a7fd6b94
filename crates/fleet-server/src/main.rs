//! fleet-server — serve a simulated ambulance fleet over HTTP.
//!
//! ```text
//! fleet-server --osrm-url http://osrm:5000 --bind 0.0.0.0:8000
//! ```

use anyhow::Result;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use fleet_core::SystemClock;
use fleet_server::{Args, build_provider, init_logging, router};
use fleet_sim::{FleetHandle, FleetSimBuilder};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log);
    info!(?args, "starting");

    let config = args.fleet_config()?;
    let provider = build_provider(&args)?;
    let sim = FleetSimBuilder::new(config, provider).build()?;
    let fleet = FleetHandle::new(sim, SystemClock);

    let listener = TcpListener::bind(args.bind).await?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, router(fleet)).await?;
    Ok(())
}
