//! Fluent builder for constructing a [`FleetSim`].

use std::sync::Arc;

use fleet_core::{FleetConfig, FleetRng};
use fleet_mobility::Fleet;
use fleet_route::RouteProvider;

use crate::{FleetSim, SimResult, Spawner};

/// Fluent builder for [`FleetSim<P>`].
///
/// # Example
///
/// ```rust,ignore
/// let sim = FleetSimBuilder::new(config, OsrmClient::new(url, timeout)?)
///     .seed(7)
///     .build()?;
/// ```
pub struct FleetSimBuilder<P: RouteProvider> {
    config:   FleetConfig,
    provider: Arc<P>,
}

impl<P: RouteProvider> FleetSimBuilder<P> {
    pub fn new(config: FleetConfig, provider: P) -> Self {
        Self { config, provider: Arc::new(provider) }
    }

    /// Share an existing provider, e.g. one a test keeps a handle to.
    pub fn with_shared_provider(config: FleetConfig, provider: Arc<P>) -> Self {
        Self { config, provider }
    }

    /// Fix the RNG seed, overriding `config.seed`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Validate the configuration and return an empty, unanchored simulator.
    /// The first snapshot spawns the fleet.
    pub fn build(self) -> SimResult<FleetSim<P>> {
        self.config.validate()?;
        let rng = FleetRng::from_seed_opt(self.config.seed);

        Ok(FleetSim {
            config:   self.config,
            fleet:    Fleet::new(),
            provider: self.provider,
            spawner:  Spawner::new(rng),
        })
    }
}
