//! Fleet-level RNG wrapper.
//!
//! One `FleetRng` lives inside the fleet manager and is only touched while
//! the fleet lock is held, so no per-thread splitting is needed.  Seeding it
//! explicitly makes spawn positions, speeds, and destinations reproducible.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::GeoPoint;

pub struct FleetRng(SmallRng);

impl FleetRng {
    /// Deterministic RNG from `seed`.
    pub fn new(seed: u64) -> Self {
        FleetRng(SmallRng::seed_from_u64(seed))
    }

    /// Non-deterministic RNG seeded from the OS.
    pub fn from_entropy() -> Self {
        FleetRng(SmallRng::from_entropy())
    }

    /// `new(seed)` when a seed is configured, `from_entropy()` otherwise.
    pub fn from_seed_opt(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a non-empty slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }

    /// A point displaced from `center` by a uniform amount in
    /// `[-max_deg, +max_deg]` on each axis independently.
    ///
    /// The result is always a valid coordinate for a valid `center`: near the
    /// poles and the antimeridian it is clamped onto the edge.  A non-finite
    /// or zero radius returns `center` unchanged.
    pub fn random_offset(&mut self, center: GeoPoint, max_deg: f64) -> GeoPoint {
        let max_deg = max_deg.abs();
        if max_deg == 0.0 || !max_deg.is_finite() {
            return center;
        }
        center
            .offset(
                self.0.gen_range(-max_deg..=max_deg),
                self.0.gen_range(-max_deg..=max_deg),
            )
            .clamped()
    }
}
