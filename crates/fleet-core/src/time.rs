//! Wall-clock time source.
//!
//! # Design
//!
//! The simulator has no tick counter of its own.  Time advances only when a
//! query reads the clock, and the engine moves vehicles by however many
//! seconds passed since the previous read (capped).  Putting the clock behind
//! a trait lets tests freeze or jump time without sleeping.

use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

/// Source of "now" for the query interface.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The real UTC wall clock.
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self { now: Mutex::new(start) }
    }

    /// Move the clock forward by `secs` (fractional seconds allowed).
    pub fn advance_secs(&self, secs: f64) {
        let step = Duration::milliseconds((secs * 1000.0).round() as i64);
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += step;
    }

    pub fn set(&self, at: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(|e| e.into_inner()) = at;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Seconds elapsed from `last` to `now`, clamped to `[0, cap_secs]`.
///
/// Returns `0.0` when there is no previous reading or when the clock went
/// backwards.
pub fn elapsed_secs(last: Option<DateTime<Utc>>, now: DateTime<Utc>, cap_secs: f64) -> f64 {
    let Some(last) = last else { return 0.0 };
    let secs = (now - last).num_milliseconds() as f64 / 1000.0;
    secs.clamp(0.0, cap_secs.max(0.0))
}
