//! Vehicle identity.
//!
//! A `VehicleId` is a serial number handed out by the fleet manager.  The
//! counter is never reset, so an id stays unique for the lifetime of the
//! process even after the fleet has been respawned.  On the wire it appears
//! as a string like `AMB-0007`.

use std::fmt;

use serde::{Serialize, Serializer};

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct VehicleId(pub u32);

impl VehicleId {
    pub const PREFIX: &'static str = "AMB";

    /// The id following `self` in serial order.
    #[inline]
    pub fn next(self) -> VehicleId {
        VehicleId(self.0.wrapping_add(1))
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:04}", Self::PREFIX, self.0)
    }
}

impl Serialize for VehicleId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
