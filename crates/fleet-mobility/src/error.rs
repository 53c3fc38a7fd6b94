use fleet_core::VehicleId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("vehicle {0} was given an empty path")]
    EmptyPath(VehicleId),

    #[error("vehicle {0} not found")]
    VehicleNotFound(VehicleId),
}

pub type MobilityResult<T> = Result<T, MobilityError>;
