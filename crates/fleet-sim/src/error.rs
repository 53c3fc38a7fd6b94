use fleet_core::FleetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] FleetError),
}

pub type SimResult<T> = Result<T, SimError>;
