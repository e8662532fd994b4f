use thiserror::Error;

/// Errors raised while building locations or planners
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PlanError {
    #[error("Travel speed must be a finite value greater than zero, got {0}")]
    InvalidSpeed(f64),
    #[error("Latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("Longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}
