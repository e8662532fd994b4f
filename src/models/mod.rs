// Models module - exports all model types

mod delivery_request;
mod location;
mod route;
mod time_convention;

// Re-export model types
pub use self::delivery_request::{DeliveryLeg, DeliveryRequest};
pub use self::location::Location;
pub use self::route::{Route, Scenario};
pub use self::time_convention::TimeConvention;

// Common type aliases for improved code readability
pub type Distance = f64;
pub type Speed = f64;
pub type Time = f64;
