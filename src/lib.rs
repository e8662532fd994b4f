// Public modules
pub mod algorithms;
pub mod error;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::best_route::{plan_batch, BestRoutePlanner};
pub use algorithms::DeliverySolver;
pub use error::PlanError;
pub use models::{DeliveryLeg, DeliveryRequest, Location, Route, Scenario, TimeConvention};
