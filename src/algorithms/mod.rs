pub mod best_route;

// Common algorithm traits
use crate::models::{DeliveryLeg, Location, Route, Time};

/// Trait for planners choosing between delivery orderings
pub trait DeliverySolver {
    /// Evaluate the candidate orderings and return the fastest one
    fn find_best_route(&self) -> Route;

    /// Total time to serve `first` and then `second`, starting at `start`
    fn calculate_total_time(
        &self,
        start: Location,
        first: DeliveryLeg,
        second: DeliveryLeg,
    ) -> Time;
}
