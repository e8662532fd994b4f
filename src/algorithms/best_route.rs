use rayon::prelude::*;
use tracing::debug;

use crate::algorithms::DeliverySolver;
use crate::error::PlanError;
use crate::models::{DeliveryLeg, DeliveryRequest, Location, Route, Scenario, Time, TimeConvention};

/// Compares the two fixed orderings of a two-restaurant, two-consumer delivery.
///
/// Restaurant 1 always feeds consumer 1 and restaurant 2 always feeds
/// consumer 2; cross assignments are never evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestRoutePlanner {
    request: DeliveryRequest,
    convention: TimeConvention,
}

impl BestRoutePlanner {
    /// Creates a planner using the mixed hours/minutes convention.
    ///
    /// Fails when the travel speed is not a finite value above zero. Other
    /// inputs (negative preparation times, out-of-range or NaN coordinates)
    /// are accepted as-is.
    pub fn new(request: DeliveryRequest) -> Result<Self, PlanError> {
        let speed = request.travel_speed;
        if !speed.is_finite() || speed <= 0.0 {
            return Err(PlanError::InvalidSpeed(speed));
        }

        Ok(Self {
            request,
            convention: TimeConvention::default(),
        })
    }

    pub fn with_convention(mut self, convention: TimeConvention) -> Self {
        self.convention = convention;
        self
    }

    pub fn convention(&self) -> TimeConvention {
        self.convention
    }

    fn travel(&self, from: &Location, to: &Location) -> Time {
        self.convention.travel_time(from.distance_to(to), self.request.travel_speed)
    }
}

impl DeliverySolver for BestRoutePlanner {
    fn find_best_route(&self) -> Route {
        let driver = self.request.driver;
        let first_leg = self.request.first_leg();
        let second_leg = self.request.second_leg();

        let consumer1_first = self.calculate_total_time(driver, first_leg, second_leg);
        let consumer2_first = self.calculate_total_time(driver, second_leg, first_leg);

        debug!(
            consumer1_first,
            consumer2_first,
            "Evaluated delivery orderings"
        );

        // Ties go to the consumer 1 first ordering
        let route = if consumer2_first < consumer1_first {
            Route::new(consumer2_first, Scenario::Consumer2First)
        } else {
            Route::new(consumer1_first, Scenario::Consumer1First)
        };

        debug!(
            order = route.delivery_order(),
            total_time = route.total_time,
            "Selected best route"
        );
        route
    }

    fn calculate_total_time(
        &self,
        start: Location,
        first: DeliveryLeg,
        second: DeliveryLeg,
    ) -> Time {
        // Wait times follow visit position, not restaurant identity
        let to_restaurant1 = self.travel(&start, &first.restaurant);
        let to_consumer1 = self.travel(&first.restaurant, &first.consumer);
        let to_restaurant2 = self.travel(&first.consumer, &second.restaurant);
        let to_consumer2 = self.travel(&second.restaurant, &second.consumer);

        to_restaurant1
            + self.request.preparation_time1
            + to_consumer1
            + to_restaurant2
            + self.request.preparation_time2
            + to_consumer2
    }
}

/// Plans every request independently, in parallel.
///
/// Results are returned in the same order as `requests`.
pub fn plan_batch(
    requests: &[DeliveryRequest],
    convention: TimeConvention,
) -> Vec<Result<Route, PlanError>> {
    requests
        .par_iter()
        .map(|request| {
            BestRoutePlanner::new(*request)
                .map(|planner| planner.with_convention(convention).find_best_route())
        })
        .collect()
}
