// Planning inputs for a two-restaurant, two-consumer delivery

use crate::models::{Location, Speed, Time};
use serde::{Deserialize, Serialize};

/// All inputs to a single planning call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRequest {
    /// Where the driver starts
    pub driver: Location,

    pub restaurant1: Location,
    pub restaurant2: Location,

    /// Receives the order from restaurant 1
    pub consumer1: Location,

    /// Receives the order from restaurant 2
    pub consumer2: Location,

    /// Preparation time at restaurant 1 (minutes)
    pub preparation_time1: Time,

    /// Preparation time at restaurant 2 (minutes)
    pub preparation_time2: Time,

    /// Travel speed shared by every leg (km/h)
    pub travel_speed: Speed,
}

impl DeliveryRequest {
    /// Pickup/drop-off pair served by restaurant 1
    pub fn first_leg(&self) -> DeliveryLeg {
        DeliveryLeg::new(self.restaurant1, self.consumer1)
    }

    /// Pickup/drop-off pair served by restaurant 2
    pub fn second_leg(&self) -> DeliveryLeg {
        DeliveryLeg::new(self.restaurant2, self.consumer2)
    }
}

/// A restaurant pickup followed by the matching consumer drop-off
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeliveryLeg {
    pub restaurant: Location,
    pub consumer: Location,
}

impl DeliveryLeg {
    pub fn new(restaurant: Location, consumer: Location) -> Self {
        Self {
            restaurant,
            consumer,
        }
    }
}
