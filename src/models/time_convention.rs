// How travel time and preparation time are combined into a total

use crate::models::{Distance, Speed, Time};
use serde::{Deserialize, Serialize};

const MINUTES_PER_HOUR: f64 = 60.0;

/// Unit handling for the total-time estimate.
///
/// Travel legs are `km / (km/h)`, i.e. hours, while preparation times are
/// given in minutes. `Mixed` sums the two without conversion and reports the
/// result as "hours"; `Minutes` converts travel time to minutes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeConvention {
    #[default]
    Mixed,
    Minutes,
}

impl TimeConvention {
    /// Travel time for a leg of `distance` km at `speed` km/h
    pub fn travel_time(&self, distance: Distance, speed: Speed) -> Time {
        match self {
            TimeConvention::Mixed => distance / speed,
            TimeConvention::Minutes => distance / speed * MINUTES_PER_HOUR,
        }
    }

    /// Unit printed next to the total time
    pub fn unit_label(&self) -> &'static str {
        match self {
            TimeConvention::Mixed => "hours",
            TimeConvention::Minutes => "minutes",
        }
    }
}
