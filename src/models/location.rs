// Location model representing geographic coordinates

use crate::error::PlanError;
use crate::models::Distance;
use crate::utils::distance::haversine_distance;
use geo::Point;
use serde::{Deserialize, Serialize};

/// Represents a location as latitude/longitude in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Creates a new location without range checks
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Creates a new location, rejecting coordinates outside the valid ranges
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, PlanError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(PlanError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(PlanError::LongitudeOutOfRange(longitude));
        }
        Ok(Self::new(latitude, longitude))
    }

    /// Great-circle distance to another location in kilometers
    pub fn distance_to(&self, other: &Location) -> Distance {
        haversine_distance(self, other)
    }
}

impl From<Location> for Point<f64> {
    fn from(location: Location) -> Self {
        Point::new(location.longitude, location.latitude)
    }
}

impl From<Point<f64>> for Location {
    fn from(point: Point<f64>) -> Self {
        Location::new(point.y(), point.x())
    }
}
