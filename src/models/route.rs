// Route models for representing the chosen delivery ordering

use crate::models::{Time, TimeConvention};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two fixed delivery orderings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scenario {
    /// Restaurant 1 -> consumer 1, then restaurant 2 -> consumer 2
    Consumer1First,
    /// Restaurant 2 -> consumer 2, then restaurant 1 -> consumer 1
    Consumer2First,
}

impl Scenario {
    pub fn label(&self) -> &'static str {
        match self {
            Scenario::Consumer1First => "C1 first, then C2",
            Scenario::Consumer2First => "C2 first, then C1",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a planning call: the winning ordering and its total time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Total time of the winning ordering
    pub total_time: Time,

    /// Which ordering was chosen
    pub scenario: Scenario,
}

impl Route {
    pub fn new(total_time: Time, scenario: Scenario) -> Self {
        Self {
            total_time,
            scenario,
        }
    }

    /// Label of the delivery order, e.g. "C1 first, then C2"
    pub fn delivery_order(&self) -> &'static str {
        self.scenario.label()
    }

    /// Total time rounded to two decimals, halves away from zero.
    ///
    /// Rounds the shortest decimal form of the value, so `1.005` becomes
    /// `1.01`. Returns `None` for totals a `Decimal` cannot hold (NaN,
    /// infinities, magnitudes beyond ~7.9e28).
    pub fn rounded_total_time(&self) -> Option<Decimal> {
        Decimal::from_str(&self.total_time.to_string())
            .ok()
            .map(|total| total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Two-line report: the delivery order and the total time with its unit
    pub fn report(&self, convention: TimeConvention) -> String {
        let total = match self.rounded_total_time() {
            Some(total) => format!("{:.2}", total),
            None => format!("{:.2}", self.total_time),
        };
        format!(
            "Best Route: {}\nTotal Time: {} {}",
            self.delivery_order(),
            total,
            convention.unit_label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rounded(total_time: Time) -> Option<Decimal> {
        Route::new(total_time, Scenario::Consumer1First).rounded_total_time()
    }

    fn decimal(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_scenario_labels() {
        assert_eq!(Scenario::Consumer1First.label(), "C1 first, then C2");
        assert_eq!(Scenario::Consumer2First.label(), "C2 first, then C1");
        assert_eq!(Scenario::Consumer2First.to_string(), "C2 first, then C1");
    }

    #[test]
    fn test_delivery_order() {
        let route = Route::new(35.25, Scenario::Consumer2First);
        assert_eq!(route.delivery_order(), "C2 first, then C1");
    }

    #[test]
    fn test_rounded_total_time_decimal_midpoints() {
        // Binary products such as 1.005 * 100 land just below the midpoint
        assert_eq!(rounded(1.005), Some(decimal("1.01")));
        assert_eq!(rounded(0.285), Some(decimal("0.29")));
        assert_eq!(rounded(2.675), Some(decimal("2.68")));
        assert_eq!(rounded(35.015), Some(decimal("35.02")));
        assert_eq!(rounded(-1.005), Some(decimal("-1.01")));
    }

    #[test]
    fn test_rounded_total_time_below_midpoint() {
        assert_eq!(rounded(35.394), Some(decimal("35.39")));
        assert_eq!(rounded(35.0), Some(decimal("35")));
    }

    #[test]
    fn test_rounded_total_time_non_finite() {
        assert_eq!(rounded(f64::NAN), None);
        assert_eq!(rounded(f64::INFINITY), None);
    }

    #[test]
    fn test_report_mixed_convention() {
        let route = Route::new(1.005, Scenario::Consumer1First);
        assert_eq!(
            route.report(TimeConvention::Mixed),
            "Best Route: C1 first, then C2\nTotal Time: 1.01 hours"
        );
    }

    #[test]
    fn test_report_pads_to_two_decimals() {
        let route = Route::new(35.0, Scenario::Consumer2First);
        assert_eq!(
            route.report(TimeConvention::Minutes),
            "Best Route: C2 first, then C1\nTotal Time: 35.00 minutes"
        );
    }

    #[test]
    fn test_report_non_finite_total() {
        let route = Route::new(f64::NAN, Scenario::Consumer1First);
        assert_eq!(
            route.report(TimeConvention::Mixed),
            "Best Route: C1 first, then C2\nTotal Time: NaN hours"
        );
    }
}
