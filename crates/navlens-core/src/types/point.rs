//! A single dated NAV observation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;

/// One net-asset-value observation.
///
/// Values are `Decimal`, so non-finite observations (NaN, infinity) are
/// unrepresentable by construction; the ingestion layer hands over exact
/// decimal quotes and they stay exact until a derived metric leaves the
/// library as `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavPoint {
    /// Date of the observation (whole-day granularity).
    pub date: Date,

    /// Net asset value on this date.
    pub value: Decimal,
}

impl NavPoint {
    /// Creates a new observation.
    #[must_use]
    pub fn new(date: Date, value: Decimal) -> Self {
        Self { date, value }
    }
}

impl fmt::Display for NavPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.value, self.date)
    }
}
