use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::entity::{DaysRented, PricePerDay};

/// Total charged at creation, `price_per_day * days_rented`. Never changes
/// afterwards.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct OriginalPrice(i64);

impl OriginalPrice {
    pub fn new(price: impl Into<i64>) -> Self {
        Self(price.into())
    }

    pub fn charge(price_per_day: &PricePerDay, days: &DaysRented) -> Self {
        Self(price_per_day.as_ref() * i64::from(*days.as_ref()))
    }

    /// Per-day rate the late fee is based on. Exact: the total is a whole
    /// multiple of the day count by construction.
    pub fn daily_rate(&self, days: &DaysRented) -> i64 {
        self.0 / i64::from(*days.as_ref())
    }
}
