use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Daily rental price in the smallest currency unit.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct PricePerDay(i64);

impl PricePerDay {
    pub fn new(price: impl Into<i64>) -> Self {
        Self(price.into())
    }
}
