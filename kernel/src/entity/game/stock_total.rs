use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Number of physical copies owned, the upper bound for simultaneous open
/// rentals of the game.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct StockTotal(i32);

impl StockTotal {
    pub fn new(amount: impl Into<i32>) -> Self {
        Self(amount.into())
    }
}
