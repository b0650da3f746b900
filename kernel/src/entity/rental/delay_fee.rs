use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Late-return charge in the smallest currency unit. Unset while the rental
/// is open and for on-time returns.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct DelayFee(i64);

impl DelayFee {
    pub fn new(fee: impl Into<i64>) -> Self {
        Self(fee.into())
    }
}
