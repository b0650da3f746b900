use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Agreed rental length in days. Positive; enforced at the request boundary
/// and again by the lifecycle service.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct DaysRented(i32);

impl DaysRented {
    pub fn new(days: impl Into<i32>) -> Self {
        Self(days.into())
    }
}
