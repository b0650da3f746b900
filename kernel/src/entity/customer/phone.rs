use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// 10 or 11 digit numeric string, validated at the request boundary.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }
}
