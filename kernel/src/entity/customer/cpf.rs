use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Brazilian taxpayer id, an 11 digit numeric string. Unique per customer.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct Cpf(String);

impl Cpf {
    pub fn new(cpf: impl Into<String>) -> Self {
        Self(cpf.into())
    }
}
