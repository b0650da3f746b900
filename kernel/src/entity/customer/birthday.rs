use serde::{Deserialize, Serialize};
use time::Date;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct Birthday(Date);

impl Birthday {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }
}
