use serde::{Deserialize, Serialize};
use time::{Date, Duration, OffsetDateTime};
use vodca::{AsRefln, Fromln};

use crate::entity::DaysRented;

/// Calendar date the rental started. No timezone semantics; "today" is the
/// current UTC date.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct RentDate(Date);

impl RentDate {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }

    pub fn today() -> Self {
        Self(OffsetDateTime::now_utc().date())
    }

    /// Date the game is expected back: start date plus the rented days.
    pub fn due_date(&self, days: &DaysRented) -> Date {
        self.0
            .saturating_add(Duration::days(i64::from(*days.as_ref())))
    }
}
