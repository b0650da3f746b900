use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct ReturnDate(Date);

impl ReturnDate {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }

    pub fn today() -> Self {
        Self(OffsetDateTime::now_utc().date())
    }

    /// Whole days this return lies past the due date, zero when on time or
    /// early.
    pub fn days_past(&self, due_date: Date) -> i64 {
        (self.0 - due_date).whole_days().max(0)
    }
}
