use chrono::NaiveDate;

use crate::date::{month_end, month_start, year_end, year_start};

/// Inclusive `[min, max]` window restricting which cells are
/// selectable and how far the calendar can be paged.
///
/// `min <= max` is the caller's responsibility. With inverted bounds
/// nothing panics; every overlap test simply comes back `false`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DateBounds {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl DateBounds {
    pub fn new(min: NaiveDate, max: NaiveDate) -> Self {
        Self { min, max }
    }

    /// Whether the unit spanning `start..=end` overlaps the bounds at
    /// all.
    ///
    /// Overlap, not containment: a month only partially inside the
    /// bounds is still admitted.
    pub fn admits(self, start: NaiveDate, end: NaiveDate) -> bool {
        self.max >= start && self.min <= end
    }

    /// Whether a single day is in range.
    pub fn admits_day(self, date: NaiveDate) -> bool {
        self.admits(date, date)
    }

    /// Whether any day of `date`'s month is in range.
    pub fn admits_month(self, date: NaiveDate) -> bool {
        self.admits(month_start(date), month_end(date))
    }

    /// Whether any day of `date`'s year is in range.
    pub fn admits_year(self, date: NaiveDate) -> bool {
        self.admits(year_start(date), year_end(date))
    }
}
