use chrono::{Datelike, Days, Months, NaiveDate};

/// The first day of `date`'s month.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.checked_sub_days(Days::new(u64::from(date.day0())))
        .unwrap_or(date)
}

/// The last day of `date`'s month.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    month_start(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.checked_sub_days(Days::new(1)))
        .unwrap_or(date)
}

/// January 1 of `date`'s year.
pub fn year_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date)
}

/// December 31 of `date`'s year.
pub fn year_end(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date)
}

/// `date` shifted by `n` months, day-of-month clamped on short months.
///
/// Saturates at the calendar edge instead of overflowing.
pub fn add_months(date: NaiveDate, n: i32) -> NaiveDate {
    let shifted = if n >= 0 {
        date.checked_add_months(Months::new(n.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(n.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}

/// `date` shifted by `n` years, day-of-month clamped (Feb 29 → Feb 28).
pub fn add_years(date: NaiveDate, n: i32) -> NaiveDate {
    add_months(date, n.saturating_mul(12))
}

/// Same year and day, month replaced by `index` (0 = January).
///
/// The day is clamped to the target month's length; an index above 11
/// is treated as December.
pub fn with_month_index(date: NaiveDate, index: u32) -> NaiveDate {
    let month = index.min(11) + 1;
    let day = date.day().min(last_day_of_month(date.year(), month));
    NaiveDate::from_ymd_opt(date.year(), month, day).unwrap_or(date)
}

/// Number of days in the given month (28, 29, 30 or 31).
pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    first
        .and_then(|date| date.with_day(31).map(|_| 31))
        .or_else(|| first.and_then(|date| date.with_day(30).map(|_| 30)))
        .or_else(|| first.and_then(|date| date.with_day(29).map(|_| 29)))
        .unwrap_or(28)
}

/// Today according to the system clock (UTC).
///
/// Convenience for hosts; the core itself only ever takes "today" as a
/// parameter so tests can inject a fixed date.
pub fn today() -> NaiveDate {
    chrono::offset::Utc::now().date_naive()
}
