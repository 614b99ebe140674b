//! Pure grid builders.
//!
//! Every builder recomputes its whole grid from scratch; output depends
//! only on the arguments, so two calls with equal inputs yield
//! `==`-equal structures and renderers are free to memoize.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::bounds::DateBounds;
use crate::date::{month_start, with_month_index};
use crate::selection::Selection;

/// One day of the focused month in the day grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DayCell {
    /// Day of month, `1..=31`.
    pub day: u32,
    /// Inside the picker's bounds, i.e. pickable.
    pub valid: bool,
    /// Highlighted as part of the current selection.
    pub selected: bool,
    /// Equals the injected "today".
    pub today: bool,
    /// `Some(is exact range start)` while a range selection is active,
    /// `None` otherwise.
    pub range_start: Option<bool>,
    /// Counterpart of [`Self::range_start`] for the range end.
    pub range_end: Option<bool>,
}

/// One month in the 4×3 month grid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct MonthCell {
    /// Calendar index, 0 = January.
    pub index: u32,
    /// Abbreviated month name from the calendar library ("Jan", …).
    pub name: String,
    pub valid: bool,
}

/// One week row of the day grid. Unpopulated leading/trailing cells
/// are `None`: blanks, never dates of a neighboring month.
pub type WeekRow = [Option<DayCell>; 7];

/// The data a slider- or list-style year selector needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct YearSpan {
    pub min_year: i32,
    pub max_year: i32,
    pub focus_year: i32,
}

/// Builds the week rows for `focus`'s month.
///
/// Iterates the month's days in order, opening a new row whenever a
/// date lands on `week_start`, and places each date in the column of
/// its weekday. Rows always have length 7.
pub fn day_grid(
    focus: NaiveDate,
    bounds: DateBounds,
    selection: Option<&Selection>,
    today: NaiveDate,
    week_start: Weekday,
) -> Vec<WeekRow> {
    let first = month_start(focus);
    let mut rows: Vec<WeekRow> = Vec::new();
    let mut date = first;
    while date.month() == first.month() && date.year() == first.year() {
        let column = date.weekday().days_since(week_start) as usize;
        if column == 0 || rows.is_empty() {
            rows.push([None; 7]);
        }
        if let Some(row) = rows.last_mut() {
            row[column] = Some(day_cell(date, bounds, selection, today));
        }
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }
    rows
}

fn day_cell(
    date: NaiveDate,
    bounds: DateBounds,
    selection: Option<&Selection>,
    today: NaiveDate,
) -> DayCell {
    let selected = selection.is_some_and(|selection| selection.contains(date));
    let (range_start, range_end) = match selection.and_then(Selection::endpoints) {
        Some((start, end)) => (Some(date == start), Some(date == end)),
        None => (None, None),
    };
    DayCell {
        day: date.day(),
        valid: bounds.admits_day(date),
        selected,
        today: date == today,
        range_start,
        range_end,
    }
}

/// Builds the 4×3 month grid for `focus`'s year.
pub fn month_grid(focus: NaiveDate, bounds: DateBounds) -> [[MonthCell; 3]; 4] {
    let anchor = month_start(focus);
    std::array::from_fn(|row| {
        std::array::from_fn(|column| {
            let index = (row * 3 + column) as u32;
            let month = with_month_index(anchor, index);
            MonthCell {
                index,
                name: month.format("%b").to_string(),
                valid: bounds.admits_month(month),
            }
        })
    })
}

/// The year range spanned by `bounds`, plus where `focus` sits in it.
pub fn year_span(focus: NaiveDate, bounds: DateBounds) -> YearSpan {
    YearSpan {
        min_year: bounds.min.year(),
        max_year: bounds.max.year(),
        focus_year: focus.year(),
    }
}
