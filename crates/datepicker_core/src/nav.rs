//! Stage chain and focus paging.

use chrono::NaiveDate;

use crate::bounds::DateBounds;
use crate::date::{add_months, add_years, month_start};

/// The active selection granularity.
///
/// The stages form a linear chain `Day ↔ Month ↔ Year`; there is no
/// direct `Day ↔ Year` transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Stage {
    #[default]
    Day,
    Month,
    Year,
}

impl Stage {
    /// The next-coarser stage. `Year` saturates.
    pub fn drilled_up(self) -> Self {
        match self {
            Self::Day => Self::Month,
            Self::Month | Self::Year => Self::Year,
        }
    }

    /// The next-finer stage. `Day` saturates.
    pub fn drilled_down(self) -> Self {
        match self {
            Self::Year => Self::Month,
            Self::Month | Self::Day => Self::Day,
        }
    }
}

/// Direction of a header-arrow paging step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum PageDirection {
    Backward,
    Forward,
}

impl PageDirection {
    fn step(self) -> i32 {
        match self {
            Self::Backward => -1,
            Self::Forward => 1,
        }
    }
}

/// Per-arrow renderer flags.
///
/// `enabled` is the bounds-overlap check against the adjacent unit.
/// `visible` additionally folds in the picker's `show_arrows` setting;
/// an arrow that cannot page draws no icon at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ArrowFlags {
    pub visible: bool,
    pub enabled: bool,
}

/// Header-bar data: the stage title plus both paging arrows.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct HeaderView {
    /// "February 2024" in the day stage, "2024" above it.
    pub title: String,
    pub backward: ArrowFlags,
    pub forward: ArrowFlags,
}

/// The focus one paging step away: a month step in the day stage, a
/// year step in the month and year stages. Always month-start
/// normalized.
pub fn paged_focus(focus: NaiveDate, stage: Stage, direction: PageDirection) -> NaiveDate {
    let next = match stage {
        Stage::Day => add_months(focus, direction.step()),
        Stage::Month | Stage::Year => add_years(focus, direction.step()),
    };
    month_start(next)
}

/// Whether a paging step in `direction` lands on a unit that still
/// overlaps `bounds`.
pub fn page_allowed(
    focus: NaiveDate,
    stage: Stage,
    direction: PageDirection,
    bounds: DateBounds,
) -> bool {
    let candidate = paged_focus(focus, stage, direction);
    match stage {
        Stage::Day => bounds.admits_month(candidate),
        Stage::Month | Stage::Year => bounds.admits_year(candidate),
    }
}

/// The header title for `focus` at `stage`.
pub fn header_title(focus: NaiveDate, stage: Stage) -> String {
    match stage {
        Stage::Day => focus.format("%B %Y").to_string(),
        Stage::Month | Stage::Year => focus.format("%Y").to_string(),
    }
}
