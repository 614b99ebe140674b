use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::bounds::DateBounds;
use crate::date::{last_day_of_month, month_start, with_month_index};
use crate::grid::{self, MonthCell, WeekRow, YearSpan};
use crate::nav::{
    header_title, page_allowed, paged_focus, ArrowFlags, HeaderView, PageDirection, Stage,
};
use crate::selection::Selection;

/// Navigation state: the active [`Stage`] plus the focus anchor.
///
/// The focus is always the first day of the month whose grid is
/// currently shown. Every transition replaces it wholesale; grid
/// construction never mutates it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DatePickerState {
    stage: Stage,
    focus: NaiveDate,
}

impl DatePickerState {
    /// Day stage, focused on `today`'s month.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            stage: Stage::Day,
            focus: month_start(today),
        }
    }

    /// Focus comes from the host's selected date when there is one,
    /// otherwise from `today`.
    pub fn from_selection(selected: Option<NaiveDate>, today: NaiveDate) -> Self {
        Self::new(selected.unwrap_or(today))
    }

    /// Start at a different stage.
    #[inline]
    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.stage = stage;
        self
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// First day of the focused month.
    pub fn focus(&self) -> NaiveDate {
        self.focus
    }

    /// Day → Month → Year; a no-op at `Year`.
    pub fn drill_up(&mut self) {
        self.stage = self.stage.drilled_up();
    }

    /// Year → Month → Day; a no-op at `Day`.
    pub fn drill_down(&mut self) {
        self.stage = self.stage.drilled_down();
    }

    /// One paging step: month-wise in the day stage, year-wise above.
    ///
    /// Unconditional: callers gate on the arrow's `enabled` flag
    /// first. [`DatePicker::tap_arrow`] does that for you.
    pub fn page(&mut self, direction: PageDirection) {
        self.focus = paged_focus(self.focus, self.stage, direction);
    }

    /// Replaces the focus (re-normalized to its month start),
    /// optionally drilling down one stage.
    pub fn set_focus(&mut self, focus: NaiveDate, advance_stage: bool) {
        self.focus = month_start(focus);
        if advance_stage {
            self.drill_down();
        }
    }
}

/// Per-picker configuration. Pair it with a [`DatePickerState`] and
/// the host-owned selection.
///
/// ```
/// use chrono::NaiveDate;
/// use datepicker_core::{DateBounds, DatePicker, DatePickerState};
///
/// let today = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
/// let picker = DatePicker::new(DateBounds::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
/// ));
/// let mut state = DatePickerState::new(today);
///
/// let grid = picker.day_grid(&state, None, today);
/// assert_eq!(grid[0].len(), 7);
///
/// // A renderer reported a tap on day 29:
/// let picked = picker.pick_day(&state, 29);
/// assert_eq!(picked, NaiveDate::from_ymd_opt(2024, 2, 29));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DatePicker {
    bounds: DateBounds,
    week_start: Weekday,
    show_arrows: bool,
}

impl DatePicker {
    pub fn new(bounds: DateBounds) -> Self {
        Self {
            bounds,
            week_start: Weekday::Sun,
            show_arrows: true,
        }
    }

    /// First weekday of a grid row. (Default: Sunday)
    #[inline]
    pub fn week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    /// Whether the header offers paging arrows at all. (Default: true)
    #[inline]
    pub fn show_arrows(mut self, show_arrows: bool) -> Self {
        self.show_arrows = show_arrows;
        self
    }

    pub fn bounds(&self) -> DateBounds {
        self.bounds
    }

    /// The week rows for the focused month.
    pub fn day_grid(
        &self,
        state: &DatePickerState,
        selection: Option<&Selection>,
        today: NaiveDate,
    ) -> Vec<WeekRow> {
        grid::day_grid(state.focus, self.bounds, selection, today, self.week_start)
    }

    /// The 4×3 month grid for the focused year.
    pub fn month_grid(&self, state: &DatePickerState) -> [[MonthCell; 3]; 4] {
        grid::month_grid(state.focus, self.bounds)
    }

    /// The year range for a slider- or list-style year selector.
    pub fn year_span(&self, state: &DatePickerState) -> YearSpan {
        grid::year_span(state.focus, self.bounds)
    }

    /// Header title and both paging arrows for the current stage.
    pub fn header(&self, state: &DatePickerState) -> HeaderView {
        HeaderView {
            title: header_title(state.focus, state.stage),
            backward: self.arrow(state, PageDirection::Backward),
            forward: self.arrow(state, PageDirection::Forward),
        }
    }

    /// Flags for one paging arrow.
    pub fn arrow(&self, state: &DatePickerState, direction: PageDirection) -> ArrowFlags {
        let enabled = page_allowed(state.focus, state.stage, direction, self.bounds);
        ArrowFlags {
            visible: self.show_arrows && enabled,
            enabled,
        }
    }

    /// A day-cell pick. Returns the picked date, or `None` when the
    /// cell is disabled or the day does not exist in the focused month.
    ///
    /// Disabled cells are inert in the core itself, regardless of what
    /// the renderer lets through. Whether the date becomes a single
    /// selection or a range endpoint stays the host's decision.
    pub fn pick_day(&self, state: &DatePickerState, day: u32) -> Option<NaiveDate> {
        let focus = state.focus;
        if day == 0 || day > last_day_of_month(focus.year(), focus.month()) {
            log::trace!("ignoring pick of nonexistent day {day}");
            return None;
        }
        let date = focus.checked_add_days(Days::new(u64::from(day - 1)))?;
        if !self.bounds.admits_day(date) {
            log::trace!("ignoring pick on disabled day {date}");
            return None;
        }
        Some(date)
    }

    /// A month-cell pick: moves the focus to that month of the focused
    /// year and drills down to the day stage. Inert when the month is
    /// out of bounds or the index is not `0..=11`.
    pub fn pick_month(&self, state: &mut DatePickerState, index: u32) -> bool {
        if index > 11 {
            log::trace!("ignoring pick of month index {index}");
            return false;
        }
        let month = with_month_index(state.focus, index);
        if !self.bounds.admits_month(month) {
            log::trace!("ignoring pick on disabled month {month}");
            return false;
        }
        state.set_focus(month, true);
        true
    }

    /// A year pick: keeps the focused month, replaces the year, and
    /// drills down to the month stage. Inert when the year is out of
    /// bounds.
    pub fn pick_year(&self, state: &mut DatePickerState, year: i32) -> bool {
        let Some(focus) = NaiveDate::from_ymd_opt(year, state.focus.month(), 1) else {
            log::trace!("ignoring pick of unrepresentable year {year}");
            return false;
        };
        if !self.bounds.admits_year(focus) {
            log::trace!("ignoring pick on disabled year {year}");
            return false;
        }
        state.set_focus(focus, true);
        true
    }

    /// A header tap: drill up one stage (saturating).
    pub fn tap_header(&self, state: &mut DatePickerState) {
        state.drill_up();
    }

    /// An arrow tap: pages only when the adjacent unit still overlaps
    /// the bounds; taps past the edge are inert.
    pub fn tap_arrow(&self, state: &mut DatePickerState, direction: PageDirection) -> bool {
        if !self.arrow(state, direction).enabled {
            log::trace!("ignoring {direction:?} page past the bounds");
            return false;
        }
        state.page(direction);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn picker_2024() -> DatePicker {
        DatePicker::new(DateBounds::new(date(2024, 1, 1), date(2024, 12, 31)))
    }

    #[test]
    fn focus_initialization() {
        let today = date(2024, 6, 18);
        let state = DatePickerState::new(today);
        assert_eq!(state.stage(), Stage::Day);
        assert_eq!(state.focus(), date(2024, 6, 1));

        let state = DatePickerState::from_selection(Some(date(2023, 11, 30)), today);
        assert_eq!(state.focus(), date(2023, 11, 1));

        let state = DatePickerState::from_selection(None, today);
        assert_eq!(state.focus(), date(2024, 6, 1));

        let state = DatePickerState::new(today).with_stage(Stage::Year);
        assert_eq!(state.stage(), Stage::Year);
    }

    #[test]
    fn leap_day_pick() {
        // Leap year: picking cell 29 from a February focus must exist.
        let picker = picker_2024();
        let state = DatePickerState::new(date(2024, 2, 15));
        assert_eq!(picker.pick_day(&state, 29), Some(date(2024, 2, 29)));
    }

    #[test]
    fn nonexistent_day_pick_is_inert() {
        let picker = picker_2024();
        let state = DatePickerState::new(date(2024, 4, 1));
        assert_eq!(picker.pick_day(&state, 31), None);
        let state = DatePickerState::new(date(2023, 2, 1));
        let picker = DatePicker::new(DateBounds::new(date(2023, 1, 1), date(2023, 12, 31)));
        assert_eq!(picker.pick_day(&state, 29), None);
        assert_eq!(picker.pick_day(&state, 0), None);
    }

    #[test]
    fn disabled_day_pick_is_inert() {
        let picker = DatePicker::new(DateBounds::new(date(2024, 2, 10), date(2024, 2, 20)));
        let state = DatePickerState::new(date(2024, 2, 1));
        let before = state;
        assert_eq!(picker.pick_day(&state, 9), None);
        assert_eq!(picker.pick_day(&state, 21), None);
        assert_eq!(picker.pick_day(&state, 10), Some(date(2024, 2, 10)));
        // Day picks never move the focus.
        assert_eq!(state, before);
    }

    #[test]
    fn december_pick_drills_to_day_stage() {
        // Month stage, focus year 2024, pick index 11.
        let picker = picker_2024();
        let mut state = DatePickerState::new(date(2024, 2, 15)).with_stage(Stage::Month);
        assert!(picker.pick_month(&mut state, 11));
        assert_eq!(state.stage(), Stage::Day);
        assert_eq!(state.focus(), date(2024, 12, 1));
    }

    #[test]
    fn disabled_month_pick_is_inert() {
        let picker = DatePicker::new(DateBounds::new(date(2024, 3, 15), date(2024, 6, 10)));
        let mut state = DatePickerState::new(date(2024, 5, 1)).with_stage(Stage::Month);
        let before = state;
        assert!(!picker.pick_month(&mut state, 0));
        assert!(!picker.pick_month(&mut state, 12));
        assert_eq!(state, before);
        // March overlaps the bounds even though its first half is outside.
        assert!(picker.pick_month(&mut state, 2));
        assert_eq!(state.focus(), date(2024, 3, 1));
    }

    #[test]
    fn year_pick_keeps_month_and_drills_to_month_stage() {
        let picker = DatePicker::new(DateBounds::new(date(2020, 1, 1), date(2030, 12, 31)));
        let mut state = DatePickerState::new(date(2024, 5, 20)).with_stage(Stage::Year);
        assert!(picker.pick_year(&mut state, 2027));
        assert_eq!(state.stage(), Stage::Month);
        assert_eq!(state.focus(), date(2027, 5, 1));

        let before = state;
        assert!(!picker.pick_year(&mut state, 2031));
        assert_eq!(state, before);
    }

    #[test]
    fn header_tap_drills_up_and_saturates() {
        let picker = picker_2024();
        let mut state = DatePickerState::new(date(2024, 2, 1));
        picker.tap_header(&mut state);
        assert_eq!(state.stage(), Stage::Month);
        picker.tap_header(&mut state);
        assert_eq!(state.stage(), Stage::Year);
        picker.tap_header(&mut state);
        assert_eq!(state.stage(), Stage::Year);
    }

    #[test]
    fn arrow_taps_page_until_the_boundary() {
        // Bounds cover 2024, focus 2024-02-01, day stage.
        let picker = picker_2024();
        let mut state = DatePickerState::new(date(2024, 2, 1));
        assert!(picker.arrow(&state, PageDirection::Backward).enabled);
        assert!(picker.tap_arrow(&mut state, PageDirection::Backward));
        assert_eq!(state.focus(), date(2024, 1, 1));

        // January is the min boundary month; going further is inert.
        let header = picker.header(&state);
        assert!(!header.backward.enabled);
        assert!(!header.backward.visible);
        assert!(header.forward.enabled);
        assert!(!picker.tap_arrow(&mut state, PageDirection::Backward));
        assert_eq!(state.focus(), date(2024, 1, 1));
    }

    #[test]
    fn month_stage_arrows_page_by_year() {
        let picker = DatePicker::new(DateBounds::new(date(2023, 6, 1), date(2025, 6, 1)));
        let mut state = DatePickerState::new(date(2024, 3, 1)).with_stage(Stage::Month);
        assert!(picker.tap_arrow(&mut state, PageDirection::Forward));
        assert_eq!(state.focus(), date(2025, 3, 1));
        assert!(!picker.tap_arrow(&mut state, PageDirection::Forward));
        assert_eq!(state.focus(), date(2025, 3, 1));
    }

    #[test]
    fn hidden_arrows_still_report_enabled() {
        let picker = picker_2024().show_arrows(false);
        let state = DatePickerState::new(date(2024, 6, 1));
        let header = picker.header(&state);
        assert!(header.backward.enabled);
        assert!(!header.backward.visible);
        assert!(header.forward.enabled);
        assert!(!header.forward.visible);
    }

    #[test]
    fn header_title_follows_stage() {
        let picker = picker_2024();
        let mut state = DatePickerState::new(date(2024, 2, 1));
        assert_eq!(picker.header(&state).title, "February 2024");
        state.drill_up();
        assert_eq!(picker.header(&state).title, "2024");
    }

    #[test]
    fn facade_grids_match_free_functions() {
        let picker = picker_2024().week_start(Weekday::Mon);
        let state = DatePickerState::new(date(2024, 2, 15));
        let today = date(2024, 2, 7);
        assert_eq!(
            picker.day_grid(&state, None, today),
            grid::day_grid(date(2024, 2, 1), picker.bounds(), None, today, Weekday::Mon)
        );
        assert_eq!(
            picker.month_grid(&state),
            grid::month_grid(date(2024, 2, 1), picker.bounds())
        );
        assert_eq!(picker.year_span(&state).focus_year, 2024);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn state_round_trips_through_serde() {
        let state = DatePickerState::new(date(2024, 2, 7)).with_stage(Stage::Month);
        let json = serde_json::to_string(&state).unwrap();
        let back: DatePickerState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
