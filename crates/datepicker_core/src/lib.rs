//! Core logic for an embeddable date-picker widget.
//!
//! This crate is the non-visual half of a calendar picker: the
//! navigation state machine ([`DatePickerState`]), the pure grid
//! builders ([`day_grid`], [`month_grid`]) and the bounds/selection
//! predicates that decide which cells are pickable and which are
//! highlighted. Rendering, hit-testing and animation belong to whatever
//! GUI layer embeds it; that layer draws the data produced here and
//! reports interactions back through [`DatePicker`]'s `pick_*`/`tap_*`
//! methods.
//!
//! Everything is a pure, synchronous computation over immutable values:
//! grids are rebuilt from scratch on demand and two calls with equal
//! inputs yield equal output, so a renderer can diff or memoize them
//! freely. "Today" is always passed in by the host, never read from the
//! system clock inside the core (the [`today`] helper exists for hosts
//! that want the real clock).
//!
//! Date arithmetic is [`chrono`]'s; the crate re-exports it so hosts
//! can name [`chrono::NaiveDate`] without a separate dependency.
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!
#![forbid(unsafe_code)]

mod bounds;
mod date;
mod grid;
mod nav;
mod picker;
mod selection;

pub use crate::bounds::DateBounds;
pub use crate::date::{
    add_months, add_years, last_day_of_month, month_end, month_start, today, with_month_index,
    year_end, year_start,
};
pub use crate::grid::{day_grid, month_grid, year_span, DayCell, MonthCell, WeekRow, YearSpan};
pub use crate::nav::{
    header_title, page_allowed, paged_focus, ArrowFlags, HeaderView, PageDirection, Stage,
};
pub use crate::picker::{DatePicker, DatePickerState};
pub use crate::selection::Selection;

pub use chrono;
