use chrono::NaiveDate;

/// A selection owned by the host.
///
/// The core never stores one; it only consumes a selection to compute
/// highlight flags, and an absent selection is `Option::<Selection>::None`
/// rather than an implicit falsy default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Selection {
    /// One picked date.
    Single(NaiveDate),
    /// Two endpoint dates; every day between them counts as selected.
    ///
    /// The endpoints may be supplied in either order. Containment is
    /// symmetric in `start` and `end`.
    Range { start: NaiveDate, end: NaiveDate },
}

impl Selection {
    /// Whether `date` is highlighted as selected.
    ///
    /// For ranges this is inclusive on both ends and insensitive to
    /// endpoint order.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match *self {
            Self::Single(selected) => selected == date,
            Self::Range { start, end } => {
                let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
                lo <= date && date <= hi
            }
        }
    }

    /// The raw `(start, end)` pair of a range selection, in the order
    /// the host supplied them.
    pub fn endpoints(&self) -> Option<(NaiveDate, NaiveDate)> {
        match *self {
            Self::Single(_) => None,
            Self::Range { start, end } => Some((start, end)),
        }
    }

    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range { .. })
    }
}
