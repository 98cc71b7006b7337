use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// How many past holidays the "last celebrated" query reports.
pub const LAST_CELEBRATED_LIMIT: usize = 3;

/// A single public holiday as published upstream.
/// Only the fields this service reports are kept; the rest of the upstream
/// payload is ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayRecord {
    pub date: NaiveDate,
    pub local_name: String,
}

impl HolidayRecord {
    pub fn new(date: NaiveDate, local_name: impl Into<String>) -> Self {
        Self {
            date,
            local_name: local_name.into(),
        }
    }

    /// Saturday or Sunday.
    pub fn is_on_weekend(&self) -> bool {
        matches!(self.date.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

/// Holidays dated strictly before `today`, most recent first, at most `limit`.
///
/// The sort is stable: records sharing a date keep their upstream order.
pub fn last_celebrated(
    records: Vec<HolidayRecord>,
    today: NaiveDate,
    limit: usize,
) -> Vec<HolidayRecord> {
    let mut past: Vec<HolidayRecord> = records.into_iter().filter(|h| h.date < today).collect();
    past.sort_by(|a, b| b.date.cmp(&a.date));
    past.truncate(limit);
    past
}

/// Number of holidays falling Monday through Friday.
pub fn count_not_on_weekends(records: &[HolidayRecord]) -> usize {
    records.iter().filter(|h| !h.is_on_weekend()).count()
}

/// Records of `first` whose date also appears somewhere in `second`.
///
/// Names are not compared. Output keeps `first`'s order and duplicates.
pub fn common_by_date(first: Vec<HolidayRecord>, second: &[HolidayRecord]) -> Vec<HolidayRecord> {
    let dates: HashSet<NaiveDate> = second.iter().map(|h| h.date).collect();
    first
        .into_iter()
        .filter(|h| dates.contains(&h.date))
        .collect()
}
