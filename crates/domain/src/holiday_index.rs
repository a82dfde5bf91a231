// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Holiday lookup by calendar date.
//!
//! The index is keyed by the full date, so holidays of several years can
//! live in one index without a January 1st of one year answering for the
//! January 1st of another.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::{Date, Month};

/// One calendar day flagged as a holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayEntry {
    /// Persisted calendar day identifier, if the entry came from storage.
    pub id: Option<i64>,
    /// The holiday's date.
    pub date: Date,
    /// Whether the day still counts as a chargeable vacation day.
    pub is_paid_vacation: bool,
    /// Optional label.
    pub description: Option<String>,
}

impl HolidayEntry {
    /// Creates an entry without an identifier or description.
    #[must_use]
    pub const fn new(date: Date, is_paid_vacation: bool) -> Self {
        Self {
            id: None,
            date,
            is_paid_vacation,
            description: None,
        }
    }

    /// Month of the holiday.
    #[must_use]
    pub const fn month(&self) -> Month {
        self.date.month()
    }

    /// Day of month of the holiday.
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.date.day()
    }
}

/// Lookup from date to holiday.
///
/// Built fresh per computation and not shared across requests. When the
/// source list contains the same date twice, the later entry wins; the
/// number of entries replaced that way is kept for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayIndex {
    entries: BTreeMap<Date, HolidayEntry>,
    overwritten: usize,
}

impl HolidayIndex {
    /// Builds an index from a list of holidays.
    #[must_use]
    pub fn new<I>(holidays: I) -> Self
    where
        I: IntoIterator<Item = HolidayEntry>,
    {
        let mut index: Self = Self::default();
        index.extend(holidays);
        index
    }

    /// Adds more holidays, typically another year's calendar.
    pub fn extend<I>(&mut self, holidays: I)
    where
        I: IntoIterator<Item = HolidayEntry>,
    {
        for holiday in holidays {
            if self.entries.insert(holiday.date, holiday).is_some() {
                self.overwritten += 1;
            }
        }
    }

    /// Returns the holiday on `date`, if any.
    #[must_use]
    pub fn lookup(&self, date: Date) -> Option<&HolidayEntry> {
        self.entries.get(&date)
    }

    /// Number of distinct holiday dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no holidays.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// How many entries were replaced by a later entry for the same date.
    #[must_use]
    pub const fn overwritten(&self) -> usize {
        self.overwritten
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_empty_index_has_no_holidays() {
        let index: HolidayIndex = HolidayIndex::new(Vec::new());
        assert!(index.is_empty());
        assert!(index.lookup(date!(2024 - 01 - 01)).is_none());
    }

    #[test]
    fn test_lookup_finds_exact_date() {
        let index: HolidayIndex = HolidayIndex::new(vec![HolidayEntry::new(
            date!(2024 - 07 - 04),
            false,
        )]);

        let found: Option<&HolidayEntry> = index.lookup(date!(2024 - 07 - 04));
        assert_eq!(found.map(HolidayEntry::day), Some(4));
        assert_eq!(found.map(HolidayEntry::month), Some(Month::July));
    }

    #[test]
    fn test_same_month_day_in_other_year_is_not_a_holiday() {
        let index: HolidayIndex = HolidayIndex::new(vec![HolidayEntry::new(
            date!(2024 - 01 - 01),
            false,
        )]);

        assert!(index.lookup(date!(2025 - 01 - 01)).is_none());
    }

    #[test]
    fn test_later_duplicate_wins() {
        let index: HolidayIndex = HolidayIndex::new(vec![
            HolidayEntry::new(date!(2024 - 05 - 01), false),
            HolidayEntry::new(date!(2024 - 05 - 01), true),
        ]);

        assert_eq!(index.len(), 1);
        assert_eq!(index.overwritten(), 1);
        assert!(
            index
                .lookup(date!(2024 - 05 - 01))
                .is_some_and(|h| h.is_paid_vacation)
        );
    }

    #[test]
    fn test_extend_merges_years() {
        let mut index: HolidayIndex =
            HolidayIndex::new(vec![HolidayEntry::new(date!(2024 - 12 - 31), false)]);
        index.extend(vec![HolidayEntry::new(date!(2025 - 01 - 01), false)]);

        assert_eq!(index.len(), 2);
        assert_eq!(index.overwritten(), 0);
        assert!(index.lookup(date!(2025 - 01 - 01)).is_some());
    }
}
