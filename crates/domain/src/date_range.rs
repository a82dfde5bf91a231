// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Inclusive calendar date ranges.

use time::Date;

/// An inclusive range of calendar dates.
///
/// The range is `Copy`, so iterating it does not consume it and the walk
/// can be restarted at will. A range whose start lies after its end is
/// empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    /// Creates a range covering `start` through `end`, both inclusive.
    #[must_use]
    pub const fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// First date of the range.
    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Last date of the range.
    #[must_use]
    pub const fn end(&self) -> Date {
        self.end
    }

    /// Whether the range contains no dates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of dates in the range; zero when inverted.
    #[must_use]
    pub fn len(&self) -> u32 {
        if self.is_empty() {
            return 0;
        }
        let days: i64 = (self.end - self.start).whole_days() + 1;
        u32::try_from(days).unwrap_or(u32::MAX)
    }

    /// Whether `date` falls inside the range.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Walks the range one day at a time.
    #[must_use]
    pub const fn iter(&self) -> DateRangeIter {
        DateRangeIter {
            next: if self.start.to_julian_day() <= self.end.to_julian_day() {
                Some(self.start)
            } else {
                None
            },
            end: self.end,
        }
    }

    /// The years the range touches, in ascending order.
    #[must_use]
    pub fn years(&self) -> Vec<i32> {
        if self.is_empty() {
            return Vec::new();
        }
        (self.start.year()..=self.end.year()).collect()
    }
}

impl IntoIterator for DateRange {
    type Item = Date;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &DateRange {
    type Item = Date;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the dates of a [`DateRange`].
#[derive(Debug, Clone)]
pub struct DateRangeIter {
    next: Option<Date>,
    end: Date,
}

impl Iterator for DateRangeIter {
    type Item = Date;

    fn next(&mut self) -> Option<Self::Item> {
        let current: Date = self.next?;
        // next_day() is None only at the last representable date
        self.next = if current < self.end {
            current.next_day()
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(next) => {
                let remaining: usize =
                    usize::try_from((self.end - next).whole_days() + 1).unwrap_or(0);
                (remaining, Some(remaining))
            }
            None => (0, Some(0)),
        }
    }
}

impl std::iter::FusedIterator for DateRangeIter {}
