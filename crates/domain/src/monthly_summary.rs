// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Monthly time-report statistics.
//!
//! A summary is assembled from three independent aggregate facts. Any
//! failed lookup aborts the whole aggregation; a partial summary is never
//! produced.

use crate::types::{ReportPeriod, UserId, WellKnownCategories};
use serde::{Deserialize, Serialize};

/// Statistics of one user's reports for one month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Sum of reported hours.
    pub total_hours: f64,
    /// Number of work entries.
    pub work_days: u32,
    /// Number of medical (sick leave) entries.
    pub medical_days: u32,
}

/// Assembles a summary from already gathered facts.
#[must_use]
pub const fn compute_monthly_summary(
    total_hours: f64,
    work_days: u32,
    medical_days: u32,
) -> MonthlySummary {
    MonthlySummary {
        total_hours,
        work_days,
        medical_days,
    }
}

/// Source of the aggregate facts behind a [`MonthlySummary`].
///
/// Implemented by the persistence layer.
pub trait MonthlyFactsSource {
    /// Error produced by a failed lookup.
    type Error;

    /// Sum of hours a user reported in a period.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails.
    fn total_hours(&mut self, user_id: &UserId, period: ReportPeriod) -> Result<f64, Self::Error>;

    /// Number of a user's entries in a period with the given category.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails.
    fn count_reports_in_category(
        &mut self,
        user_id: &UserId,
        period: ReportPeriod,
        category_id: &str,
    ) -> Result<u32, Self::Error>;
}

/// Gathers total hours, work entries and medical entries into one summary.
///
/// Lookups run in that order and the first failure is returned as is.
///
/// # Errors
///
/// Returns the source's error if any lookup fails.
pub fn aggregate_monthly_summary<S>(
    source: &mut S,
    categories: &WellKnownCategories,
    user_id: &UserId,
    period: ReportPeriod,
) -> Result<MonthlySummary, S::Error>
where
    S: MonthlyFactsSource + ?Sized,
{
    let total_hours: f64 = source.total_hours(user_id, period)?;
    let work_days: u32 =
        source.count_reports_in_category(user_id, period, &categories.work().id)?;
    let medical_days: u32 =
        source.count_reports_in_category(user_id, period, &categories.medical().id)?;

    Ok(compute_monthly_summary(total_hours, work_days, medical_days))
}
