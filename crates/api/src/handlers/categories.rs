// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Report category handlers.

use timetrack_domain::{ReportCategory, WellKnownCategories};
use timetrack_persistence::Persistence;
use tracing::info;

use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::request_response::CategoryInfo;

/// Lists all report categories.
///
/// # Errors
///
/// Returns an error if the categories cannot be loaded.
pub fn list_categories(persistence: &mut Persistence) -> Result<Vec<CategoryInfo>, ApiError> {
    let categories: Vec<ReportCategory> = persistence
        .list_categories()
        .map_err(|err| translate_persistence_error(err, "listing categories"))?;
    Ok(categories.into_iter().map(CategoryInfo::from).collect())
}

/// Resolves the categories monthly statistics depend on.
///
/// Called once at startup; a missing category keeps the server from
/// starting.
///
/// # Errors
///
/// Returns `DomainRuleViolation` if the work or medical category is
/// missing, or an internal error if the categories cannot be loaded.
pub fn resolve_well_known_categories(
    persistence: &mut Persistence,
) -> Result<WellKnownCategories, ApiError> {
    let categories: Vec<ReportCategory> = persistence
        .list_categories()
        .map_err(|err| translate_persistence_error(err, "resolving well-known categories"))?;
    let resolved: WellKnownCategories =
        WellKnownCategories::resolve(&categories).map_err(translate_domain_error)?;

    info!(
        work = %resolved.work().id,
        medical = %resolved.medical().id,
        "Resolved well-known report categories"
    );
    Ok(resolved)
}
