//! Composite-key resolution for project lookups.
//!
//! # Responsibility
//! - Classify the rows a partition query returned for one project id.
//! - Apply the active/inactive tie-break as a named, swappable policy.
//!
//! # Invariants
//! - At most one row per flag value is legal for an id; more than two rows
//!   is a data-integrity violation.
//! - When both flag values exist, the inactive row wins. This preserves the
//!   long-standing observable behavior of the lookup path; swap the policy
//!   function if product ever decides the active row takes precedence.

use super::{StoreError, StoreResult};
use crate::model::project::Project;
use log::debug;

/// Outcome of classifying the rows returned for a single project id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// No row exists for the id.
    NotFound,
    /// Exactly one flag value is present.
    Single(Project),
    /// Both flag values are present for the same id.
    Ambiguous {
        /// The row stored with `active = true`.
        active: Project,
        /// The row stored with `active = false`.
        inactive: Project,
    },
}

/// Classifies the query result for one id into a tagged resolution.
///
/// # Errors
/// - `OutOfRange` when more than two rows share the id.
pub fn resolve_rows(id: i32, rows: Vec<Project>) -> StoreResult<Resolution> {
    if rows.len() > 2 {
        return Err(StoreError::OutOfRange(format!(
            "too many projects were returned for identifier {id}"
        )));
    }

    let (active, inactive): (Vec<Project>, Vec<Project>) =
        rows.into_iter().partition(|project| project.active);

    match (active.into_iter().next(), inactive.into_iter().next()) {
        (None, None) => Ok(Resolution::NotFound),
        (Some(active), Some(inactive)) => {
            debug!("event=project_resolve module=resolve status=ambiguous id={id}");
            Ok(Resolution::Ambiguous { active, inactive })
        }
        (Some(project), None) | (None, Some(project)) => Ok(Resolution::Single(project)),
    }
}

/// Tie-break policy applied when both flag values exist for one id.
///
/// Returns the single row when the lookup is unambiguous, and the inactive
/// row when both exist.
pub fn prefer_inactive(resolution: Resolution) -> Option<Project> {
    match resolution {
        Resolution::NotFound => None,
        Resolution::Single(project) => Some(project),
        Resolution::Ambiguous { inactive, .. } => Some(inactive),
    }
}

#[cfg(test)]
mod tests {
    use super::{prefer_inactive, resolve_rows, Resolution};
    use crate::model::project::Project;
    use crate::store::StoreError;

    fn project(id: i32, active: bool) -> Project {
        Project {
            id,
            active,
            title: format!("project-{id}"),
            kind: 1,
            series: None,
            status: 1,
        }
    }

    #[test]
    fn no_rows_resolve_to_not_found() {
        let resolution = resolve_rows(5, Vec::new()).unwrap();
        assert_eq!(resolution, Resolution::NotFound);
        assert_eq!(prefer_inactive(resolution), None);
    }

    #[test]
    fn single_active_row_resolves_to_itself() {
        let resolution = resolve_rows(5, vec![project(5, true)]).unwrap();
        assert_eq!(resolution, Resolution::Single(project(5, true)));
    }

    #[test]
    fn single_inactive_row_resolves_to_itself() {
        let resolved = prefer_inactive(resolve_rows(5, vec![project(5, false)]).unwrap());
        assert_eq!(resolved, Some(project(5, false)));
    }

    #[test]
    fn both_flag_values_prefer_the_inactive_row() {
        let resolution = resolve_rows(5, vec![project(5, true), project(5, false)]).unwrap();
        assert_eq!(
            resolution,
            Resolution::Ambiguous {
                active: project(5, true),
                inactive: project(5, false),
            }
        );
        assert_eq!(prefer_inactive(resolution), Some(project(5, false)));
    }

    #[test]
    fn more_than_two_rows_is_out_of_range() {
        let rows = vec![project(5, true), project(5, false), project(5, true)];
        let err = resolve_rows(5, rows).unwrap_err();
        assert!(matches!(err, StoreError::OutOfRange(_)));
    }
}
