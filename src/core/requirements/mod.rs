//! Requirement progress: policies, per-group evaluation and the overall figure

pub mod aggregate;
pub mod evaluator;
pub mod group;
pub mod policy;

pub use aggregate::compute_overall_percent;
pub use evaluator::{evaluate_group, percent_of, MeasureKind, RequirementGroupResult};
pub use group::RequirementGroup;
pub use policy::{resolve_policy, GroupId, GroupPolicy, TOTAL_CREDITS_GROUP};

use crate::core::catalog::Catalog;
use crate::core::planner::SelectionLedger;
use serde::Serialize;

/// Progress of every catalog group plus the overall percentage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequirementsSummary {
    /// Group results in display order
    pub groups: Vec<RequirementGroupResult>,
    /// Overall completion across gated groups
    pub overall_percent: u8,
}

/// Evaluate every requirement group in the catalog against the selections.
///
/// `extra_credits` are credits from transfer courses with no catalog match; they
/// only count toward the total academic credits group.
#[must_use]
pub fn compute_requirements_summary(
    catalog: &Catalog,
    selections: &SelectionLedger,
    extra_credits: f32,
) -> RequirementsSummary {
    let groups: Vec<RequirementGroupResult> = catalog
        .requirement_groups()
        .iter()
        .map(|group| evaluate_group(group, selections, extra_credits))
        .collect();
    let overall_percent = compute_overall_percent(&groups);

    RequirementsSummary {
        groups,
        overall_percent,
    }
}
