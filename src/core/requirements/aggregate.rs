//! Overall degree progress across requirement groups

use super::evaluator::{percent_of, RequirementGroupResult};
use super::policy::GroupPolicy;

/// Overall completion percentage across gated groups.
///
/// Credit groups contribute their accepted credits over their cap, count groups
/// their counted courses over the required count. Unconstrained groups are
/// skipped entirely.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute_overall_percent(results: &[RequirementGroupResult]) -> u8 {
    let (completed, needed) = results
        .iter()
        .fold((0.0_f32, 0.0_f32), |(completed, needed), result| {
            match result.policy {
                GroupPolicy::CreditCap { cap } => (completed + result.completed, needed + cap),
                GroupPolicy::RequiredCount { count } | GroupPolicy::SameSubject { count } => {
                    (completed + result.completed, needed + count as f32)
                }
                GroupPolicy::Unconstrained => (completed, needed),
            }
        });
    percent_of(completed, needed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::requirements::evaluator::MeasureKind;

    fn result(policy: GroupPolicy, completed: f32, total: f32) -> RequirementGroupResult {
        RequirementGroupResult {
            name: String::new(),
            policy,
            kind: if policy.is_credit_based() {
                MeasureKind::Credit
            } else {
                MeasureKind::Count
            },
            completed,
            total,
            percent: percent_of(completed, total),
            counted_codes: Vec::new(),
            raw_selected_codes: Vec::new(),
        }
    }

    #[test]
    fn test_mixed_groups() {
        let results = vec![
            result(GroupPolicy::CreditCap { cap: 120.0 }, 30.0, 120.0),
            result(GroupPolicy::RequiredCount { count: 3 }, 3.0, 3.0),
            result(GroupPolicy::SameSubject { count: 2 }, 1.0, 2.0),
        ];
        // (30 + 3 + 1) / (120 + 3 + 2) = 34 / 125
        assert_eq!(compute_overall_percent(&results), 27);
    }

    #[test]
    fn test_unconstrained_ignored() {
        let results = vec![
            result(GroupPolicy::RequiredCount { count: 1 }, 1.0, 1.0),
            result(GroupPolicy::Unconstrained, 0.0, 50.0),
        ];
        assert_eq!(compute_overall_percent(&results), 100);
    }

    #[test]
    fn test_no_gated_groups() {
        assert_eq!(compute_overall_percent(&[]), 0);
        let results = vec![result(GroupPolicy::Unconstrained, 4.0, 4.0)];
        assert_eq!(compute_overall_percent(&results), 0);
    }
}
