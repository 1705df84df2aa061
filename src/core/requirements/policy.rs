//! Requirement group policies
//!
//! Each known requirement group has a stable [`GroupId`] and a fixed
//! [`GroupPolicy`]. Free-text group names from the catalog are matched against
//! [`POLICY_TABLE`] once, when the catalog groups are built; evaluation only
//! ever sees the resolved policy.

use serde::{Deserialize, Serialize};

/// Name of the group that also receives credits from unmatched transfer courses
pub const TOTAL_CREDITS_GROUP: &str = "120 Academic Credits";

/// How a requirement group measures completion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GroupPolicy {
    /// Every unique selected course counts once
    Unconstrained,
    /// The first `count` selections count (duplicates allowed)
    RequiredCount {
        /// Number of selections needed
        count: usize,
    },
    /// The largest same-subject cluster counts, truncated to `count`
    SameSubject {
        /// Number of same-subject selections needed
        count: usize,
    },
    /// Selections count toward a credit ceiling
    CreditCap {
        /// Credit ceiling
        cap: f32,
    },
}

impl GroupPolicy {
    /// Whether progress is measured in credits (as opposed to course counts)
    #[must_use]
    pub const fn is_credit_based(&self) -> bool {
        matches!(self, Self::CreditCap { .. })
    }

    /// Whether this group takes part in the overall completion percentage
    #[must_use]
    pub const fn is_gated(&self) -> bool {
        !matches!(self, Self::Unconstrained)
    }
}

/// Stable identifiers for the requirement groups with special rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupId {
    /// "120 Academic Credits"
    AcademicCredits,
    /// "45 upper level credits"
    UpperLevelCredits,
    /// "English Composition"
    EnglishComposition,
    /// "Science Lab"
    ScienceLab,
    /// "Science"
    Science,
    /// "Computer Science Technical Electives"
    TechnicalElectives,
    /// "Computer Science Elective"
    ComputerScienceElectives,
    /// "Arts and Humanities"
    ArtsAndHumanities,
}

/// How a table row matches a group name (always case-insensitive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMatch {
    /// The whole (trimmed) name equals the pattern
    Exact(&'static str),
    /// The name contains the pattern
    Contains(&'static str),
}

impl NameMatch {
    /// Test a group name against this pattern
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        let name = name.trim().to_lowercase();
        match self {
            Self::Exact(pattern) => name == pattern.to_lowercase(),
            Self::Contains(pattern) => name.contains(&pattern.to_lowercase()),
        }
    }
}

/// One row of the policy table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolicyRule {
    /// Stable identifier of the group
    pub id: GroupId,
    /// Name pattern
    pub pattern: NameMatch,
    /// Policy applied to matching groups
    pub policy: GroupPolicy,
}

/// Policy rules in precedence order: the first matching row wins.
///
/// Credit caps come first; among count rules the more specific requirement
/// outranks the broader one.
pub const POLICY_TABLE: &[PolicyRule] = &[
    PolicyRule {
        id: GroupId::AcademicCredits,
        pattern: NameMatch::Exact(TOTAL_CREDITS_GROUP),
        policy: GroupPolicy::CreditCap { cap: 120.0 },
    },
    PolicyRule {
        id: GroupId::UpperLevelCredits,
        pattern: NameMatch::Contains("45 upper level credits"),
        policy: GroupPolicy::CreditCap { cap: 45.0 },
    },
    PolicyRule {
        id: GroupId::EnglishComposition,
        pattern: NameMatch::Contains("English Composition"),
        policy: GroupPolicy::RequiredCount { count: 1 },
    },
    PolicyRule {
        id: GroupId::ScienceLab,
        pattern: NameMatch::Exact("Science Lab"),
        policy: GroupPolicy::RequiredCount { count: 1 },
    },
    PolicyRule {
        id: GroupId::Science,
        pattern: NameMatch::Exact("Science"),
        policy: GroupPolicy::SameSubject { count: 2 },
    },
    PolicyRule {
        id: GroupId::TechnicalElectives,
        pattern: NameMatch::Contains("Computer Science Technical Electives"),
        policy: GroupPolicy::RequiredCount { count: 3 },
    },
    PolicyRule {
        id: GroupId::ComputerScienceElectives,
        pattern: NameMatch::Contains("Computer Science Elective"),
        policy: GroupPolicy::RequiredCount { count: 2 },
    },
    PolicyRule {
        id: GroupId::ArtsAndHumanities,
        pattern: NameMatch::Exact("Arts and Humanities"),
        policy: GroupPolicy::RequiredCount { count: 3 },
    },
];

/// Find the table row for a group name, if any
#[must_use]
pub fn identify_group(group_name: &str) -> Option<&'static PolicyRule> {
    POLICY_TABLE
        .iter()
        .find(|rule| rule.pattern.matches(group_name))
}

/// Resolve the policy for a group name. Unknown names are unconstrained.
#[must_use]
pub fn resolve_policy(group_name: &str) -> GroupPolicy {
    identify_group(group_name).map_or(GroupPolicy::Unconstrained, |rule| rule.policy)
}
