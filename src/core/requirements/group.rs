//! Requirement groups built from the catalog

use super::policy::{identify_group, GroupId, GroupPolicy};
use crate::core::models::Course;

/// A named requirement together with the catalog courses that can satisfy it
///
/// The policy is resolved from the name when the group is built and is not
/// looked up again during evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct RequirementGroup {
    /// Group name as written in the catalog (trimmed)
    pub name: String,
    /// Table identifier, for groups with special rules
    pub id: Option<GroupId>,
    /// Resolved policy
    pub policy: GroupPolicy,
    /// Courses in catalog order
    pub courses: Vec<Course>,
}

impl RequirementGroup {
    /// Build a group, resolving its policy from the name
    #[must_use]
    pub fn new(name: String, courses: Vec<Course>) -> Self {
        let rule = identify_group(&name);
        Self {
            id: rule.map(|r| r.id),
            policy: rule.map_or(GroupPolicy::Unconstrained, |r| r.policy),
            name,
            courses,
        }
    }

    /// Build a group with an explicit policy, bypassing the name table
    #[must_use]
    pub const fn with_policy(name: String, policy: GroupPolicy, courses: Vec<Course>) -> Self {
        Self {
            name,
            id: None,
            policy,
            courses,
        }
    }

    /// Whether credits from unmatched transfer courses count toward this group
    #[must_use]
    pub fn receives_extra_credits(&self) -> bool {
        self.id == Some(GroupId::AcademicCredits)
    }

    /// Whether the name marks this as a credit group for display ordering
    #[must_use]
    pub fn is_credit_group(&self) -> bool {
        self.name.to_lowercase().contains("credit")
    }
}
