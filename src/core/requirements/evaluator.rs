//! Per-group requirement evaluation

use super::group::RequirementGroup;
use super::policy::GroupPolicy;
use crate::core::models::Course;
use crate::core::planner::SelectionLedger;
use serde::Serialize;
use std::collections::HashSet;

/// Unit a group's progress is reported in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasureKind {
    /// Credit hours
    Credit,
    /// Number of courses
    Count,
}

/// Progress of one requirement group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequirementGroupResult {
    /// Group name
    pub name: String,
    /// Policy the group was evaluated with
    pub policy: GroupPolicy,
    /// Whether `completed` and `total` are credits or course counts
    pub kind: MeasureKind,
    /// Credits or courses counted toward the group
    pub completed: f32,
    /// Credits or courses needed (or, for unconstrained groups, available)
    pub total: f32,
    /// `completed / total` as a rounded percentage in `0..=100`
    pub percent: u8,
    /// Codes that counted toward the group, in evaluation order
    pub counted_codes: Vec<String>,
    /// Every selected code in the group, duplicates included
    pub raw_selected_codes: Vec<String>,
}

impl RequirementGroupResult {
    /// Whether the group's requirement is fully met
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.percent >= 100
    }
}

/// Rounded percentage of `completed` over `total`, clamped to `0..=100`.
///
/// A zero (or negative) denominator yields 0.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn percent_of(completed: f32, total: f32) -> u8 {
    if total <= 0.0 || !total.is_finite() || !completed.is_finite() {
        return 0;
    }
    let pct = (f64::from(completed) / f64::from(total) * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

/// Evaluate one group against the current selections.
///
/// `extra_credits` is only applied to the total academic credits group.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn evaluate_group(
    group: &RequirementGroup,
    selections: &SelectionLedger,
    extra_credits: f32,
) -> RequirementGroupResult {
    let expanded = expand_selections(&group.courses, selections);
    let raw_selected_codes = codes_of(&expanded);

    let (counted, completed, total) = match group.policy {
        GroupPolicy::CreditCap { cap } => {
            let (accepted, credits) = take_within_cap(&expanded, cap);
            let extra = if group.receives_extra_credits() {
                extra_credits.max(0.0)
            } else {
                0.0
            };
            let completed = (credits + extra).min(cap).max(0.0);
            (accepted, completed, cap)
        }
        GroupPolicy::RequiredCount { count } => {
            let counted: Vec<&Course> = expanded.iter().take(count).copied().collect();
            let completed = counted.len() as f32;
            (counted, completed, count as f32)
        }
        GroupPolicy::SameSubject { count } => {
            let mut counted = largest_subject_cluster(&expanded);
            counted.truncate(count);
            let completed = counted.len() as f32;
            (counted, completed, count as f32)
        }
        GroupPolicy::Unconstrained => {
            let mut seen = HashSet::new();
            let unique = expanded.iter().filter(|c| seen.insert(c.key())).count();
            (expanded.clone(), unique as f32, group.courses.len() as f32)
        }
    };

    let kind = if group.policy.is_credit_based() {
        MeasureKind::Credit
    } else {
        MeasureKind::Count
    };

    RequirementGroupResult {
        name: group.name.clone(),
        policy: group.policy,
        kind,
        completed,
        total,
        percent: percent_of(completed, total),
        counted_codes: codes_of(&counted),
        raw_selected_codes,
    }
}

/// Repeat each group course by its selection count, keeping catalog order
fn expand_selections<'a>(courses: &'a [Course], selections: &SelectionLedger) -> Vec<&'a Course> {
    courses
        .iter()
        .flat_map(|course| {
            let times = selections.count(&course.code) as usize;
            std::iter::repeat(course).take(times)
        })
        .collect()
}

/// Walk selections in order, accepting while the running credit total stays
/// within `cap`. Stops at the first course that would overflow.
fn take_within_cap<'a>(expanded: &[&'a Course], cap: f32) -> (Vec<&'a Course>, f32) {
    let mut accepted = Vec::new();
    let mut credits = 0.0_f32;
    for &course in expanded {
        if credits + course.credits > cap {
            break;
        }
        credits += course.credits;
        accepted.push(course);
    }
    (accepted, credits)
}

/// Bucket selections by subject prefix and return the strictly largest bucket.
/// Ties go to the subject seen first.
fn largest_subject_cluster<'a>(expanded: &[&'a Course]) -> Vec<&'a Course> {
    let mut buckets: Vec<(String, Vec<&'a Course>)> = Vec::new();
    for &course in expanded {
        let subject = course.subject();
        match buckets.iter_mut().find(|(s, _)| *s == subject) {
            Some((_, bucket)) => bucket.push(course),
            None => buckets.push((subject, vec![course])),
        }
    }

    let mut best: Vec<&'a Course> = Vec::new();
    for (_, bucket) in buckets {
        if bucket.len() > best.len() {
            best = bucket;
        }
    }
    best
}

fn codes_of(courses: &[&Course]) -> Vec<String> {
    courses.iter().map(|c| c.code.clone()).collect()
}
