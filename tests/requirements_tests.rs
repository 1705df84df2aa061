//! Integration tests for requirement evaluation against a catalog

use degree_planner::core::catalog::Catalog;
use degree_planner::core::models::Course;
use degree_planner::core::planner::SelectionLedger;
use degree_planner::core::requirements::{
    compute_overall_percent, compute_requirements_summary, evaluate_group, GroupPolicy,
    MeasureKind, RequirementGroup, RequirementGroupResult,
};

const SAMPLE_CATALOG: &str = "samples/catalog.json";

fn course(code: &str, credits: f32, groups: &[&str]) -> Course {
    let mut course = Course::new(code.to_string(), String::new(), credits);
    for group in groups {
        course.add_requirement((*group).to_string());
    }
    course
}

fn group_result<'a>(results: &'a [RequirementGroupResult], name: &str) -> &'a RequirementGroupResult {
    results
        .iter()
        .find(|r| r.name == name)
        .unwrap_or_else(|| panic!("missing group {name}"))
}

#[test]
fn test_sample_catalog_loads() {
    let catalog = Catalog::from_file(SAMPLE_CATALOG).expect("sample catalog should load");
    assert!(catalog.len() > 40);

    let groups = catalog.requirement_groups();
    assert_eq!(groups[0].name, "120 Academic Credits");
    assert_eq!(groups[1].name, "45 upper level credits");

    let science = groups.iter().find(|g| g.name == "Science").unwrap();
    assert_eq!(science.policy, GroupPolicy::SameSubject { count: 2 });
}

#[test]
fn test_empty_plan_is_all_zero() {
    let catalog = Catalog::from_file(SAMPLE_CATALOG).unwrap();
    let summary = compute_requirements_summary(&catalog, &SelectionLedger::new(), 0.0);

    assert!(!summary.groups.is_empty());
    for group in &summary.groups {
        assert!(group.completed.abs() < f32::EPSILON, "{} not empty", group.name);
        assert_eq!(group.percent, 0);
    }
    assert_eq!(summary.overall_percent, 0);
}

#[test]
fn test_evaluation_is_idempotent() {
    let catalog = Catalog::from_file(SAMPLE_CATALOG).unwrap();
    let ledger = SelectionLedger::from_codes(["CMSC 201", "CMSC 202", "CHEM 101", "ARTH 100"]);

    let first = compute_requirements_summary(&catalog, &ledger, 3.0);
    let second = compute_requirements_summary(&catalog, &ledger, 3.0);
    assert_eq!(first, second);
}

#[test]
fn test_same_subject_cluster_wins() {
    let catalog = Catalog::new(vec![
        course("CMSC 201", 4.0, &["Science"]),
        course("CMSC 202", 4.0, &["Science"]),
        course("MATH 151", 4.0, &["Science"]),
    ]);
    let ledger = SelectionLedger::from_codes(["CMSC201", "CMSC202", "MATH151"]);

    let summary = compute_requirements_summary(&catalog, &ledger, 0.0);
    let science = group_result(&summary.groups, "Science");

    assert_eq!(science.counted_codes, vec!["CMSC 201", "CMSC 202"]);
    assert!((science.completed - 2.0).abs() < f32::EPSILON);
    assert_eq!(science.percent, 100);
}

#[test]
fn test_total_credits_with_transfer_overflow() {
    // 23 five-credit courses = 115 credits
    let courses: Vec<Course> = (0..23)
        .map(|i| course(&format!("CRS {}", 100 + i), 5.0, &["120 Academic Credits"]))
        .collect();
    let codes: Vec<String> = courses.iter().map(|c| c.code.clone()).collect();
    let catalog = Catalog::new(courses);
    let ledger = SelectionLedger::from_codes(&codes);

    let without = compute_requirements_summary(&catalog, &ledger, 0.0);
    let total = group_result(&without.groups, "120 Academic Credits");
    assert!((total.completed - 115.0).abs() < f32::EPSILON);
    assert_eq!(total.percent, 96);

    let with = compute_requirements_summary(&catalog, &ledger, 10.0);
    let total = group_result(&with.groups, "120 Academic Credits");
    assert_eq!(total.kind, MeasureKind::Credit);
    assert!((total.completed - 120.0).abs() < f32::EPSILON);
    assert!((total.total - 120.0).abs() < f32::EPSILON);
    assert_eq!(total.percent, 100);
}

#[test]
fn test_credit_cap_never_overflows() {
    let catalog = Catalog::from_file(SAMPLE_CATALOG).unwrap();
    let mut codes = Vec::new();
    for course in catalog.courses() {
        for _ in 0..4 {
            codes.push(course.code.clone());
        }
    }
    let ledger = SelectionLedger::from_codes(&codes);

    let summary = compute_requirements_summary(&catalog, &ledger, 50.0);
    for group in summary.groups.iter().filter(|g| g.kind == MeasureKind::Credit) {
        assert!(
            group.completed <= group.total,
            "{} overflowed: {} > {}",
            group.name,
            group.completed,
            group.total
        );
    }
}

#[test]
fn test_required_count_is_monotonic() {
    let group = RequirementGroup::new(
        "Arts and Humanities".to_string(),
        vec![
            course("ARTH 100", 3.0, &[]),
            course("MUSC 101", 3.0, &[]),
            course("PHIL 100", 3.0, &[]),
            course("ENGL 210", 3.0, &[]),
        ],
    );

    let mut ledger = SelectionLedger::new();
    let mut previous = 0.0_f32;
    for code in ["PHIL 100", "ARTH 100", "ARTH 100", "ENGL 210", "MUSC 101"] {
        ledger.select(code);
        let result = evaluate_group(&group, &ledger, 0.0);
        assert!(result.completed >= previous);
        assert!(result.completed <= 3.0);
        previous = result.completed;
    }
    assert!((previous - 3.0).abs() < f32::EPSILON);
}

#[test]
fn test_zero_denominators() {
    let zero_count = RequirementGroup::with_policy(
        "Zero".to_string(),
        GroupPolicy::RequiredCount { count: 0 },
        vec![course("CMSC 201", 4.0, &[])],
    );
    let zero_cap = RequirementGroup::with_policy(
        "Zero Cap".to_string(),
        GroupPolicy::CreditCap { cap: 0.0 },
        vec![course("CMSC 201", 4.0, &[])],
    );
    let ledger = SelectionLedger::from_codes(["CMSC 201"]);

    assert_eq!(evaluate_group(&zero_count, &ledger, 0.0).percent, 0);
    let capped = evaluate_group(&zero_cap, &ledger, 0.0);
    assert_eq!(capped.percent, 0);
    assert!(capped.completed.abs() < f32::EPSILON);
}

#[test]
fn test_unconstrained_uniqueness() {
    let catalog = Catalog::from_file(SAMPLE_CATALOG).unwrap();
    let ledger = SelectionLedger::from_codes(["ANTH 211", "ANTH 211", "ANTH 211"]);

    let summary = compute_requirements_summary(&catalog, &ledger, 0.0);
    let culture = group_result(&summary.groups, "Culture");

    assert!((culture.completed - 1.0).abs() < f32::EPSILON);
    assert_eq!(culture.raw_selected_codes.len(), 3);
}

#[test]
fn test_aggregate_excludes_unconstrained() {
    let mut courses: Vec<Course> = (0..10)
        .map(|i| course(&format!("HIST {}", 100 + i), 3.0, &["Culture"]))
        .collect();
    courses.push(course("ENGL 100", 3.0, &["English Composition"]));
    let catalog = Catalog::new(courses);

    let mut codes: Vec<String> = (0..8).map(|i| format!("HIST {}", 100 + i)).collect();
    codes.push("ENGL 100".to_string());
    let ledger = SelectionLedger::from_codes(&codes);

    let summary = compute_requirements_summary(&catalog, &ledger, 0.0);
    assert_eq!(group_result(&summary.groups, "Culture").percent, 80);
    assert_eq!(group_result(&summary.groups, "English Composition").percent, 100);
    assert_eq!(summary.overall_percent, 100);
    assert_eq!(compute_overall_percent(&summary.groups), 100);
}

#[test]
fn test_extra_credits_ignored_outside_total_group() {
    let catalog = Catalog::from_file(SAMPLE_CATALOG).unwrap();
    let ledger = SelectionLedger::from_codes(["CMSC 441"]);

    let summary = compute_requirements_summary(&catalog, &ledger, 30.0);
    let upper = group_result(&summary.groups, "45 upper level credits");
    let total = group_result(&summary.groups, "120 Academic Credits");

    assert!((upper.completed - 3.0).abs() < f32::EPSILON);
    assert!((total.completed - 33.0).abs() < f32::EPSILON);
}
