//! Integration tests for building a plan and evaluating it

use degree_planner::core::catalog::Catalog;
use degree_planner::core::models::{Grade, Season, SemesterKey};
use degree_planner::core::planner::{DegreePlan, TransferRow, COMPUTER_SCIENCE_BS};
use degree_planner::core::requirements::compute_requirements_summary;
use degree_planner::core::transfer::{rows_to_transfer_rows, EquivalencyRow};

fn sample_catalog() -> Catalog {
    Catalog::from_file("samples/catalog.json").expect("sample catalog should load")
}

#[test]
fn test_pathway_prefill_counts_toward_requirements() {
    let catalog = sample_catalog();
    let mut plan = DegreePlan::new();
    let open_slots = plan.apply_pathway(&COMPUTER_SCIENCE_BS, &catalog);

    assert!(open_slots.iter().any(|code| code == "ELECTIVE"));
    assert!(!open_slots.iter().any(|code| code == "CMSC 201"));

    let y1_fall = plan.courses(SemesterKey::new(1, Season::Fall)).unwrap();
    let codes: Vec<&str> = y1_fall.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, vec!["CMSC 201", "MATH 151", "LANG 201"]);
    assert!((plan.year_credits(1) - 23.0).abs() < f32::EPSILON);

    let summary = compute_requirements_summary(&catalog, &plan.selection_ledger(), 0.0);
    let total = summary
        .groups
        .iter()
        .find(|g| g.name == "120 Academic Credits")
        .unwrap();
    assert!((total.completed - plan.total_credits()).abs() < 1e-3);
    assert!(summary.overall_percent > 0);
}

#[test]
fn test_transfer_rows_feed_ledger_and_extra_credits() {
    let catalog = sample_catalog();
    let rows = vec![
        EquivalencyRow {
            source_course: "CMSC 140".to_string(),
            credits: Some(4.0),
            maps_to: "CMSC 201".to_string(),
        },
        EquivalencyRow {
            source_course: "GEOG 101".to_string(),
            credits: Some(3.0),
            maps_to: "GES 1XX".to_string(),
        },
        EquivalencyRow {
            source_course: "ART 999".to_string(),
            credits: Some(3.0),
            maps_to: String::new(),
        },
    ];

    let mut plan = DegreePlan::new();
    for row in rows_to_transfer_rows(&rows, "Howard Community College") {
        plan.add_transfer_row(row);
    }
    assert_eq!(plan.transfer_rows().len(), 2);
    assert!((plan.transfer_credits() - 7.0).abs() < f32::EPSILON);

    let extra = plan.extra_credits(&catalog);
    assert!((extra - 3.0).abs() < f32::EPSILON);

    let summary = compute_requirements_summary(&catalog, &plan.selection_ledger(), extra);
    let core = summary
        .groups
        .iter()
        .find(|g| g.name == "Computer Science Core")
        .unwrap();
    assert_eq!(core.counted_codes, vec!["CMSC 201"]);

    let total = summary
        .groups
        .iter()
        .find(|g| g.name == "120 Academic Credits")
        .unwrap();
    assert!((total.completed - 7.0).abs() < f32::EPSILON);
}

#[test]
fn test_editing_plan_updates_ledger() {
    let catalog = sample_catalog();
    let mut plan = DegreePlan::new();
    let summer = SemesterKey::new(2, Season::Summer);

    plan.add_semester(2, Season::Summer).unwrap();
    plan.place_course(summer, "PHYS 121", &catalog).unwrap();
    plan.place_course(summer, "PHYS 122", &catalog).unwrap();
    plan.set_grade(summer, 1, Some(Grade::W)).unwrap();
    assert_eq!(plan.selection_ledger().count("PHYS122"), 1);

    plan.remove_course(summer, 1).unwrap();
    assert_eq!(plan.selection_ledger().count("PHYS122"), 0);

    let removed = plan.remove_semester(2, Season::Summer).unwrap();
    assert_eq!(removed.len(), 1);
    assert!(plan.selection_ledger().is_empty());

    plan.add_transfer_row(TransferRow {
        institution: "Montgomery College".to_string(),
        code: "MATH 151".to_string(),
        credits: None,
        grade: Some(Grade::A),
    });
    assert!(plan.extra_credits(&catalog).abs() < f32::EPSILON);
    assert!(plan.total_credits().abs() < f32::EPSILON);

    plan.clear();
    assert!(plan.transfer_rows().is_empty());
}
