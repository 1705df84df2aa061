//! Requirements command handler

use degree_planner::config::Config;
use degree_planner::core::catalog::Catalog;
use degree_planner::core::models::SemesterKey;
use degree_planner::core::planner::{DegreePlan, COMPUTER_SCIENCE_BS};
use degree_planner::core::requirements::{
    compute_requirements_summary, MeasureKind, RequirementGroupResult, RequirementsSummary,
};
use degree_planner::{error, info, verbose, warn};
use std::path::{Path, PathBuf};

/// Arguments of the requirements command
pub struct Options<'a> {
    /// Codes given on the command line
    pub codes: &'a [String],
    /// Credits from unmatched transfer courses
    pub extra_credits: f32,
    /// Catalog path overriding the config
    pub catalog: Option<&'a Path>,
    /// Prefill the plan from the pathway preset
    pub pathway: bool,
    /// Print JSON instead of a table
    pub json: bool,
    /// Show counted codes per group
    pub verbose: bool,
}

/// Load the catalog from an explicit path or the configured one
///
/// # Errors
/// Returns a printable message if the catalog cannot be loaded
pub fn load_catalog(explicit: Option<&Path>, config: &Config) -> Result<Catalog, String> {
    let path = explicit.map_or_else(|| PathBuf::from(&config.catalog.path), Path::to_path_buf);
    if path.as_os_str().is_empty() {
        return Err("✗ No catalog configured. Pass --catalog or run `config set catalog <FILE>`.".to_string());
    }
    Catalog::from_file(&path).map_err(|e| {
        error!("Failed to load catalog {}: {e}", path.display());
        format!("✗ {e}")
    })
}

/// Run the requirements command
///
/// # Errors
/// Returns a printable message if the catalog cannot be loaded or the summary
/// cannot be serialized
pub fn run(options: &Options<'_>, config: &Config) -> Result<(), String> {
    let catalog = load_catalog(options.catalog, config)?;

    let mut plan = DegreePlan::new();
    if options.pathway {
        let open_slots = plan.apply_pathway(&COMPUTER_SCIENCE_BS, &catalog);
        if !options.json {
            print_plan(&plan);
            if !open_slots.is_empty() {
                println!("Open slots: {}", open_slots.join(", "));
            }
        }
    }

    let mut ledger = plan.selection_ledger();
    for code in options.codes {
        ledger.select(code);
    }
    for code in options.codes.iter().filter(|code| catalog.find(code).is_none()) {
        if options.json {
            warn!("{code} is not in the catalog and counts toward no group");
        } else {
            verbose!("Note: {code} is not in the catalog and counts toward no group");
        }
    }

    let extra_credits = options.extra_credits.max(0.0);
    let summary = compute_requirements_summary(&catalog, &ledger, extra_credits);
    info!(
        "Evaluated {} requirement groups ({} selected codes)",
        summary.groups.len(),
        ledger.len()
    );

    if options.json {
        let text = serde_json::to_string_pretty(&summary)
            .map_err(|e| format!("✗ Failed to serialize summary: {e}"))?;
        println!("{text}");
    } else {
        print_summary(&summary, options.verbose);
    }
    Ok(())
}

fn print_plan(plan: &DegreePlan) {
    println!("\n=== Planned Semesters ({}) ===", COMPUTER_SCIENCE_BS.name);
    let totals = plan.credit_totals();
    for key in plan.semester_keys() {
        let courses = plan.courses(key).unwrap_or_default();
        let codes: Vec<&str> = courses.iter().map(|c| c.code.as_str()).collect();
        let credits = totals.get(&key).copied().unwrap_or_default();
        println!("{:<20} {credits:>5.1} cr  {}", key.to_string(), codes.join(", "));
        if is_last_season(plan, key) {
            let label = format!("Year {} total", key.year);
            println!("{label:<20} {:>5.1} cr", plan.year_credits(key.year));
        }
    }
    println!("Total planned credits: {:.1}\n", plan.total_credits());
}

/// Whether no later semester of the same year is in the plan
fn is_last_season(plan: &DegreePlan, key: SemesterKey) -> bool {
    !plan
        .semester_keys()
        .any(|other| other.year == key.year && other > key)
}

fn print_summary(summary: &RequirementsSummary, show_codes: bool) {
    println!("=== Requirements ===\n");
    for group in &summary.groups {
        println!("{}", format_group(group));
        if show_codes && !group.counted_codes.is_empty() {
            println!("    counted: {}", group.counted_codes.join(", "));
        }
    }
    println!("\nOverall progress: {}%", summary.overall_percent);
}

fn format_group(group: &RequirementGroupResult) -> String {
    let mark = if group.is_complete() { "✓" } else { " " };
    let progress = match group.kind {
        MeasureKind::Credit => format!("{}/{} credits", group.completed, group.total),
        MeasureKind::Count => format!("{}/{} courses", group.completed, group.total),
    };
    format!("{mark} {:<40} {progress:>18} {:>4}%", group.name, group.percent)
}
