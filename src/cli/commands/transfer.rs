//! Transfer and schools command handlers

use super::requirements::load_catalog;
use degree_planner::config::Config;
use degree_planner::core::planner::DegreePlan;
use degree_planner::core::transfer::{
    institution_name, resolve_interpreter, rows_to_transfer_rows, EquivalencyLookup, ScriptLookup,
    TransferQuery, DEFAULT_TIMEOUT_SECS, SOURCE_INSTITUTIONS,
};
use degree_planner::{error, info, verbose, warn};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Build the script lookup from config
fn build_lookup(config: &Config) -> ScriptLookup {
    let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let program = resolve_interpreter(&config.transfer.program, &root);
    let timeout = if config.transfer.timeout_secs == 0 {
        DEFAULT_TIMEOUT_SECS
    } else {
        config.transfer.timeout_secs
    };
    ScriptLookup::new(program, &config.transfer.script).with_timeout(Duration::from_secs(timeout))
}

/// Run an equivalency lookup and print the rows
///
/// # Errors
/// Returns a printable message if the query is invalid or the lookup fails
pub fn run(query: &TransferQuery, catalog: Option<&Path>, config: &Config) -> Result<(), String> {
    let school_name = institution_name(query.former_school).ok_or_else(|| {
        format!(
            "✗ Unknown school id {}. Run `schools` to list supported ids.",
            query.former_school
        )
    })?;

    let lookup = build_lookup(config);
    verbose!(
        "Looking up equivalencies from {school_name} with {}",
        lookup.program().display()
    );

    let rows = lookup.lookup(query).map_err(|e| {
        error!("Transfer lookup failed: {e}");
        if e.is_retryable() {
            format!("✗ {e} (try again)")
        } else {
            format!("✗ {e}")
        }
    })?;

    if rows.is_empty() {
        println!("No equivalencies found at {school_name}.");
        return Ok(());
    }

    println!("=== Equivalencies from {school_name} ===\n");
    for row in &rows {
        let credits = row
            .credits
            .map_or_else(|| "-".to_string(), |c| format!("{c}"));
        let maps_to = if row.maps_to.trim().is_empty() {
            "(no equivalent)"
        } else {
            row.maps_to.as_str()
        };
        println!("{:<20} {credits:>5}  → {maps_to}", row.source_course);
    }

    let mut plan = DegreePlan::new();
    for transfer in rows_to_transfer_rows(&rows, school_name) {
        plan.add_transfer_row(transfer);
    }
    println!(
        "\n{} of {} rows transfer, {:.1} credits",
        plan.transfer_rows().len(),
        rows.len(),
        plan.transfer_credits()
    );

    match load_catalog(catalog, config) {
        Ok(catalog) => {
            let extra = plan.extra_credits(&catalog);
            if extra > 0.0 {
                println!("{extra:.1} credits have no catalog match and count only toward total credits");
            }
        }
        Err(e) => warn!("Catalog unavailable, skipping match check: {e}"),
    }

    info!("Transfer lookup for school {} complete", query.former_school);
    Ok(())
}

/// Print the supported source institutions
pub fn list_schools() {
    println!("=== Supported Schools ===\n");
    for school in SOURCE_INSTITUTIONS {
        println!("{:>6}  {}", school.id, school.name);
    }
}
