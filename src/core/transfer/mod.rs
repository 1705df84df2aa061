//! Transfer equivalency lookup
//!
//! Equivalencies are fetched by an external collaborator: given a source
//! institution and a target subject prefix and/or source class, it returns
//! rows mapping source courses to local course codes. The planner only
//! consumes the resulting codes and credits.

mod error;
mod institutions;
mod script;

pub use error::LookupError;
pub use institutions::{institution_name, Institution, SOURCE_INSTITUTIONS};
pub use script::{parse_script_output, resolve_interpreter, ScriptLookup, DEFAULT_TIMEOUT_SECS};

use crate::core::planner::TransferRow;
use serde::{Deserialize, Serialize};

/// Parameters of one equivalency lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferQuery {
    /// Source institution id (see [`SOURCE_INSTITUTIONS`])
    pub former_school: u32,
    /// Target subject prefix to filter on (e.g. "CMSC")
    pub target_prefix: Option<String>,
    /// Source class to filter on (e.g. "CSI 201")
    pub source_class: Option<String>,
    /// Catalog year
    pub year: Option<u16>,
}

impl TransferQuery {
    /// Check the query has a school and at least one filter.
    ///
    /// # Errors
    /// Returns `LookupError::InvalidQuery` describing what is missing
    pub fn validate(&self) -> Result<(), LookupError> {
        if self.former_school == 0 {
            return Err(LookupError::InvalidQuery {
                message: "former school is required".to_string(),
            });
        }
        if is_blank(self.target_prefix.as_deref()) && is_blank(self.source_class.as_deref()) {
            return Err(LookupError::InvalidQuery {
                message: "provide at least one of: target prefix or source class".to_string(),
            });
        }
        Ok(())
    }

    /// Command-line arguments for the lookup script
    #[must_use]
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["--former-school".to_string(), self.former_school.to_string()];
        if let Some(prefix) = non_blank(self.target_prefix.as_deref()) {
            args.push("--umbc-class".to_string());
            args.push(prefix.to_string());
        }
        if let Some(year) = self.year {
            args.push("--year".to_string());
            args.push(year.to_string());
        }
        if let Some(class) = non_blank(self.source_class.as_deref()) {
            args.push("--old-school-class".to_string());
            args.push(class.to_string());
        }
        args
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn is_blank(value: Option<&str>) -> bool {
    non_blank(value).is_none()
}

/// One equivalency returned by a lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquivalencyRow {
    /// Course at the source institution
    #[serde(rename = "course")]
    pub source_course: String,
    /// Credits awarded, when the source lists them
    #[serde(default)]
    pub credits: Option<f32>,
    /// Local course the source course transfers as (may be empty)
    #[serde(rename = "transfersAs", default)]
    pub maps_to: String,
}

/// Something that can answer equivalency queries
pub trait EquivalencyLookup {
    /// Run a lookup
    ///
    /// # Errors
    /// Returns a `LookupError` if the query is invalid or the lookup fails
    fn lookup(&self, query: &TransferQuery) -> Result<Vec<EquivalencyRow>, LookupError>;
}

/// Turn lookup rows into plan transfer rows. Rows with no local equivalent are
/// dropped; the local code becomes the transfer row's code.
#[must_use]
pub fn rows_to_transfer_rows(rows: &[EquivalencyRow], institution: &str) -> Vec<TransferRow> {
    rows.iter()
        .filter(|row| !row.maps_to.trim().is_empty())
        .map(|row| TransferRow {
            institution: institution.to_string(),
            code: row.maps_to.trim().to_string(),
            credits: row.credits,
            grade: None,
        })
        .collect()
}
