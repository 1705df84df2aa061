//! Course catalog loading and requirement group construction

use crate::core::models::{normalize_code, Course};
use crate::core::requirements::RequirementGroup;
use crate::{debug, info, warn};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        /// Path that was read
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The catalog content is not a JSON array of courses
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read-only course catalog
///
/// Courses keep the order they were loaded in; that order decides which
/// selections count first during evaluation.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
    index: HashMap<String, usize>,
    groups: Vec<RequirementGroup>,
}

impl Catalog {
    /// Build a catalog from courses in load order.
    ///
    /// When two courses share a normalized code, lookups return the first.
    #[must_use]
    pub fn new(courses: Vec<Course>) -> Self {
        let mut index = HashMap::with_capacity(courses.len());
        for (i, course) in courses.iter().enumerate() {
            let key = course.key();
            if index.contains_key(&key) {
                warn!("Duplicate catalog code {}, keeping first entry", course.code);
                continue;
            }
            index.insert(key, i);
        }

        let groups = build_groups(&courses);
        debug!(
            "Catalog built: {} courses, {} requirement groups",
            courses.len(),
            groups.len()
        );

        Self {
            courses,
            index,
            groups,
        }
    }

    /// Parse a catalog from a JSON array of course objects
    ///
    /// # Errors
    /// Returns `CatalogError::Json` if the text is not a valid course array
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let courses: Vec<Course> = serde_json::from_str(json)?;
        Ok(Self::new(courses))
    }

    /// Load a catalog from a JSON file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json_str(&content)?;
        info!(
            "Loaded catalog from {} ({} courses)",
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    /// Find a course by code, ignoring case and whitespace
    #[must_use]
    pub fn find(&self, code: &str) -> Option<&Course> {
        self.index
            .get(&normalize_code(code))
            .and_then(|&i| self.courses.get(i))
    }

    /// All courses in load order
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Requirement groups in display order
    #[must_use]
    pub fn requirement_groups(&self) -> &[RequirementGroup] {
        &self.groups
    }

    /// Number of courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog has no courses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

/// Collect courses per requirement name, then order the groups for display.
fn build_groups(courses: &[Course]) -> Vec<RequirementGroup> {
    let mut names: Vec<String> = Vec::new();
    let mut members: HashMap<String, Vec<Course>> = HashMap::new();

    for course in courses {
        let mut seen_in_course: Vec<&str> = Vec::new();
        for raw in &course.requirements {
            let name = raw.trim();
            if name.is_empty() || seen_in_course.contains(&name) {
                continue;
            }
            seen_in_course.push(name);

            if !members.contains_key(name) {
                names.push(name.to_string());
            }
            members
                .entry(name.to_string())
                .or_default()
                .push(course.clone());
        }
    }

    let mut groups: Vec<RequirementGroup> = names
        .into_iter()
        .map(|name| {
            let courses = members.remove(&name).unwrap_or_default();
            RequirementGroup::new(name, courses)
        })
        .collect();

    groups.sort_by_cached_key(display_rank);
    groups
}

/// Credit groups first (the total-credit group leading), then everything else,
/// alphabetical within each band.
fn display_rank(group: &RequirementGroup) -> (u8, String, String) {
    let band = if group.receives_extra_credits() {
        0
    } else if group.is_credit_group() {
        1
    } else {
        2
    };
    (band, group.name.to_lowercase(), group.name.clone())
}
