//! Four-year degree plan: semesters, placed courses and transfer rows

use super::ledger::SelectionLedger;
use super::pathway::Pathway;
use crate::core::catalog::Catalog;
use crate::core::models::{Grade, Season, SemesterKey, PLAN_YEARS};
use crate::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors from editing a plan
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// Year outside `1..=PLAN_YEARS`
    #[error("Year {0} is outside the plan (1-{max})", max = PLAN_YEARS)]
    YearOutOfRange(u8),

    /// The semester has not been added to the plan
    #[error("{0} is not part of the plan")]
    UnknownSemester(SemesterKey),

    /// Fall and Spring cannot be removed
    #[error("{0} is a required semester and cannot be removed")]
    RequiredSemester(SemesterKey),

    /// No course at that position
    #[error("{key} has no course at position {index}")]
    CourseIndex {
        /// Semester
        key: SemesterKey,
        /// Requested position
        index: usize,
    },

    /// No transfer row at that position
    #[error("No transfer row at position {0}")]
    TransferIndex(usize),
}

/// A course placed in a semester
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedCourse {
    /// Course code
    pub code: String,
    /// Display name
    pub name: String,
    /// Credit hours
    pub credits: f32,
    /// Recorded grade, if any
    pub grade: Option<Grade>,
}

/// A course brought in from another institution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRow {
    /// Source institution name
    pub institution: String,
    /// Course code the row counts as here
    pub code: String,
    /// Credits awarded, when known
    pub credits: Option<f32>,
    /// Recorded grade, if any
    pub grade: Option<Grade>,
}

impl TransferRow {
    /// Credits this row contributes (unknown credits count as 0)
    #[must_use]
    pub fn credit_value(&self) -> f32 {
        self.credits.unwrap_or(0.0).max(0.0)
    }
}

/// In-memory degree plan for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegreePlan {
    semesters: BTreeMap<SemesterKey, Vec<PlannedCourse>>,
    transfers: Vec<TransferRow>,
}

impl Default for DegreePlan {
    fn default() -> Self {
        Self::new()
    }
}

impl DegreePlan {
    /// Fresh plan with empty Fall and Spring semesters for every year
    #[must_use]
    pub fn new() -> Self {
        let mut semesters = BTreeMap::new();
        for year in 1..=PLAN_YEARS {
            semesters.insert(SemesterKey::new(year, Season::Fall), Vec::new());
            semesters.insert(SemesterKey::new(year, Season::Spring), Vec::new());
        }
        Self {
            semesters,
            transfers: Vec::new(),
        }
    }

    /// Semester keys in plan order
    pub fn semester_keys(&self) -> impl Iterator<Item = SemesterKey> + '_ {
        self.semesters.keys().copied()
    }

    /// Courses placed in a semester
    #[must_use]
    pub fn courses(&self, key: SemesterKey) -> Option<&[PlannedCourse]> {
        self.semesters.get(&key).map(Vec::as_slice)
    }

    /// Transfer rows in the order they were added
    #[must_use]
    pub fn transfer_rows(&self) -> &[TransferRow] {
        &self.transfers
    }

    /// Add an optional semester (Winter or Summer).
    ///
    /// # Returns
    /// `true` if the semester was added, `false` if it already existed
    ///
    /// # Errors
    /// Returns an error if the year is outside the plan
    pub fn add_semester(&mut self, year: u8, season: Season) -> Result<bool, PlanError> {
        check_year(year)?;
        let key = SemesterKey::new(year, season);
        if self.semesters.contains_key(&key) {
            return Ok(false);
        }
        self.semesters.insert(key, Vec::new());
        debug!("Added semester {key}");
        Ok(true)
    }

    /// Remove an optional semester together with its courses
    ///
    /// # Errors
    /// Returns an error for Fall/Spring or for a semester not in the plan
    pub fn remove_semester(&mut self, year: u8, season: Season) -> Result<Vec<PlannedCourse>, PlanError> {
        let key = SemesterKey::new(year, season);
        if !season.is_optional() {
            return Err(PlanError::RequiredSemester(key));
        }
        let removed = self
            .semesters
            .remove(&key)
            .ok_or(PlanError::UnknownSemester(key))?;
        debug!("Removed semester {key} ({} courses)", removed.len());
        Ok(removed)
    }

    /// Place a course in a semester. Codes found in the catalog take the
    /// catalog's code, name and credits; unknown codes are placed as typed
    /// with 0 credits.
    ///
    /// # Errors
    /// Returns an error if the semester is not in the plan
    pub fn place_course(
        &mut self,
        key: SemesterKey,
        code: &str,
        catalog: &Catalog,
    ) -> Result<&PlannedCourse, PlanError> {
        let slot = self
            .semesters
            .get_mut(&key)
            .ok_or(PlanError::UnknownSemester(key))?;

        let course = catalog.find(code).map_or_else(
            || PlannedCourse {
                code: code.trim().to_string(),
                name: code.trim().to_string(),
                credits: 0.0,
                grade: None,
            },
            |c| PlannedCourse {
                code: c.code.clone(),
                name: c.name.clone(),
                credits: c.credits,
                grade: None,
            },
        );
        slot.push(course);
        let index = slot.len() - 1;
        Ok(&slot[index])
    }

    /// Remove the course at `index` from a semester
    ///
    /// # Errors
    /// Returns an error if the semester or position does not exist
    pub fn remove_course(&mut self, key: SemesterKey, index: usize) -> Result<PlannedCourse, PlanError> {
        let slot = self
            .semesters
            .get_mut(&key)
            .ok_or(PlanError::UnknownSemester(key))?;
        if index >= slot.len() {
            return Err(PlanError::CourseIndex { key, index });
        }
        Ok(slot.remove(index))
    }

    /// Record (or clear) the grade of a placed course
    ///
    /// # Errors
    /// Returns an error if the semester or position does not exist
    pub fn set_grade(
        &mut self,
        key: SemesterKey,
        index: usize,
        grade: Option<Grade>,
    ) -> Result<(), PlanError> {
        let course = self
            .semesters
            .get_mut(&key)
            .ok_or(PlanError::UnknownSemester(key))?
            .get_mut(index)
            .ok_or(PlanError::CourseIndex { key, index })?;
        course.grade = grade;
        Ok(())
    }

    /// Append a transfer row
    pub fn add_transfer_row(&mut self, row: TransferRow) {
        self.transfers.push(row);
    }

    /// Remove the transfer row at `index`
    ///
    /// # Errors
    /// Returns an error if there is no such row
    pub fn remove_transfer_row(&mut self, index: usize) -> Result<TransferRow, PlanError> {
        if index >= self.transfers.len() {
            return Err(PlanError::TransferIndex(index));
        }
        Ok(self.transfers.remove(index))
    }

    /// Credits per semester
    #[must_use]
    pub fn credit_totals(&self) -> BTreeMap<SemesterKey, f32> {
        self.semesters
            .iter()
            .map(|(key, courses)| (*key, courses.iter().map(|c| c.credits).sum()))
            .collect()
    }

    /// Credits across every semester of one year
    #[must_use]
    pub fn year_credits(&self, year: u8) -> f32 {
        self.credit_totals()
            .into_iter()
            .filter(|(key, _)| key.year == year)
            .map(|(_, credits)| credits)
            .sum()
    }

    /// Credits from transfer rows
    #[must_use]
    pub fn transfer_credits(&self) -> f32 {
        self.transfers.iter().map(TransferRow::credit_value).sum()
    }

    /// Planned plus transferred credits
    #[must_use]
    pub fn total_credits(&self) -> f32 {
        let planned: f32 = self.credit_totals().values().sum();
        planned + self.transfer_credits()
    }

    /// Selections implied by the plan: every placed course and every
    /// transfer row's code.
    #[must_use]
    pub fn selection_ledger(&self) -> SelectionLedger {
        let planned = self.semesters.values().flatten().map(|c| c.code.as_str());
        let transferred = self.transfers.iter().map(|t| t.code.as_str());
        SelectionLedger::from_codes(planned.chain(transferred))
    }

    /// Credits of transfer rows whose code has no catalog match. These only
    /// count toward the total academic credits group.
    #[must_use]
    pub fn extra_credits(&self, catalog: &Catalog) -> f32 {
        self.transfers
            .iter()
            .filter(|t| catalog.find(&t.code).is_none())
            .map(TransferRow::credit_value)
            .sum()
    }

    /// Reset to a fresh plan
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Fill the plan from a pathway preset. Each preset semester is replaced
    /// by the preset's catalog courses; placeholders with no catalog match
    /// are left as open slots and returned.
    pub fn apply_pathway(&mut self, pathway: &Pathway, catalog: &Catalog) -> Vec<String> {
        let mut open_slots = Vec::new();
        for term in pathway.terms {
            let key = SemesterKey::new(term.year, term.season);
            let courses: Vec<PlannedCourse> = term
                .codes
                .iter()
                .filter_map(|code| {
                    let found = catalog.find(code);
                    if found.is_none() {
                        open_slots.push((*code).to_string());
                    }
                    found
                })
                .map(|c| PlannedCourse {
                    code: c.code.clone(),
                    name: c.name.clone(),
                    credits: c.credits,
                    grade: None,
                })
                .collect();
            self.semesters.insert(key, courses);
        }
        debug!(
            "Applied pathway '{}' ({} open slots)",
            pathway.name,
            open_slots.len()
        );
        open_slots
    }
}

const fn check_year(year: u8) -> Result<(), PlanError> {
    if year == 0 || year > PLAN_YEARS {
        Err(PlanError::YearOutOfRange(year))
    } else {
        Ok(())
    }
}
