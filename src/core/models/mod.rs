//! Data models for `DegreePlanner`

pub mod course;
pub mod semester;

pub use course::{normalize_code, subject_prefix, Course};
pub use semester::{Grade, Season, SemesterKey, PLAN_YEARS};
