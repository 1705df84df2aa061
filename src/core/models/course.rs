//! Course model

use serde::{Deserialize, Serialize};

/// Represents a course in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course code as written in the catalog (e.g., "CMSC 201")
    pub code: String,

    /// Course name (e.g., "Computer Science I")
    #[serde(default)]
    pub name: String,

    /// Credit hours (can be fractional)
    #[serde(default)]
    pub credits: f32,

    /// Requirement groups this course can satisfy (e.g., "Science", "120 Academic Credits")
    #[serde(default)]
    pub requirements: Vec<String>,
}

impl Course {
    /// Create a new course with no requirement groups
    ///
    /// # Arguments
    /// * `code` - Course code
    /// * `name` - Course name
    /// * `credits` - Credit hours
    #[must_use]
    pub const fn new(code: String, name: String, credits: f32) -> Self {
        Self {
            code,
            name,
            credits,
            requirements: Vec::new(),
        }
    }

    /// Add a requirement group this course satisfies
    pub fn add_requirement(&mut self, group: String) {
        if !self.requirements.contains(&group) {
            self.requirements.push(group);
        }
    }

    /// Get the course key for lookups
    ///
    /// # Returns
    /// The normalized code (e.g., "CMSC201" for "cmsc 201")
    #[must_use]
    pub fn key(&self) -> String {
        normalize_code(&self.code)
    }

    /// Subject prefix of this course (e.g., "CMSC")
    #[must_use]
    pub fn subject(&self) -> String {
        subject_prefix(&self.code)
    }
}

/// Normalize a course code for comparison: strip all whitespace and uppercase.
///
/// "cmsc 201", "CMSC201" and " CMSC  201 " all normalize to "CMSC201".
#[must_use]
pub fn normalize_code(code: &str) -> String {
    code.split_whitespace().collect::<String>().to_uppercase()
}

/// Subject prefix of a course code, uppercased.
///
/// The leading alphabetic run is used ("CMSC201" -> "CMSC"). When the code
/// starts with something else but contains whitespace, the first token is
/// used instead. Codes with neither yield the empty subject.
#[must_use]
pub fn subject_prefix(code: &str) -> String {
    let trimmed = code.trim();
    let letters: String = trimmed
        .chars()
        .take_while(char::is_ascii_alphabetic)
        .collect();
    if !letters.is_empty() {
        return letters.to_uppercase();
    }
    if trimmed.contains(char::is_whitespace) {
        return trimmed
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_uppercase();
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new(
            "CMSC 201".to_string(),
            "Computer Science I".to_string(),
            4.0,
        );

        assert_eq!(course.code, "CMSC 201");
        assert_eq!(course.name, "Computer Science I");
        assert!((course.credits - 4.0).abs() < f32::EPSILON);
        assert!(course.requirements.is_empty());
    }

    #[test]
    fn test_course_key() {
        let course = Course::new("cmsc 201".to_string(), "CS I".to_string(), 4.0);
        assert_eq!(course.key(), "CMSC201");
    }

    #[test]
    fn test_add_requirement() {
        let mut course = Course::new("PHYS 121".to_string(), "Physics I".to_string(), 4.0);

        course.add_requirement("Science".to_string());
        course.add_requirement("Science".to_string());
        assert_eq!(course.requirements, vec!["Science".to_string()]);
    }

    #[test]
    fn test_normalize_code() {
        assert_eq!(normalize_code("CMSC 201"), "CMSC201");
        assert_eq!(normalize_code("cmsc201"), "CMSC201");
        assert_eq!(normalize_code("  MATH  151 "), "MATH151");
        assert_eq!(normalize_code("CMSC 4XX - TEC"), "CMSC4XX-TEC");
        assert_eq!(normalize_code(""), "");
    }

    #[test]
    fn test_subject_prefix() {
        assert_eq!(subject_prefix("CMSC 201"), "CMSC");
        assert_eq!(subject_prefix("cmsc202"), "CMSC");
        assert_eq!(subject_prefix("MATH151"), "MATH");
        assert_eq!(subject_prefix("4XX CMSC"), "4XX");
        assert_eq!(subject_prefix("12345"), "");
        assert_eq!(subject_prefix(""), "");
    }

    #[test]
    fn test_deserialize_defaults() {
        let course: Course = serde_json::from_str(r#"{"code": "ENGL 100"}"#).unwrap();
        assert_eq!(course.code, "ENGL 100");
        assert!(course.name.is_empty());
        assert!(course.credits.abs() < f32::EPSILON);
        assert!(course.requirements.is_empty());
    }
}
