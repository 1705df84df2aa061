//! Semester and grade models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of years in the planner grid
pub const PLAN_YEARS: u8 = 4;

/// A season within an academic year, ordered as it falls in the year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Season {
    /// Fall semester (always present)
    Fall,
    /// Winter session (optional)
    Winter,
    /// Spring semester (always present)
    Spring,
    /// Summer session (optional)
    Summer,
}

impl Season {
    /// All seasons in calendar order
    pub const ALL: [Self; 4] = [Self::Fall, Self::Winter, Self::Spring, Self::Summer];

    /// Winter and Summer are added on demand and can be removed
    #[must_use]
    pub const fn is_optional(self) -> bool {
        matches!(self, Self::Winter | Self::Summer)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fall => "Fall",
            Self::Winter => "Winter",
            Self::Spring => "Spring",
            Self::Summer => "Summer",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fall" => Ok(Self::Fall),
            "winter" => Ok(Self::Winter),
            "spring" => Ok(Self::Spring),
            "summer" => Ok(Self::Summer),
            _ => Err(format!("Unknown season: {s}")),
        }
    }
}

/// Identifies one semester slot in the plan
///
/// Ordering is by year, then season, matching how semesters are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SemesterKey {
    /// Academic year (1-based)
    pub year: u8,
    /// Season within the year
    pub season: Season,
}

impl SemesterKey {
    /// Create a new semester key
    #[must_use]
    pub const fn new(year: u8, season: Season) -> Self {
        Self { year, season }
    }
}

impl fmt::Display for SemesterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Year {} - {}", self.year, self.season)
    }
}

/// Letter grade recorded against a planned or transferred course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// A
    A,
    /// B
    B,
    /// C
    C,
    /// D
    D,
    /// E
    E,
    /// F
    F,
    /// Withdrawn
    W,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
            Self::W => "W",
        };
        write!(f, "{letter}")
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            "E" => Ok(Self::E),
            "F" => Ok(Self::F),
            "W" => Ok(Self::W),
            _ => Err(format!("Unknown grade: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_order() {
        let mut seasons = vec![Season::Summer, Season::Spring, Season::Fall, Season::Winter];
        seasons.sort();
        assert_eq!(seasons, Season::ALL.to_vec());
    }

    #[test]
    fn test_semester_key_order() {
        let a = SemesterKey::new(1, Season::Summer);
        let b = SemesterKey::new(2, Season::Fall);
        let c = SemesterKey::new(2, Season::Winter);
        assert!(a < b);
        assert!(b < c);
        assert_eq!(b.to_string(), "Year 2 - Fall");
    }

    #[test]
    fn test_optional_seasons() {
        assert!(!Season::Fall.is_optional());
        assert!(!Season::Spring.is_optional());
        assert!(Season::Winter.is_optional());
        assert!(Season::Summer.is_optional());
    }

    #[test]
    fn test_parse_grade_and_season() {
        assert_eq!("b".parse::<Grade>(), Ok(Grade::B));
        assert_eq!(" W ".parse::<Grade>(), Ok(Grade::W));
        assert!("A+".parse::<Grade>().is_err());
        assert_eq!("SUMMER".parse::<Season>(), Ok(Season::Summer));
        assert!("autumn".parse::<Season>().is_err());
    }
}
