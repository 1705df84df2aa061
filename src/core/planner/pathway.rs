//! Preset four-year pathways used to prefill a plan

use crate::core::models::Season;

/// Course codes suggested for one semester
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathwayTerm {
    /// Academic year (1-based)
    pub year: u8,
    /// Season within the year
    pub season: Season,
    /// Codes in slot order. Some are placeholders (e.g. "SS GEP") that only
    /// mark an open slot.
    pub codes: &'static [&'static str],
}

/// A named sequence of semester presets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pathway {
    /// Display name
    pub name: &'static str,
    /// Terms in plan order
    pub terms: &'static [PathwayTerm],
}

/// Computer Science B.S. recommended sequence
pub const COMPUTER_SCIENCE_BS: Pathway = Pathway {
    name: "Computer Science B.S.",
    terms: &[
        PathwayTerm {
            year: 1,
            season: Season::Fall,
            codes: &["CMSC 201", "MATH 151", "LANG 201", "ENGL GEP"],
        },
        PathwayTerm {
            year: 1,
            season: Season::Spring,
            codes: &["CMSC 202", "MATH 152", "CMSC 203", "AH GEP", "SS GEP"],
        },
        PathwayTerm {
            year: 2,
            season: Season::Fall,
            codes: &["CMSC 331", "CMSC 341", "SCI SEQ I", "SS GEP", "ELECTIVE"],
        },
        PathwayTerm {
            year: 2,
            season: Season::Spring,
            codes: &["CMSC 313", "MATH 221", "SCI SEQ II", "SCI LAB GEP", "SS GEP"],
        },
        PathwayTerm {
            year: 3,
            season: Season::Fall,
            codes: &["CMSC 304", "CMSC 411", "CMSC 4XX - TEC", "STAT 355"],
        },
        PathwayTerm {
            year: 3,
            season: Season::Spring,
            codes: &["CMSC 421", "CMSC 4XX - CS", "CMSC 4XX - TEC", "AH GEP", "C GEP"],
        },
        PathwayTerm {
            year: 4,
            season: Season::Fall,
            codes: &["CMSC 441", "CMSC 447", "UL ELECT", "ELECTIVE", "ELECTIVE"],
        },
        PathwayTerm {
            year: 4,
            season: Season::Spring,
            codes: &["CMSC 4XX - CS", "CMSC 4XX - TEC", "ELECTIVE", "ELECTIVE", "ELECTIVE"],
        },
    ],
};

impl Pathway {
    /// Preset for a given semester, if the pathway has one
    #[must_use]
    pub fn term(&self, year: u8, season: Season) -> Option<&PathwayTerm> {
        self.terms
            .iter()
            .find(|t| t.year == year && t.season == season)
    }

    /// Every code the pathway names, placeholders included
    pub fn all_codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.terms.iter().flat_map(|t| t.codes.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_fall_and_spring_each_year() {
        for year in 1..=4 {
            assert!(COMPUTER_SCIENCE_BS.term(year, Season::Fall).is_some());
            assert!(COMPUTER_SCIENCE_BS.term(year, Season::Spring).is_some());
            assert!(COMPUTER_SCIENCE_BS.term(year, Season::Summer).is_none());
        }
    }

    #[test]
    fn test_first_term() {
        let term = COMPUTER_SCIENCE_BS.term(1, Season::Fall).unwrap();
        assert_eq!(term.codes[0], "CMSC 201");
        assert_eq!(COMPUTER_SCIENCE_BS.all_codes().count(), 38);
    }
}
