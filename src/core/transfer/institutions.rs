//! Source institutions supported by the equivalency lookup

/// A community college and its identifier in the equivalency database
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Institution {
    /// Identifier passed to the lookup
    pub id: u32,
    /// Display name
    pub name: &'static str,
}

/// Maryland community colleges, sorted by name
pub const SOURCE_INSTITUTIONS: &[Institution] = &[
    Institution { id: 1725, name: "Allegany College of Maryland" },
    Institution { id: 1726, name: "Anne Arundel Community College" },
    Institution { id: 1730, name: "Baltimore City Community College" },
    Institution { id: 4839, name: "Carroll Community College" },
    Institution { id: 1736, name: "Cecil College" },
    Institution { id: 1738, name: "Chesapeake College" },
    Institution { id: 1737, name: "College of Southern Maryland" },
    Institution { id: 5209, name: "Community College of Baltimore County (CCBC)" },
    Institution { id: 1743, name: "Frederick Community College" },
    Institution { id: 1745, name: "Garrett College" },
    Institution { id: 1749, name: "Hagerstown Community College" },
    Institution { id: 1750, name: "Harford Community College" },
    Institution { id: 1752, name: "Howard Community College" },
    Institution { id: 1768, name: "Montgomery College" },
    Institution { id: 10259, name: "Prince George's Community College" },
    Institution { id: 1792, name: "Wor-Wic Community College" },
];

/// Name of the institution with this id
#[must_use]
pub fn institution_name(id: u32) -> Option<&'static str> {
    SOURCE_INSTITUTIONS
        .iter()
        .find(|inst| inst.id == id)
        .map(|inst| inst.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_id() {
        assert_eq!(institution_name(1752), Some("Howard Community College"));
        assert_eq!(institution_name(10259), Some("Prince George's Community College"));
        assert_eq!(institution_name(1), None);
    }

    #[test]
    fn test_ids_unique() {
        let mut ids: Vec<u32> = SOURCE_INSTITUTIONS.iter().map(|i| i.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SOURCE_INSTITUTIONS.len());
        assert_eq!(ids.len(), 16);
    }
}
