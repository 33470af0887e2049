//! Static policy-category → committee-code mapping. Closed set
//! of ~12 categories; each maps to the Senate committee codes that hear that
//! category's legislation.

/// `(category, committee codes)`. Committee codes match the convention used
/// by `ilga-parse`'s committee scraper (short upper-case abbreviations).
const POLICY_CATEGORIES: &[(&str, &[&str])] = &[
    ("education", &["EDU", "HED"]),
    ("healthcare", &["HLT", "PUB"]),
    ("criminal_justice", &["JUD", "CRI"]),
    ("taxes", &["REV", "APP"]),
    ("environment", &["ENV", "AGR"]),
    ("labor", &["LAB"]),
    ("housing", &["HOU"]),
    ("transportation", &["TRN"]),
    ("agriculture", &["AGR"]),
    ("public_safety", &["PSF", "JUD"]),
    ("elections", &["ELC"]),
    ("pensions", &["PEN", "APP"]),
];

/// Committee codes for `category`, or `None` if it is not a recognized key.
#[must_use]
pub fn committees_for(category: &str) -> Option<&'static [&'static str]> {
    let needle = category.to_lowercase();
    POLICY_CATEGORIES.iter().find(|(key, _)| *key == needle).map(|(_, codes)| *codes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_category_resolves() {
        assert_eq!(committees_for("education"), Some(["EDU", "HED"].as_slice()));
    }

    #[test]
    fn unknown_category_is_none() {
        assert_eq!(committees_for("sports"), None);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(committees_for("EDUCATION").is_some());
    }
}
