//! Name normalization rule shared by the HTML parsers and the Graph Builder
//!: compare by case-folded surname plus first-letter-of-given-
//! name, with compound surnames (hyphenated or space-joined two-token
//! surnames such as "Blair-Sherlock", "Glowiak Hilton") recognised when
//! either the full compound or its first token matches.

/// A name reduced to the parts the reconciliation rule cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName {
    /// Case-folded surname, compound tokens kept joined by a single space
    /// (hyphens are treated as joins, so "Blair-Sherlock" becomes
    /// "blair sherlock").
    pub surname: String,
    /// Lower-cased first letter of the given name, if any.
    pub given_initial: Option<char>,
}

impl NormalizedName {
    /// Parses a full display name (`"Jane Doe"`, `"Doe, Jane"`, a bare
    /// surname such as `"Mr. MERKLEY"` from a roll call, or a compound
    /// surname) into its normalized parts.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let cleaned = strip_honorific(raw.trim());

        if let Some((last, first)) = cleaned.split_once(',') {
            return Self {
                surname: fold_surname(last.trim()),
                given_initial: first.trim().chars().next().map(|c| c.to_ascii_lowercase()),
            };
        }

        let tokens: Vec<&str> = cleaned.split_whitespace().collect();
        match tokens.as_slice() {
            [] => Self {
                surname: String::new(),
                given_initial: None,
            },
            [surname] => Self {
                surname: fold_surname(surname),
                given_initial: None,
            },
            [given, rest @ ..] => Self {
                surname: fold_surname(&rest.join(" ")),
                given_initial: given.chars().next().map(|c| c.to_ascii_lowercase()),
            },
        }
    }

    /// First token of a (possibly compound) surname.
    #[must_use]
    pub fn surname_first_token(&self) -> &str {
        self.surname.split(' ').next().unwrap_or(&self.surname)
    }
}

fn strip_honorific(s: &str) -> &str {
    for prefix in ["Mr.", "Mrs.", "Ms.", "The"] {
        if let Some(rest) = s.strip_prefix(prefix) {
            return rest.trim();
        }
    }
    s
}

fn fold_surname(s: &str) -> String {
    s.replace('-', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Applies the reconciliation rule: both surnames match exactly, OR one
/// compound surname's full form matches the other's first token.
#[must_use]
pub fn names_match(a: &str, b: &str) -> bool {
    let na = NormalizedName::parse(a);
    let nb = NormalizedName::parse(b);
    surnames_match(&na, &nb) && given_initials_compatible(&na, &nb)
}

fn surnames_match(a: &NormalizedName, b: &NormalizedName) -> bool {
    if a.surname == b.surname {
        return true;
    }
    a.surname == b.surname_first_token() || b.surname == a.surname_first_token()
}

fn given_initials_compatible(a: &NormalizedName, b: &NormalizedName) -> bool {
    match (a.given_initial, b.given_initial) {
        (Some(x), Some(y)) => x == y,
        // a bare surname (e.g. from a roll call) is compatible with anyone
        // sharing the surname
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Jane Doe", "Doe, Jane"; "given-surname vs last-first")]
    #[test_case("Mr. MERKLEY", "Jeff Merkley"; "roll call honorific vs full name")]
    #[test_case("Blair-Sherlock", "Ann Blair-Sherlock"; "compound hyphenated full match")]
    #[test_case("Blair", "Ann Blair-Sherlock"; "compound matches first token")]
    #[test_case("Glowiak Hilton", "Suzy Glowiak Hilton"; "compound space-joined full match")]
    #[test_case("Glowiak", "Suzy Glowiak Hilton"; "compound space-joined first token")]
    fn matches(a: &str, b: &str) {
        assert!(names_match(a, b), "{a} vs {b} should match");
    }

    #[test]
    fn does_not_match_different_surname() {
        assert!(!names_match("Jane Doe", "John Smith"));
    }

    #[test]
    fn does_not_match_conflicting_initial() {
        assert!(!names_match("Jane Doe", "John Doe"));
    }
}
