//! ZIP Crosswalk: a pure, in-memory lookup. Never contacts the
//! network at request time; loaded once from a bundled CSV (prod) or a seed
//! table (`SEED_MODE`/dev).

use crate::error::AdvocacyError;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy)]
pub struct DistrictPair {
    pub senate_district: u32,
    pub house_district: u32,
}

#[derive(Debug, Clone, Default)]
pub struct Crosswalk {
    by_zip: HashMap<String, DistrictPair>,
}

impl Crosswalk {
    /// Parses a `zip,senate_district,house_district` CSV with no header.
    /// Malformed rows are skipped (the crosswalk is best-effort lookup
    /// data, not a hard schema).
    #[must_use]
    pub fn from_csv_str(csv: &str) -> Self {
        let mut by_zip = HashMap::new();
        for line in csv.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut fields = line.split(',');
            let (Some(zip), Some(senate), Some(house)) = (fields.next(), fields.next(), fields.next()) else {
                continue;
            };
            if let (Ok(senate_district), Ok(house_district)) = (senate.trim().parse(), house.trim().parse()) {
                by_zip.insert(zip.trim().to_string(), DistrictPair { senate_district, house_district });
            }
        }
        Self { by_zip }
    }

    /// A small hardcoded table for dev/`SEED_MODE`, covering a handful of
    /// Springfield and Chicago-area ZIP codes.
    #[must_use]
    pub fn dev_seed() -> Self {
        Self::from_csv_str(
            "\
62701,50,99\n\
62702,50,100\n\
60601,7,5\n\
60602,7,6\n\
60614,6,11\n\
60640,7,14\n\
61820,52,101\n\
61821,52,102\n\
",
        )
    }

    /// # Errors
    /// Returns `AdvocacyError::ZipNotFound` when `zip` has no crosswalk entry.
    pub fn lookup(&self, zip: &str) -> Result<DistrictPair, AdvocacyError> {
        self.by_zip.get(zip).copied().ok_or(AdvocacyError::ZipNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_zip_resolves() {
        let cw = Crosswalk::dev_seed();
        let pair = cw.lookup("62701").unwrap();
        assert_eq!(pair.senate_district, 50);
    }

    #[test]
    fn unknown_zip_is_not_found() {
        let cw = Crosswalk::dev_seed();
        assert!(matches!(cw.lookup("00000"), Err(AdvocacyError::ZipNotFound)));
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let cw = Crosswalk::from_csv_str("62701,50,99\nbad-row\n62702,abc,100\n");
        assert!(cw.lookup("62701").is_ok());
        assert!(cw.lookup("62702").is_err());
    }
}
