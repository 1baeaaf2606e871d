//! Region and country resolution from the WMI.
//!
//! Countries are declared as compact ranges over the second WMI character
//! and expanded once into an exact two-character lookup.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::alphabet::{alphabet_char, alphabet_position};
use crate::error::VinError;

/// A country assignment for every WMI prefix from `region + start` through
/// `region + end`, inclusive, in [`VIN_ALPHABET`](crate::VIN_ALPHABET) order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRange {
    /// First WMI character.
    pub region: char,
    /// Lowest second character covered.
    pub start: char,
    /// Highest second character covered.
    pub end: char,
    /// Country name assigned to every code in the range.
    pub country: String,
}

impl CountryRange {
    /// Range covering `region + start` through `region + end`.
    pub fn new(region: char, start: char, end: char, country: impl Into<String>) -> Self {
        Self {
            region,
            start,
            end,
            country: country.into(),
        }
    }

    /// Two-character codes covered by this range, in alphabet order.
    ///
    /// A range whose start sorts after its end covers nothing.
    pub fn codes(&self) -> Result<impl Iterator<Item = String>, VinError> {
        let start = alphabet_position(self.start)?;
        let end = alphabet_position(self.end)?;
        let region = self.region;
        Ok((start..=end).filter_map(alphabet_char).map(move |symbol| {
            let mut code = String::with_capacity(2);
            code.push(region);
            code.push(symbol);
            code
        }))
    }
}

/// Two ranges assigned the same WMI prefix. The later assignment wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeConflict {
    /// The contested two-character code.
    pub code: String,
    /// Country that was overwritten.
    pub previous: String,
    /// Country that now owns the code.
    pub replacement: String,
}

/// Expanded two-character WMI prefix → country lookup.
#[derive(Debug, Clone, Default)]
pub struct CountryTable {
    codes: HashMap<String, String>,
    conflicts: Vec<RangeConflict>,
}

impl CountryTable {
    /// Expand `ranges` in order. Overlaps are recorded and the last
    /// declaration wins.
    pub fn from_ranges<'a>(
        ranges: impl IntoIterator<Item = &'a CountryRange>,
    ) -> Result<Self, VinError> {
        let mut table = Self::default();
        for range in ranges {
            for code in range.codes()? {
                if let Some(previous) = table.codes.insert(code.clone(), range.country.clone()) {
                    log::warn!(
                        "WMI prefix {code} assigned to both {previous} and {}; keeping {}",
                        range.country,
                        range.country
                    );
                    table.conflicts.push(RangeConflict {
                        code,
                        previous,
                        replacement: range.country.clone(),
                    });
                }
            }
        }
        Ok(table)
    }

    /// Country for the first two characters of `wmi`.
    ///
    /// The prefix is matched verbatim, so `wmi` must already be uppercase.
    pub fn country(&self, wmi: &str) -> Option<&str> {
        let prefix = wmi.get(..2)?;
        self.codes.get(prefix).map(String::as_str)
    }

    /// Collisions found while expanding the ranges.
    pub fn conflicts(&self) -> &[RangeConflict] {
        &self.conflicts
    }

    /// Number of expanded two-character codes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if no range covered any code.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// All `(code, country)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.codes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// First WMI character → region lookup.
#[derive(Debug, Clone, Default)]
pub struct RegionTable {
    regions: HashMap<char, String>,
}

impl RegionTable {
    /// Build from `(first character, region)` pairs.
    pub fn new<'a>(entries: impl IntoIterator<Item = (&'a char, &'a String)>) -> Self {
        Self {
            regions: entries
                .into_iter()
                .map(|(&code, name)| (code, name.clone()))
                .collect(),
        }
    }

    /// Region for the first character of `wmi`.
    pub fn region(&self, wmi: &str) -> Option<&str> {
        let first = wmi.chars().next()?;
        self.regions.get(&first).map(String::as_str)
    }

    /// Number of region codes.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// True if the table has no regions.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranges() -> Vec<CountryRange> {
        vec![
            CountryRange::new('W', 'A', '0', "Germany"),
            CountryRange::new('N', 'L', 'R', "Turkey"),
            CountryRange::new('S', 'A', 'M', "United Kingdom"),
        ]
    }

    #[test]
    fn expands_inclusive_ranges() {
        let table = CountryTable::from_ranges(&ranges()).unwrap();
        assert_eq!(table.country("WA"), Some("Germany"));
        assert_eq!(table.country("W1K"), Some("Germany"));
        assert_eq!(table.country("W0L"), Some("Germany"));
        assert_eq!(table.country("NL"), Some("Turkey"));
        assert_eq!(table.country("NMT"), Some("Turkey"));
        assert_eq!(table.country("NR"), Some("Turkey"));
        assert_eq!(table.country("NS"), None);
        assert_eq!(table.country("SB1"), Some("United Kingdom"));
        assert_eq!(table.country("SN"), None);
        // WA..W0 covers the whole alphabet, NL..NR five symbols, SA..SM twelve
        assert_eq!(table.len(), 33 + 5 + 12);
        assert!(table.conflicts().is_empty());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let table = CountryTable::from_ranges(&ranges()).unwrap();
        assert_eq!(table.country("w1k"), None);
    }

    #[test]
    fn short_prefix_is_unknown() {
        let table = CountryTable::from_ranges(&ranges()).unwrap();
        assert_eq!(table.country("W"), None);
        assert_eq!(table.country(""), None);
    }

    #[test]
    fn inverted_range_is_empty() {
        let table =
            CountryTable::from_ranges(&[CountryRange::new('K', 'R', 'L', "Nowhere")]).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn single_symbol_range() {
        let table =
            CountryTable::from_ranges(&[CountryRange::new('9', '3', '3', "Brazil")]).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.country("93H"), Some("Brazil"));
    }

    #[test]
    fn unknown_bound_is_rejected() {
        let err =
            CountryTable::from_ranges(&[CountryRange::new('K', 'A', 'O', "Bad")]).unwrap_err();
        assert_eq!(err, VinError::UnknownSymbol('O'));
    }

    #[test]
    fn overlap_is_recorded_and_last_wins() {
        let table = CountryTable::from_ranges(&[
            CountryRange::new('X', 'A', 'E', "Bulgaria"),
            CountryRange::new('X', 'D', 'F', "Greece"),
        ])
        .unwrap();
        assert_eq!(table.country("XC"), Some("Bulgaria"));
        assert_eq!(table.country("XD"), Some("Greece"));
        assert_eq!(table.country("XE"), Some("Greece"));
        assert_eq!(table.conflicts().len(), 2);
        assert_eq!(
            table.conflicts()[0],
            RangeConflict {
                code: "XD".into(),
                previous: "Bulgaria".into(),
                replacement: "Greece".into(),
            }
        );
    }

    #[test]
    fn range_codes_in_alphabet_order() {
        let range = CountryRange::new('3', 'X', '7', "Costa Rica");
        let codes: Vec<String> = range.codes().unwrap().collect();
        assert_eq!(
            codes,
            ["3X", "3Y", "3Z", "31", "32", "33", "34", "35", "36", "37"]
        );
    }

    #[test]
    fn region_by_first_char() {
        let entries = [('S', "Europe".to_string()), ('K', "Asia".to_string())];
        let table = RegionTable::new(entries.iter().map(|(c, n)| (c, n)));
        assert_eq!(table.region("S1K"), Some("Europe"));
        assert_eq!(table.region("KNA"), Some("Asia"));
        assert_eq!(table.region("1G1"), None);
        assert_eq!(table.region(""), None);
        assert_eq!(table.len(), 2);
    }
}
