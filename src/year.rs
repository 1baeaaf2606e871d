//! Model year resolution (VIN position 10).
//!
//! Year codes repeat every 30 years, so a code alone names two possible
//! model years. The 7th VIN character is used as a heuristic tie-breaker:
//! a digit there means the vehicle predates 2010, a letter means 2010 or
//! later. This is an industry convention, not part of ISO 3779, and a VIN
//! that does not follow it can resolve to the wrong cycle or to nothing.

use std::collections::HashMap;

/// First model year of the second code cycle.
pub const CYCLE_BOUNDARY: u16 = 2010;

/// Zero-based index of the model year code.
pub const MODEL_YEAR_INDEX: usize = 9;

/// Zero-based index of the character that selects the code cycle.
pub const CHECK_CHAR_INDEX: usize = 6;

/// Code cycle selected by the 7th VIN character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Era {
    /// Model years before 2010.
    Pre2010,
    /// Model years from 2010 on.
    From2010,
}

impl Era {
    /// A digit selects [`Era::Pre2010`], anything else [`Era::From2010`].
    pub fn from_check_char(check: char) -> Self {
        if check.is_ascii_digit() {
            Era::Pre2010
        } else {
            Era::From2010
        }
    }

    /// Whether `year` belongs to this era.
    pub fn admits(self, year: u16) -> bool {
        match self {
            Era::Pre2010 => year < CYCLE_BOUNDARY,
            Era::From2010 => year >= CYCLE_BOUNDARY,
        }
    }
}

/// Year code → candidate model years.
#[derive(Debug, Clone, Default)]
pub struct YearTable {
    codes: HashMap<char, Vec<u16>>,
}

impl YearTable {
    /// Build from `(code, candidate years)` pairs.
    pub fn new<'a>(entries: impl IntoIterator<Item = (&'a char, &'a Vec<u16>)>) -> Self {
        Self {
            codes: entries
                .into_iter()
                .map(|(&code, years)| (code, years.clone()))
                .collect(),
        }
    }

    /// Every model year `code` can stand for, in table order. Empty for
    /// unassigned or unknown codes.
    pub fn candidates(&self, code: char) -> &[u16] {
        self.codes.get(&code).map(Vec::as_slice).unwrap_or_default()
    }

    /// First candidate for `code` that falls in the era selected by `check`.
    pub fn resolve(&self, code: char, check: char) -> Option<u16> {
        let era = Era::from_check_char(check);
        self.candidates(code)
            .iter()
            .copied()
            .find(|&year| era.admits(year))
    }

    /// Model year of `vin`, or `None` when it cannot be determined.
    ///
    /// The input is uppercased the same way [`Vin::parse`](crate::Vin::parse)
    /// does it, but length and alphabet are not checked; a VIN too short to
    /// carry a year code resolves to `None`.
    pub fn model_year(&self, vin: &str) -> Option<u16> {
        let upper = vin.to_uppercase();
        let mut chars = upper.chars();
        let check = chars.nth(CHECK_CHAR_INDEX)?;
        let code = chars.nth(MODEL_YEAR_INDEX - CHECK_CHAR_INDEX - 1)?;
        self.resolve(code, check)
    }

    /// Number of year codes, assigned or not.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if the table has no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
