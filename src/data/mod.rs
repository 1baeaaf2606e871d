//! Reference tables consumed by the resolvers.
//!
//! [`ReferenceData::standard`] exposes the tables embedded in this crate.
//! Callers with their own coverage can deserialize a [`ReferenceData`]
//! from any serde format and build a [`VinDecoder`](crate::VinDecoder)
//! from it.

mod countries;
mod manufacturers;
mod regions;
mod years;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::region::CountryRange;

pub use countries::COUNTRY_RANGES;
pub use manufacturers::MANUFACTURERS;
pub use regions::REGIONS;
pub use years::YEAR_CODES;

/// The four reference tables in owned, serializable form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceData {
    /// First WMI character → region.
    #[serde(default)]
    pub regions: BTreeMap<char, String>,
    /// Country ranges, expanded in order.
    #[serde(default)]
    pub countries: Vec<CountryRange>,
    /// Exact WMI → manufacturer.
    #[serde(default)]
    pub manufacturers: BTreeMap<String, String>,
    /// Model year code → candidate years.
    #[serde(default)]
    pub years: BTreeMap<char, Vec<u16>>,
}

impl ReferenceData {
    /// The embedded tables.
    pub fn standard() -> Self {
        Self {
            regions: REGIONS
                .iter()
                .map(|&(code, name)| (code, name.to_owned()))
                .collect(),
            countries: COUNTRY_RANGES
                .iter()
                .map(|&(region, start, end, country)| {
                    CountryRange::new(region, start, end, country)
                })
                .collect(),
            manufacturers: MANUFACTURERS
                .iter()
                .map(|&(code, name)| (code.to_owned(), name.to_owned()))
                .collect(),
            years: YEAR_CODES
                .iter()
                .map(|&(code, years)| (code, years.to_vec()))
                .collect(),
        }
    }

    /// Parse reference data from JSON.
    ///
    /// Missing tables default to empty.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, crate::VinError> {
        serde_json::from_str(json).map_err(|e| crate::VinError::Json(e.to_string()))
    }
}
