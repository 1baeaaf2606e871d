//! # vin-decode
//!
//! Decodes ISO 3779 Vehicle Identification Numbers into region, country,
//! manufacturer and model year.
//!
//! A VIN is split into three sections: the World Manufacturer Identifier
//! (characters 1-3), the Vehicle Descriptor Section (4-9) and the Vehicle
//! Identifier Section (10-17). Region and country come from the first two
//! WMI characters, the manufacturer from the full WMI, and the model year
//! from character 10 with character 7 choosing between the two 30-year
//! code cycles.
//!
//! ## Quick Start
//!
//! ```rust
//! use vin_decode::{UNKNOWN, decode_vin, get_manufacturer, validate_vin};
//!
//! let decoded = decode_vin("W1k3fbcb3pn300965");
//! assert!(decoded.is_valid);
//! assert_eq!(decoded.vin, "W1K3FBCB3PN300965");
//!
//! let info = decoded.info.unwrap();
//! assert_eq!(info.region, "Europe");
//! assert_eq!(info.country, "Germany");
//! assert_eq!(info.model_year, "2023");
//! assert_eq!(info.manufacturer, "Mercedes-Benz car");
//!
//! let check = validate_vin("W1K3FICB3PN300965");
//! assert!(!check.is_valid);
//!
//! // Unlisted manufacturers degrade to the unknown sentinel ...
//! assert_eq!(get_manufacturer("ZZZ").unwrap(), UNKNOWN);
//! // ... but a malformed code is an error.
//! assert!(get_manufacturer("ZZ").is_err());
//! ```
//!
//! ## Reference data
//!
//! The free functions use tables embedded in the crate, built once on
//! first use. To decode against other tables, build a [`VinDecoder`] from a
//! [`ReferenceData`]; with the `json` feature it can be loaded with
//! `ReferenceData::from_json`.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `json` | Load [`ReferenceData`] from JSON |
//!
//! Check digits are not verified.

pub mod alphabet;
pub mod data;
mod decoder;
mod error;
pub mod manufacturer;
pub mod region;
mod vin;
pub mod year;

pub use alphabet::{VIN_ALPHABET, alphabet_char, alphabet_position, is_vin_symbol};
pub use data::ReferenceData;
pub use decoder::{
    UNKNOWN, VinDecoder, decode_vin, get_country, get_manufacturer, get_model_year, get_region,
};
pub use error::{ValidationError, VinError};
pub use manufacturer::ManufacturerTable;
pub use region::{CountryRange, CountryTable, RangeConflict, RegionTable};
pub use vin::*;
pub use year::{Era, YearTable};
