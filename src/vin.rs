//! VIN validation and ISO 3779 sectioning.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::alphabet::is_vin_symbol;
use crate::error::ValidationError;
use crate::manufacturer::WMI_LENGTH;
use crate::year::{CHECK_CHAR_INDEX, MODEL_YEAR_INDEX};

/// Number of characters in a VIN.
pub const VIN_LENGTH: usize = 17;

/// End of the Vehicle Descriptor Section (exclusive).
const VDS_END: usize = 9;

/// A validated, uppercased 17-character VIN.
///
/// Every character is in [`VIN_ALPHABET`](crate::VIN_ALPHABET), so the
/// string is pure ASCII and the section accessors never fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Vin(String);

impl Vin {
    /// Uppercase `raw` and check its length and alphabet.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let vin = raw.to_uppercase();

        let len = vin.chars().count();
        if len != VIN_LENGTH {
            return Err(ValidationError::Length { len });
        }

        if let Some((index, symbol)) = vin
            .chars()
            .enumerate()
            .find(|&(_, c)| !is_vin_symbol(c))
        {
            return Err(ValidationError::Alphabet { symbol, index });
        }

        Ok(Self(vin))
    }

    /// The uppercased VIN.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// World Manufacturer Identifier, characters 1-3.
    pub fn wmi(&self) -> &str {
        &self.0[..WMI_LENGTH]
    }

    /// Vehicle Descriptor Section, characters 4-9.
    pub fn vds(&self) -> &str {
        &self.0[WMI_LENGTH..VDS_END]
    }

    /// Vehicle Identifier Section, characters 10-17.
    pub fn vis(&self) -> &str {
        &self.0[VDS_END..]
    }

    /// Model year code, character 10.
    pub fn model_year_code(&self) -> char {
        char::from(self.0.as_bytes()[MODEL_YEAR_INDEX])
    }

    /// Character 7, which selects the model year cycle.
    pub fn check_char(&self) -> char {
        char::from(self.0.as_bytes()[CHECK_CHAR_INDEX])
    }

    /// All three sections, as [`split_vin`] returns them.
    pub fn sections(&self) -> VinSections {
        VinSections {
            wmi: self.wmi().into(),
            vds: self.vds().into(),
            vis: self.vis().into(),
            model_year: self.model_year_code().into(),
        }
    }
}

impl fmt::Display for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Vin {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Vin {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Vin {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Vin> for String {
    fn from(vin: Vin) -> Self {
        vin.0
    }
}

/// Outcome of [`validate_vin`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Why the VIN was rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<Vin, ValidationError>> for ValidationResult {
    fn from(result: Result<Vin, ValidationError>) -> Self {
        match result {
            Ok(_) => Self {
                is_valid: true,
                error: None,
            },
            Err(err) => Self {
                is_valid: false,
                error: Some(err.to_string()),
            },
        }
    }
}

/// The three ISO 3779 sections of a VIN plus its raw model year code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VinSections {
    pub wmi: String,
    pub vds: String,
    pub vis: String,
    /// First VIS character, undecoded.
    pub model_year: String,
}

/// Resolved reference data for a valid VIN. Fields that the tables do not
/// cover hold [`UNKNOWN`](crate::UNKNOWN).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VinInfo {
    pub region: String,
    pub country: String,
    pub model_year: String,
    pub manufacturer: String,
}

impl fmt::Display for VinInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "region: {}", self.region)?;
        writeln!(f, "country: {}", self.country)?;
        writeln!(f, "model year: {}", self.model_year)?;
        write!(f, "manufacturer: {}", self.manufacturer)
    }
}

/// Outcome of [`decode_vin`](crate::decode_vin).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedVin {
    /// The input, uppercased.
    pub vin: String,
    pub is_valid: bool,
    /// Validation message when `is_valid` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Decoded fields when `is_valid` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<VinInfo>,
}

impl fmt::Display for DecodedVin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.info, &self.message) {
            (Some(info), _) => write!(f, "{} (valid)\n{info}", self.vin),
            (None, Some(message)) => write!(f, "{} (invalid: {message})", self.vin),
            (None, None) => write!(f, "{} (invalid)", self.vin),
        }
    }
}

/// Check that `raw` is a well-formed VIN after uppercasing.
///
/// Never fails; the outcome is reported in the returned record.
pub fn validate_vin(raw: &str) -> ValidationResult {
    Vin::parse(raw).into()
}

/// Split `raw` into its WMI, VDS and VIS sections after uppercasing.
///
/// No validation happens here. Input shorter than 17 characters yields
/// truncated or empty sections.
pub fn split_vin(raw: &str) -> VinSections {
    let chars: Vec<char> = raw.to_uppercase().chars().collect();
    let section = |start: usize, end: usize| -> String {
        chars.iter().skip(start).take(end - start).collect()
    };
    VinSections {
        wmi: section(0, WMI_LENGTH),
        vds: section(WMI_LENGTH, VDS_END),
        vis: section(VDS_END, VIN_LENGTH),
        model_year: section(MODEL_YEAR_INDEX, MODEL_YEAR_INDEX + 1),
    }
}
