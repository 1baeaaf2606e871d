use thiserror::Error;

/// Errors raised when a resolver is called outside its contract or when
/// reference data cannot be loaded.
///
/// Table misses are not errors; they resolve to [`UNKNOWN`](crate::UNKNOWN).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VinError {
    /// The symbol is not part of the 33-character VIN alphabet.
    #[error("unknown VIN symbol '{0}'")]
    UnknownSymbol(char),

    /// A manufacturer lookup was attempted with a code that is not exactly
    /// three characters long.
    #[error("invalid manufacturer code '{0}': expected exactly 3 characters")]
    InvalidManufacturerCode(String),

    /// Reference data could not be parsed.
    #[error("reference data error: {0}")]
    Json(String),
}

/// Why a raw string is not a well-formed VIN.
///
/// The `Display` output is the message surfaced by
/// [`validate_vin`](crate::validate_vin) and [`decode_vin`](crate::decode_vin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// The input does not have exactly 17 characters.
    #[error("VIN must be 17 characters long")]
    Length {
        /// Number of characters found.
        len: usize,
    },

    /// The input contains a character outside the VIN alphabet.
    #[error("VIN contain only letters & numbers except from I, O and Q")]
    Alphabet {
        /// First offending character (after uppercasing).
        symbol: char,
        /// Zero-based character index of the offending symbol.
        index: usize,
    },
}
