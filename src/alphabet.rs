//! The 33-symbol VIN alphabet.
//!
//! ISO 3779 excludes `I`, `O` and `Q` to avoid confusion with `1` and `0`.
//! The order below is the one used to expand WMI country ranges: letters
//! first, then `1` through `9`, then `0`.

use crate::error::VinError;

/// Every symbol allowed in a VIN, in range-expansion order.
pub const VIN_ALPHABET: [char; 33] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'R', 'S', 'T', 'U', 'V',
    'W', 'X', 'Y', 'Z', '1', '2', '3', '4', '5', '6', '7', '8', '9', '0',
];

const NOT_IN_ALPHABET: u8 = u8::MAX;

/// Reverse index from ASCII byte to alphabet position.
static POSITIONS: [u8; 128] = build_positions();

const fn build_positions() -> [u8; 128] {
    let mut table = [NOT_IN_ALPHABET; 128];
    let mut i = 0;
    while i < VIN_ALPHABET.len() {
        table[VIN_ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Zero-based position of `symbol` in [`VIN_ALPHABET`].
///
/// Lowercase letters are not folded; callers canonicalize first.
pub fn alphabet_position(symbol: char) -> Result<usize, VinError> {
    let position = if symbol.is_ascii() {
        POSITIONS[symbol as usize]
    } else {
        NOT_IN_ALPHABET
    };
    if position == NOT_IN_ALPHABET {
        return Err(VinError::UnknownSymbol(symbol));
    }
    Ok(position as usize)
}

/// Symbol at `position`, or `None` past the end of the alphabet.
pub fn alphabet_char(position: usize) -> Option<char> {
    VIN_ALPHABET.get(position).copied()
}

/// Check whether `symbol` may appear in an uppercased VIN.
pub fn is_vin_symbol(symbol: char) -> bool {
    alphabet_position(symbol).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_follow_declared_order() {
        assert_eq!(alphabet_position('A'), Ok(0));
        assert_eq!(alphabet_position('H'), Ok(7));
        assert_eq!(alphabet_position('J'), Ok(8));
        assert_eq!(alphabet_position('Z'), Ok(22));
        assert_eq!(alphabet_position('1'), Ok(23));
        assert_eq!(alphabet_position('9'), Ok(31));
        assert_eq!(alphabet_position('0'), Ok(32));
    }

    #[test]
    fn excluded_letters_are_unknown() {
        for symbol in ['I', 'O', 'Q'] {
            assert_eq!(
                alphabet_position(symbol),
                Err(VinError::UnknownSymbol(symbol))
            );
        }
    }

    #[test]
    fn other_symbols_are_unknown() {
        assert!(alphabet_position('a').is_err());
        assert!(alphabet_position('-').is_err());
        assert!(alphabet_position(' ').is_err());
        assert!(alphabet_position('Ä').is_err());
    }

    #[test]
    fn char_and_position_are_inverse() {
        for (i, &symbol) in VIN_ALPHABET.iter().enumerate() {
            assert_eq!(alphabet_position(symbol), Ok(i));
            assert_eq!(alphabet_char(i), Some(symbol));
        }
        assert_eq!(alphabet_char(VIN_ALPHABET.len()), None);
    }

    #[test]
    fn alphabet_has_no_duplicates() {
        let mut sorted = VIN_ALPHABET;
        sorted.sort_unstable();
        for window in sorted.windows(2) {
            assert!(window[0] < window[1], "duplicate symbol {}", window[0]);
        }
        assert_eq!(VIN_ALPHABET.len(), 33);
    }

    #[test]
    fn membership() {
        assert!(is_vin_symbol('W'));
        assert!(is_vin_symbol('5'));
        assert!(!is_vin_symbol('O'));
        assert!(!is_vin_symbol('w'));
    }
}
