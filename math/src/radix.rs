//! Positional numerals in bases 2 through 36.
//!
//! Digits are `0-9` followed by the letters `a-z`, case-insensitive. Values
//! are decoded into [`BigUint`] since share values are routinely far wider
//! than any machine word.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{MathError, Result};

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

fn validate_base(base: u32) -> Result<u32> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(base)
    } else {
        Err(MathError::InvalidBase(base.to_string()))
    }
}

/// Parse a base written as a decimal literal, e.g. `"16"`.
pub fn parse_base(text: &str) -> Result<u32> {
    let base = text
        .trim()
        .parse::<u32>()
        .map_err(|_| MathError::InvalidBase(text.to_string()))?;
    validate_base(base)
}

/// Decode `value` as a non-negative integer written in `base`.
pub fn decode(value: &str, base: u32) -> Result<BigUint> {
    let base = validate_base(base)?;
    let invalid_digit = |position| MathError::InvalidDigit {
        value: value.to_string(),
        position,
        base,
    };

    if value.is_empty() {
        return Err(invalid_digit(0));
    }

    let digits = value
        .chars()
        .enumerate()
        .map(|(position, c)| {
            c.to_digit(base)
                .map(|d| d as u8)
                .ok_or_else(|| invalid_digit(position))
        })
        .collect::<Result<Vec<u8>>>()?;

    // Every digit is below `base`, so this cannot fail.
    BigUint::from_radix_be(&digits, base).ok_or_else(|| invalid_digit(0))
}

/// Render `value` in `base` using lower-case digits.
pub fn encode(value: &BigUint, base: u32) -> Result<String> {
    let base = validate_base(base)?;
    if value.is_zero() {
        return Ok("0".to_string());
    }
    Ok(value.to_str_radix(base))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_hex_with_either_case() {
        assert_eq!(decode("1A", 16).unwrap(), BigUint::from(26u32));
        assert_eq!(decode("1a", 16).unwrap(), BigUint::from(26u32));
    }

    #[test]
    fn decodes_highest_base_digit() {
        assert_eq!(decode("Z", 36).unwrap(), BigUint::from(35u32));
        assert_eq!(decode("10", 36).unwrap(), BigUint::from(36u32));
    }

    #[test]
    fn decodes_binary_and_leading_zeros() {
        assert_eq!(decode("111", 2).unwrap(), BigUint::from(7u32));
        assert_eq!(decode("000213", 4).unwrap(), BigUint::from(39u32));
        assert_eq!(decode("0", 10).unwrap(), BigUint::zero());
    }

    #[test]
    fn rejects_digit_outside_base() {
        assert_eq!(
            decode("2", 2),
            Err(MathError::InvalidDigit {
                value: "2".into(),
                position: 0,
                base: 2,
            })
        );
        assert_eq!(
            decode("19g", 16),
            Err(MathError::InvalidDigit {
                value: "19g".into(),
                position: 2,
                base: 16,
            })
        );
    }

    #[test]
    fn rejects_signs_separators_and_whitespace() {
        for value in ["-5", "+5", "1_000", " 12", "12 ", "1.5"] {
            assert!(
                matches!(decode(value, 10), Err(MathError::InvalidDigit { .. })),
                "{value:?} should not decode"
            );
        }
    }

    #[test]
    fn rejects_empty_value() {
        assert!(matches!(
            decode("", 10),
            Err(MathError::InvalidDigit { position: 0, .. })
        ));
    }

    #[test]
    fn rejects_bases_out_of_range() {
        for base in [0, 1, 37, 64] {
            assert_eq!(
                decode("1", base),
                Err(MathError::InvalidBase(base.to_string()))
            );
        }
    }

    #[test]
    fn decodes_values_wider_than_u128() {
        let text = "f".repeat(64);
        let expected = (BigUint::from(1u32) << 256usize) - 1u32;
        assert_eq!(decode(&text, 16).unwrap(), expected);
    }

    #[test]
    fn parses_textual_bases() {
        assert_eq!(parse_base("16").unwrap(), 16);
        assert_eq!(parse_base(" 2 ").unwrap(), 2);
        assert_eq!(
            parse_base("sixteen"),
            Err(MathError::InvalidBase("sixteen".into()))
        );
        assert_eq!(parse_base("40"), Err(MathError::InvalidBase("40".into())));
    }

    #[test]
    fn encodes_zero_and_lowercase_digits() {
        assert_eq!(encode(&BigUint::zero(), 7).unwrap(), "0");
        assert_eq!(encode(&BigUint::from(35u32), 36).unwrap(), "z");
        assert_eq!(encode(&BigUint::from(255u32), 16).unwrap(), "ff");
        assert!(encode(&BigUint::from(1u32), 1).is_err());
    }
}
