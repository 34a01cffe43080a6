//! Arbitrary-precision literal values.
//!
//! Numeric literals reach the front end as exact decimal text (`42`, `3.25`, `.5`). They are kept
//! exact: [`Integer`] wraps a [`BigInt`], and [`Float`] is a normalized decimal `digits / 10^scale`.
//!
//! ## Notes
//! - There is no sign in literal syntax; both constructors reject `-` and `+`.
//! - [`Float`] is normalized on construction (no trailing fractional zeros), so `1.50 == 1.5`
//!   structurally and `Hash` agrees with `Eq`.
//!
//! ## Examples
//! ```rust
//! use nepl_core::{Float, Integer};
//!
//! let big = Integer::from_decimal("123456789012345678901234567890").unwrap();
//! assert!(big > Integer::from(1_i64));
//!
//! let half = Float::from_decimal(".5").unwrap();
//! assert_eq!(half, Float::from_decimal("0.500").unwrap());
//! assert_eq!(half.to_string(), "0.5");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};
use thiserror::Error;

/// Error produced when decimal text is not a valid literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericError {
    #[error("invalid integer literal `{0}`")]
    InvalidInteger(String),

    #[error("invalid float literal `{0}`")]
    InvalidFloat(String),
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

// ============================================================================
// Integer
// ============================================================================

/// Arbitrary-precision integer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Integer(BigInt);

impl Integer {
    /// Parse a non-empty run of ASCII decimal digits.
    pub fn from_decimal(text: &str) -> Result<Self, NumericError> {
        if text.is_empty() || !all_digits(text) {
            return Err(NumericError::InvalidInteger(text.to_string()));
        }
        BigInt::parse_bytes(text.as_bytes(), 10)
            .map(Integer)
            .ok_or_else(|| NumericError::InvalidInteger(text.to_string()))
    }

    /// Return the value as `i64` if it fits.
    pub fn to_i64(&self) -> Option<i64> {
        self.0.to_i64()
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Integer(BigInt::from(value))
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Integer(BigInt::from(value))
    }
}

impl From<BigInt> for Integer {
    fn from(value: BigInt) -> Self {
        Integer(value)
    }
}

impl FromStr for Integer {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Integer::from_decimal(s)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Float
// ============================================================================

/// Exact arbitrary-precision decimal: `digits / 10^scale`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Float {
    digits: BigInt,
    scale: u32,
}

impl Float {
    /// Parse `digits* '.' digits+` (at least one digit after the point).
    pub fn from_decimal(text: &str) -> Result<Self, NumericError> {
        let invalid = || NumericError::InvalidFloat(text.to_string());

        let (whole, frac) = text.split_once('.').ok_or_else(invalid)?;
        if frac.is_empty() || !all_digits(whole) || !all_digits(frac) {
            return Err(invalid());
        }

        let scale = u32::try_from(frac.len()).map_err(|_| invalid())?;
        let mut combined = String::with_capacity(whole.len() + frac.len());
        combined.push_str(whole);
        combined.push_str(frac);
        let digits = BigInt::parse_bytes(combined.as_bytes(), 10).ok_or_else(invalid)?;

        Ok(Float::normalized(digits, scale))
    }

    fn normalized(mut digits: BigInt, mut scale: u32) -> Self {
        if digits.is_zero() {
            return Float { digits, scale: 0 };
        }
        while scale > 0 && (&digits % 10u32).is_zero() {
            digits /= 10u32;
            scale -= 1;
        }
        Float { digits, scale }
    }

    /// `digits` rescaled to `scale` (which must be `>= self.scale`).
    fn rescaled(&self, scale: u32) -> BigInt {
        let shift = (scale - self.scale) as usize;
        &self.digits * num_traits::pow(BigInt::from(10u32), shift)
    }
}

impl Ord for Float {
    fn cmp(&self, other: &Self) -> Ordering {
        let scale = self.scale.max(other.scale);
        self.rescaled(scale).cmp(&other.rescaled(scale))
    }
}

impl PartialOrd for Float {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Float {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Float::from_decimal(s)
    }
}

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.digits.is_negative() {
            write!(f, "-")?;
        }
        let magnitude = self.digits.magnitude().to_string();
        let scale = self.scale as usize;
        if scale == 0 {
            return write!(f, "{magnitude}.0");
        }
        let padded = format!("{magnitude:0>width$}", width = scale + 1);
        let (whole, frac) = padded.split_at(padded.len() - scale);
        write!(f, "{whole}.{frac}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_rejects_non_digits() {
        assert!(Integer::from_decimal("").is_err());
        assert!(Integer::from_decimal("-1").is_err());
        assert!(Integer::from_decimal("1_000").is_err());
        assert!(Integer::from_decimal("12a").is_err());
    }

    #[test]
    fn test_integer_beyond_i64() {
        let n = Integer::from_decimal("99999999999999999999999").unwrap();
        assert_eq!(n.to_i64(), None);
        assert_eq!(n.to_string(), "99999999999999999999999");
        assert!(n > Integer::from(i64::MAX));
    }

    #[test]
    fn test_float_requires_fraction_digits() {
        assert!(Float::from_decimal("3.").is_err());
        assert!(Float::from_decimal("3").is_err());
        assert!(Float::from_decimal("1.2.3").is_err());
        assert!(Float::from_decimal(".5").is_ok());
    }

    #[test]
    fn test_float_normalization_and_display() {
        assert_eq!(Float::from_decimal("1.50").unwrap().to_string(), "1.5");
        assert_eq!(Float::from_decimal("2.0").unwrap().to_string(), "2.0");
        assert_eq!(Float::from_decimal(".05").unwrap().to_string(), "0.05");
        assert_eq!(Float::from_decimal("0.000").unwrap().to_string(), "0.0");
        assert_eq!(Float::from_decimal("10.25").unwrap().scale, 2);
    }

    #[test]
    fn test_float_ordering_across_scales() {
        let a = Float::from_decimal("1.5").unwrap();
        let b = Float::from_decimal("1.25").unwrap();
        let c = Float::from_decimal("01.500").unwrap();
        assert!(a > b);
        assert_eq!(a.cmp(&c), Ordering::Equal);
        assert_eq!(a, c);
    }
}
