//! Arbitrary-precision decimal for `float` and `double` values.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use thiserror::Error;

/// A decimal number `unscaled * 10^-scale`.
///
/// The scale is the number of fraction digits in the source literal, so
/// `0.2500` keeps its four places instead of collapsing to `0.25`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Decimal {
    unscaled: BigInt,
    scale: u32,
}

/// Error for text that is not `-?digits.digits`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid decimal literal \"{0}\"")]
pub struct ParseDecimalError(pub String);

impl Decimal {
    /// Create a decimal from its digits and the number of fraction places.
    pub fn new(unscaled: BigInt, scale: u32) -> Self {
        Self { unscaled, scale }
    }

    /// All digits of the number with the decimal point removed.
    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// Number of digits after the decimal point.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.unscaled.is_negative()
    }

    /// Nearest `f64`. Lossy for literals with more precision than a double.
    pub fn to_f64(&self) -> f64 {
        self.to_string().parse().unwrap_or(f64::NAN)
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseDecimalError(s.to_string());
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (int_part, frac_part) = body.split_once('.').ok_or_else(err)?;
        let all_digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_part) || !all_digits(frac_part) {
            return Err(err());
        }

        let digits = format!("{}{}", int_part, frac_part);
        let magnitude: BigInt = digits.parse().map_err(|_| err())?;
        let unscaled = if negative { -magnitude } else { magnitude };
        let scale = u32::try_from(frac_part.len()).map_err(|_| err())?;
        Ok(Self { unscaled, scale })
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = self.scale as usize;
        let mut digits = self.unscaled.abs().to_string();
        if digits.len() <= scale {
            digits = format!("{}{}", "0".repeat(scale + 1 - digits.len()), digits);
        }
        let (int_part, frac_part) = digits.split_at(digits.len() - scale);
        if self.is_negative() {
            write!(f, "-")?;
        }
        if scale == 0 {
            write!(f, "{}", int_part)
        } else {
            write!(f, "{}.{}", int_part, frac_part)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_declared_precision() {
        let d: Decimal = "0.2500000000000000000000000".parse().unwrap();
        assert_eq!(d.scale(), 25);
        assert_eq!(d.to_string(), "0.2500000000000000000000000");
    }

    #[test]
    fn test_negative() {
        let d: Decimal = "-12.05".parse().unwrap();
        assert!(d.is_negative());
        assert_eq!(d.unscaled(), &BigInt::from(-1205));
        assert_eq!(d.to_string(), "-12.05");
        assert_eq!(d.to_f64(), -12.05);
    }

    #[test]
    fn test_zero_keeps_scale() {
        let d: Decimal = "0.000".parse().unwrap();
        assert!(d.is_zero());
        assert!(!d.is_negative());
        assert_eq!(d.to_string(), "0.000");
        assert!(!"0.001".parse::<Decimal>().unwrap().is_zero());
    }

    #[test]
    fn test_small_magnitude_padding() {
        let d = Decimal::new(BigInt::from(5), 3);
        assert_eq!(d.to_string(), "0.005");
        let d = Decimal::new(BigInt::from(-5), 3);
        assert_eq!(d.to_string(), "-0.005");
    }

    #[test]
    fn test_beyond_f64_precision() {
        let d: Decimal = "1.0000000000000000000000001".parse().unwrap();
        assert_eq!(d.to_string(), "1.0000000000000000000000001");
        assert_eq!(d.to_f64(), 1.0);
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in ["", "1", "1.", ".5", "1.2.3", "--1.0", "1.0e5", "+1.0", "1,5"] {
            assert!(bad.parse::<Decimal>().is_err(), "accepted {:?}", bad);
        }
    }
}
