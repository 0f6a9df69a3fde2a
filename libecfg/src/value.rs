//! Leaf values: a name, one of six type keywords and the literal data.

use std::fmt;
use std::str::FromStr;

use num_bigint::{BigInt, BigUint};
use serde::Serialize;

use crate::decimal::Decimal;
use crate::error::DecodeError;

/// The closed set of value type keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    UChar,
    UInt,
    Int,
    Float,
    Double,
    String,
}

impl ValueType {
    /// Every type, in the order the grammar tries them.
    pub const ALL: [ValueType; 6] = [
        ValueType::UChar,
        ValueType::UInt,
        ValueType::Int,
        ValueType::Float,
        ValueType::Double,
        ValueType::String,
    ];

    /// The keyword as written in e.cfg text.
    pub fn keyword(self) -> &'static str {
        match self {
            ValueType::UChar => "uchar",
            ValueType::UInt => "uint",
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::Double => "double",
            ValueType::String => "string",
        }
    }

    /// Look up a type by keyword.
    pub fn from_keyword(s: &str) -> Option<ValueType> {
        ValueType::ALL.into_iter().find(|t| t.keyword() == s)
    }

    pub fn is_unsigned(self) -> bool {
        matches!(self, ValueType::UChar | ValueType::UInt)
    }

    pub fn is_decimal(self) -> bool {
        matches!(self, ValueType::Float | ValueType::Double)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Error for a string that is not one of the six type keywords.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown value type \"{0}\"")]
pub struct UnknownValueType(pub String);

impl FromStr for ValueType {
    type Err = UnknownValueType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValueType::from_keyword(s).ok_or_else(|| UnknownValueType(s.to_string()))
    }
}

/// A named, typed scalar.
///
/// `data` is the literal as captured by the grammar: numeric text exactly as
/// written, or the unquoted content of a string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Value {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: ValueType,
    pub data: String,
}

/// Native projection of a value's data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decoded {
    /// `uchar` and `uint`.
    Unsigned(BigUint),
    /// `int`.
    Signed(BigInt),
    /// `float` and `double`.
    Decimal(Decimal),
    /// `string`.
    String(String),
}

impl Value {
    pub fn new(name: impl Into<String>, ty: ValueType, data: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty,
            data: data.into(),
        }
    }

    /// Read `data` as the native type for `ty`. Computed on every call.
    pub fn decoded(&self) -> Result<Decoded, DecodeError> {
        let data = self.data.as_str();
        match self.ty {
            ValueType::UChar | ValueType::UInt => {
                if !is_digits(data) {
                    return Err(DecodeError::NotUnsigned {
                        ty: self.ty,
                        data: self.data.clone(),
                    });
                }
                data.parse().map(Decoded::Unsigned).map_err(|_| {
                    DecodeError::NotUnsigned {
                        ty: self.ty,
                        data: self.data.clone(),
                    }
                })
            }
            ValueType::Int => {
                if !is_digits(data.strip_prefix('-').unwrap_or(data)) {
                    return Err(DecodeError::NotInteger {
                        ty: self.ty,
                        data: self.data.clone(),
                    });
                }
                data.parse()
                    .map(Decoded::Signed)
                    .map_err(|_| DecodeError::NotInteger {
                        ty: self.ty,
                        data: self.data.clone(),
                    })
            }
            ValueType::Float | ValueType::Double => data
                .parse()
                .map(Decoded::Decimal)
                .map_err(|_| DecodeError::NotDecimal {
                    ty: self.ty,
                    data: self.data.clone(),
                }),
            ValueType::String => Ok(Decoded::String(self.data.clone())),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Value(name={:?}, type={}, data={:?})",
            self.name, self.ty, self.data
        )
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl Decoded {
    pub fn as_unsigned(&self) -> Option<&BigUint> {
        match self {
            Decoded::Unsigned(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_signed(&self) -> Option<&BigInt> {
        match self {
            Decoded::Signed(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<&Decimal> {
        match self {
            Decoded::Decimal(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Decoded::String(s) => Some(s),
            _ => None,
        }
    }
}
