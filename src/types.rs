//! Ternary values used in truth-table rows and implicants.
//!
//! A position of a row is either a fixed Boolean value or a don't-care
//! marking a variable the implicant does not constrain.
use std::fmt;

use crate::error::Malformed;

/// A single position of a ternary row.
///
/// The derived order `Zero < One < DontCare` induces the lexicographic order
/// on rows which is used to break ties deterministically.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Value {
    /// The variable must be false (negated literal).
    Zero,
    /// The variable must be true (positive literal).
    One,
    /// The variable is not constrained.
    DontCare,
}

impl Value {
    /// Returns `true` for `Zero` and `One`.
    pub fn is_literal(self) -> bool {
        !matches!(self, Value::DontCare)
    }

    /// Returns the Boolean value of a literal, or `None` for a don't-care.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Value::Zero => Some(false),
            Value::One => Some(true),
            Value::DontCare => None,
        }
    }

    /// Checks whether this position accepts the given Boolean value.
    pub fn accepts(self, bit: bool) -> bool {
        match self {
            Value::Zero => !bit,
            Value::One => bit,
            Value::DontCare => true,
        }
    }

    /// Checks whether `self` and `other` are the complementary pair `0`/`1`.
    pub fn is_complement_of(self, other: Value) -> bool {
        matches!(
            (self, other),
            (Value::Zero, Value::One) | (Value::One, Value::Zero)
        )
    }

    pub fn to_char(self) -> char {
        match self {
            Value::Zero => '0',
            Value::One => '1',
            Value::DontCare => '-',
        }
    }

    pub fn from_char(c: char) -> Result<Self, Malformed> {
        match c {
            '0' => Ok(Value::Zero),
            '1' => Ok(Value::One),
            '-' => Ok(Value::DontCare),
            _ => Err(Malformed::InvalidValue(c.to_string())),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl From<bool> for Value {
    fn from(bit: bool) -> Self {
        if bit {
            Value::One
        } else {
            Value::Zero
        }
    }
}

impl TryFrom<u8> for Value {
    type Error = Malformed;

    /// Converts a truth-table bit. Only `0` and `1` are accepted.
    fn try_from(bit: u8) -> Result<Self, Self::Error> {
        match bit {
            0 => Ok(Value::Zero),
            1 => Ok(Value::One),
            _ => Err(Malformed::InvalidValue(bit.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order() {
        assert!(Value::Zero < Value::One);
        assert!(Value::One < Value::DontCare);
    }

    #[test]
    fn test_accepts() {
        assert!(Value::Zero.accepts(false));
        assert!(!Value::Zero.accepts(true));
        assert!(Value::One.accepts(true));
        assert!(!Value::One.accepts(false));
        assert!(Value::DontCare.accepts(true));
        assert!(Value::DontCare.accepts(false));
    }

    #[test]
    fn test_complement() {
        assert!(Value::Zero.is_complement_of(Value::One));
        assert!(Value::One.is_complement_of(Value::Zero));
        assert!(!Value::One.is_complement_of(Value::One));
        assert!(!Value::DontCare.is_complement_of(Value::Zero));
        assert!(!Value::One.is_complement_of(Value::DontCare));
    }

    #[test]
    fn test_chars() {
        for v in [Value::Zero, Value::One, Value::DontCare] {
            assert_eq!(Value::from_char(v.to_char()), Ok(v));
        }
        assert_eq!(
            Value::from_char('x'),
            Err(Malformed::InvalidValue("x".to_string()))
        );
    }

    #[test]
    fn test_from_bit() {
        assert_eq!(Value::try_from(0u8), Ok(Value::Zero));
        assert_eq!(Value::try_from(1u8), Ok(Value::One));
        assert!(Value::try_from(2u8).is_err());
        assert_eq!(Value::from(true), Value::One);
    }
}
