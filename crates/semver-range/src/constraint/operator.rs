//! Operator types for comparators

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::SemverError;

/// Comparison operators for range comparators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal (=)
    Equal,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
}

impl Operator {
    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
        }
    }

    /// Whether an ordering between candidate and bound satisfies this operator
    pub fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            Operator::Equal => ordering == Ordering::Equal,
            Operator::LessThan => ordering == Ordering::Less,
            Operator::LessThanOrEqual => ordering != Ordering::Greater,
            Operator::GreaterThan => ordering == Ordering::Greater,
            Operator::GreaterThanOrEqual => ordering != Ordering::Less,
        }
    }

    /// Get all supported operators
    pub fn supported_operators() -> &'static [&'static str] {
        &["=", "<", "<=", ">", ">="]
    }
}

impl FromStr for Operator {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "=" => Ok(Operator::Equal),
            "<" => Ok(Operator::LessThan),
            "<=" => Ok(Operator::LessThanOrEqual),
            ">" => Ok(Operator::GreaterThan),
            ">=" => Ok(Operator::GreaterThanOrEqual),
            _ => Err(SemverError::invalid_range(
                s,
                format!("expected one of: {}", Operator::supported_operators().join(", ")),
            )),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("".parse::<Operator>().unwrap(), Operator::Equal);
        assert_eq!("=".parse::<Operator>().unwrap(), Operator::Equal);
        assert_eq!(">=".parse::<Operator>().unwrap(), Operator::GreaterThanOrEqual);
        assert_eq!("<".parse::<Operator>().unwrap(), Operator::LessThan);
        assert!("!=".parse::<Operator>().is_err());
        assert!("==".parse::<Operator>().is_err());
    }

    #[test]
    fn test_accepts() {
        assert!(Operator::LessThanOrEqual.accepts(Ordering::Equal));
        assert!(Operator::LessThanOrEqual.accepts(Ordering::Less));
        assert!(!Operator::LessThan.accepts(Ordering::Equal));
        assert!(Operator::GreaterThanOrEqual.accepts(Ordering::Greater));
        assert!(!Operator::GreaterThan.accepts(Ordering::Less));
        assert!(!Operator::Equal.accepts(Ordering::Greater));
    }
}
