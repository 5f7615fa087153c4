use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use log::debug;

use crate::error::{Result, StatsError};

/// A parsed argument. Keeps the token as typed for display.
#[derive(Debug, Clone)]
pub struct Number {
    token: String,
    value: f64,
}

impl Number {
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    fn key_bits(&self) -> u64 {
        // -0.0 and 0.0 are the same value.
        if self.value == 0.0 {
            0
        } else {
            self.value.to_bits()
        }
    }
}

/// Exact-value equality; `2`, `2.0` and `2e0` are equal.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.key_bits() == other.key_bits()
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key_bits().hash(state);
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}

impl FromStr for Number {
    type Err = StatsError;

    fn from_str(token: &str) -> Result<Self> {
        match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Number {
                token: token.to_string(),
                value,
            }),
            _ => Err(StatsError::InvalidNumber(token.to_string())),
        }
    }
}

/// Validated, non-empty list of finite numbers in input order.
#[derive(Debug, Clone)]
pub struct NumberList {
    numbers: Vec<Number>,
    values: Vec<f64>,
}

impl NumberList {
    /// Parse every token, stopping at the first one that is not a finite
    /// number.
    pub fn parse<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let numbers = tokens
            .into_iter()
            .map(|token| token.as_ref().parse::<Number>())
            .collect::<Result<Vec<_>>>()?;

        if numbers.is_empty() {
            return Err(StatsError::EmptyInput);
        }

        debug!("parsed {} numbers", numbers.len());
        let values = numbers.iter().map(Number::value).collect();
        Ok(NumberList { numbers, values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Grouping keys for mode.
    pub fn keys(&self) -> &[Number] {
        &self.numbers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbers() {
        let list = NumberList::parse(["1", "-2.5", "3e2", "+4"]).unwrap();

        assert_eq!(list.values(), &[1.0, -2.5, 300.0, 4.0]);
        assert_eq!(list.keys()[3].token(), "+4");
        assert_eq!(list.keys().len(), 4);
    }

    #[test]
    fn test_parse_rejects_padding_and_hex() {
        for token in [" 4", "4 ", "\t4", "0x1p4", "0x10", "1_000"] {
            let err = NumberList::parse(["1", token]).unwrap_err();
            assert!(
                matches!(err, StatsError::InvalidNumber(ref bad) if bad == token),
                "{:?}",
                token
            );
        }
    }

    #[test]
    fn test_parse_empty() {
        let err = NumberList::parse(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, StatsError::EmptyInput));
        assert_eq!(err.to_string(), "Please provide a set of numbers.");
    }

    #[test]
    fn test_parse_invalid_reports_first_bad_token() {
        let err = NumberList::parse(["1", "a", "b"]).unwrap_err();
        assert!(matches!(err, StatsError::InvalidNumber(ref token) if token == "a"));
        assert_eq!(err.to_string(), "Invalid number: a");
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        for token in ["inf", "-inf", "NaN", "1e400"] {
            let err = NumberList::parse([token]).unwrap_err();
            assert!(matches!(err, StatsError::InvalidNumber(_)), "{}", token);
        }
    }

    #[test]
    fn test_number_equality_is_by_value() {
        let a: Number = "2".parse().unwrap();
        let b: Number = "2.0".parse().unwrap();
        let c: Number = "-0".parse().unwrap();
        let d: Number = "0".parse().unwrap();

        assert_eq!(a, b);
        assert_eq!(c, d);
        assert_ne!(a, d);
        assert_eq!(b.to_string(), "2.0");
    }
}
