// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lenient cell values.

extern crate alloc;

use alloc::string::String;
use core::fmt;

/// A single cell of a [`Dataset`](crate::Dataset).
///
/// Cells are typed leniently at load time: numeric-looking text becomes [`Value::Number`],
/// blank cells become [`Value::Null`], and everything else stays [`Value::Text`].
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// A finite number.
    Number(f64),
    /// Free-form text.
    Text(String),
    /// A missing cell.
    #[default]
    Null,
}

impl Value {
    /// Returns the numeric payload, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the text payload, if this is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns `true` for [`Value::Number`].
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(String::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Numbers print in their shortest round-trip form (`10`, `2.5`); nulls print as nothing.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Avoid printing `-0`.
            Self::Number(v) if *v == 0.0 => f.write_str("0"),
            Self::Number(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
            Self::Null => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use super::*;

    #[test]
    fn display_uses_shortest_number_form() {
        assert_eq!(Value::Number(10.0).to_string(), "10");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::Number(-0.0).to_string(), "0");
        assert_eq!(Value::from("Category A").to_string(), "Category A");
        assert_eq!(Value::Null.to_string(), "");
    }

    #[test]
    fn optional_values_map_to_null() {
        assert_eq!(Value::from(None::<f64>), Value::Null);
        assert_eq!(Value::from(Some(3.0)), Value::Number(3.0));
    }
}
