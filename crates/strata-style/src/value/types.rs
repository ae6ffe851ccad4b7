//! Raw and parsed style value representations.

use std::fmt;

/// A raw style value crossing the public API boundary.
///
/// Style values arrive and leave as loosely-typed data: a bare number, a
/// string with or without a unit, or a list of either (grouped transform
/// values such as `translate` and `scale`). `Value` is the tagged union
/// over those shapes.
///
/// # Example
///
/// ```
/// use strata_style::Value;
///
/// assert_eq!(Value::from(100.0).to_css(), "100");
/// assert_eq!(Value::from("100px").to_css(), "100px");
/// assert_eq!(Value::from(vec![Value::from(1.5), Value::from(2.0)]).to_css(), "1.5, 2");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A bare number.
    Num(f64),
    /// A string, possibly carrying a unit or keyword.
    Str(String),
    /// A list of values (grouped transform components).
    List(Vec<Value>),
}

impl Value {
    /// The string form, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric form, if this is a bare number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Num(n) => Some(*n),
            _ => None,
        }
    }

    /// Whether this value equals the given keyword string.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.as_str() == Some(keyword)
    }

    /// Serialize for assignment to a platform style property.
    ///
    /// Numbers use their shortest decimal form; lists comma-join.
    pub fn to_css(&self) -> String {
        match self {
            Value::Num(n) => n.to_string(),
            Value::Str(s) => s.clone(),
            Value::List(items) => items
                .iter()
                .map(Value::to_css)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Num(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Num(value.into())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::List(values)
    }
}

/// A parsed style value: a number with its unit, a color, or the original
/// text when no number could be extracted.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueUnit {
    /// A numeric measurement with its unit (`""` for unitless numbers).
    Numeric {
        /// The numeric value.
        value: f64,
        /// The unit the value is measured in.
        unit: &'static str,
    },
    /// A color in `#rrggbb` form.
    Color {
        /// The hex color string.
        value: String,
    },
    /// Unparseable input, passed through unchanged with an empty unit.
    Raw {
        /// The original value text.
        value: String,
    },
    /// Element-wise parse of a list value.
    List(Vec<ValueUnit>),
}

impl ValueUnit {
    /// The numeric value, if one was parsed.
    pub fn number(&self) -> Option<f64> {
        match self {
            ValueUnit::Numeric { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// The unit tag: a measurement unit, `"hex"` for colors, `""` for raw
    /// pass-through and lists.
    pub fn unit(&self) -> &'static str {
        match self {
            ValueUnit::Numeric { unit, .. } => unit,
            ValueUnit::Color { .. } => "hex",
            ValueUnit::Raw { .. } | ValueUnit::List(_) => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_serialization() {
        assert_eq!(Value::from(100.0).to_css(), "100");
        assert_eq!(Value::from(0.5).to_css(), "0.5");
        assert_eq!(Value::from("left").to_css(), "left");
        let list = Value::from(vec![Value::from("100px"), Value::from(50.0)]);
        assert_eq!(list.to_css(), "100px, 50");
    }

    #[test]
    fn value_accessors() {
        assert_eq!(Value::from(2.0).as_number(), Some(2.0));
        assert_eq!(Value::from("auto").as_str(), Some("auto"));
        assert!(Value::from("auto").is_keyword("auto"));
        assert!(!Value::from(0.0).is_keyword("auto"));
    }

    #[test]
    fn value_unit_accessors() {
        let numeric = ValueUnit::Numeric {
            value: 100.0,
            unit: "px",
        };
        assert_eq!(numeric.number(), Some(100.0));
        assert_eq!(numeric.unit(), "px");

        let color = ValueUnit::Color {
            value: "#ffffff".to_string(),
        };
        assert_eq!(color.unit(), "hex");
        assert_eq!(color.number(), None);

        let raw = ValueUnit::Raw {
            value: "float".to_string(),
        };
        assert_eq!(raw.unit(), "");
    }
}
