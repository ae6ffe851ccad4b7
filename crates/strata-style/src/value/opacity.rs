//! Opacity codec, covering the legacy filter-based form.
//!
//! Old platforms without an `opacity` property express it through the
//! `filter` property as `alpha(opacity=N)` with `N` in percent. The codec
//! converts between that form and the standard 0–1 float.

use std::sync::LazyLock;

use regex::Regex;

use crate::value::{Value, leading_float};

/// Percentage capture inside a legacy alpha filter value.
static RE_FILTER_OPACITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)opacity=(\d+)").expect("filter opacity pattern"));

/// How this platform expresses opacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpacityMode {
    /// The standard `opacity` property holding a 0–1 float.
    #[default]
    Standard,
    /// The legacy `filter: alpha(opacity=N)` form.
    Filter,
}

/// Parse a platform opacity value into a 0–1 float.
///
/// The empty string means "unset" and yields `None`, not zero. In filter
/// mode a value without the `opacity=N` pattern also yields `None`:
/// callers must treat that as unknown, not as fully transparent.
pub fn parse_opacity(value: &str, mode: OpacityMode) -> Option<f64> {
    if value.is_empty() {
        return None;
    }
    match mode {
        OpacityMode::Filter => {
            let captures = RE_FILTER_OPACITY.captures(value)?;
            let percent: f64 = captures.get(1)?.as_str().parse().ok()?;
            Some(percent / 100.0)
        }
        OpacityMode::Standard => leading_float(value),
    }
}

/// Convert an opacity value into the form this platform assigns.
///
/// Standard mode passes the parsed float through; filter mode formats the
/// legacy `alpha(opacity=N)` string. Input with no parseable number is
/// returned unchanged.
pub fn opacity_value(value: &Value, mode: OpacityMode) -> Value {
    let number = match value {
        Value::Num(n) => Some(*n),
        Value::Str(s) => leading_float(s),
        Value::List(_) => None,
    };
    let Some(number) = number else {
        return value.clone();
    };
    match mode {
        OpacityMode::Filter => Value::Str(format!("alpha(opacity={})", number * 100.0)),
        OpacityMode::Standard => Value::Num(number),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_mode_parses_floats() {
        assert_eq!(parse_opacity("0.5", OpacityMode::Standard), Some(0.5));
        assert_eq!(parse_opacity("1", OpacityMode::Standard), Some(1.0));
        assert_eq!(parse_opacity("", OpacityMode::Standard), None);
    }

    #[test]
    fn filter_mode_extracts_percentage() {
        assert_eq!(
            parse_opacity("alpha(opacity=50)", OpacityMode::Filter),
            Some(0.5)
        );
        assert_eq!(
            parse_opacity("alpha(Opacity=100)", OpacityMode::Filter),
            Some(1.0)
        );
    }

    #[test]
    fn filter_mode_without_match_is_unknown() {
        assert_eq!(parse_opacity("blur(5px)", OpacityMode::Filter), None);
        assert_eq!(parse_opacity("", OpacityMode::Filter), None);
    }

    #[test]
    fn round_trip_both_modes() {
        for mode in [OpacityMode::Standard, OpacityMode::Filter] {
            let encoded = opacity_value(&Value::from(0.5), mode);
            let parsed = parse_opacity(&encoded.to_css(), mode);
            assert_eq!(parsed, Some(0.5), "mode {mode:?}");
        }
    }

    #[test]
    fn unparseable_input_passes_through() {
        let value = Value::from("inherit");
        assert_eq!(opacity_value(&value, OpacityMode::Filter), value);
    }
}
