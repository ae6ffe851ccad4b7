//! Parsing of raw style values into numbers, units, and colors.

use std::sync::LazyLock;

use regex::Regex;

use crate::property::tables::{default_unit, is_color_property};
use crate::value::{Value, ValueUnit};

/// Recognized unit suffixes.
static RE_UNITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(px|%|em|ms|s|deg)$").expect("unit pattern"));

/// `rgb(r, g, b)` color form.
static RE_RGB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"rgb\((\d+),\s?(\d+),\s?(\d+)\)").expect("rgb pattern"));

/// Leading numeric prefix of a value string.
static RE_FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("float pattern")
});

/// Parse the leading float of a value string, ignoring any trailing text.
///
/// `"100px"` parses as `100`; input with no leading number yields `None`.
pub(crate) fn leading_float(value: &str) -> Option<f64> {
    RE_FLOAT
        .find(value.trim_start())
        .and_then(|m| m.as_str().parse().ok())
}

/// Whether a string value already carries a recognized unit suffix.
pub(crate) fn has_unit_suffix(value: &str) -> bool {
    RE_UNITS.is_match(value)
}

fn unit_suffix(value: &str) -> Option<&'static str> {
    let captures = RE_UNITS.captures(value)?;
    let unit = match captures.get(1)?.as_str() {
        "px" => "px",
        "%" => "%",
        "em" => "em",
        "ms" => "ms",
        "s" => "s",
        "deg" => "deg",
        _ => return None,
    };
    Some(unit)
}

/// Split a raw style value into a number and its unit.
///
/// - `None` and the keyword `none` normalize to `0`.
/// - Lists parse element-wise, preserving shape.
/// - Color properties parse `rgb(r, g, b)` into `#rrggbb`; anything not in
///   hex or rgb form falls back to `#ffffff`.
/// - Everything else parses a leading float; the unit comes from an
///   explicit suffix, then the per-property default table, then `px`.
///   Input with no leading number is returned unchanged with an empty
///   unit.
pub fn parse_number(value: Option<&Value>, property: &str) -> ValueUnit {
    if let Some(Value::List(items)) = value {
        return ValueUnit::List(
            items
                .iter()
                .map(|item| parse_number(Some(item), property))
                .collect(),
        );
    }

    // Absent values and `none` both read as zero.
    let zero = Value::Num(0.0);
    let value = match value {
        None => &zero,
        Some(v) if v.is_keyword("none") => &zero,
        Some(v) => v,
    };

    if is_color_property(property) {
        return parse_color(value);
    }

    let (number, explicit_unit) = match value {
        Value::Num(n) => (Some(*n), None),
        Value::Str(s) => (leading_float(s), unit_suffix(s)),
        // Lists were handled element-wise above.
        Value::List(_) => (None, None),
    };

    match number {
        Some(number) => ValueUnit::Numeric {
            value: number,
            unit: explicit_unit
                .or_else(|| default_unit(property))
                .unwrap_or("px"),
        },
        None => ValueUnit::Raw {
            value: value.to_css(),
        },
    }
}

fn parse_color(value: &Value) -> ValueUnit {
    let fallback = || ValueUnit::Color {
        value: "#ffffff".to_string(),
    };

    let Some(text) = value.as_str() else {
        return fallback();
    };

    if text.starts_with('#') {
        return ValueUnit::Color {
            value: text.to_string(),
        };
    }

    let Some(captures) = RE_RGB.captures(text) else {
        return fallback();
    };
    let channel = |i: usize| captures.get(i).and_then(|m| m.as_str().parse::<u8>().ok());
    match (channel(1), channel(2), channel(3)) {
        (Some(r), Some(g), Some(b)) => ValueUnit::Color {
            value: format!("#{r:02x}{g:02x}{b:02x}"),
        },
        _ => fallback(),
    }
}
