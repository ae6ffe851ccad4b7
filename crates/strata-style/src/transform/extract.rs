//! Extraction of logical components from a transform matrix.

use crate::transform::{TransformComponent, TransformMatrix};
use crate::value::Value;

fn px(value: f64) -> Value {
    Value::Str(format!("{value}px"))
}

fn deg(radians: f64) -> Value {
    Value::Str(format!("{}deg", radians.to_degrees()))
}

/// Read a logical component out of a transform matrix value.
///
/// `value` is a `matrix(…)`/`matrix3d(…)` string or an already-decoded
/// numeric list. When it is neither (e.g. a `perspective` length, `none`,
/// or the empty string), or when `property` names no extractable
/// component, the input is returned unchanged.
///
/// Translation components format as `px` strings, scale components as
/// bare numbers, rotation and skew as `deg` strings. A 2D matrix reads
/// `translateZ` as `"0px"` and `scaleZ` as `1`.
///
/// Known limitation: `rotateY` and `rotateZ` use the same extraction
/// formula as the 2D `rotate` case even when given a 3D matrix; no full
/// 3D decomposition is attempted.
///
/// # Example
///
/// ```
/// use strata_style::{Value, parse_transform};
///
/// let matrix = Value::from("matrix(1, 0, 0, 1, 100, 0)");
/// assert_eq!(parse_transform(&matrix, "translateX"), Value::from("100px"));
/// assert_eq!(parse_transform(&matrix, "scaleX"), Value::from(1.0));
/// ```
pub fn parse_transform(value: &Value, property: &str) -> Value {
    let Some(matrix) = TransformMatrix::decode(value) else {
        tracing::trace!(property, "no transform matrix present; passing value through");
        return value.clone();
    };
    let Some(component) = TransformComponent::parse(property) else {
        return value.clone();
    };

    use TransformComponent as C;
    match component {
        C::Matrix | C::Matrix3d => {
            Value::List(matrix.values().iter().map(|v| Value::Num(*v)).collect())
        }
        C::TranslateX => px(matrix.translation_x()),
        C::TranslateY => px(matrix.translation_y()),
        C::TranslateZ => px(matrix.translation_z()),
        C::Translate => Value::List(vec![
            px(matrix.translation_x()),
            px(matrix.translation_y()),
        ]),
        C::Translate3d => Value::List(vec![
            px(matrix.translation_x()),
            px(matrix.translation_y()),
            px(matrix.translation_z()),
        ]),
        C::ScaleX => Value::Num(matrix.scale_x()),
        C::ScaleY => Value::Num(matrix.scale_y()),
        C::ScaleZ => Value::Num(matrix.scale_z()),
        C::Scale => Value::List(vec![
            Value::Num(matrix.scale_x()),
            Value::Num(matrix.scale_y()),
        ]),
        C::Scale3d => Value::List(vec![
            Value::Num(matrix.scale_x()),
            Value::Num(matrix.scale_y()),
            Value::Num(matrix.scale_z()),
        ]),
        // rotateY/rotateZ intentionally share the 2D formula; see above.
        C::Rotate | C::RotateY | C::RotateZ => deg(matrix.get(0).acos()),
        C::RotateX => deg(matrix.get(5).acos()),
        C::SkewX => deg(matrix.get(2).atan()),
        C::SkewY => deg(matrix.get(1).atan()),
        C::Transform | C::Rotate3d | C::Perspective => value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQRT_HALF: f64 = 0.7071067811865476;

    fn degrees(value: &Value) -> f64 {
        value
            .as_str()
            .and_then(|s| s.strip_suffix("deg"))
            .and_then(|s| s.parse().ok())
            .expect("a deg-suffixed value")
    }

    #[test]
    fn matrix_returns_flat_values() {
        let value = Value::from("matrix(1, 0, 0, 1, 100, 50)");
        let expected: Vec<Value> = [1.0, 0.0, 0.0, 1.0, 100.0, 50.0]
            .iter()
            .map(|v| Value::Num(*v))
            .collect();
        assert_eq!(parse_transform(&value, "matrix"), Value::List(expected));
    }

    #[test]
    fn translate_components_format_as_px() {
        let two_d = Value::from("matrix(1, 0, 0, 1, 100, 50)");
        assert_eq!(parse_transform(&two_d, "translateX"), Value::from("100px"));
        assert_eq!(parse_transform(&two_d, "translateY"), Value::from("50px"));
        assert_eq!(parse_transform(&two_d, "translateZ"), Value::from("0px"));

        let three_d =
            Value::from("matrix3d(1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 100, 50, 25, 1)");
        assert_eq!(parse_transform(&three_d, "translateX"), Value::from("100px"));
        assert_eq!(parse_transform(&three_d, "translateZ"), Value::from("25px"));
    }

    #[test]
    fn grouped_translate_forms() {
        let matrix = Value::from("matrix(1, 0, 0, 1, 100, 100)");
        assert_eq!(
            parse_transform(&matrix, "translate"),
            Value::List(vec![Value::from("100px"), Value::from("100px")])
        );

        let three_d =
            Value::from("matrix3d(1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 100, 100, 100, 1)");
        assert_eq!(
            parse_transform(&three_d, "translate3d"),
            Value::List(vec![
                Value::from("100px"),
                Value::from("100px"),
                Value::from("100px"),
            ])
        );
    }

    #[test]
    fn scale_components_are_bare_numbers() {
        let matrix = Value::from("matrix(0.5, 0, 0, 0.4, 0, 0)");
        assert_eq!(parse_transform(&matrix, "scaleX"), Value::Num(0.5));
        assert_eq!(parse_transform(&matrix, "scaleY"), Value::Num(0.4));
        assert_eq!(parse_transform(&matrix, "scaleZ"), Value::Num(1.0));
        assert_eq!(
            parse_transform(&matrix, "scale"),
            Value::List(vec![Value::Num(0.5), Value::Num(0.4)])
        );

        let three_d =
            Value::from("matrix3d(0.5, 0, 0, 0, 0, 0.5, 0, 0, 0, 0, 0.5, 0, 0, 0, 0, 1)");
        assert_eq!(parse_transform(&three_d, "scaleZ"), Value::Num(0.5));
        assert_eq!(
            parse_transform(&three_d, "scale3d"),
            Value::List(vec![Value::Num(0.5), Value::Num(0.5), Value::Num(0.5)])
        );
    }

    #[test]
    fn rotation_extracts_degrees() {
        let rotated = Value::from(format!(
            "matrix({SQRT_HALF}, {SQRT_HALF}, -{SQRT_HALF}, {SQRT_HALF}, 0, 0)"
        ));
        let angle = degrees(&parse_transform(&rotated, "rotate"));
        assert!((angle - 45.0).abs() < 1e-9, "got {angle}");

        let rotated_x = Value::from(format!(
            "matrix3d(1, 0, 0, 0, 0, {SQRT_HALF}, {SQRT_HALF}, 0, 0, -{SQRT_HALF}, {SQRT_HALF}, 0, 0, 0, 0, 1)"
        ));
        let angle = degrees(&parse_transform(&rotated_x, "rotateX"));
        assert!((angle - 45.0).abs() < 1e-9, "got {angle}");
    }

    #[test]
    fn skew_extracts_degrees() {
        let skewed_x = Value::from("matrix(1, 0, 1, 1, 0, 0)");
        let angle = degrees(&parse_transform(&skewed_x, "skewX"));
        assert!((angle - 45.0).abs() < 1e-9, "got {angle}");

        let skewed_y = Value::from("matrix(1, 1, 0, 1, 0, 0)");
        let angle = degrees(&parse_transform(&skewed_y, "skewY"));
        assert!((angle - 45.0).abs() < 1e-9, "got {angle}");
    }

    #[test]
    fn identity_round_trip() {
        let identity = Value::from("matrix(1, 0, 0, 1, 0, 0)");
        assert_eq!(parse_transform(&identity, "translateX"), Value::from("0px"));
        assert_eq!(parse_transform(&identity, "scaleX"), Value::Num(1.0));
    }

    #[test]
    fn non_matrix_values_pass_through() {
        let value = Value::from("17px");
        assert_eq!(parse_transform(&value, "perspective"), value);

        let empty = Value::from("");
        assert_eq!(parse_transform(&empty, "translateX"), empty);
    }

    #[test]
    fn unknown_components_pass_through() {
        let matrix = Value::from("matrix(1, 0, 0, 1, 0, 0)");
        assert_eq!(parse_transform(&matrix, "transform"), matrix);
        assert_eq!(parse_transform(&matrix, "not-a-component"), matrix);
    }
}
