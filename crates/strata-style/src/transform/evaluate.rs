//! Resolution of a transform function list into a single matrix.
//!
//! Platforms report an element's computed transform as one resolved
//! matrix, not the authored function list. [`resolve_transform_list`] is
//! that resolution for in-memory elements: it evaluates each function in
//! order, multiplies the results, and serializes back to `matrix(…)` when
//! every function was 2D or `matrix3d(…)` when any was 3D.

use std::sync::LazyLock;

use regex::Regex;

use crate::transform::TransformMatrix;
use crate::transform::matrix::IDENTITY_3D;
use crate::value::leading_float;

/// A single `name(arguments)` call in a transform list.
static RE_TRANSFORM_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([a-zA-Z][a-zA-Z0-9]*)\(([^)]*)\)").expect("transform function pattern")
});

/// Column-major 4x4 product `a * b`.
fn multiply(a: &[f64; 16], b: &[f64; 16]) -> [f64; 16] {
    let mut out = [0.0; 16];
    for column in 0..4 {
        for row in 0..4 {
            let mut sum = 0.0;
            for k in 0..4 {
                sum += a[k * 4 + row] * b[column * 4 + k];
            }
            out[column * 4 + row] = sum;
        }
    }
    out
}

/// Lift a 2D affine matrix into homogeneous 4x4 form.
fn lift(two_d: [f64; 6]) -> [f64; 16] {
    let [a, b, c, d, e, f] = two_d;
    let mut m = IDENTITY_3D;
    m[0] = a;
    m[1] = b;
    m[4] = c;
    m[5] = d;
    m[12] = e;
    m[13] = f;
    m
}

/// Parse a length argument in pixels. Percentages cannot be resolved
/// without layout and fail the whole evaluation.
fn length_px(argument: &str) -> Option<f64> {
    if argument.ends_with('%') {
        return None;
    }
    leading_float(argument)
}

/// Parse an angle argument into degrees.
fn angle_deg(argument: &str) -> Option<f64> {
    let number = leading_float(argument)?;
    let degrees = if argument.ends_with("grad") {
        number * 0.9
    } else if argument.ends_with("rad") {
        number.to_degrees()
    } else if argument.ends_with("turn") {
        number * 360.0
    } else {
        // "deg" or bare.
        number
    };
    Some(degrees)
}

/// The 4x4 matrix of one transform function, plus whether it is 3D.
fn function_matrix(name: &str, arguments: &[&str]) -> Option<([f64; 16], bool)> {
    let arg = |i: usize| arguments.get(i).copied();
    let length = |i: usize| arg(i).and_then(length_px);
    let number = |i: usize| arg(i).and_then(|a| leading_float(a));
    let angle = |i: usize| arg(i).and_then(angle_deg);

    let mut m = IDENTITY_3D;
    let mut is_3d = false;

    match name {
        "matrix" => {
            if arguments.len() != 6 {
                return None;
            }
            let values: Option<Vec<f64>> =
                arguments.iter().map(|a| leading_float(a)).collect();
            let values = values?;
            m = lift([values[0], values[1], values[2], values[3], values[4], values[5]]);
        }
        "matrix3d" => {
            if arguments.len() != 16 {
                return None;
            }
            for (slot, argument) in m.iter_mut().zip(arguments) {
                *slot = leading_float(argument)?;
            }
            is_3d = true;
        }
        "translate" => {
            m[12] = length(0)?;
            m[13] = length(1).unwrap_or(0.0);
        }
        "translateX" => m[12] = length(0)?,
        "translateY" => m[13] = length(0)?,
        "translateZ" => {
            m[14] = length(0)?;
            is_3d = true;
        }
        "translate3d" => {
            m[12] = length(0)?;
            m[13] = length(1)?;
            m[14] = length(2)?;
            is_3d = true;
        }
        "scale" => {
            let x = number(0)?;
            m[0] = x;
            m[5] = number(1).unwrap_or(x);
        }
        "scaleX" => m[0] = number(0)?,
        "scaleY" => m[5] = number(0)?,
        "scaleZ" => {
            m[10] = number(0)?;
            is_3d = true;
        }
        "scale3d" => {
            m[0] = number(0)?;
            m[5] = number(1)?;
            m[10] = number(2)?;
            is_3d = true;
        }
        "rotate" | "rotateZ" => {
            let (sin, cos) = angle(0)?.to_radians().sin_cos();
            m[0] = cos;
            m[1] = sin;
            m[4] = -sin;
            m[5] = cos;
        }
        "rotateX" => {
            let (sin, cos) = angle(0)?.to_radians().sin_cos();
            m[5] = cos;
            m[6] = sin;
            m[9] = -sin;
            m[10] = cos;
            is_3d = true;
        }
        "rotateY" => {
            let (sin, cos) = angle(0)?.to_radians().sin_cos();
            m[0] = cos;
            m[2] = -sin;
            m[8] = sin;
            m[10] = cos;
            is_3d = true;
        }
        "skew" => {
            m[4] = angle(0)?.to_radians().tan();
            if let Some(y) = angle(1) {
                m[1] = y.to_radians().tan();
            }
        }
        "skewX" => m[4] = angle(0)?.to_radians().tan(),
        "skewY" => m[1] = angle(0)?.to_radians().tan(),
        _ => return None,
    }

    Some((m, is_3d))
}

/// Fold a transform function list into one matrix.
///
/// Returns `None` when the value contains no recognizable transform
/// functions or any function cannot be evaluated (unknown name, percentage
/// length, malformed arguments); callers degrade to the raw value.
pub fn resolve_transform_list(value: &str) -> Option<TransformMatrix> {
    let mut product = IDENTITY_3D;
    let mut any = false;
    let mut any_3d = false;

    for captures in RE_TRANSFORM_FUNCTION.captures_iter(value) {
        let name = captures.get(1)?.as_str();
        let raw_arguments = captures.get(2)?.as_str();
        let arguments: Vec<&str> = if raw_arguments.trim().is_empty() {
            vec![]
        } else {
            raw_arguments.split(',').map(str::trim).collect()
        };

        let (matrix, is_3d) = function_matrix(name, &arguments)?;
        product = multiply(&product, &matrix);
        any = true;
        any_3d |= is_3d;
    }

    if !any {
        return None;
    }

    if any_3d {
        TransformMatrix::from_values(&product)
    } else {
        TransformMatrix::from_values(&[
            product[0], product[1], product[4], product[5], product[12], product[13],
        ])
    }
}
