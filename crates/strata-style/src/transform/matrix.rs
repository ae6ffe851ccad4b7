//! Flat transform matrices.

use std::sync::LazyLock;

use regex::Regex;

use crate::transform::TransformComponent;
use crate::value::Value;

/// Argument list of a `matrix(…)` / `matrix3d(…)` value.
static RE_MATRIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^matrix(?:3d)?\(([^)]+)").expect("matrix pattern"));

/// The 2D identity matrix in affine `[a, b, c, d, e, f]` form.
pub const IDENTITY_2D: [f64; 6] = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];

/// The 3D identity matrix in column-major flattened form.
pub const IDENTITY_3D: [f64; 16] = [
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, //
    0.0, 0.0, 0.0, 1.0,
];

/// A decoded transform matrix.
///
/// Either the 6-element 2D affine form or the 16-element column-major 3D
/// form; no other length exists. Component positions come from
/// [`TransformComponent::matrix_index`], surfaced here as named accessors
/// so flat indices appear in exactly one place.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformMatrix {
    /// 2D affine matrix `[a, b, c, d, e, f]`.
    TwoD([f64; 6]),
    /// 3D homogeneous matrix, column-major.
    ThreeD([f64; 16]),
}

impl TransformMatrix {
    /// The identity matrix of the given dimensionality.
    pub fn identity(is_3d: bool) -> Self {
        if is_3d {
            Self::ThreeD(IDENTITY_3D)
        } else {
            Self::TwoD(IDENTITY_2D)
        }
    }

    /// Build a matrix from a flat argument list.
    ///
    /// Anything other than exactly 6 or 16 values is not a matrix.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        match values.len() {
            6 => {
                let mut m = [0.0; 6];
                m.copy_from_slice(values);
                Some(Self::TwoD(m))
            }
            16 => {
                let mut m = [0.0; 16];
                m.copy_from_slice(values);
                Some(Self::ThreeD(m))
            }
            _ => None,
        }
    }

    /// Decode a `matrix(…)` / `matrix3d(…)` string.
    ///
    /// Arguments are comma-separated with arbitrary whitespace. Values not
    /// in matrix form (including `none`, the empty string, and authored
    /// function lists) yield `None`.
    pub fn from_css(value: &str) -> Option<Self> {
        let captures = RE_MATRIX.captures(value.trim())?;
        let values: Option<Vec<f64>> = captures
            .get(1)?
            .as_str()
            .split(',')
            .map(|argument| argument.trim().parse().ok())
            .collect();
        Self::from_values(&values?)
    }

    /// Decode a raw value: a matrix string, or an already-decoded list.
    pub fn decode(value: &Value) -> Option<Self> {
        match value {
            Value::Str(s) => Self::from_css(s),
            Value::List(items) => {
                let values: Option<Vec<f64>> = items
                    .iter()
                    .map(|item| match item {
                        Value::Num(n) => Some(*n),
                        Value::Str(s) => s.trim().parse().ok(),
                        Value::List(_) => None,
                    })
                    .collect();
                Self::from_values(&values?)
            }
            Value::Num(_) => None,
        }
    }

    /// Whether this is the 16-element 3D form.
    pub fn is_3d(&self) -> bool {
        matches!(self, Self::ThreeD(_))
    }

    /// The flat values.
    pub fn values(&self) -> &[f64] {
        match self {
            Self::TwoD(m) => m,
            Self::ThreeD(m) => m,
        }
    }

    /// Mutable access to the flat values.
    pub fn values_mut(&mut self) -> &mut [f64] {
        match self {
            Self::TwoD(m) => m,
            Self::ThreeD(m) => m,
        }
    }

    /// The value at a flat index.
    pub fn get(&self, index: usize) -> f64 {
        self.values()[index]
    }

    /// Slot of a single-axis component, per this dimensionality.
    fn slot(&self, component: TransformComponent) -> Option<usize> {
        component.matrix_index(self.is_3d())
    }

    /// Translation along x.
    pub fn translation_x(&self) -> f64 {
        self.slot(TransformComponent::TranslateX)
            .map(|i| self.get(i))
            .unwrap_or(0.0)
    }

    /// Translation along y.
    pub fn translation_y(&self) -> f64 {
        self.slot(TransformComponent::TranslateY)
            .map(|i| self.get(i))
            .unwrap_or(0.0)
    }

    /// Translation along z; a 2D matrix has none and reads `0`.
    pub fn translation_z(&self) -> f64 {
        self.slot(TransformComponent::TranslateZ)
            .map(|i| self.get(i))
            .unwrap_or(0.0)
    }

    /// Scale along x.
    pub fn scale_x(&self) -> f64 {
        self.slot(TransformComponent::ScaleX)
            .map(|i| self.get(i))
            .unwrap_or(1.0)
    }

    /// Scale along y.
    pub fn scale_y(&self) -> f64 {
        self.slot(TransformComponent::ScaleY)
            .map(|i| self.get(i))
            .unwrap_or(1.0)
    }

    /// Scale along z; a 2D matrix has none and reads `1`.
    pub fn scale_z(&self) -> f64 {
        self.slot(TransformComponent::ScaleZ)
            .map(|i| self.get(i))
            .unwrap_or(1.0)
    }

    /// Offset and length of the translation block in the flat layout.
    pub fn translation_span(&self) -> (usize, usize) {
        let offset = self
            .slot(TransformComponent::TranslateX)
            .expect("translateX has a slot in both dimensionalities");
        let length = if self.is_3d() { 3 } else { 2 };
        (offset, length)
    }

    /// Serialize back to a `matrix(…)` / `matrix3d(…)` string.
    pub fn to_css(&self) -> String {
        let arguments = self
            .values()
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        if self.is_3d() {
            format!("matrix3d({arguments})")
        } else {
            format!("matrix({arguments})")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_2d_matrix_strings() {
        let matrix = TransformMatrix::from_css("matrix(1, 0, 0, 1, 100, 0)").unwrap();
        assert!(!matrix.is_3d());
        assert_eq!(matrix.values(), &[1.0, 0.0, 0.0, 1.0, 100.0, 0.0]);
    }

    #[test]
    fn decodes_without_spaces() {
        let matrix = TransformMatrix::from_css("matrix(1,0,0,1,100,0)").unwrap();
        assert_eq!(matrix.translation_x(), 100.0);
    }

    #[test]
    fn decodes_3d_matrix_strings() {
        let matrix = TransformMatrix::from_css(
            "matrix3d(1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 100, 50, 25, 1)",
        )
        .unwrap();
        assert!(matrix.is_3d());
        assert_eq!(matrix.translation_x(), 100.0);
        assert_eq!(matrix.translation_y(), 50.0);
        assert_eq!(matrix.translation_z(), 25.0);
    }

    #[test]
    fn rejects_non_matrix_values() {
        assert!(TransformMatrix::from_css("none").is_none());
        assert!(TransformMatrix::from_css("").is_none());
        assert!(TransformMatrix::from_css("translateX(100px)").is_none());
        assert!(TransformMatrix::from_css("matrix(1, 0, junk, 1, 0, 0)").is_none());
    }

    #[test]
    fn rejects_wrong_arity() {
        assert!(TransformMatrix::from_values(&[1.0, 0.0, 0.0]).is_none());
        assert!(TransformMatrix::from_values(&[0.0; 12]).is_none());
        assert!(TransformMatrix::from_values(&IDENTITY_2D).is_some());
        assert!(TransformMatrix::from_values(&IDENTITY_3D).is_some());
    }

    #[test]
    fn decodes_value_lists() {
        let value = Value::List(vec![
            Value::Num(1.0),
            Value::Num(0.0),
            Value::Num(0.0),
            Value::Num(1.0),
            Value::Num(10.0),
            Value::Num(20.0),
        ]);
        let matrix = TransformMatrix::decode(&value).unwrap();
        assert_eq!(matrix.translation_x(), 10.0);
        assert_eq!(matrix.translation_y(), 20.0);
    }

    #[test]
    fn named_accessors_respect_dimensionality() {
        let two_d = TransformMatrix::from_css("matrix(2, 0, 0, 3, 10, 20)").unwrap();
        assert_eq!(two_d.scale_x(), 2.0);
        assert_eq!(two_d.scale_y(), 3.0);
        assert_eq!(two_d.scale_z(), 1.0);
        assert_eq!(two_d.translation_z(), 0.0);

        let three_d = TransformMatrix::from_css(
            "matrix3d(2, 0, 0, 0, 0, 3, 0, 0, 0, 0, 4, 0, 10, 20, 30, 1)",
        )
        .unwrap();
        assert_eq!(three_d.scale_y(), 3.0);
        assert_eq!(three_d.scale_z(), 4.0);
        assert_eq!(three_d.translation_z(), 30.0);
    }

    #[test]
    fn serializes_back_to_css() {
        let source = "matrix(1, 0, 0, 1, 100, 0)";
        let matrix = TransformMatrix::from_css(source).unwrap();
        assert_eq!(matrix.to_css(), source);

        assert_eq!(
            TransformMatrix::identity(true).to_css(),
            "matrix3d(1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1)"
        );
    }
}
