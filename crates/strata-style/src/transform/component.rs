//! Logical transform components and their flat-matrix positions.

/// A logical transform component.
///
/// Covers every pseudo-property that reads from or writes into the
/// platform transform property. Names outside this set are not transform
/// components; parsing them yields `None` and callers fall back to
/// pass-through behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformComponent {
    /// The whole `transform` value.
    Transform,
    /// A full 2D matrix.
    Matrix,
    /// A full 3D matrix.
    Matrix3d,
    /// Grouped 2D translation.
    Translate,
    /// Grouped 3D translation.
    Translate3d,
    /// Translation along the x axis.
    TranslateX,
    /// Translation along the y axis.
    TranslateY,
    /// Translation along the z axis.
    TranslateZ,
    /// 2D rotation.
    Rotate,
    /// Axis-angle 3D rotation.
    Rotate3d,
    /// Rotation about the x axis.
    RotateX,
    /// Rotation about the y axis.
    RotateY,
    /// Rotation about the z axis.
    RotateZ,
    /// Grouped 2D scale.
    Scale,
    /// Grouped 3D scale.
    Scale3d,
    /// Scale along the x axis.
    ScaleX,
    /// Scale along the y axis.
    ScaleY,
    /// Scale along the z axis.
    ScaleZ,
    /// Skew along the x axis.
    SkewX,
    /// Skew along the y axis.
    SkewY,
    /// Perspective distance.
    Perspective,
}

impl TransformComponent {
    /// Parse a component from its property name.
    pub fn parse(name: &str) -> Option<Self> {
        let component = match name {
            "transform" => Self::Transform,
            "matrix" => Self::Matrix,
            "matrix3d" => Self::Matrix3d,
            "translate" => Self::Translate,
            "translate3d" => Self::Translate3d,
            "translateX" => Self::TranslateX,
            "translateY" => Self::TranslateY,
            "translateZ" => Self::TranslateZ,
            "rotate" => Self::Rotate,
            "rotate3d" => Self::Rotate3d,
            "rotateX" => Self::RotateX,
            "rotateY" => Self::RotateY,
            "rotateZ" => Self::RotateZ,
            "scale" => Self::Scale,
            "scale3d" => Self::Scale3d,
            "scaleX" => Self::ScaleX,
            "scaleY" => Self::ScaleY,
            "scaleZ" => Self::ScaleZ,
            "skewX" => Self::SkewX,
            "skewY" => Self::SkewY,
            "perspective" => Self::Perspective,
            _ => return None,
        };
        Some(component)
    }

    /// The component's property name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Transform => "transform",
            Self::Matrix => "matrix",
            Self::Matrix3d => "matrix3d",
            Self::Translate => "translate",
            Self::Translate3d => "translate3d",
            Self::TranslateX => "translateX",
            Self::TranslateY => "translateY",
            Self::TranslateZ => "translateZ",
            Self::Rotate => "rotate",
            Self::Rotate3d => "rotate3d",
            Self::RotateX => "rotateX",
            Self::RotateY => "rotateY",
            Self::RotateZ => "rotateZ",
            Self::Scale => "scale",
            Self::Scale3d => "scale3d",
            Self::ScaleX => "scaleX",
            Self::ScaleY => "scaleY",
            Self::ScaleZ => "scaleZ",
            Self::SkewX => "skewX",
            Self::SkewY => "skewY",
            Self::Perspective => "perspective",
        }
    }

    /// The component's slot in a flat matrix of the given dimensionality.
    ///
    /// `None` means the component has no representation there: either the
    /// component is a grouped form spanning several slots, or a 2D matrix
    /// simply has no slot for it (`translateZ`, `scaleZ`, the 3D
    /// rotations). This table is the ground truth for both extraction and
    /// targeted clearing during generation.
    pub fn matrix_index(&self, is_3d: bool) -> Option<usize> {
        let (two_d, three_d) = match self {
            Self::TranslateX => (Some(4), Some(12)),
            Self::TranslateY => (Some(5), Some(13)),
            Self::TranslateZ => (None, Some(14)),
            Self::ScaleX => (Some(0), Some(0)),
            Self::ScaleY => (Some(3), Some(5)),
            Self::ScaleZ => (None, Some(10)),
            Self::Rotate => (Some(0), Some(0)),
            Self::RotateX => (None, Some(5)),
            Self::RotateY => (None, Some(0)),
            Self::RotateZ => (None, Some(0)),
            Self::SkewY => (Some(1), Some(1)),
            Self::SkewX => (Some(2), Some(2)),
            _ => (None, None),
        };
        if is_3d { three_d } else { two_d }
    }

    /// Whether this component belongs to the translation family.
    pub fn is_translation(&self) -> bool {
        matches!(
            self,
            Self::Translate
                | Self::Translate3d
                | Self::TranslateX
                | Self::TranslateY
                | Self::TranslateZ
        )
    }
}
