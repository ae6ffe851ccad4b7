//! Generation of merged transform strings.

use crate::transform::{TransformComponent, TransformMatrix};
use crate::value::Value;

/// Reduce the current matrix to the part the new component must not erase.
///
/// - Setting a non-translation component keeps only the translation block
///   (spliced onto an identity matrix).
/// - Setting the grouped `translate`/`translate3d` keeps everything *but*
///   the translation block, which the new value fully replaces.
/// - Setting a single translation axis resets only that one slot.
///
/// The reduced matrix re-serializes as a leading `matrix(…)`/`matrix3d(…)`
/// prefix with a trailing space. A current value that does not decode as a
/// matrix (an authored function list, for instance) is kept verbatim as
/// the prefix.
fn matrix_prefix(current: &str, component: TransformComponent) -> String {
    let current = if current == "none" { "" } else { current };
    if current.is_empty() {
        return String::new();
    }

    let Some(mut matrix) = TransformMatrix::from_css(current) else {
        tracing::debug!(
            current,
            "current transform is not a matrix; composing against it verbatim"
        );
        return current.to_string();
    };

    let identity = TransformMatrix::identity(matrix.is_3d());
    let (offset, length) = matrix.translation_span();

    if !component.is_translation() {
        let mut reduced = identity;
        reduced.values_mut()[offset..offset + length]
            .copy_from_slice(&matrix.values()[offset..offset + length]);
        matrix = reduced;
    } else if matches!(
        component,
        TransformComponent::Translate | TransformComponent::Translate3d
    ) {
        matrix.values_mut()[offset..offset + length]
            .copy_from_slice(&identity.values()[offset..offset + length]);
    } else if let Some(index) = component.matrix_index(matrix.is_3d()) {
        matrix.values_mut()[index] = identity.get(index);
    }

    format!("{} ", matrix.to_css())
}

/// Append the default `px` unit to bare numeric translation entries.
fn translation_arguments(value: &Value) -> String {
    match value {
        Value::List(items) => items
            .iter()
            .map(|item| match item {
                Value::Num(n) => format!("{n}px"),
                other => other.to_css(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_css(),
    }
}

/// Build the transform string that merges a changed component into an
/// element's current transform.
///
/// `current` is the element's current (computed) transform value; `"none"`
/// and the empty string both mean no transform. The result is the complete
/// value to assign to the platform transform property; the platform
/// replaces the whole property, no CSS-level merging happens.
///
/// `transform` passes the value through whole, and `matrix`/`matrix3d`
/// replace the entire transform, so none of those compose with a preserved
/// prefix. Component names outside the known set pass the value through
/// unchanged.
///
/// Callers sequencing read-merge-write cycles on the same element must not
/// interleave them with other writes to that element's transform: the
/// merge computes against the value read at the start, and a concurrent
/// write in between is silently lost.
pub fn merge_transform(current: &str, property: &str, value: &Value) -> String {
    let Some(component) = TransformComponent::parse(property) else {
        return value.to_css();
    };

    use TransformComponent as C;
    match component {
        C::Transform => value.to_css(),
        C::Matrix | C::Matrix3d => format!("{}({})", component.name(), value.to_css()),
        C::Perspective | C::Rotate3d => value.to_css(),
        C::Translate | C::Translate3d => {
            format!(
                "{}{}({})",
                matrix_prefix(current, component),
                component.name(),
                translation_arguments(value)
            )
        }
        C::Scale | C::Scale3d => {
            format!(
                "{}{}({})",
                matrix_prefix(current, component),
                component.name(),
                value.to_css()
            )
        }
        C::TranslateX
        | C::TranslateY
        | C::TranslateZ
        | C::ScaleX
        | C::ScaleY
        | C::ScaleZ
        | C::Rotate
        | C::RotateX
        | C::RotateY
        | C::RotateZ
        | C::SkewX
        | C::SkewY => {
            format!(
                "{}{}({})",
                matrix_prefix(current, component),
                component.name(),
                value.to_css()
            )
        }
    }
}
