//! Static ground-truth tables for property classification.
//!
//! These tables drive shorthand expansion, default-unit inference, and the
//! special-casing of color and transform properties. They are the single
//! source of truth; nothing else in the crate hardcodes a property list.

use crate::transform::TransformComponent;

/// Default unit appended to bare numeric values, per property.
///
/// An empty entry means "numeric but unitless" (`opacity`, the scale
/// components) and is distinct from a property with no entry at all, which
/// falls back to `px` at parse time and gets no unit appended at set time.
pub fn default_unit(property: &str) -> Option<&'static str> {
    let unit = match property {
        "top" | "bottom" | "left" | "right" | "width" | "height" => "px",
        "margin-top" | "margin-bottom" | "margin-left" | "margin-right" => "px",
        "padding-top" | "padding-bottom" | "padding-left" | "padding-right" => "px",
        "border-bottom-left-radius"
        | "border-bottom-right-radius"
        | "border-top-left-radius"
        | "border-top-right-radius" => "px",
        "transition-duration" => "ms",
        "opacity" => "",
        "font-size" => "px",
        "translateX" | "translateY" | "translateZ" => "px",
        "scaleX" | "scaleY" | "scaleZ" => "",
        "rotate" | "rotateX" | "rotateY" | "rotateZ" => "deg",
        // Historical quirk: skew angles default to px, not deg.
        "skewX" | "skewY" => "px",
        _ => return None,
    };
    Some(unit)
}

/// Whether a property holds a color value.
pub fn is_color_property(property: &str) -> bool {
    matches!(property, "background-color" | "color" | "border-color")
}

/// Whether a property is a transform pseudo-property (or `transform`
/// itself), i.e. reads from and writes into the platform's single
/// transform property.
pub fn is_transform_property(property: &str) -> bool {
    TransformComponent::parse(property).is_some()
}

/// The longhand expansion of a shorthand property, in declared order.
pub fn shorthand_longhands(property: &str) -> Option<&'static [&'static str]> {
    let longhands: &[&str] = match property {
        "border-radius" => &[
            "border-bottom-left-radius",
            "border-bottom-right-radius",
            "border-top-left-radius",
            "border-top-right-radius",
        ],
        "border-color" => &[
            "border-bottom-color",
            "border-left-color",
            "border-top-color",
            "border-right-color",
        ],
        "margin" => &["margin-top", "margin-right", "margin-left", "margin-bottom"],
        "padding" => &[
            "padding-top",
            "padding-right",
            "padding-left",
            "padding-bottom",
        ],
        _ => return None,
    };
    Some(longhands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_units() {
        assert_eq!(default_unit("width"), Some("px"));
        assert_eq!(default_unit("transition-duration"), Some("ms"));
        assert_eq!(default_unit("rotate"), Some("deg"));
        assert_eq!(default_unit("opacity"), Some(""));
        assert_eq!(default_unit("scaleX"), Some(""));
        assert_eq!(default_unit("display"), None);
        assert_eq!(default_unit("perspective"), None);
    }

    #[test]
    fn color_properties() {
        assert!(is_color_property("color"));
        assert!(is_color_property("background-color"));
        assert!(is_color_property("border-color"));
        assert!(!is_color_property("border-top-color"));
    }

    #[test]
    fn transform_properties() {
        assert!(is_transform_property("transform"));
        assert!(is_transform_property("translateX"));
        assert!(is_transform_property("perspective"));
        assert!(is_transform_property("matrix3d"));
        assert!(!is_transform_property("margin"));
    }

    #[test]
    fn shorthand_expansion_order() {
        assert_eq!(
            shorthand_longhands("margin"),
            Some(&["margin-top", "margin-right", "margin-left", "margin-bottom"][..])
        );
        assert!(shorthand_longhands("margin-top").is_none());
    }
}
