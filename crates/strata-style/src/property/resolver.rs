//! Resolution of logical property names to platform-usable names.

use crate::platform::PlatformRegistry;
use crate::property::tables::{is_transform_property, shorthand_longhands};
use crate::value::Value;

/// Substitute transform pseudo-properties with the real property name.
fn concrete_name(property: &str) -> &str {
    if is_transform_property(property) {
        "transform"
    } else {
        property
    }
}

/// Resolve `property` to the name this platform recognizes.
///
/// Transform pseudo-properties map to `transform` first. A name already in
/// the capability cache is returned as-is; otherwise the registry probes,
/// and when only the prefix-qualified form is supported that form is
/// returned. Unsupported names come back unchanged, so a subsequent write
/// is a silent no-op on the real platform.
pub fn prefixed(registry: &PlatformRegistry, property: &str) -> String {
    let property = concrete_name(property);

    if registry.is_known(property) {
        return property.to_string();
    }

    if registry.is_supported(property) {
        let qualified = format!("{}{}", registry.prefix_str(), property);
        if registry.is_known(&qualified) {
            return qualified;
        }
    }

    property.to_string()
}

/// The representative longhand used to *read* a shorthand's value.
///
/// Reading `margin` reads `margin-top`; non-shorthand names pass through.
pub fn shorthand_proxy(property: &str) -> &str {
    shorthand_longhands(property)
        .map(|longhands| longhands[0])
        .unwrap_or(property)
}

/// Every name that may carry a declaration for `property`.
///
/// Returns the transform-substituted name, its shorthand expansion if any,
/// and the prefix-qualified variant of each. Direct names come first with
/// prefixed forms appended after. Platforms without a prefix get the
/// direct names only.
pub fn all_variants(registry: &PlatformRegistry, property: &str) -> Vec<String> {
    let property = concrete_name(property);

    let mut all = vec![property.to_string()];
    if let Some(longhands) = shorthand_longhands(property) {
        all.extend(longhands.iter().map(|name| name.to_string()));
    }
    if let Some(prefix) = registry.prefix() {
        let qualified: Vec<String> = all.iter().map(|name| format!("{prefix}{name}")).collect();
        all.extend(qualified);
    }

    all
}

/// Result of expanding a possibly-shorthand property.
#[derive(Debug, Clone, PartialEq)]
pub enum Expansion<'a> {
    /// The property was a shorthand; each longhand maps to a copy of the
    /// value, in declared longhand order.
    Longhands(Vec<(&'static str, Value)>),
    /// Not a shorthand; the name passes through untouched.
    Direct(&'a str),
}

/// Expand a shorthand property into per-longhand assignments.
pub fn expand_shorthand<'a>(property: &'a str, value: &Value) -> Expansion<'a> {
    match shorthand_longhands(property) {
        Some(longhands) => Expansion::Longhands(
            longhands
                .iter()
                .map(|longhand| (*longhand, value.clone()))
                .collect(),
        ),
        None => Expansion::Direct(property),
    }
}
