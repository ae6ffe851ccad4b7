//! Capability probing for the host platform.
//!
//! A [`PlatformProbe`] answers the question "does this runtime recognize
//! this style property?" without the styling layer knowing anything about
//! the runtime itself. Real embeddings probe a scratch style object;
//! [`StaticProbe`] answers from fixed tables and is what tests and headless
//! use run against.

use std::collections::HashSet;
use std::fmt;

/// The fixed set of vendor prefixes a platform may require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VendorPrefix {
    /// `-webkit-` (Safari, Chrome, newer Opera).
    Webkit,
    /// `-moz-` (Firefox).
    Moz,
    /// `-ms-` (Internet Explorer, legacy Edge).
    Ms,
    /// `-o-` (legacy Opera).
    O,
}

impl VendorPrefix {
    /// All recognized prefixes.
    pub const ALL: [VendorPrefix; 4] = [
        VendorPrefix::Webkit,
        VendorPrefix::Moz,
        VendorPrefix::Ms,
        VendorPrefix::O,
    ];

    /// The prefix text, including both dashes.
    pub fn as_str(&self) -> &'static str {
        match self {
            VendorPrefix::Webkit => "-webkit-",
            VendorPrefix::Moz => "-moz-",
            VendorPrefix::Ms => "-ms-",
            VendorPrefix::O => "-o-",
        }
    }

    /// Detect the prefix a property name carries, if any.
    pub fn of(property: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|prefix| property.starts_with(prefix.as_str()))
    }
}

impl fmt::Display for VendorPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Black-box capability probe for a runtime's style support.
pub trait PlatformProbe: Send + Sync {
    /// Property names enumerable on the runtime's root default style
    /// object. Used once to seed the capability cache.
    fn enumerate(&self) -> Vec<String>;

    /// Whether the runtime's scratch style object recognizes `name`.
    fn supports(&self, name: &str) -> bool;

    /// Whether assigning `value` to `name` round-trips on the scratch
    /// style object. Used for value-level feature tests (3D transforms).
    fn retains_value(&self, name: &str, value: &str) -> bool;
}

/// Properties every supported platform recognizes.
const BASE_PROPERTIES: &[&str] = &[
    "top",
    "bottom",
    "left",
    "right",
    "width",
    "height",
    "display",
    "float",
    "position",
    "overflow",
    "margin-top",
    "margin-right",
    "margin-bottom",
    "margin-left",
    "padding-top",
    "padding-right",
    "padding-bottom",
    "padding-left",
    "border-top-left-radius",
    "border-top-right-radius",
    "border-bottom-left-radius",
    "border-bottom-right-radius",
    "border-top-color",
    "border-right-color",
    "border-bottom-color",
    "border-left-color",
    "background-color",
    "color",
    "font-size",
    "line-height",
];

/// Properties a current platform recognizes without a prefix.
const MODERN_PROPERTIES: &[&str] = &[
    "opacity",
    "filter",
    "transform",
    "transform-origin",
    "transition",
    "transition-duration",
    "transition-property",
    "perspective",
];

/// Properties that move behind the vendor prefix on prefixed platforms.
const PREFIXED_PROPERTIES: &[&str] = &[
    "transform",
    "transform-origin",
    "transition",
    "transition-duration",
    "transition-property",
    "perspective",
];

/// A [`PlatformProbe`] answering from fixed tables.
///
/// The stock constructors model the capability profiles seen in the wild:
/// [`modern`](StaticProbe::modern) (everything unprefixed),
/// [`prefixed`](StaticProbe::prefixed) (transforms and transitions behind a
/// vendor prefix), and [`legacy`](StaticProbe::legacy) (no transforms, no
/// `opacity`, filter-based opacity only).
#[derive(Debug, Clone)]
pub struct StaticProbe {
    properties: HashSet<String>,
    enumerated: Vec<String>,
    supports_3d: bool,
}

impl StaticProbe {
    fn from_names<I>(names: I, supports_3d: bool) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let enumerated: Vec<String> = names.into_iter().collect();
        Self {
            properties: enumerated.iter().cloned().collect(),
            enumerated,
            supports_3d,
        }
    }

    /// A current platform: everything unprefixed, 3D transforms available.
    pub fn modern() -> Self {
        Self::from_names(
            BASE_PROPERTIES
                .iter()
                .chain(MODERN_PROPERTIES)
                .map(|name| name.to_string()),
            true,
        )
    }

    /// A platform that requires `prefix` for transforms and transitions.
    pub fn prefixed(prefix: VendorPrefix) -> Self {
        Self::from_names(
            BASE_PROPERTIES
                .iter()
                .map(|name| name.to_string())
                .chain(["opacity".to_string(), "filter".to_string()])
                .chain(
                    PREFIXED_PROPERTIES
                        .iter()
                        .map(|name| format!("{prefix}{name}")),
                ),
            true,
        )
    }

    /// An old platform: no transforms, opacity only through `filter`.
    pub fn legacy() -> Self {
        Self::from_names(
            BASE_PROPERTIES
                .iter()
                .chain(&["filter"])
                .map(|name| name.to_string()),
            false,
        )
    }

    /// Add a recognized property name.
    pub fn with_property(mut self, name: &str) -> Self {
        self.properties.insert(name.to_string());
        self.enumerated.push(name.to_string());
        self
    }

    /// Disable 3D transform support.
    pub fn without_3d(mut self) -> Self {
        self.supports_3d = false;
        self
    }
}

impl PlatformProbe for StaticProbe {
    fn enumerate(&self) -> Vec<String> {
        self.enumerated.clone()
    }

    fn supports(&self, name: &str) -> bool {
        self.properties.contains(name)
    }

    fn retains_value(&self, name: &str, value: &str) -> bool {
        self.supports(name) && (self.supports_3d || !value.contains("translateZ"))
    }
}
