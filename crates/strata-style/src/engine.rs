//! The style engine: get/set/clear orchestration over one platform.

use regex::Regex;

use crate::element::ElementStyles;
use crate::platform::{Features, PlatformProbe, PlatformRegistry, StaticProbe};
use crate::property::{Expansion, resolver, tables};
use crate::rules::StyleSheet;
use crate::transform::{merge_transform, parse_transform};
use crate::value::{
    OpacityMode, Value, ValueUnit, has_unit_suffix, opacity_value, parse_number, parse_opacity,
};

/// Cross-platform style accessor.
///
/// The engine owns the platform capability registry, the opacity mode, the
/// feature probes, and the registered stylesheets, and orchestrates the
/// property resolver, value codec, and transform engine to read and write
/// element styles.
///
/// # Example
///
/// ```
/// use strata_style::{MemoryElement, StyleEngine, Value};
///
/// let engine = StyleEngine::modern();
/// let mut element = MemoryElement::new();
///
/// engine.set_style(&mut element, "margin", 10);
/// engine.set_style(&mut element, "translateX", 100);
///
/// assert_eq!(
///     engine.get_style(&element, "translateX"),
///     Some(Value::from("100px"))
/// );
/// ```
pub struct StyleEngine {
    registry: PlatformRegistry,
    sheets: Vec<StyleSheet>,
    opacity_mode: OpacityMode,
    opacity_property: &'static str,
    features: Features,
}

impl StyleEngine {
    /// Create an engine for the platform described by `probe`.
    pub fn new(probe: impl PlatformProbe + 'static) -> Self {
        let registry = PlatformRegistry::new(probe);

        // Platforms without an `opacity` property but with `filter` take
        // the legacy alpha-filter path.
        let opacity_mode = if !registry.is_known("opacity") && registry.is_known("filter") {
            OpacityMode::Filter
        } else {
            OpacityMode::Standard
        };
        let opacity_property = match opacity_mode {
            OpacityMode::Filter => "filter",
            OpacityMode::Standard => "opacity",
        };

        let features = Features::detect(&registry);

        Self {
            registry,
            sheets: vec![],
            opacity_mode,
            opacity_property,
            features,
        }
    }

    /// Create an engine for a current, unprefixed platform.
    pub fn modern() -> Self {
        Self::new(StaticProbe::modern())
    }

    /// The capability registry backing this engine.
    pub fn registry(&self) -> &PlatformRegistry {
        &self.registry
    }

    /// The platform's vendor prefix, empty when there is none.
    pub fn platform_prefix(&self) -> &'static str {
        self.registry.prefix_str()
    }

    /// Style feature support, probed once at construction.
    pub fn features(&self) -> Features {
        self.features
    }

    /// How this platform expresses opacity.
    pub fn opacity_mode(&self) -> OpacityMode {
        self.opacity_mode
    }

    /// Whether `property` is supported on this platform.
    pub fn is_supported(&self, property: &str) -> bool {
        self.registry.is_supported(property)
    }

    /// Resolve `property` to the name this platform recognizes.
    pub fn prefixed(&self, property: &str) -> String {
        resolver::prefixed(&self.registry, property)
    }

    /// The representative longhand used to read a shorthand's value.
    pub fn shorthand_proxy<'a>(&self, property: &'a str) -> &'a str {
        resolver::shorthand_proxy(property)
    }

    /// Every name that may carry a declaration for `property`.
    pub fn all_variants(&self, property: &str) -> Vec<String> {
        resolver::all_variants(&self.registry, property)
    }

    /// Expand a shorthand property into per-longhand assignments.
    pub fn expand_shorthand<'a>(&self, property: &'a str, value: &Value) -> Expansion<'a> {
        resolver::expand_shorthand(property, value)
    }

    /// Parse a platform opacity value into a 0–1 float.
    pub fn parse_opacity(&self, value: &str) -> Option<f64> {
        parse_opacity(value, self.opacity_mode)
    }

    /// Convert an opacity value into the form this platform assigns.
    pub fn opacity_value(&self, value: &Value) -> Value {
        opacity_value(value, self.opacity_mode)
    }

    /// Register a stylesheet for [`document_style`](Self::document_style)
    /// lookups.
    pub fn add_stylesheet(&mut self, sheet: StyleSheet) {
        self.sheets.push(sheet);
    }

    /// The declared value of `property` in the first registered rule whose
    /// selector text equals `selector`, empty when nothing matches.
    pub fn document_style(&self, selector: &str, property: &str) -> String {
        for sheet in &self.sheets {
            for rule in sheet.iter() {
                if rule.selector_text == selector {
                    return rule.property_value(property).unwrap_or_default().to_string();
                }
            }
        }
        String::new()
    }

    /// Read the style for `property`.
    ///
    /// Opacity reads through the opacity codec; transform
    /// pseudo-properties extract their component from the element's
    /// current matrix. Everything else normalizes the computed value:
    /// empty becomes `None`, `auto` becomes `0`, and other values pass
    /// through as strings.
    pub fn get_style<E>(&self, element: &E, property: &str) -> Option<Value>
    where
        E: ElementStyles + ?Sized,
    {
        if property == "opacity" {
            return self
                .parse_opacity(&element.computed(self.opacity_property))
                .map(Value::Num);
        }

        let resolved = self.prefixed(self.shorthand_proxy(property));
        let value = element.computed(&resolved);

        if tables::is_transform_property(property) {
            return Some(parse_transform(&Value::Str(value), property));
        }

        match value.as_str() {
            "" => None,
            "auto" => Some(Value::Num(0.0)),
            _ => Some(Value::Str(value)),
        }
    }

    /// Read the style for `property` as a parsed number/unit pair.
    pub fn get_numeric_style<E>(&self, element: &E, property: &str) -> ValueUnit
    where
        E: ElementStyles + ?Sized,
    {
        parse_number(self.get_style(element, property).as_ref(), property)
    }

    /// Set the style for `property`.
    ///
    /// Shorthands fan out to their longhands, opacity converts through the
    /// platform's opacity form, bare numbers pick up the property's
    /// default unit, and transform pseudo-properties merge into the
    /// element's current matrix before the resolved property is written.
    ///
    /// The transform path is a read-merge-write over the element's current
    /// value; interleaving another transform write between two calls loses
    /// the interleaved change.
    pub fn set_style<E>(&self, element: &mut E, property: &str, value: impl Into<Value>)
    where
        E: ElementStyles + ?Sized,
    {
        let value = value.into();

        if let Expansion::Longhands(pairs) = self.expand_shorthand(property, &value) {
            for (longhand, longhand_value) in pairs {
                self.set_style(element, longhand, longhand_value);
            }
            return;
        }

        let mut prop = property;
        let mut value = value;

        if prop == "opacity" {
            prop = self.opacity_property;
            value = self.opacity_value(&value);
        }

        if let Some(unit) = tables::default_unit(prop) {
            if !unit.is_empty() && needs_default_unit(&value) {
                value = Value::Str(format!("{}{unit}", value.to_css()));
            }
        }

        let resolved = self.prefixed(prop);

        if tables::is_transform_property(property) {
            let current = element.computed(&resolved);
            value = Value::Str(merge_transform(&current, property, &value));
        }

        element.set_inline(&resolved, &value.to_css());
    }

    /// Set several styles at once, in iteration order.
    ///
    /// Each assignment is an independent [`set_style`](Self::set_style)
    /// call; there is no atomicity across the batch.
    pub fn set_styles<E, I, N, V>(&self, element: &mut E, styles: I)
    where
        E: ElementStyles + ?Sized,
        I: IntoIterator<Item = (N, V)>,
        N: AsRef<str>,
        V: Into<Value>,
    {
        for (property, value) in styles {
            self.set_style(element, property.as_ref(), value);
        }
    }

    /// Remove every declaration for `property` from the element's `style`
    /// attribute.
    ///
    /// This is a textual edit over the attribute: it strips
    /// `name: value;` runs for every variant of the property (prefixed
    /// forms, shorthand longhands, trailing hyphenated names) and rewrites
    /// the attribute. Declarations are assumed to be `;`-terminated;
    /// values containing semicolons are not handled.
    pub fn clear_style<E>(&self, element: &mut E, property: &str)
    where
        E: ElementStyles + ?Sized,
    {
        let style = element.style_attribute();
        if style.is_empty() {
            return;
        }

        let alternation = self
            .all_variants(property)
            .iter()
            .map(|name| format!(r"{}[\w-]*", regex::escape(name)))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(r"(?i)(?:^|\s)(?:{alternation}):\s?[^;]+;");

        match Regex::new(&pattern) {
            Ok(re) => element.set_style_attribute(&re.replace_all(&style, "")),
            Err(e) => {
                tracing::warn!(property, error = %e, "failed to build clear-style pattern");
            }
        }
    }
}

impl Default for StyleEngine {
    fn default() -> Self {
        Self::modern()
    }
}

/// Whether a value should pick up a property's default unit.
fn needs_default_unit(value: &Value) -> bool {
    match value {
        Value::Num(_) => true,
        Value::Str(s) => s != "auto" && s != "inherit" && !has_unit_suffix(s),
        Value::List(_) => false,
    }
}
