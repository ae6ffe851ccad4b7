//! Element collaborator interface and an in-memory implementation.
//!
//! The styling layer never talks to a platform directly. Everything it needs
//! from an element is behind [`ElementStyles`]: an inline declaration store,
//! the raw `style` attribute text, and a computed-value lookup. Host
//! platforms implement the trait over their own element handles;
//! [`MemoryElement`] is a self-contained implementation for headless use and
//! tests.

use crate::transform::resolve_transform_list;

/// Style access for a single element.
///
/// `inline`/`set_inline` operate on individual declarations,
/// `style_attribute`/`set_style_attribute` on the raw attribute text (used
/// by textual clearing), and `computed` on the platform's resolved value
/// for a property.
pub trait ElementStyles {
    /// Read an inline declaration, if present.
    fn inline(&self, name: &str) -> Option<String>;

    /// Write an inline declaration, replacing any existing one.
    fn set_inline(&mut self, name: &str, value: &str);

    /// The raw `style` attribute text, empty when no declarations are set.
    fn style_attribute(&self) -> String;

    /// Replace the `style` attribute text wholesale.
    fn set_style_attribute(&mut self, text: &str);

    /// The platform's computed value for `name`, empty when unset.
    ///
    /// The default implementation falls back to the inline declaration.
    /// Platforms with a real cascade should override this. For transform
    /// properties the returned value is expected to be the *resolved*
    /// `matrix(…)`/`matrix3d(…)` serialization, not the authored function
    /// list; the merge logic in [`crate::transform`] depends on that.
    fn computed(&self, name: &str) -> String {
        self.inline(name).unwrap_or_default()
    }
}

/// An element that lives entirely in memory.
///
/// Declarations are kept in insertion order so attribute-text round-trips
/// are stable. The computed view resolves transform function lists into a
/// single matrix, mirroring what a real platform reports.
///
/// # Example
///
/// ```
/// use strata_style::{ElementStyles, MemoryElement};
///
/// let mut element = MemoryElement::new();
/// element.set_inline("width", "100px");
/// element.set_inline("float", "left");
///
/// assert_eq!(element.style_attribute(), "width: 100px; float: left;");
/// assert_eq!(element.computed("width"), "100px");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryElement {
    declarations: Vec<(String, String)>,
}

impl MemoryElement {
    /// Create an element with no declarations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an element from existing `style` attribute text.
    pub fn with_style_attribute(text: &str) -> Self {
        let mut element = Self::new();
        element.set_style_attribute(text);
        element
    }

    /// Number of inline declarations.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Check whether any declarations are set.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl ElementStyles for MemoryElement {
    fn inline(&self, name: &str) -> Option<String> {
        self.declarations
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    fn set_inline(&mut self, name: &str, value: &str) {
        if let Some(entry) = self.declarations.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value.to_string();
        } else {
            self.declarations.push((name.to_string(), value.to_string()));
        }
    }

    fn style_attribute(&self) -> String {
        self.declarations
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn set_style_attribute(&mut self, text: &str) {
        self.declarations = text
            .split(';')
            .filter_map(|declaration| {
                let (name, value) = declaration.split_once(':')?;
                let name = name.trim();
                let value = value.trim();
                if name.is_empty() || value.is_empty() {
                    return None;
                }
                Some((name.to_string(), value.to_string()))
            })
            .collect();
    }

    fn computed(&self, name: &str) -> String {
        let Some(value) = self.inline(name) else {
            return String::new();
        };
        if name.ends_with("transform") {
            if let Some(matrix) = resolve_transform_list(&value) {
                return matrix.to_css();
            }
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_round_trip() {
        let mut element = MemoryElement::new();
        assert!(element.inline("width").is_none());

        element.set_inline("width", "100px");
        assert_eq!(element.inline("width").as_deref(), Some("100px"));

        element.set_inline("width", "200px");
        assert_eq!(element.inline("width").as_deref(), Some("200px"));
        assert_eq!(element.len(), 1);
    }

    #[test]
    fn attribute_round_trip() {
        let mut element = MemoryElement::new();
        element.set_inline("float", "left");
        element.set_inline("width", "100px");
        assert_eq!(element.style_attribute(), "float: left; width: 100px;");

        let parsed = MemoryElement::with_style_attribute(&element.style_attribute());
        assert_eq!(parsed.inline("float").as_deref(), Some("left"));
        assert_eq!(parsed.inline("width").as_deref(), Some("100px"));
    }

    #[test]
    fn attribute_parse_skips_malformed_declarations() {
        let element = MemoryElement::with_style_attribute("width: 100px; nonsense; : 5px;");
        assert_eq!(element.len(), 1);
        assert_eq!(element.inline("width").as_deref(), Some("100px"));
    }

    #[test]
    fn computed_falls_back_to_empty() {
        let element = MemoryElement::new();
        assert_eq!(element.computed("width"), "");
    }

    #[test]
    fn computed_resolves_transform_lists() {
        let mut element = MemoryElement::new();
        element.set_inline("transform", "translateX(100px)");
        assert_eq!(element.computed("transform"), "matrix(1, 0, 0, 1, 100, 0)");
    }
}
