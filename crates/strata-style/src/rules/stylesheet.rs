//! Stylesheet collection and management.

use crate::rules::StyleRule;
use crate::{Result, parser};

/// An ordered collection of style rules.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    /// The rules in this stylesheet, in source order.
    pub rules: Vec<StyleRule>,
}

impl StyleSheet {
    /// Create an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a stylesheet from CSS text.
    ///
    /// Malformed rules are skipped with a warning; the surviving rules
    /// keep their source order.
    pub fn from_css(css: &str) -> Result<Self> {
        Ok(Self {
            rules: parser::parse_css(css)?,
        })
    }

    /// Add a rule to the stylesheet.
    pub fn add_rule(&mut self, rule: StyleRule) {
        self.rules.push(rule);
    }

    /// Get the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the stylesheet is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over rules.
    pub fn iter(&self) -> impl Iterator<Item = &StyleRule> {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_from_css() {
        let sheet = StyleSheet::from_css(
            ".banner { width: 100px; color: red; }\n#main { height: 50px; }",
        )
        .unwrap();
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.rules[0].selector_text, ".banner");
        assert_eq!(sheet.rules[0].property_value("width"), Some("100px"));
        assert_eq!(sheet.rules[1].selector_text, "#main");
    }

    #[test]
    fn stylesheet_add_rule() {
        let mut sheet = StyleSheet::new();
        assert!(sheet.is_empty());
        sheet.add_rule(StyleRule::new("div", vec![]));
        assert_eq!(sheet.len(), 1);
    }
}
