//! CSS text parsing.

mod css_parser;

pub use css_parser::parse_css;
