//! CSS syntax parser using the `cssparser` crate.
//!
//! Parses stylesheet text into [`StyleRule`]s. Selectors are kept as raw
//! text (rule lookup matches selector text, it does not evaluate
//! selectors) and declaration values are kept as raw strings for the value
//! codec to interpret on read.

use cssparser::{Delimiter, ParseError as CssParseError, Parser, ParserInput, Token};

use crate::rules::StyleRule;
use crate::{Error, Result};

/// Parse a CSS stylesheet string into a list of style rules.
///
/// Parse errors in individual rules do not fail the parse: the offending
/// rule is logged via `tracing::warn!`, skipped past its closing `}`, and
/// parsing continues with the next rule.
pub fn parse_css(css: &str) -> Result<Vec<StyleRule>> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut rules = vec![];

    loop {
        parser.skip_whitespace();
        if parser.is_exhausted() {
            break;
        }

        match parse_rule(&mut parser) {
            Ok(rule) => rules.push(rule),
            Err(e) => {
                tracing::warn!("CSS parse error: {e}");
                skip_to_next_rule(&mut parser);
            }
        }
    }

    Ok(rules)
}

/// Parse a single CSS rule: `selector { declarations }`.
fn parse_rule<'i>(parser: &mut Parser<'i, '_>) -> Result<StyleRule> {
    let start = parser.position();
    parser
        .parse_until_before(Delimiter::CurlyBracketBlock, |p| {
            while p.next().is_ok() {}
            Ok(())
        })
        .map_err(|e: CssParseError<'_, ()>| {
            Error::parse(format!("failed to scan selector: {e:?}"))
        })?;
    let selector_text = parser.slice_from(start).trim().to_string();
    if selector_text.is_empty() {
        return Err(Error::parse("empty selector"));
    }

    let declarations = match parser.next() {
        Ok(Token::CurlyBracketBlock) => parser
            .parse_nested_block(|block_parser| parse_declarations(block_parser))
            .map_err(|e: CssParseError<'_, ()>| {
                Error::parse(format!("failed to parse declaration block: {e:?}"))
            })?,
        _ => return Err(Error::parse("expected '{' after selector")),
    };

    Ok(StyleRule::new(selector_text, declarations))
}

/// Parse the declarations of a rule body into `(name, value)` pairs.
fn parse_declarations<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<Vec<(String, String)>, CssParseError<'i, ()>> {
    let mut declarations = vec![];

    loop {
        parser.skip_whitespace();
        if parser.is_exhausted() {
            break;
        }

        let name = match parser.expect_ident() {
            Ok(name) => name.to_string(),
            Err(_) => {
                skip_declaration(parser);
                continue;
            }
        };

        if parser.expect_colon().is_err() {
            skip_declaration(parser);
            continue;
        }

        parser.skip_whitespace();
        let start = parser.position();
        let scanned: std::result::Result<(), CssParseError<'i, ()>> = parser
            .parse_until_before(Delimiter::Semicolon, |p| {
                while p.next().is_ok() {}
                Ok(())
            });
        if scanned.is_err() {
            skip_declaration(parser);
            continue;
        }

        let value = parser.slice_from(start).trim().to_string();
        if value.is_empty() {
            tracing::warn!(property = %name, "skipping declaration with empty value");
        } else {
            declarations.push((name, value));
        }

        // Skip optional semicolon
        let _ = parser.try_parse(|p| p.expect_semicolon());
    }

    Ok(declarations)
}

/// Skip past the end of the current (malformed) rule.
fn skip_to_next_rule(parser: &mut Parser<'_, '_>) {
    loop {
        match parser.next() {
            Ok(Token::CurlyBracketBlock) => {
                let _ = parser.parse_nested_block(|p| {
                    while !p.is_exhausted() {
                        let _ = p.next();
                    }
                    Ok::<_, CssParseError<'_, ()>>(())
                });
                return;
            }
            Ok(_) => {}
            Err(_) => return,
        }
    }
}

/// Skip past the end of the current (malformed) declaration.
fn skip_declaration(parser: &mut Parser<'_, '_>) {
    loop {
        match parser.next() {
            Ok(Token::Semicolon) | Err(_) => return,
            Ok(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_rule() {
        let rules = parse_css(".banner { width: 100px; color: red; }").unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].selector_text, ".banner");
        assert_eq!(rules[0].property_value("width"), Some("100px"));
        assert_eq!(rules[0].property_value("color"), Some("red"));
    }

    #[test]
    fn parse_multiple_rules_in_order() {
        let rules = parse_css("div { top: 1px; } .a { top: 2px; } #b { top: 3px; }").unwrap();
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0].selector_text, "div");
        assert_eq!(rules[1].selector_text, ".a");
        assert_eq!(rules[2].selector_text, "#b");
    }

    #[test]
    fn parse_complex_selectors_as_text() {
        let rules = parse_css("div.banner > p:hover { color: blue; }").unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].selector_text, "div.banner > p:hover");
    }

    #[test]
    fn parse_function_values() {
        let rules =
            parse_css(".hero { transform: matrix(1, 0, 0, 1, 10, 20); color: rgb(1, 2, 3); }")
                .unwrap();
        assert_eq!(
            rules[0].property_value("transform"),
            Some("matrix(1, 0, 0, 1, 10, 20)")
        );
        assert_eq!(rules[0].property_value("color"), Some("rgb(1, 2, 3)"));
    }

    #[test]
    fn parse_vendor_prefixed_names() {
        let rules = parse_css(".a { -webkit-transform: translateX(5px); }").unwrap();
        assert_eq!(
            rules[0].property_value("-webkit-transform"),
            Some("translateX(5px)")
        );
    }

    #[test]
    fn parse_recovers_from_malformed_rules() {
        let rules = parse_css("{ width: 1px; } .ok { width: 2px; }").unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].selector_text, ".ok");
    }

    #[test]
    fn parse_skips_malformed_declarations() {
        let rules = parse_css(".a { 42: nope; width: 1px; height: ; color: red; }").unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].property_value("width"), Some("1px"));
        assert_eq!(rules[0].property_value("color"), Some("red"));
        assert_eq!(rules[0].property_value("height"), None);
    }

    #[test]
    fn parse_last_declaration_without_semicolon() {
        let rules = parse_css(".a { width: 1px; height: 2px }").unwrap();
        assert_eq!(rules[0].property_value("height"), Some("2px"));
    }

    #[test]
    fn parse_empty_input() {
        assert!(parse_css("").unwrap().is_empty());
        assert!(parse_css("   \n  ").unwrap().is_empty());
    }
}
