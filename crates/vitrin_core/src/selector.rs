//! Selector parsing
//!
//! The behaviors address elements with a small CSS-flavored subset:
//!
//! - `#id`, `.class`, `tag`
//! - `tag[attr^='value']` — attribute-prefix match
//! - `ancestor descendant` — whitespace-separated descendant chain
//!
//! View implementations backed by a real document engine can hand selector
//! strings straight to their host; `vitrin_headless` parses them with this
//! module and matches against its own tree.

use std::str::FromStr;

use thiserror::Error;

/// Error produced when a selector cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// The selector, or one of its parts, was empty
    #[error("empty selector")]
    Empty,
    /// Syntax outside the supported subset
    #[error("unsupported selector: {0}")]
    Unsupported(String),
}

/// One compound step of a selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorPart {
    /// `#id`
    Id(String),
    /// `.class`
    Class(String),
    /// `tag`
    Tag(String),
    /// `tag[attr^='value']`
    AttrPrefix {
        tag: String,
        attr: String,
        prefix: String,
    },
}

/// A parsed selector: one part, or an ancestor-to-descendant chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    /// Parts in ancestor-to-descendant order; the last names the subject
    pub parts: Vec<SelectorPart>,
}

impl Selector {
    /// Parse a selector string
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(SelectorError::Empty);
        }
        let parts = trimmed
            .split_whitespace()
            .map(parse_part)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { parts })
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

fn parse_part(part: &str) -> Result<SelectorPart, SelectorError> {
    if let Some(id) = part.strip_prefix('#') {
        if id.is_empty() {
            return Err(SelectorError::Empty);
        }
        if !is_identifier(id) {
            return Err(SelectorError::Unsupported(part.to_string()));
        }
        return Ok(SelectorPart::Id(id.to_string()));
    }

    if let Some(class) = part.strip_prefix('.') {
        if class.is_empty() {
            return Err(SelectorError::Empty);
        }
        if !is_identifier(class) {
            return Err(SelectorError::Unsupported(part.to_string()));
        }
        return Ok(SelectorPart::Class(class.to_string()));
    }

    if let Some(open) = part.find('[') {
        return parse_attr_prefix(part, open);
    }

    if is_identifier(part) {
        return Ok(SelectorPart::Tag(part.to_ascii_lowercase()));
    }

    Err(SelectorError::Unsupported(part.to_string()))
}

/// Parse the `tag[attr^='value']` form
fn parse_attr_prefix(part: &str, open: usize) -> Result<SelectorPart, SelectorError> {
    let tag = &part[..open];
    if tag.is_empty() || !is_identifier(tag) {
        return Err(SelectorError::Unsupported(part.to_string()));
    }

    let body = part[open + 1..]
        .strip_suffix(']')
        .ok_or_else(|| SelectorError::Unsupported(part.to_string()))?;
    let (attr, quoted) = body
        .split_once("^=")
        .ok_or_else(|| SelectorError::Unsupported(part.to_string()))?;
    if attr.is_empty() || !is_identifier(attr) {
        return Err(SelectorError::Unsupported(part.to_string()));
    }

    let prefix = strip_quotes(quoted).ok_or_else(|| SelectorError::Unsupported(part.to_string()))?;

    Ok(SelectorPart::AttrPrefix {
        tag: tag.to_ascii_lowercase(),
        attr: attr.to_string(),
        prefix: prefix.to_string(),
    })
}

fn strip_quotes(value: &str) -> Option<&str> {
    value
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
        .or_else(|| value.strip_prefix('"').and_then(|v| v.strip_suffix('"')))
}

fn is_identifier(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_id_class_and_tag() {
        assert_eq!(
            Selector::parse("#pricing").unwrap().parts,
            vec![SelectorPart::Id("pricing".into())]
        );
        assert_eq!(
            Selector::parse(".navbar").unwrap().parts,
            vec![SelectorPart::Class("navbar".into())]
        );
        assert_eq!(
            Selector::parse("form").unwrap().parts,
            vec![SelectorPart::Tag("form".into())]
        );
    }

    #[test]
    fn test_parse_attribute_prefix() {
        assert_eq!(
            Selector::parse("a[href^='#']").unwrap().parts,
            vec![SelectorPart::AttrPrefix {
                tag: "a".into(),
                attr: "href".into(),
                prefix: "#".into(),
            }]
        );
    }

    #[test]
    fn test_parse_descendant_chain() {
        let selector = Selector::parse("#contact form").unwrap();
        assert_eq!(
            selector.parts,
            vec![
                SelectorPart::Id("contact".into()),
                SelectorPart::Tag("form".into()),
            ]
        );
    }

    #[test]
    fn test_bare_fragment_is_empty() {
        assert_eq!(Selector::parse("#"), Err(SelectorError::Empty));
        assert_eq!(Selector::parse("   "), Err(SelectorError::Empty));
    }

    #[test]
    fn test_unsupported_syntax_is_rejected() {
        assert!(matches!(
            Selector::parse("a:hover"),
            Err(SelectorError::Unsupported(_))
        ));
        assert!(matches!(
            Selector::parse("a[href='#x']"),
            Err(SelectorError::Unsupported(_))
        ));
        assert!(matches!(
            Selector::parse("a[href^=#]"),
            Err(SelectorError::Unsupported(_))
        ));
    }

    #[test]
    fn test_from_str_round_trips_parse() {
        let parsed: Selector = ".navbar".parse().unwrap();
        assert_eq!(parsed, Selector::parse(".navbar").unwrap());
    }

    #[test]
    fn test_tag_is_lowercased() {
        assert_eq!(
            Selector::parse("FORM").unwrap().parts,
            vec![SelectorPart::Tag("form".into())]
        );
    }
}
