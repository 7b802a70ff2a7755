use std::str::FromStr;

use super::*;

#[test]
fn parse_text_format() {
    assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
    assert_eq!(OutputFormat::from_str("TEXT").unwrap(), OutputFormat::Text);
}

#[test]
fn parse_json_format() {
    assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
}

#[test]
fn parse_unknown_format_fails() {
    assert!(OutputFormat::from_str("sarif").is_err());
}

#[test]
fn default_is_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}
