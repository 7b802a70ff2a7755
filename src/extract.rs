use regex::Regex;

/// Extracts raw `href`/`src` attribute values from HTML text.
///
/// Extraction is deliberately pattern-based rather than a structural parse:
/// unclosed tags and invalid nesting never affect it, only the literal
/// `attr='value'` / `attr="value"` syntax matters. Values are returned in
/// order of appearance with duplicates preserved.
pub struct LinkExtractor {
    pattern: Regex,
}

impl LinkExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r#"(?i)(?:href|src)=['"]([^'"]+)['"]"#)
                .expect("Invalid regex"),
        }
    }

    #[must_use]
    pub fn extract(&self, content: &str) -> Vec<String> {
        self.pattern
            .captures_iter(content)
            .map(|cap| cap[1].to_string())
            .collect()
    }
}

impl Default for LinkExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
