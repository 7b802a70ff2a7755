use std::fmt::Write;

use crate::checker::{FileRecord, ScanReport};
use crate::error::Result;

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if Self::no_color_disables(std::env::var("NO_COLOR").ok().as_deref()) {
                    return false;
                }
                // Check if stdout is a TTY
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    // The NO_COLOR convention counts only a non-empty value as set.
    fn no_color_disables(value: Option<&str>) -> bool {
        value.is_some_and(|v| !v.is_empty())
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_record(&self, record: &FileRecord, output: &mut String) {
        let tag = self.colorize("[MISSING]", ansi::RED);
        let _ = writeln!(output, "{tag} {}", record.path.display());
        for reference in record.distinct() {
            let _ = writeln!(output, "  - {reference}");
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &ScanReport) -> Result<String> {
        let mut output = String::new();

        for record in &report.files {
            self.format_record(record, &mut output);
        }

        if report.is_clean() {
            let line = self.colorize("No missing local links detected.", ansi::GREEN);
            let _ = writeln!(output, "{line}");
        } else {
            let count = self.colorize(&report.total_missing.to_string(), ansi::RED);
            let _ = writeln!(output, "Total missing references: {count}");
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
