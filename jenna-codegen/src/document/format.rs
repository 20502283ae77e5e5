//! The reformat collaborator applied to whole documents.

use std::fmt;

use eyre::Result;

use crate::builder::{CodeBuilder, Indent};

/// Style normalization over an entire document.
///
/// Implementations must be idempotent: reformatting already reformatted
/// text returns it unchanged.
pub trait Formatter: fmt::Debug {
    /// Return the reformatted document.
    fn reformat(&self, source: &str) -> Result<String>;
}

/// Built-in best-effort normalizer.
///
/// - Expands each line's leading tabs into the configured [`Indent`]
/// - Strips trailing whitespace
/// - Drops leading and trailing blank lines
/// - Collapses runs of blank lines to `max_blank_lines`
/// - Ends non-empty output with exactly one newline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    indent: Indent,
    max_blank_lines: usize,
}

impl Normalizer {
    /// Create a normalizer with the given indentation and blank-line limit.
    pub fn new(indent: Indent, max_blank_lines: usize) -> Self {
        Self {
            indent,
            max_blank_lines,
        }
    }

    pub fn indent(&self) -> Indent {
        self.indent
    }

    pub fn max_blank_lines(&self) -> usize {
        self.max_blank_lines
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(Indent::PYTHON, 2)
    }
}

impl Formatter for Normalizer {
    fn reformat(&self, source: &str) -> Result<String> {
        let mut builder = CodeBuilder::new(self.indent);
        let mut pending_blanks = 0;
        let mut started = false;

        for line in source.lines() {
            let line = line.trim_end();
            let content = line.trim_start_matches('\t');
            if content.is_empty() {
                if started {
                    pending_blanks += 1;
                }
                continue;
            }

            for _ in 0..pending_blanks.min(self.max_blank_lines) {
                builder.push_blank();
            }
            pending_blanks = 0;
            started = true;

            // Tabs are single bytes, so the byte difference is the tab count
            let level = line.len() - content.len();
            builder.set_level(level).push_line(content);
        }

        Ok(builder.build())
    }
}

/// Formatter that leaves documents untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Passthrough;

impl Formatter for Passthrough {
    fn reformat(&self, source: &str) -> Result<String> {
        Ok(source.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(source: &str) -> String {
        Normalizer::default().reformat(source).unwrap()
    }

    #[test]
    fn test_expands_leading_tabs() {
        assert_eq!(
            normalize("class A:\n\tdef f(self):\n\t\tpass"),
            "class A:\n    def f(self):\n        pass\n"
        );
    }

    #[test]
    fn test_keeps_tabs_with_tab_indent() {
        let normalizer = Normalizer::new(Indent::TAB, 2);
        assert_eq!(
            normalizer.reformat("if x:\n\ty\n").unwrap(),
            "if x:\n\ty\n"
        );
    }

    #[test]
    fn test_strips_trailing_whitespace() {
        assert_eq!(normalize("x = 1   \ny = 2\t"), "x = 1\ny = 2\n");
    }

    #[test]
    fn test_collapses_blank_lines() {
        assert_eq!(
            normalize("\n\n\nimport os\n\n\n\n\nx = 1\n\n\n"),
            "import os\n\n\nx = 1\n"
        );
        let tight = Normalizer::new(Indent::PYTHON, 0);
        assert_eq!(tight.reformat("a\n\n\nb").unwrap(), "a\nb\n");
    }

    #[test]
    fn test_whitespace_only_lines_are_blank() {
        assert_eq!(normalize("a\n\t\t\n  \nb"), "a\n\n\nb\n");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("\n\n\t\n"), "");
    }

    #[test]
    fn test_idempotent() {
        let source = "# header\n\n\n\nclass A:\n\t\"\"\"Doc\"\"\"\n\tx = 1   \n\n\n\n\tdef f(self):\n\t\tpass\n\n";
        let once = normalize(source);
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(Passthrough.reformat("\tx  \n\n").unwrap(), "\tx  \n\n");
    }
}
