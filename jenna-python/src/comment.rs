//! Comment lines and documentation strings.

use jenna_codegen::{Block, tabs};
use jenna_core::{Result, triple_stringify};

/// A `#` comment. Text spanning several lines becomes one comment per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleLineComment {
    text: String,
    indent_level: usize,
}

impl SingleLineComment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            indent_level: 0,
        }
    }

    pub fn with_indent_level(mut self, level: usize) -> Self {
        self.indent_level = level;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Block for SingleLineComment {
    fn indent_level(&self) -> usize {
        self.indent_level
    }

    fn set_indent_level(&mut self, level: usize) {
        self.indent_level = level;
    }

    fn render(&self) -> Result<String> {
        let tabs = tabs(self.indent_level);
        if self.text.is_empty() {
            return Ok(format!("{}#", tabs));
        }
        let lines = self
            .text
            .lines()
            .map(|line| format!("{}# {}", tabs, line).trim_end().to_string())
            .collect::<Vec<_>>();
        Ok(lines.join("\n"))
    }

    fn is_line(&self) -> bool {
        true
    }
}

/// A triple-quoted documentation string.
///
/// Single-line text renders inline (`"""text"""`); multi-line text puts the
/// quotes and every line on lines of their own at the same indent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultilineComment {
    text: String,
    indent_level: usize,
}

impl MultilineComment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            indent_level: 0,
        }
    }

    pub fn with_indent_level(mut self, level: usize) -> Self {
        self.indent_level = level;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Block for MultilineComment {
    fn indent_level(&self) -> usize {
        self.indent_level
    }

    fn set_indent_level(&mut self, level: usize) {
        self.indent_level = level;
    }

    fn render(&self) -> Result<String> {
        let tabs = tabs(self.indent_level);
        if !self.text.contains('\n') {
            return Ok(format!("{}{}", tabs, triple_stringify(&self.text)));
        }

        let mut out = format!("{}\"\"\"", tabs);
        for line in self.text.lines() {
            out.push('\n');
            if !line.is_empty() {
                out.push_str(&tabs);
                out.push_str(line);
            }
        }
        out.push('\n');
        out.push_str(&tabs);
        out.push_str("\"\"\"");
        Ok(out)
    }

    fn is_line(&self) -> bool {
        true
    }
}
