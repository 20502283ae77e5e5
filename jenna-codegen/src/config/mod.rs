//! `jenna.toml` configuration.
//!
//! ```toml
//! [document]
//! name = "models.py"
//! header = "# This file was generated by Jenna"
//! reformat = "on-finalize"
//!
//! [format]
//! indent = 4
//! max_blank_lines = 2
//! ```
//!
//! Every section and field is optional.

mod error;

use std::{path::Path, str::FromStr};

use miette::SourceSpan;
use serde::Deserialize;

pub use error::{ConfigError, Result, SourceContext};

use crate::{
    builder::Indent,
    document::{DEFAULT_HEADER, Normalizer, ReformatPolicy, is_valid_document_name},
};

/// Root of `jenna.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JennaConfig {
    /// Destination document settings
    pub document: DocumentConfig,
    /// Reformat pass settings
    pub format: FormatConfig,
}

/// The `[document]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentConfig {
    /// Destination name; a timestamped default is used when absent
    pub name: Option<String>,
    /// Header comment line, empty to disable
    pub header: String,
    pub reformat: ReformatPolicy,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            name: None,
            header: DEFAULT_HEADER.to_string(),
            reformat: ReformatPolicy::default(),
        }
    }
}

/// The `[format]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatConfig {
    pub indent: Indent,
    pub max_blank_lines: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        let normalizer = Normalizer::default();
        Self {
            indent: normalizer.indent(),
            max_blank_lines: normalizer.max_blank_lines(),
        }
    }
}

impl FormatConfig {
    /// The normalizer described by this section.
    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.indent, self.max_blank_lines)
    }
}

impl FromStr for JennaConfig {
    type Err = Box<ConfigError>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, "jenna.toml")
    }
}

impl JennaConfig {
    /// Parse a jenna.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_config(&content, &path.display().to_string())
    }

    /// Parse a jenna.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_config(content, filename)
    }
}

/// Parse a configuration from content with the given filename for error reporting.
pub fn parse_config(content: &str, filename: &str) -> Result<JennaConfig> {
    let source_ctx = SourceContext::new(content, filename);
    let config: JennaConfig = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_config(&config, &source_ctx)?;
    Ok(config)
}

/// Validate the configuration after parsing.
fn validate_config(config: &JennaConfig, ctx: &SourceContext) -> Result<()> {
    if let Some(name) = &config.document.name {
        if !is_valid_document_name(name) {
            return Err(ctx.validation_error(
                format!("invalid document name '{}', expected a python file name", name),
                find_value_span(ctx.src(), name),
            ));
        }
    }
    Ok(())
}

/// Find the span of a quoted string value in the TOML source.
fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    let quoted = [format!("\"{}\"", value), format!("'{}'", value)];
    for pattern in &quoted {
        if let Some(pos) = src.find(pattern.as_str()) {
            // +1 to skip the opening quote
            return Some(SourceSpan::from((pos + 1, value.len())));
        }
    }

    // Fallback: just find the value anywhere (less precise)
    src.find(value)
        .map(|pos| SourceSpan::from((pos, value.len())))
}
