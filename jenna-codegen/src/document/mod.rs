//! Destination documents that rendered constructs are appended to.
//!
//! A [`Document`] accumulates rendered text and hands the whole text to a
//! [`Formatter`] either after every write ([`ReformatPolicy::EachWrite`]) or
//! once when finalized ([`ReformatPolicy::OnFinalize`], the default).

mod format;
mod name;

use eyre::{Result, WrapErr};
use serde::Deserialize;
use tracing::{debug, warn};

pub use format::{Formatter, Normalizer, Passthrough};
pub use name::{default_document_name, is_valid_document_name, validate_document_name};

use crate::{
    builder::{Block, render},
    config::JennaConfig,
};

/// Header comment written at the top of new documents.
pub const DEFAULT_HEADER: &str = "# This file was generated by Jenna";

/// When the formatter runs over the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReformatPolicy {
    /// Reformat the whole document after every write.
    EachWrite,
    /// Reformat once, when the document is finalized.
    #[default]
    OnFinalize,
}

/// An accumulating Python source document.
///
/// # Example
///
/// ```
/// use jenna_codegen::Document;
///
/// let mut document = Document::new("models.py").unwrap();
/// document.append_text("\nx = 1\n");
/// let text = document.finalize().unwrap();
///
/// assert_eq!(text, "# This file was generated by Jenna\n\nx = 1\n");
/// ```
#[derive(Debug)]
pub struct Document {
    name: String,
    buffer: String,
    policy: ReformatPolicy,
    formatter: Box<dyn Formatter>,
}

impl Document {
    /// Create a document with a validated python file name and the default header.
    pub fn new(name: impl Into<String>) -> jenna_core::Result<Self> {
        let name = name.into();
        validate_document_name(&name)?;
        Ok(Self::with_valid_name(name))
    }

    /// Create a document named `jenna_output_<unix seconds>.py`.
    pub fn untitled() -> Self {
        Self::with_valid_name(default_document_name())
    }

    /// Create a document from the `[document]` and `[format]` configuration.
    pub fn from_config(config: &JennaConfig) -> jenna_core::Result<Self> {
        let document = match &config.document.name {
            Some(name) => Self::new(name.clone())?,
            None => Self::untitled(),
        };
        Ok(document
            .with_header(&config.document.header)
            .with_policy(config.document.reformat)
            .with_formatter(config.format.normalizer()))
    }

    fn with_valid_name(name: String) -> Self {
        Self {
            name,
            buffer: header_line(DEFAULT_HEADER),
            policy: ReformatPolicy::default(),
            formatter: Box::new(Normalizer::default()),
        }
    }

    /// Replace the starting content with another header comment.
    ///
    /// An empty header starts the document empty. Any text already written is
    /// discarded, so call this right after construction.
    pub fn with_header(mut self, header: &str) -> Self {
        self.buffer = header_line(header);
        self
    }

    /// Set when the formatter runs.
    pub fn with_policy(mut self, policy: ReformatPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the formatter.
    pub fn with_formatter(mut self, formatter: impl Formatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn policy(&self) -> ReformatPolicy {
        self.policy
    }

    /// The current document text.
    pub fn contents(&self) -> &str {
        &self.buffer
    }

    /// Append rendered text, dropping its trailing line terminators.
    pub fn append_text(&mut self, text: &str) {
        let text = text.trim_end_matches('\n');
        debug!(document = %self.name, bytes = text.len(), "appending text");
        self.buffer.push_str(text);
    }

    /// Render a construct (assign pass, then render pass) and append it.
    ///
    /// Bare lines ([`Block::is_line`]) are put on a line of their own. Under [`ReformatPolicy::EachWrite`] the whole document is reformatted
    /// afterwards. If rendering or reformatting fails the document is left
    /// exactly as it was before the call.
    pub fn write<B: Block + ?Sized>(&mut self, block: &mut B) -> Result<()> {
        let mut rendered = render(block)?;
        if block.is_line() {
            rendered.insert(0, '\n');
        }

        match self.policy {
            ReformatPolicy::OnFinalize => {
                self.append_text(&rendered);
                Ok(())
            }
            ReformatPolicy::EachWrite => {
                let previous = self.buffer.clone();
                self.append_text(&rendered);
                if let Err(err) = self.reformat() {
                    warn!(document = %self.name, "reformat failed, rolling back write");
                    self.buffer = previous;
                    return Err(err);
                }
                Ok(())
            }
        }
    }

    /// Run the formatter over the whole document.
    ///
    /// On failure the document keeps its unformatted text.
    pub fn reformat(&mut self) -> Result<()> {
        let formatted = self
            .formatter
            .reformat(&self.buffer)
            .wrap_err_with(|| format!("failed to reformat '{}'", self.name))?;
        debug!(
            document = %self.name,
            before = self.buffer.len(),
            after = formatted.len(),
            "reformatted document"
        );
        self.buffer = formatted;
        Ok(())
    }

    /// Run a final reformat pass and return the finished text.
    pub fn finalize(mut self) -> Result<String> {
        self.reformat()?;
        debug!(document = %self.name, bytes = self.buffer.len(), "finalized document");
        Ok(self.buffer)
    }
}

fn header_line(header: &str) -> String {
    if header.is_empty() {
        String::new()
    } else {
        format!("{}\n", header)
    }
}

#[cfg(test)]
mod tests {
    use eyre::eyre;
    use jenna_core::CodegenError;

    use super::*;
    use crate::builder::tabs;

    #[derive(Debug)]
    struct Statement {
        text: &'static str,
        level: usize,
    }

    impl Block for Statement {
        fn indent_level(&self) -> usize {
            self.level
        }

        fn set_indent_level(&mut self, level: usize) {
            self.level = level;
        }

        fn render(&self) -> jenna_core::Result<String> {
            Ok(format!("\n{}{}\n\n", tabs(self.level), self.text))
        }
    }

    #[derive(Debug)]
    struct Comment {
        text: &'static str,
    }

    impl Block for Comment {
        fn indent_level(&self) -> usize {
            0
        }

        fn set_indent_level(&mut self, _level: usize) {}

        fn render(&self) -> jenna_core::Result<String> {
            Ok(format!("# {}", self.text))
        }

        fn is_line(&self) -> bool {
            true
        }
    }

    #[derive(Debug)]
    struct Broken;

    impl Block for Broken {
        fn indent_level(&self) -> usize {
            0
        }

        fn set_indent_level(&mut self, _level: usize) {}

        fn render(&self) -> jenna_core::Result<String> {
            Err(CodegenError::MissingPrimaryConditional)
        }
    }

    #[derive(Debug)]
    struct FailingFormatter;

    impl Formatter for FailingFormatter {
        fn reformat(&self, _source: &str) -> Result<String> {
            Err(eyre!("formatter crashed"))
        }
    }

    fn statement(text: &'static str) -> Statement {
        Statement { text, level: 0 }
    }

    #[test]
    fn test_new_validates_name() {
        assert!(Document::new("models.py").is_ok());
        let err = Document::new("models.txt").unwrap_err();
        assert_eq!(
            err,
            CodegenError::InvalidDocumentName {
                name: "models.txt".to_string()
            }
        );
    }

    #[test]
    fn test_untitled_name() {
        let document = Document::untitled();
        assert!(document.name().starts_with("jenna_output_"));
        assert!(document.name().ends_with(".py"));
    }

    #[test]
    fn test_header() {
        let document = Document::new("a.py").unwrap();
        assert_eq!(document.contents(), "# This file was generated by Jenna\n");

        let document = Document::new("a.py").unwrap().with_header("");
        assert_eq!(document.contents(), "");

        let document = Document::new("a.py").unwrap().with_header("# custom");
        assert_eq!(document.contents(), "# custom\n");
    }

    #[test]
    fn test_append_text_trims_trailing_newlines() {
        let mut document = Document::new("a.py").unwrap().with_header("");
        document.append_text("\nx = 1\n\n");
        document.append_text("\ny = 2\n");
        assert_eq!(document.contents(), "\nx = 1\ny = 2");
    }

    #[test]
    fn test_deferred_reformat() {
        let mut document = Document::new("a.py").unwrap();
        document.write(&mut statement("x = 1")).unwrap();
        document.write(&mut statement("y = 2")).unwrap();
        assert_eq!(
            document.contents(),
            "# This file was generated by Jenna\n\nx = 1\ny = 2"
        );

        let text = document.finalize().unwrap();
        assert_eq!(text, "# This file was generated by Jenna\n\nx = 1\ny = 2\n");
    }

    #[test]
    fn test_bare_lines_start_a_new_line() {
        let mut document = Document::new("a.py")
            .unwrap()
            .with_header("")
            .with_formatter(Passthrough);
        document.write(&mut statement("x = 1")).unwrap();
        document.write(&mut Comment { text: "note" }).unwrap();
        document.write(&mut Comment { text: "done" }).unwrap();
        assert_eq!(document.contents(), "\nx = 1\n# note\n# done");
    }

    #[test]
    fn test_reformat_each_write() {
        let mut document = Document::new("a.py")
            .unwrap()
            .with_policy(ReformatPolicy::EachWrite);
        let mut nested = Statement {
            text: "z = 3",
            level: 1,
        };
        document.write(&mut nested).unwrap();
        assert_eq!(
            document.contents(),
            "# This file was generated by Jenna\n\n    z = 3\n"
        );
    }

    #[test]
    fn test_failed_reformat_rolls_back() {
        let mut document = Document::new("a.py")
            .unwrap()
            .with_policy(ReformatPolicy::EachWrite)
            .with_formatter(FailingFormatter);
        let before = document.contents().to_string();

        let err = document.write(&mut statement("x = 1")).unwrap_err();
        assert!(format!("{:?}", err).contains("formatter crashed"));
        assert_eq!(document.contents(), before);
    }

    #[test]
    fn test_failed_render_leaves_document_untouched() {
        let mut document = Document::new("a.py").unwrap();
        let err = document.write(&mut Broken).unwrap_err();
        assert_eq!(
            err.downcast_ref::<CodegenError>(),
            Some(&CodegenError::MissingPrimaryConditional)
        );
        assert_eq!(document.contents(), "# This file was generated by Jenna\n");
    }

    #[test]
    fn test_passthrough_finalize() {
        let mut document = Document::new("a.py")
            .unwrap()
            .with_header("")
            .with_formatter(Passthrough);
        document.append_text("\tx");
        assert_eq!(document.finalize().unwrap(), "\tx");
    }

    #[test]
    fn test_policy_deserialize() {
        #[derive(Deserialize)]
        struct Wrapper {
            reformat: ReformatPolicy,
        }
        let wrapper: Wrapper = toml::from_str("reformat = \"each-write\"").unwrap();
        assert_eq!(wrapper.reformat, ReformatPolicy::EachWrite);
        assert_eq!(ReformatPolicy::default(), ReformatPolicy::OnFinalize);
    }
}
