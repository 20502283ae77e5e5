//! Indentation configuration for normalized output.

use serde::Deserialize;

const SPACES: &str = "        ";

/// Indentation unit for one nesting level.
///
/// Constructs always render with tabs; the [`Normalizer`](crate::Normalizer)
/// expands leading tabs into this unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawIndent")]
pub enum Indent {
    /// Spaces with the specified width (1 to 8).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation (PEP 8).
    pub const PYTHON: Self = Self::Spaces(4);

    /// Tab indentation, matching the raw rendered form.
    pub const TAB: Self = Self::Tab;

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(width) => &SPACES[..usize::from(*width).clamp(1, SPACES.len())],
            Self::Tab => "\t",
        }
    }

    /// The prefix for `level` nesting levels.
    pub fn repeat(&self, level: usize) -> String {
        self.as_str().repeat(level)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::PYTHON
    }
}

/// Accepted `indent` forms in `jenna.toml`: a width or the string "tab".
#[derive(Deserialize)]
#[serde(untagged)]
enum RawIndent {
    Width(i64),
    Keyword(String),
}

impl TryFrom<RawIndent> for Indent {
    type Error = String;

    fn try_from(raw: RawIndent) -> Result<Self, Self::Error> {
        match raw {
            RawIndent::Width(width @ 1..=8) => Ok(Self::Spaces(width as u8)),
            RawIndent::Width(width) => Err(format!(
                "indent width must be between 1 and 8, got {}",
                width
            )),
            RawIndent::Keyword(keyword) if keyword == "tab" => Ok(Self::Tab),
            RawIndent::Keyword(keyword) => Err(format!(
                "unknown indent '{}', expected a width or \"tab\"",
                keyword
            )),
        }
    }
}
