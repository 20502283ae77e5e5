//! The renderable construct abstraction.
//!
//! # Indent propagation
//!
//! Indent levels are assigned top-down at render time, not fixed at
//! construction. Rendering is a two-phase contract:
//!
//! 1. **Assign**: [`Block::assign_indents`] stamps every child with
//!    `parent level + 1`, recursively.
//! 2. **Render**: [`Block::render`] reads the stored levels and produces text.
//!
//! [`render`] runs both phases, so a subtree can be built once, re-parented
//! or re-indented by changing only its root's level, and rendered correctly.
//! Composite constructs also run their assign pass from
//! [`Block::set_indent_level`], so calling [`Block::render`] directly after
//! re-indenting gives the same text.

use std::fmt;

use jenna_core::Result;

/// A renderable syntactic construct with an indent level.
///
/// The indent level is a nesting depth, converted to leading tab characters
/// by each renderer.
pub trait Block: fmt::Debug {
    /// Current nesting depth.
    fn indent_level(&self) -> usize;

    /// Set the nesting depth. Composites re-stamp their children as well.
    fn set_indent_level(&mut self, level: usize);

    /// Add exactly one level.
    fn increment_indent_level(&mut self) {
        let level = self.indent_level();
        self.set_indent_level(level + 1);
    }

    /// Stamp `self.indent_level() + 1` onto every child, recursively.
    ///
    /// Leaf constructs have no children and keep the default no-op.
    fn assign_indents(&mut self) {}

    /// Render the construct using the indent levels it currently holds.
    fn render(&self) -> Result<String>;

    /// Whether the construct is a bare line that carries no leading
    /// separation of its own (expressions, comments).
    ///
    /// Composite parents prefix such lines with a newline.
    fn is_line(&self) -> bool {
        false
    }
}

impl<T: Block + ?Sized> Block for Box<T> {
    fn indent_level(&self) -> usize {
        self.as_ref().indent_level()
    }

    fn set_indent_level(&mut self, level: usize) {
        self.as_mut().set_indent_level(level);
    }

    fn assign_indents(&mut self) {
        self.as_mut().assign_indents();
    }

    fn render(&self) -> Result<String> {
        self.as_ref().render()
    }

    fn is_line(&self) -> bool {
        self.as_ref().is_line()
    }
}

/// Run the assign pass, then the render pass.
pub fn render<B: Block + ?Sized>(block: &mut B) -> Result<String> {
    block.assign_indents();
    block.render()
}

/// Leading tabs for the given indent level.
pub fn tabs(level: usize) -> String {
    "\t".repeat(level)
}
