//! Code generation building blocks.
//!
//! - [`Block`] - Trait for every renderable construct, owning an indent level
//! - [`render`] - Two-phase entry point: assign indents, then render
//! - [`CodeBuilder`] - Line-oriented buffer with indentation
//! - [`Indent`] - Indentation unit used when normalizing output

mod block;
mod code_builder;
mod indent;

pub use block::{Block, render, tabs};
pub use code_builder::CodeBuilder;
pub use indent::Indent;
