//! Shared code generation plumbing for the Jenna Python source generator.
//!
//! This crate provides the language-agnostic pieces that the construct tree
//! (`jenna-python`) renders through and writes into.
//!
//! # Module Organization
//!
//! - [`builder`] - The [`Block`] trait, the two-phase [`render`] entry point,
//!   [`CodeBuilder`] and [`Indent`]
//! - [`document`] - The destination [`Document`] and its [`Formatter`] collaborator
//! - [`config`] - `jenna.toml` parsing and validation

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod builder;
pub mod config;
pub mod document;

pub use builder::{Block, CodeBuilder, Indent, render, tabs};
pub use config::JennaConfig;
pub use document::{Document, Formatter, Normalizer, Passthrough, ReformatPolicy};
