//! Loading `jenna.toml` from disk and building documents from it.

use std::fs;

use jenna_codegen::{
    Block, Document, Indent, JennaConfig, ReformatPolicy, config::ConfigError, tabs,
};
use jenna_core::Result;
use tempfile::TempDir;

/// A class header with one member line.
#[derive(Debug)]
struct ClassStub {
    name: &'static str,
    member: &'static str,
    indent_level: usize,
}

impl ClassStub {
    fn new(name: &'static str, member: &'static str) -> Self {
        Self {
            name,
            member,
            indent_level: 0,
        }
    }
}

impl Block for ClassStub {
    fn indent_level(&self) -> usize {
        self.indent_level
    }

    fn set_indent_level(&mut self, level: usize) {
        self.indent_level = level;
    }

    fn render(&self) -> Result<String> {
        let tabs = tabs(self.indent_level);
        Ok(format!(
            "\n\n{tabs}class {}:\n{tabs}\t{}\n",
            self.name, self.member
        ))
    }
}

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("jenna.toml");
    fs::write(&path, content).expect("write jenna.toml");
    path
}

#[test]
fn test_document_from_config_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r##"
        [document]
        name = "models.py"
        header = "# generated"
        reformat = "each-write"

        [format]
        indent = "tab"
        max_blank_lines = 1
        "##,
    );

    let config = JennaConfig::from_file(&path).unwrap();
    assert_eq!(config.format.indent, Indent::TAB);
    assert_eq!(config.document.reformat, ReformatPolicy::EachWrite);

    let mut document = Document::from_config(&config).unwrap();
    assert_eq!(document.name(), "models.py");

    document.write(&mut ClassStub::new("A", "x = 1")).unwrap();
    assert_eq!(document.contents(), "# generated\n\nclass A:\n\tx = 1\n");

    document.write(&mut ClassStub::new("B", "y = 2")).unwrap();
    assert_eq!(
        document.finalize().unwrap(),
        "# generated\n\nclass A:\n\tx = 1\n\nclass B:\n\ty = 2\n"
    );
}

#[test]
fn test_defaults_when_sections_are_missing() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "");

    let config = JennaConfig::from_file(&path).unwrap();
    assert_eq!(config, JennaConfig::default());

    let mut document = Document::from_config(&config).unwrap();
    assert!(document.name().starts_with("jenna_output_"));
    assert_eq!(document.policy(), ReformatPolicy::OnFinalize);

    document.write(&mut ClassStub::new("A", "x = 1")).unwrap();
    assert_eq!(
        document.finalize().unwrap(),
        "# This file was generated by Jenna\n\n\nclass A:\n    x = 1\n"
    );
}

#[test]
fn test_invalid_document_name_is_reported_with_location() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[document]\nname = \"models.txt\"\n");

    let err = JennaConfig::from_file(&path).unwrap_err();
    match *err {
        ConfigError::Validation { message, span, .. } => {
            assert!(message.contains("models.txt"));
            assert!(span.is_some());
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("jenna.toml");

    let err = JennaConfig::from_file(&missing).unwrap_err();
    match *err {
        ConfigError::Io { path, .. } => assert_eq!(path, missing),
        other => panic!("expected io error, got {other:?}"),
    }
}
