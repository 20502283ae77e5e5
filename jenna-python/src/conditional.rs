//! `if`/`elif`/`else` blocks.

use jenna_codegen::{Block, tabs};
use jenna_core::{CodegenError, Result};

use crate::Expr;

/// Which keyword a conditional renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConditionalKind {
    #[default]
    If,
    Elif,
}

impl ConditionalKind {
    pub fn keyword(self) -> &'static str {
        match self {
            ConditionalKind::If => "if",
            ConditionalKind::Elif => "elif",
        }
    }
}

/// A single guarded block: `if guard:` or `elif guard:` with its actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct If {
    guard: Expr,
    actions: Vec<Expr>,
    kind: ConditionalKind,
    indent_level: usize,
}

impl If {
    pub fn new(guard: impl Into<Expr>, actions: impl IntoIterator<Item = impl Into<Expr>>) -> Self {
        let mut conditional = Self {
            guard: guard.into(),
            actions: actions.into_iter().map(Into::into).collect(),
            kind: ConditionalKind::If,
            indent_level: 0,
        };
        conditional.assign_indents();
        conditional
    }

    /// Same as [`If::new`] but rendered with `elif`.
    pub fn elif(guard: impl Into<Expr>, actions: impl IntoIterator<Item = impl Into<Expr>>) -> Self {
        let mut conditional = Self::new(guard, actions);
        conditional.kind = ConditionalKind::Elif;
        conditional
    }

    pub fn with_indent_level(mut self, level: usize) -> Self {
        self.indent_level = level;
        self.assign_indents();
        self
    }

    pub fn guard(&self) -> &Expr {
        &self.guard
    }

    pub fn actions(&self) -> &[Expr] {
        &self.actions
    }

    pub fn kind(&self) -> ConditionalKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: ConditionalKind) {
        self.kind = kind;
    }

    pub fn push_action(&mut self, action: impl Into<Expr>) {
        let mut action = action.into();
        action.set_indent_level(self.indent_level + 1);
        self.actions.push(action);
    }
}

impl Block for If {
    fn indent_level(&self) -> usize {
        self.indent_level
    }

    fn set_indent_level(&mut self, level: usize) {
        self.indent_level = level;
        self.assign_indents();
    }

    fn assign_indents(&mut self) {
        let level = self.indent_level + 1;
        for action in &mut self.actions {
            action.set_indent_level(level);
        }
    }

    fn render(&self) -> Result<String> {
        let tabs = tabs(self.indent_level);
        let mut out = format!(
            "\n{}{} {}:",
            tabs,
            self.kind.keyword(),
            self.guard.expression()
        );

        if self.actions.is_empty() {
            out.push_str(&format!("\n{}\tpass", tabs));
        }
        for action in &self.actions {
            out.push('\n');
            out.push_str(&action.render()?);
        }

        Ok(out)
    }
}

/// A full `if`/`elif`/`else` chain.
///
/// The first conditional attached becomes the `if`; every later one is
/// turned into an `elif` at the chain's level. Rendering fails until a
/// first conditional is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfElse {
    primary: Option<If>,
    elifs: Vec<If>,
    else_actions: Vec<Expr>,
    indent_level: usize,
}

impl IfElse {
    /// Create a chain with the given `else` body. An empty body renders `pass`.
    pub fn new(else_actions: impl IntoIterator<Item = impl Into<Expr>>) -> Self {
        let mut chain = Self {
            primary: None,
            elifs: Vec::new(),
            else_actions: else_actions.into_iter().map(Into::into).collect(),
            indent_level: 0,
        };
        chain.assign_indents();
        chain
    }

    pub fn with_indent_level(mut self, level: usize) -> Self {
        self.indent_level = level;
        self.assign_indents();
        self
    }

    pub fn with_conditional(mut self, conditional: If) -> Self {
        self.add_conditional(conditional);
        self
    }

    pub fn primary(&self) -> Option<&If> {
        self.primary.as_ref()
    }

    pub fn elifs(&self) -> &[If] {
        &self.elifs
    }

    pub fn else_actions(&self) -> &[Expr] {
        &self.else_actions
    }

    /// Attach the next branch of the chain.
    pub fn add_conditional(&mut self, mut conditional: If) {
        conditional.set_indent_level(self.indent_level);
        conditional.assign_indents();

        if self.primary.is_none() {
            conditional.set_kind(ConditionalKind::If);
            self.primary = Some(conditional);
        } else {
            conditional.set_kind(ConditionalKind::Elif);
            self.elifs.push(conditional);
        }
    }
}

impl Block for IfElse {
    fn indent_level(&self) -> usize {
        self.indent_level
    }

    fn set_indent_level(&mut self, level: usize) {
        self.indent_level = level;
        self.assign_indents();
    }

    fn assign_indents(&mut self) {
        let level = self.indent_level;
        for conditional in self.primary.iter_mut().chain(self.elifs.iter_mut()) {
            conditional.set_indent_level(level);
            conditional.assign_indents();
        }
        for action in &mut self.else_actions {
            action.set_indent_level(level + 1);
        }
    }

    fn render(&self) -> Result<String> {
        let primary = self
            .primary
            .as_ref()
            .ok_or(CodegenError::MissingPrimaryConditional)?;

        let tabs = tabs(self.indent_level);
        let mut out = primary.render()?;
        for elif in &self.elifs {
            out.push_str(&elif.render()?);
        }

        out.push_str(&format!("\n{}else:", tabs));
        if self.else_actions.is_empty() {
            out.push_str(&format!("\n{}\tpass", tabs));
        }
        for action in &self.else_actions {
            out.push('\n');
            out.push_str(&action.render()?);
        }

        Ok(out)
    }
}
