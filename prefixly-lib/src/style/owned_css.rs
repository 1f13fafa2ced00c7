// src/style/owned_css.rs: the fully-owned rule tree every plugin works on.
use std::fmt;

/// What kind of block a `RuleBlock` is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// The document root. Never expanded.
    Root,
    /// A selector block, e.g. `.red, #header`.
    Style { selectors: Vec<String> },
    /// A grouping at-rule such as `@media screen` or `@supports (display: grid)`.
    AtRule { name: String, prelude: String },
}

/// An ordered list of declarations plus any nested blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleBlock {
    pub kind: BlockKind,
    pub declarations: Vec<Declaration>,
    pub children: Vec<RuleBlock>,
}

/// One `name: value` pair. `value` and `important` are the payload that gets
/// copied when a variant is synthesized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub value: String,
    pub important: bool,
}

impl Declaration {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Declaration {
            name: name.into(),
            value: value.into(),
            important: false,
        }
    }

    pub fn important(name: impl Into<String>, value: impl Into<String>) -> Self {
        Declaration {
            important: true,
            ..Declaration::new(name, value)
        }
    }

    /// Copy of this declaration with only the name replaced.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Declaration {
            name: name.into(),
            value: self.value.clone(),
            important: self.important,
        }
    }
}

impl RuleBlock {
    pub fn root() -> Self {
        RuleBlock {
            kind: BlockKind::Root,
            declarations: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn style<S: Into<String>>(selectors: impl IntoIterator<Item = S>) -> Self {
        RuleBlock {
            kind: BlockKind::Style {
                selectors: selectors.into_iter().map(Into::into).collect(),
            },
            declarations: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn at_rule(name: impl Into<String>, prelude: impl Into<String>) -> Self {
        RuleBlock {
            kind: BlockKind::AtRule {
                name: name.into(),
                prelude: prelude.into(),
            },
            declarations: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_declarations(mut self, declarations: Vec<Declaration>) -> Self {
        self.declarations = declarations;
        self
    }

    pub fn with_child(mut self, child: RuleBlock) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_root(&self) -> bool {
        matches!(self.kind, BlockKind::Root)
    }

    /// Short label used in logs and errors.
    pub fn label(&self) -> String {
        match &self.kind {
            BlockKind::Root => "<root>".to_string(),
            BlockKind::Style { selectors } => selectors.join(", "),
            BlockKind::AtRule { name, prelude } if prelude.is_empty() => format!("@{}", name),
            BlockKind::AtRule { name, prelude } => format!("@{} {}", name, prelude),
        }
    }

    /// Number of blocks in this subtree, this one included.
    pub fn block_count(&self) -> usize {
        1 + self.children.iter().map(RuleBlock::block_count).sum::<usize>()
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)?;
        if self.important {
            write!(f, " !important")?;
        }
        Ok(())
    }
}

impl fmt::Display for RuleBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Block: {}", self.label())?;
        for decl in &self.declarations {
            writeln!(f, "  {}", decl)?;
        }
        Ok(())
    }
}
