//! Depth-first traversal over a `RuleBlock` tree.

use crate::error::Result;
use crate::style::owned_css::RuleBlock;

/// What the walker should do after a block was visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitAction {
    Continue,
    SkipChildren,
}

pub trait Visitor {
    fn visit_rule_block(&mut self, block: &mut RuleBlock) -> Result<VisitAction>;
}

/// Visits `block`, then its children in order. Stops at the first error.
pub fn walk<V: Visitor + ?Sized>(visitor: &mut V, block: &mut RuleBlock) -> Result<()> {
    if visitor.visit_rule_block(block)? == VisitAction::SkipChildren {
        return Ok(());
    }
    for child in &mut block.children {
        walk(visitor, child)?;
    }
    Ok(())
}
