use crate::error::Result;
use crate::options::PrefixlyOptions;
use crate::prefix::expander::RuleExpander;
use crate::style::owned_css::RuleBlock;
use crate::visitor::{walk, VisitAction, Visitor};
use log::debug;

/// A pass a host compiler runs over a parsed tree.
pub trait Plugin {
    fn name(&self) -> &str;

    /// Entry point, called with the document root.
    fn run(&mut self, root: &mut RuleBlock) -> Result<()>;
}

/// Adds the missing vendor-prefixed and unprefixed variants of known properties.
#[derive(Debug, Default)]
pub struct Prefixly {
    options: PrefixlyOptions,
    expander: RuleExpander,
    added: usize,
}

impl Prefixly {
    pub fn new(options: PrefixlyOptions) -> Self {
        Prefixly {
            options,
            expander: RuleExpander::new(),
            added: 0,
        }
    }

    /// Options given at construction. Expansion does not read them.
    pub fn options(&self) -> &PrefixlyOptions {
        &self.options
    }

    /// Declarations appended over every `run` so far.
    pub fn added(&self) -> usize {
        self.added
    }
}

impl Visitor for Prefixly {
    fn visit_rule_block(&mut self, block: &mut RuleBlock) -> Result<VisitAction> {
        if block.is_root() {
            return Ok(VisitAction::Continue);
        }
        self.added += self.expander.expand(block)?;
        Ok(VisitAction::Continue)
    }
}

impl Plugin for Prefixly {
    fn name(&self) -> &str {
        "prefixly"
    }

    fn run(&mut self, root: &mut RuleBlock) -> Result<()> {
        let before = self.added;
        walk(self, root)?;
        debug!(
            "prefixly: {} declarations added across {} blocks",
            self.added - before,
            root.block_count()
        );
        Ok(())
    }
}

/// The plugin's only export. The host decides where to keep it.
pub fn register(options: PrefixlyOptions) -> Box<dyn Plugin> {
    Box::new(Prefixly::new(options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::owned_css::Declaration;
    use pretty_assertions::assert_eq;

    #[test]
    fn expands_nested_blocks_but_not_root() {
        let mut root = RuleBlock::root()
            .with_declarations(vec![Declaration::new("-webkit-transform", "none")])
            .with_child(
                RuleBlock::style([".card"])
                    .with_declarations(vec![Declaration::new("box-sizing", "border-box")])
                    .with_child(
                        RuleBlock::style(["&:hover"])
                            .with_declarations(vec![Declaration::new("-moz-transition", "all 1s")]),
                    ),
            );

        let mut plugin = Prefixly::new(PrefixlyOptions::default());
        plugin.run(&mut root).unwrap();

        assert_eq!(root.declarations.len(), 1);
        assert_eq!(root.children[0].declarations.len(), 5);
        assert_eq!(root.children[0].children[0].declarations.len(), 5);
        assert_eq!(plugin.added(), 8);
    }

    #[test]
    fn options_are_kept_but_inert() {
        let options = PrefixlyOptions {
            base_size: Some(24.0),
            ri_unit: Some("rem".to_string()),
            ..Default::default()
        };
        let block = RuleBlock::style([".a"])
            .with_declarations(vec![Declaration::new("width", "48px"), Declaration::new("appearance", "none")]);

        let mut with_options = RuleBlock::root().with_child(block.clone());
        let mut without = RuleBlock::root().with_child(block);
        let mut configured = Prefixly::new(options.clone());
        configured.run(&mut with_options).unwrap();
        Prefixly::default().run(&mut without).unwrap();

        assert_eq!(configured.options(), &options);
        assert_eq!(with_options, without);
    }

    #[test]
    fn register_returns_a_runnable_plugin() {
        let mut plugin = register(PrefixlyOptions::default());
        let mut root = RuleBlock::root().with_child(
            RuleBlock::style(["p"]).with_declarations(vec![Declaration::new("user-select", "none")]),
        );

        plugin.run(&mut root).unwrap();
        assert_eq!(plugin.name(), "prefixly");
        assert_eq!(root.children[0].declarations.len(), 5);
    }
}
