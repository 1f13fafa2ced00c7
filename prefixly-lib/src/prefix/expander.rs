//! Fills in missing vendor-prefixed and unprefixed variants of a block's
//! declarations.

use crate::error::{PrefixlyError, Result};
use crate::prefix::{can_be_prefixed, split_prefix, Prefix, PrefixedName};
use crate::style::owned_css::{Declaration, RuleBlock};
use indexmap::IndexMap;
use log::{debug, trace, warn};
use std::collections::HashSet;

/// Everything seen in one block for a single canonical property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyGroup {
    /// First declaration seen for the property; every synthesized variant copies it.
    pub representative: Declaration,
    /// Indexed by [`Prefix::index`].
    pub prefixes: [bool; 4],
    pub unprefixed: bool,
}

impl PropertyGroup {
    fn new(representative: &Declaration) -> Self {
        PropertyGroup {
            representative: representative.clone(),
            prefixes: [false; 4],
            unprefixed: false,
        }
    }

    pub fn has_prefix(&self, prefix: Prefix) -> bool {
        self.prefixes[prefix.index()]
    }

    /// Declarations that would complete this group, in append order.
    fn missing(&self, canonical: &str) -> Vec<Declaration> {
        let mut out: Vec<Declaration> = Prefix::ALL
            .into_iter()
            .filter(|prefix| !self.has_prefix(*prefix))
            .map(|prefix| self.representative.renamed(prefix.apply(canonical)))
            .collect();
        if !self.unprefixed {
            out.push(self.representative.renamed(canonical));
        }
        out
    }
}

/// Canonical name to group, in order of first appearance.
pub type PropertyGroups = IndexMap<String, PropertyGroup>;

#[derive(Debug, Default)]
pub struct RuleExpander;

impl RuleExpander {
    pub fn new() -> Self {
        RuleExpander
    }

    /// Appends every missing variant to `block.declarations` and returns how
    /// many were added. Root blocks are left alone.
    ///
    /// Fails without touching the block if a declaration has an empty name.
    pub fn expand(&self, block: &mut RuleBlock) -> Result<usize> {
        if block.is_root() {
            return Ok(0);
        }
        validate(block)?;

        let groups = self.collect_groups(&block.declarations);
        let mut added = 0;
        for (canonical, group) in &groups {
            for declaration in group.missing(canonical) {
                trace!("{}: adding {}", block.label(), declaration);
                block.declarations.push(declaration);
                added += 1;
            }
        }

        if added > 0 {
            debug!(
                "{}: appended {} declarations for {} properties",
                block.label(),
                added,
                groups.len()
            );
        }
        Ok(added)
    }

    /// Extraction pass: groups prefixed and unprefixed declarations by canonical name.
    pub fn collect_groups(&self, declarations: &[Declaration]) -> PropertyGroups {
        let mut groups = PropertyGroups::new();
        let mut unprefixed_names = HashSet::new();

        for declaration in declarations {
            let name = declaration.name.as_str();
            if name.is_empty() {
                continue;
            }

            match split_prefix(name) {
                PrefixedName::Prefixed { prefix, canonical } => {
                    groups
                        .entry(canonical.to_string())
                        .or_insert_with(|| PropertyGroup::new(declaration))
                        .prefixes[prefix.index()] = true;
                }
                PrefixedName::Dangling(prefix) => {
                    warn!("ignoring `{}`: no property after {}", name, prefix.as_str());
                }
                PrefixedName::Unprefixed => {}
            }

            if groups.contains_key(name) || can_be_prefixed(name) {
                groups
                    .entry(name.to_string())
                    .or_insert_with(|| PropertyGroup::new(declaration))
                    .unprefixed = true;
            } else {
                unprefixed_names.insert(name);
            }
        }

        // An unprefixed declaration listed before its first prefixed sibling
        // still counts as present.
        for (canonical, group) in groups.iter_mut() {
            if unprefixed_names.contains(canonical.as_str()) {
                group.unprefixed = true;
            }
        }
        groups
    }
}

fn validate(block: &RuleBlock) -> Result<()> {
    match block.declarations.iter().position(|d| d.name.is_empty()) {
        Some(index) => Err(PrefixlyError::EmptyPropertyName {
            block: block.label(),
            index,
        }),
        None => Ok(()),
    }
}
