use crate::style::owned_css::{BlockKind, RuleBlock};
use std::fmt::{self, Write};

/// Serialize an owned tree back to CSS text.
pub fn print_stylesheet(root: &RuleBlock, minify: bool) -> String {
    PrintedStylesheet { root, minify }.to_string()
}

/// CSS text of a tree. A root block prints only its children.
pub struct PrintedStylesheet<'a> {
    pub root: &'a RuleBlock,
    pub minify: bool,
}

impl fmt::Display for PrintedStylesheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let blocks: Vec<&RuleBlock> = if self.root.is_root() {
            self.root.children.iter().collect()
        } else {
            vec![self.root]
        };
        for (i, block) in blocks.into_iter().enumerate() {
            if i > 0 && !self.minify {
                f.write_char('\n')?;
            }
            print_block(f, block, 0, self.minify)?;
        }
        Ok(())
    }
}

fn print_block<W: Write>(out: &mut W, block: &RuleBlock, depth: usize, minify: bool) -> fmt::Result {
    let indent = if minify { String::new() } else { "  ".repeat(depth) };
    let header = match &block.kind {
        BlockKind::Root => String::new(),
        BlockKind::Style { selectors } => selectors.join(if minify { "," } else { ", " }),
        BlockKind::AtRule { name, prelude } if prelude.is_empty() => format!("@{}", name),
        BlockKind::AtRule { name, prelude } => format!("@{} {}", name, prelude),
    };

    if minify {
        write!(out, "{}{{", header)?;
    } else {
        writeln!(out, "{}{} {{", indent, header)?;
    }

    let count = block.declarations.len();
    for (i, decl) in block.declarations.iter().enumerate() {
        let important = if decl.important { " !important" } else { "" };
        if minify {
            write!(out, "{}:{}{}", decl.name, decl.value, important.trim_start())?;
            if i + 1 < count || !block.children.is_empty() {
                out.write_char(';')?;
            }
        } else {
            writeln!(out, "{}  {}: {}{};", indent, decl.name, decl.value, important)?;
        }
    }

    for child in &block.children {
        print_block(out, child, depth + 1, minify)?;
    }

    if minify {
        out.write_char('}')
    } else {
        writeln!(out, "{}}}", indent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::owned_css::Declaration;
    use pretty_assertions::assert_eq;

    fn sample() -> RuleBlock {
        RuleBlock::root()
            .with_child(RuleBlock::style([".a", "p"]).with_declarations(vec![
                Declaration::new("transform", "none"),
                Declaration::important("color", "red"),
            ]))
            .with_child(
                RuleBlock::at_rule("media", "print").with_child(
                    RuleBlock::style([".b"]).with_declarations(vec![Declaration::new("width", "0")]),
                ),
            )
    }

    #[test]
    fn pretty_output() {
        assert_eq!(
            print_stylesheet(&sample(), false),
            ".a, p {\n  transform: none;\n  color: red !important;\n}\n\n@media print {\n  .b {\n    width: 0;\n  }\n}\n"
        );
    }

    #[test]
    fn minified_output() {
        assert_eq!(
            print_stylesheet(&sample(), true),
            ".a,p{transform:none;color:red!important}@media print{.b{width:0}}"
        );
    }

    #[test]
    fn display_matches_print_stylesheet() {
        let root = sample();
        let printed = PrintedStylesheet {
            root: &root.children[0],
            minify: false,
        };

        assert_eq!(
            format!("{}", printed),
            ".a, p {\n  transform: none;\n  color: red !important;\n}\n"
        );
    }
}
