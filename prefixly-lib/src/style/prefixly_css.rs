use crate::error::{PrefixlyError, Result};
use crate::style::owned_css::{Declaration, RuleBlock};
use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, Parser, ParserInput, ParserState,
    QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser, StyleSheetParser, Token,
};
use lightningcss::stylesheet::{ParserOptions, StyleSheet as LightningStyleSheet};
use log::{debug, warn};

/// Parse a raw CSS string into an owned tree under a root block.
///
/// LightningCSS validates the sheet; the tree itself is cut straight from the
/// source so selectors, preludes and values keep the text the author wrote.
pub fn parse_stylesheet(css_text: &str) -> Result<RuleBlock> {
    LightningStyleSheet::parse(css_text, ParserOptions::default())
        .map_err(|e| PrefixlyError::Parse(e.to_string()))?;

    let mut input = ParserInput::new(css_text);
    let mut parser = Parser::new(&mut input);
    let mut rule_parser = SourceRuleParser;
    let mut root = RuleBlock::root();

    for item in StyleSheetParser::new(&mut parser, &mut rule_parser) {
        add_item(&mut root, item);
    }
    debug!("parsed stylesheet into {} blocks", root.block_count());
    Ok(root)
}

/// One entry of a stylesheet or rule body.
enum BodyItem {
    Declaration(Declaration),
    Block(RuleBlock),
    Skipped,
}

fn add_item<'i>(block: &mut RuleBlock, item: std::result::Result<BodyItem, (ParseError<'i, ()>, &'i str)>) {
    match item {
        Ok(BodyItem::Declaration(declaration)) => block.declarations.push(declaration),
        Ok(BodyItem::Block(child)) => block.children.push(child),
        Ok(BodyItem::Skipped) => {}
        Err((_, text)) => warn!("{}: skipping `{}`", block.label(), text.trim()),
    }
}

/// Builds owned blocks from source slices. Keeps `@media` and `@supports`,
/// drops every other at-rule.
struct SourceRuleParser;

impl SourceRuleParser {
    fn parse_body<'i>(&mut self, input: &mut Parser<'i, '_>, block: &mut RuleBlock) {
        for item in RuleBodyParser::new(input, self) {
            add_item(block, item);
        }
    }
}

impl<'i> QualifiedRuleParser<'i> for SourceRuleParser {
    type Prelude = Vec<String>;
    type QualifiedRule = BodyItem;
    type Error = ();

    /// Splits the selector list on top-level commas.
    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> std::result::Result<Self::Prelude, ParseError<'i, ()>> {
        let mut selectors = Vec::new();
        let mut start = input.position();
        loop {
            let end = input.position();
            let done = match input.next() {
                Ok(Token::Comma) => false,
                Ok(_) => continue,
                Err(_) => true,
            };
            let selector = input.slice(start..end).trim();
            if !selector.is_empty() {
                selectors.push(selector.to_string());
            }
            if done {
                break;
            }
            start = input.position();
        }

        if selectors.is_empty() {
            return Err(input.new_custom_error(()));
        }
        Ok(selectors)
    }

    fn parse_block<'t>(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> std::result::Result<BodyItem, ParseError<'i, ()>> {
        let mut block = RuleBlock::style(prelude);
        self.parse_body(input, &mut block);
        Ok(BodyItem::Block(block))
    }
}

impl<'i> AtRuleParser<'i> for SourceRuleParser {
    /// Lowercased name and the prelude text.
    type Prelude = (String, String);
    type AtRule = BodyItem;
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> std::result::Result<Self::Prelude, ParseError<'i, ()>> {
        let start = input.position();
        while input.next().is_ok() {}
        Ok((
            name.to_ascii_lowercase(),
            input.slice_from(start).trim().to_string(),
        ))
    }

    fn rule_without_block(
        &mut self,
        _prelude: Self::Prelude,
        _start: &ParserState,
    ) -> std::result::Result<BodyItem, ()> {
        Ok(BodyItem::Skipped)
    }

    fn parse_block<'t>(
        &mut self,
        (name, prelude): Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> std::result::Result<BodyItem, ParseError<'i, ()>> {
        match name.as_str() {
            "media" | "supports" => {
                let mut block = RuleBlock::at_rule(name, prelude);
                self.parse_body(input, &mut block);
                Ok(BodyItem::Block(block))
            }
            // @font-face, @keyframes etc. carry nothing we expand.
            _ => {
                debug!("dropping @{} block", name);
                Ok(BodyItem::Skipped)
            }
        }
    }
}

impl<'i> DeclarationParser<'i> for SourceRuleParser {
    type Declaration = BodyItem;
    type Error = ();

    /// Takes the value as written. A `{}` block means this was a nested rule
    /// such as `a:hover { .. }`, so it is handed back to the rule parser.
    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> std::result::Result<BodyItem, ParseError<'i, ()>> {
        let start = input.position();
        loop {
            let is_block = match input.next() {
                Ok(token) => matches!(token, Token::CurlyBracketBlock),
                Err(_) => break,
            };
            if is_block {
                return Err(input.new_custom_error(()));
            }
        }

        let (value, important) = split_important(input.slice_from(start));
        Ok(BodyItem::Declaration(Declaration {
            name: name.to_string(),
            value: value.to_string(),
            important,
        }))
    }
}

impl<'i> RuleBodyItemParser<'i, BodyItem, ()> for SourceRuleParser {
    fn parse_declarations(&self) -> bool {
        true
    }

    fn parse_qualified(&self) -> bool {
        true
    }
}

/// `red !important` becomes (`red`, true).
fn split_important(raw: &str) -> (&str, bool) {
    let raw = raw.trim();
    let keyword = "important";
    let at = raw.len().saturating_sub(keyword.len());
    if raw.len() >= keyword.len() && raw.is_char_boundary(at) {
        let (head, tail) = raw.split_at(at);
        if tail.eq_ignore_ascii_case(keyword) {
            if let Some(value) = head.trim_end().strip_suffix('!') {
                return (value.trim_end(), true);
            }
        }
    }
    (raw, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::owned_css::BlockKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_vendor_prefixed_names() {
        let root = parse_stylesheet(".a { -webkit-transform: scale(1); color: red; }").unwrap();

        assert!(root.is_root());
        let block = &root.children[0];
        assert_eq!(
            block.kind,
            BlockKind::Style {
                selectors: vec![".a".to_string()]
            }
        );
        assert_eq!(block.declarations[0].name, "-webkit-transform");
        assert_eq!(block.declarations[0].value, "scale(1)");
        assert_eq!(block.declarations[1], Declaration::new("color", "red"));
    }

    #[test]
    fn values_are_kept_as_written() {
        let root = parse_stylesheet(
            "a { color: blue; -webkit-tap-highlight-color: rgba(0,0,0,0); \
             -webkit-transition: -webkit-transform 1s ease; }",
        )
        .unwrap();

        let values: Vec<_> = root.children[0]
            .declarations
            .iter()
            .map(|d| d.value.as_str())
            .collect();
        assert_eq!(
            values,
            vec!["blue", "rgba(0,0,0,0)", "-webkit-transform 1s ease"]
        );
    }

    #[test]
    fn important_stays_in_source_order() {
        let root = parse_stylesheet("p { color: red !important; width: 10px; }").unwrap();

        let decls = &root.children[0].declarations;
        assert_eq!(decls[0], Declaration::important("color", "red"));
        assert_eq!(decls[1], Declaration::new("width", "10px"));
    }

    #[test]
    fn selector_lists_split_on_top_level_commas() {
        let root = parse_stylesheet(":is(.a, .b) > p, h1 { color: red; }").unwrap();

        assert_eq!(
            root.children[0].kind,
            BlockKind::Style {
                selectors: vec![":is(.a, .b) > p".to_string(), "h1".to_string()]
            }
        );
    }

    #[test]
    fn media_blocks_nest() {
        let root = parse_stylesheet("@media print { .b { color: blue; } } @font-face { font-family: x; }")
            .unwrap();

        assert_eq!(root.children.len(), 1);
        let media = &root.children[0];
        assert_eq!(
            media.kind,
            BlockKind::AtRule {
                name: "media".to_string(),
                prelude: "print".to_string()
            }
        );
        assert_eq!(media.children[0].declarations[0].name, "color");
    }

    #[test]
    fn nested_rules_become_children() {
        let root = parse_stylesheet(".card { color: red; &:hover { -moz-user-select: none; } }").unwrap();

        let card = &root.children[0];
        assert_eq!(card.declarations, vec![Declaration::new("color", "red")]);
        assert_eq!(
            card.children[0].declarations,
            vec![Declaration::new("-moz-user-select", "none")]
        );
    }

    #[test]
    fn split_important_variants() {
        assert_eq!(split_important(" red !important "), ("red", true));
        assert_eq!(split_important("red ! IMPORTANT"), ("red", true));
        assert_eq!(split_important("important"), ("important", false));
        assert_eq!(split_important("1px solid"), ("1px solid", false));
    }

    #[test]
    fn invalid_selector_is_a_parse_error() {
        assert!(matches!(
            parse_stylesheet("..a { color: red; }"),
            Err(PrefixlyError::Parse(_))
        ));
    }
}
