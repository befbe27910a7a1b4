//! Rule collection: parse sheets, validate selectors, assign source order.

use css_cascade::{Origin, Rule};
use css_selectors::parse_selector;
use log::debug;

use crate::defaults;

/// Parse the default sheet and every author sheet into one concatenated
/// rule list with a single monotonically increasing source order. Rules
/// whose prelude fails selector parsing are dropped here.
pub fn collect_rules(sheets: &[&str]) -> Vec<Rule> {
    let mut rules = Vec::new();
    let mut order: u32 = 0;
    append_sheet(
        &mut rules,
        &mut order,
        Origin::UserAgent,
        defaults::DEFAULT_STYLESHEET,
    );
    for text in sheets {
        append_sheet(&mut rules, &mut order, Origin::Author, text);
    }
    rules
}

fn append_sheet(rules: &mut Vec<Rule>, order: &mut u32, origin: Origin, text: &str) {
    let sheet = css_syntax::parse_stylesheet(text);
    for style_rule in sheet.rules {
        let Some(selector) = parse_selector(&style_rule.prelude) else {
            debug!(
                "discarding rule with unrecognized selector {:?}",
                style_rule.prelude
            );
            continue;
        };
        rules.push(Rule::new(
            origin,
            *order,
            selector,
            style_rule.declarations,
        ));
        *order = order.saturating_add(1);
    }
}
