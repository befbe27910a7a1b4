//! Fault-tolerant parsing for the styleworks stylesheet grammar.
//!
//! The grammar is a deliberately small subset of CSS:
//!
//! ```text
//! stylesheet   := rule*
//! rule         := prelude '{' declarations '}'
//! declarations := (property ':' value ';')*
//! ```
//!
//! The prelude (selector chain) is kept as raw text here and validated by
//! the `css_selectors` crate; property names are case-folded to ASCII
//! lowercase and values are opaque single tokens.
//!
//! Parsing is total: it never fails and never loops, whatever the input.
//! Malformed fragments are discarded at two resynchronization points:
//!
//! - inside a block, a failed declaration skips to the next `;` and resumes;
//!   if the block ends (or the input runs out) before a `;`, the whole rule
//!   is abandoned;
//! - at the top level, an abandoned rule skips past the next `}` and parsing
//!   resumes with the next rule.
//!
//! Stylesheet authors cannot be trusted to match this subset, so anything
//! unrecognized is silently ignored rather than reported as an error.

#![forbid(unsafe_code)]

mod cursor;

use cursor::{Cursor, ParseResult};
use log::debug;

pub use cursor::ParseError;

/// A single declaration (`property: value`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Lowercased property name.
    pub name: String,
    /// Raw value token, preserved as authored.
    pub value: String,
}

/// A rule with a raw selector prelude and its parsed declarations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleRule {
    /// Raw prelude text (the selector chain), trimmed.
    pub prelude: String,
    /// Declarations within the rule block.
    pub declarations: Vec<Declaration>,
}

/// A parsed stylesheet: rules in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stylesheet {
    /// Top-level rules in source order. Order is significant; it is the
    /// cascade tie-breaker among rules of equal specificity.
    pub rules: Vec<StyleRule>,
}

/// Parse stylesheet text into rules, discarding malformed fragments.
pub fn parse_stylesheet(css: &str) -> Stylesheet {
    let mut cursor = Cursor::new(css);
    let mut sheet = Stylesheet::default();
    loop {
        cursor.skip_whitespace();
        if cursor.is_eof() {
            break;
        }
        match parse_rule(&mut cursor) {
            Ok(rule) => sheet.rules.push(rule),
            Err(error) => {
                debug!("discarding malformed rule near byte {}", error.position);
                // Top-level resynchronization: skip past the next `}`.
                if !cursor.skip_past(b'}') {
                    break;
                }
            }
        }
    }
    sheet
}

/// Parse a bare declaration list (no selectors, no braces), as found in a
/// `style` attribute. Malformed items are skipped individually.
pub fn parse_declaration_list(text: &str) -> Vec<Declaration> {
    let mut cursor = Cursor::new(text);
    let mut out = Vec::new();
    loop {
        cursor.skip_whitespace();
        if cursor.is_eof() {
            break;
        }
        if cursor.peek() == Some(b';') {
            // Empty item between separators.
            cursor.bump();
            continue;
        }
        match parse_declaration(&mut cursor) {
            Ok(declaration) => out.push(declaration),
            Err(error) => {
                debug!(
                    "discarding malformed declaration near byte {}",
                    error.position
                );
                if !cursor.skip_past(b';') {
                    break;
                }
            }
        }
    }
    out
}

/// Parse one rule: prelude, `{`, declarations, `}`.
fn parse_rule(cursor: &mut Cursor) -> ParseResult<StyleRule> {
    let prelude = parse_prelude(cursor)?;
    cursor.expect(b'{')?;
    let declarations = parse_block(cursor)?;
    Ok(StyleRule {
        prelude,
        declarations,
    })
}

/// Consume prelude text up to the opening brace. Fails on an empty prelude
/// or when a `}` (or end of input) arrives before any `{`.
fn parse_prelude(cursor: &mut Cursor) -> ParseResult<String> {
    let start = cursor.position();
    cursor.consume_until_any(&[b'{', b'}']);
    if cursor.peek() != Some(b'{') {
        return Err(cursor.error());
    }
    let prelude = cursor.slice_from(start).trim().to_owned();
    if prelude.is_empty() {
        return Err(cursor.error());
    }
    Ok(prelude)
}

/// Parse the declarations of a block whose `{` has been consumed, consuming
/// the closing `}`. A block left unclosed at end of input keeps whatever
/// parsed cleanly.
fn parse_block(cursor: &mut Cursor) -> ParseResult<Vec<Declaration>> {
    let mut declarations = Vec::new();
    loop {
        cursor.skip_whitespace();
        match cursor.peek() {
            None => return Ok(declarations),
            Some(b'}') => {
                cursor.bump();
                return Ok(declarations);
            }
            Some(b';') => {
                cursor.bump();
                continue;
            }
            Some(_) => match parse_declaration(cursor) {
                Ok(declaration) => declarations.push(declaration),
                Err(error) => {
                    debug!(
                        "discarding malformed declaration near byte {}",
                        error.position
                    );
                    // Declaration-level resynchronization: resume after the
                    // next `;`. Reaching `}` or end of input without one
                    // abandons the whole rule.
                    cursor.consume_until_any(&[b';', b'}']);
                    if cursor.peek() == Some(b';') {
                        cursor.bump();
                    } else {
                        return Err(error);
                    }
                }
            },
        }
    }
}

/// Parse `property ':' value` with an optional trailing `;`. The separator
/// may be omitted only immediately before `}` or end of input, which is what
/// lets `style` attributes share this parser.
fn parse_declaration(cursor: &mut Cursor) -> ParseResult<Declaration> {
    let name = cursor.consume_identifier()?.to_ascii_lowercase();
    cursor.skip_whitespace();
    cursor.expect(b':')?;
    cursor.skip_whitespace();
    let value = cursor.consume_value_token()?;
    cursor.skip_whitespace();
    match cursor.peek() {
        Some(b';') => cursor.bump(),
        Some(b'}') | None => {}
        Some(_) => return Err(cursor.error()),
    }
    Ok(Declaration { name, value })
}
