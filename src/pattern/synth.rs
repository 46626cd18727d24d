//! Regex synthesis: stitch escaped literals and token capture groups into
//! one anchored expression.

use std::collections::HashMap;

use itertools::Itertools;

use super::token::{AsteriskRun, BraceGroup, Token};

const ASTERISK_GROUP_PREFIX: &str = "hegex_a";
const BRACE_GROUP_PREFIX: &str = "hegex_b";

/// An anchored regex source plus the generated-group-name to token-key table.
#[derive(Debug, Clone, PartialEq)]
pub struct Synthesis {
    pub source: String,
    pub group_keys: HashMap<String, String>,
}

/// Build the regex for `pattern` from its already-located tokens.
///
/// Both token lists must be ordered by start and must not overlap each other.
pub fn synthesize(pattern: &str, runs: &[AsteriskRun], braces: &[BraceGroup]) -> Synthesis {
    let tokens = runs
        .iter()
        .map(Token::Asterisks)
        .merge_by(braces.iter().map(Token::Brace), |a, b| a.start() < b.start());

    let mut source = String::with_capacity(pattern.len() * 2 + 2);
    let mut group_keys = HashMap::new();
    let mut cursor = 0;

    source.push('^');
    for (index, token) in tokens.enumerate() {
        source.push_str(&regex::escape(&pattern[cursor..token.start()]));

        let name = group_name(&token, index);
        source.push_str(&format!("(?P<{name}>{})", token.group_body()));
        group_keys.insert(name, token.key());

        cursor = token.end();
    }
    source.push_str(&regex::escape(&pattern[cursor..]));
    source.push('$');

    Synthesis { source, group_keys }
}

/// Regex group name for the `index`-th token.
///
/// Names are unique per token, so brace names with `-` or a leading digit
/// and repeated same-length runs are always valid regex group names.
fn group_name(token: &Token<'_>, index: usize) -> String {
    match token {
        Token::Asterisks(a) => format!("{ASTERISK_GROUP_PREFIX}{}_{index}", a.len()),
        Token::Brace(_) => format!("{BRACE_GROUP_PREFIX}{index}"),
    }
}
