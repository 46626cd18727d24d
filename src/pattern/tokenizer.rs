//! Single-pass scanners that locate the tokens of a hegex pattern.
//!
//! All positions are **byte** offsets into the pattern. The delimiters
//! `*`, `{` and `}` are ASCII, so every offset is a char boundary.

use crate::error::HegexError;

use super::token::{AsteriskRun, BraceGroup};

/// Find every maximal run of `*` in `pattern`, left to right.
pub fn find_asterisk_runs(pattern: &str) -> Vec<AsteriskRun> {
    let bytes = pattern.as_bytes();
    let mut runs = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'*' {
            i += 1;
            continue;
        }
        let start = i;
        while i < bytes.len() && bytes[i] == b'*' {
            i += 1;
        }
        runs.push(AsteriskRun { start, end: i });
    }
    runs
}

/// Find and validate every `{...}` group in `pattern`, ordered by start.
///
/// Each `}` closes the most recent unmatched `{`; unpaired braces are left
/// as literal text. Groups that touch or nest are rejected, as is any group
/// whose content is not `NAME` or `NAME[ALT|ALT...]`.
pub fn find_brace_groups(pattern: &str) -> Result<Vec<BraceGroup>, HegexError> {
    let mut spans = Vec::new();
    let mut stack = Vec::new();
    for (i, b) in pattern.bytes().enumerate() {
        match b {
            b'{' => stack.push(i),
            b'}' => {
                if let Some(open) = stack.pop() {
                    spans.push((open, i + 1));
                }
            }
            _ => {}
        }
    }
    spans.sort_unstable();
    check_overlap(pattern, &spans)?;

    spans
        .into_iter()
        .map(|(start, end)| {
            let content = &pattern[start + 1..end - 1];
            let (name, candidates) = parse_content(content).ok_or_else(|| HegexError::Format {
                content: content.to_string(),
                pattern: pattern.to_string(),
            })?;
            Ok(BraceGroup {
                start,
                end,
                name,
                candidates,
            })
        })
        .collect()
}

/// Reject any span that starts at or before the furthest end seen so far.
fn check_overlap(pattern: &str, spans: &[(usize, usize)]) -> Result<(), HegexError> {
    let Some(&first) = spans.first() else {
        return Ok(());
    };
    let mut widest = first;
    for &span in &spans[1..] {
        if span.0 <= widest.1 {
            return Err(HegexError::Overlap {
                first: pattern[widest.0..widest.1].to_string(),
                second: pattern[span.0..span.1].to_string(),
                pattern: pattern.to_string(),
            });
        }
        widest = span;
    }
    Ok(())
}

/// Split brace content into a name and its candidate list, or `None` if malformed.
fn parse_content(content: &str) -> Option<(String, Vec<String>)> {
    let Some((name, rest)) = content.split_once('[') else {
        return is_word(content).then(|| (content.to_string(), Vec::new()));
    };
    let list = rest.strip_suffix(']')?;
    if !is_word(name) {
        return None;
    }
    let candidates: Vec<String> = list.split('|').map(str::to_string).collect();
    candidates
        .iter()
        .all(|c| is_word(c))
        .then_some((name.to_string(), candidates))
}

/// One or more of `[A-Za-z0-9-]`.
fn is_word(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}
