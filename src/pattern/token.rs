//! Token types found in a hegex pattern.

use std::ops::Range;

use itertools::Itertools;

/// Regex fragment for a brace group with no candidate list.
///
/// Whitespace, `.` and `/` end the segment, so `/{path}/x` cannot match `/a.txt/x`.
pub const SEGMENT_REGEX: &str = r"[^\s./]+";

/// Regex fragment for a wildcard run.
pub const WILDCARD_REGEX: &str = ".*";

/// A maximal run of consecutive `*` characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsteriskRun {
    pub start: usize,
    pub end: usize,
}

impl AsteriskRun {
    /// Number of asterisks in the run.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Token key: the run itself, e.g. `"**"`.
    pub fn key(&self) -> String {
        "*".repeat(self.len())
    }

    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// A `{name}` or `{name[alt|alt]}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BraceGroup {
    pub start: usize,
    pub end: usize,
    pub name: String,
    /// Empty when the group matches any segment.
    pub candidates: Vec<String>,
}

impl BraceGroup {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Either kind of token, borrowed from the token lists during synthesis.
#[derive(Debug, Clone, Copy)]
pub enum Token<'a> {
    Asterisks(&'a AsteriskRun),
    Brace(&'a BraceGroup),
}

impl Token<'_> {
    pub fn start(&self) -> usize {
        match self {
            Token::Asterisks(a) => a.start,
            Token::Brace(b) => b.start,
        }
    }

    pub fn end(&self) -> usize {
        match self {
            Token::Asterisks(a) => a.end,
            Token::Brace(b) => b.end,
        }
    }

    /// The key under which this token's capture is reported and rewritten.
    pub fn key(&self) -> String {
        match self {
            Token::Asterisks(a) => a.key(),
            Token::Brace(b) => b.name.clone(),
        }
    }

    /// Body of the capture group this token compiles to.
    pub fn group_body(&self) -> String {
        match self {
            Token::Asterisks(_) => WILDCARD_REGEX.to_string(),
            Token::Brace(b) if b.candidates.is_empty() => SEGMENT_REGEX.to_string(),
            Token::Brace(b) => b
                .candidates
                .iter()
                .map(|c| regex::escape(c))
                .join("|"),
        }
    }
}

/// True when `key` addresses a wildcard run rather than a brace group.
pub fn is_asterisk_key(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b == b'*')
}
