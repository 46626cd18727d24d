//! Compiled hegex patterns: whole-string matching, capture extraction and
//! template rewriting.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use regex::Regex;

use crate::error::HegexError;

use super::synth::synthesize;
use super::token::{AsteriskRun, BraceGroup, is_asterisk_key};
use super::tokenizer::{find_asterisk_runs, find_brace_groups};

/// Captured values keyed by token key (`"*"`, `"**"`, or a brace name).
pub type Captures = BTreeMap<String, String>;

/// A compiled hegex pattern.
///
/// Immutable once built; matching takes `&self` and may run from many
/// threads at once.
#[derive(Debug, Clone)]
pub struct Hegex {
    pattern: String,
    runs: Vec<AsteriskRun>,
    braces: Vec<BraceGroup>,
    re: Regex,
    group_keys: HashMap<String, String>,
}

impl Hegex {
    /// Compile `pattern`.
    #[tracing::instrument(level = "debug")]
    pub fn new(pattern: &str) -> Result<Self, HegexError> {
        let runs = find_asterisk_runs(pattern);
        let braces = find_brace_groups(pattern)?;
        let synthesis = synthesize(pattern, &runs, &braces);
        let re = Regex::new(&synthesis.source)?;

        tracing::debug!(
            regex = %synthesis.source,
            asterisk_runs = runs.len(),
            brace_groups = braces.len(),
            "compiled pattern"
        );

        Ok(Self {
            pattern: pattern.to_string(),
            runs,
            braces,
            re,
            group_keys: synthesis.group_keys,
        })
    }

    /// The pattern this was compiled from.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// The synthesized anchored regex.
    pub fn regex_str(&self) -> &str {
        self.re.as_str()
    }

    pub fn asterisk_runs(&self) -> &[AsteriskRun] {
        &self.runs
    }

    pub fn brace_groups(&self) -> &[BraceGroup] {
        &self.braces
    }

    /// True iff the whole of `text` matches.
    pub fn is_match(&self, text: &str) -> bool {
        let matched = self.re.is_match(text);
        tracing::trace!(pattern = %self.pattern, text, matched, "match");
        matched
    }

    /// Match `text` and collect the captured value of every token.
    ///
    /// `None` means no match. A match against a pattern without tokens
    /// yields an empty map. When several tokens share a key, the rightmost
    /// one's capture is kept.
    pub fn extract(&self, text: &str) -> Option<Captures> {
        let caps = self.re.captures(text)?;
        let captures = self
            .re
            .capture_names()
            .enumerate()
            .filter_map(|(i, name)| {
                let key = self.group_keys.get(name?)?;
                let value = caps.get(i)?.as_str();
                Some((key.clone(), value.to_string()))
            })
            .collect::<Captures>();
        tracing::trace!(pattern = %self.pattern, text, ?captures, "extract");
        Some(captures)
    }

    /// Match `text` and substitute its captures into `template`.
    ///
    /// Returns the template untouched and `false` when `text` does not match.
    pub fn rewrite<'t>(&self, text: &str, template: &'t str) -> (Cow<'t, str>, bool) {
        match self.extract(text) {
            Some(captures) => (Cow::Owned(apply_template(template, &captures)), true),
            None => (Cow::Borrowed(template), false),
        }
    }

    /// Like [`Hegex::rewrite`], but yields `None` when `text` does not match.
    pub fn substitute(&self, text: &str, template: &str) -> Option<String> {
        self.extract(text)
            .map(|captures| apply_template(template, &captures))
    }
}

/// Replace placeholders in `template` with captured values.
///
/// Longer keys go first so `**` is consumed before `*`, and `{name-long}`
/// before any key it contains. Ties are broken lexicographically.
pub fn apply_template(template: &str, captures: &Captures) -> String {
    captures
        .iter()
        .sorted_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)))
        .fold(template.to_string(), |acc, (key, value)| {
            if is_asterisk_key(key) {
                acc.replace(key.as_str(), value)
            } else {
                acc.replace(&format!("{{{key}}}"), value)
            }
        })
}

impl fmt::Display for Hegex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl FromStr for Hegex {
    type Err = HegexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Hegex {
    type Error = HegexError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn caps(pairs: &[(&str, &str)]) -> Captures {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_longest_key_first() {
        let captures = caps(&[("*", "a"), ("**", "b")]);
        assert_eq!(apply_template("/my-**-*", &captures), "/my-b-a");
    }

    #[test]
    fn test_longer_name_before_contained_name() {
        let captures = caps(&[("site", "x"), ("site-id", "42")]);
        assert_eq!(apply_template("{site-id}/{site}", &captures), "42/x");
    }

    #[test]
    fn test_every_occurrence_replaced() {
        let captures = caps(&[("*", "abc")]);
        assert_eq!(apply_template("/my-*-*", &captures), "/my-abc-abc");
    }

    #[test]
    fn test_bare_name_is_not_a_placeholder() {
        let captures = caps(&[("site", "book")]);
        assert_eq!(apply_template("site/{site}", &captures), "site/book");
    }

    #[test]
    fn test_extract_keys() {
        let h = Hegex::new("{prefix}.{opt[a-1|b-2]}.*.**").unwrap();
        let captures = h.extract("p.b-2.x.y/z").unwrap();
        assert_eq!(
            captures,
            caps(&[("prefix", "p"), ("opt", "b-2"), ("*", "x"), ("**", "y/z")])
        );
    }

    #[test]
    fn test_same_length_runs_keep_rightmost() {
        let h = Hegex::new("*/*").unwrap();
        assert_eq!(h.extract("a/b/c").unwrap(), caps(&[("*", "c")]));
        assert_eq!(h.rewrite("a/b/c", "*").0, "c");
    }

    #[test]
    fn test_rewrite_borrows_template_on_miss() {
        let h = Hegex::new("{a}.com").unwrap();
        let (out, ok) = h.rewrite("nope", "/{a}");
        assert!(!ok);
        assert!(matches!(out, Cow::Borrowed("/{a}")));
    }

    #[test]
    fn test_substitute() {
        let h = Hegex::new("{a}.com").unwrap();
        assert_eq!(h.substitute("x.com", "/{a}").as_deref(), Some("/x"));
        assert_eq!(h.substitute("x.org", "/{a}"), None);
    }

    #[test]
    fn test_accessors_and_display() {
        let h: Hegex = "/{media[video|image]}/*".parse().unwrap();
        assert_eq!(h.as_str(), "/{media[video|image]}/*");
        assert_eq!(h.to_string(), "/{media[video|image]}/*");
        assert_eq!(h.asterisk_runs().len(), 1);
        assert_eq!(h.brace_groups()[0].name(), "media");
        assert!(h.regex_str().starts_with('^'));
        assert!(h.regex_str().ends_with('$'));
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Hegex>();
    }
}
