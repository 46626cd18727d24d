/// Grammar every brace group's interior must satisfy.
pub const BRACE_GRAMMAR: &str = r"NAME([ALT(|ALT)*])? where NAME, ALT = [A-Za-z0-9-]+";

/// Errors that can occur while compiling a hegex pattern.
#[derive(Debug, Clone)]
pub enum HegexError {
    /// Two brace groups touch or nest.
    Overlap {
        first: String,
        second: String,
        pattern: String,
    },
    /// A brace group's content does not follow [`BRACE_GRAMMAR`].
    Format { content: String, pattern: String },
    /// The synthesized regex was rejected by the regex engine.
    Compile(regex::Error),
}

impl HegexError {
    /// The pattern text that failed, when the failure is a pattern-format problem.
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Self::Overlap { pattern, .. } | Self::Format { pattern, .. } => Some(pattern),
            Self::Compile(_) => None,
        }
    }
}

impl std::fmt::Display for HegexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overlap {
                first,
                second,
                pattern,
            } => write!(
                f,
                "error parsing pattern: curly brace pairs should not overlap: \
                 {first:?} and {second:?}: `{pattern}`"
            ),
            Self::Format { content, pattern } => write!(
                f,
                "error parsing pattern: bad format {{{content}}}, expected {BRACE_GRAMMAR}: `{pattern}`"
            ),
            Self::Compile(err) => write!(f, "error compiling synthesized regex: {err}"),
        }
    }
}

impl std::error::Error for HegexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Compile(err) => Some(err),
            _ => None,
        }
    }
}

impl From<regex::Error> for HegexError {
    fn from(err: regex::Error) -> Self {
        Self::Compile(err)
    }
}
