//! Hegex: human-friendly wildcard patterns compiled to anchored regexes.
//!
//! A pattern mixes literal text with `{name}` placeholders, enumerated
//! `{name[a|b]}` placeholders and `*` wildcard runs. Captured values can be
//! extracted by key or substituted back into a template.
//!
//! # Example
//!
//! ```rust
//! use hegex::compile;
//!
//! let h = compile("{site}.example.com/*").unwrap();
//!
//! assert!(h.is_match("book.example.com/index.html"));
//! assert!(!h.is_match("a.b.example.com/"));
//!
//! let captures = h.extract("book.example.com/index.html").unwrap();
//! assert_eq!(captures["site"], "book");
//! assert_eq!(captures["*"], "index.html");
//!
//! let (rewritten, matched) = h.rewrite("book.example.com/x", "/my-{site}/*");
//! assert!(matched);
//! assert_eq!(rewritten, "/my-book/x");
//! ```

mod error;
pub mod pattern;

pub use error::{BRACE_GRAMMAR, HegexError};
pub use pattern::{AsteriskRun, BraceGroup, Captures, Hegex, apply_template};

/// Compile a hegex pattern.
pub fn compile(pattern: &str) -> Result<Hegex, HegexError> {
    Hegex::new(pattern)
}

/// Compile a pattern known to be valid, panicking if it is not.
///
/// Meant for patterns fixed at build time.
pub fn compile_or_panic(pattern: &str) -> Hegex {
    Hegex::new(pattern).unwrap_or_else(|err| panic!("hegex: compile({pattern:?}): {err}"))
}

/// Compile `pattern` and test it against `text` in one step.
pub fn is_match(pattern: &str, text: &str) -> Result<bool, HegexError> {
    Ok(Hegex::new(pattern)?.is_match(text))
}
