//! Hegex pattern engine.
//!
//! A pattern is literal text with two kinds of placeholder. It compiles to a
//! regex anchored at both ends, so only whole-string matches succeed.
//!
//! # Pattern syntax
//!
//! | Token            | Matches                                      | Key       |
//! |------------------|----------------------------------------------|-----------|
//! | `*`, `**`, …     | Anything, including the empty string         | the run   |
//! | `{name}`         | One or more chars except whitespace, `.`, `/`| `name`    |
//! | `{name[a\|b]}`   | Exactly one of the listed literals           | `name`    |
//! | anything else    | Itself                                       |           |
//!
//! Names and alternatives are drawn from `[A-Za-z0-9-]`. Brace groups may
//! not touch or nest.
//!
//! # Templates
//!
//! A rewrite template uses the same placeholders: `{name}` for a brace
//! group and a run of `*` of the same length for a wildcard run.

pub mod matcher;
pub mod synth;
pub mod token;
pub mod tokenizer;


pub use matcher::{Captures, Hegex, apply_template};
pub use token::{AsteriskRun, BraceGroup};
