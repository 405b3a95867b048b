//! Rd markup to Markdown conversion
//!
//! This crate rewrites documentation text written with Rd-style backslash
//! commands (`\code{}`, `\link{}`, `\emph{}`, ...) into the equivalent
//! Markdown-flavored markup (backticks, `*`/`**`, `[]()`/`[][]` links).
//! It is a text-to-text transformer: callers hand it strings (typically
//! the body of a documentation comment block) and write the results back
//! wherever they came from. Locating files, walking projects and editing
//! metadata are the caller's business, not this crate's.
//!
//! Architecture
//!
//! The engine is an ordered catalog of small pattern/replacement rules
//! (./rules), a scope resolver that maps a scope name to an ordered rule
//! list (./scope.rs), and a pipeline that folds the list over each input
//! string (./pipeline.rs). There is no AST and no validation pass: a span
//! that matches no rule is passed through byte for byte, so malformed
//! markup degrades to itself instead of an error.
//!
//! Rule order carries the correctness of the whole conversion. The most
//! specific patterns run first; see ./scope.rs for the contract.
//!
//! The only iterated rule is continuation-line indentation
//! (./rules/indent.rs), which advances one line per pass and is re-run to
//! a fixed point, with a hard pass ceiling as an internal invariant.
//!
//! This is a pure lib: no I/O, no shell assumptions, no global state
//! beyond the lazily compiled rule catalogs.
//!
//! Testing
//!
//! Unit tests live next to each module; integration tests under tests/
//! cover the per-scope conversions, ordering guarantees and fixed-point
//! behavior. Note that rust does not by default discover tests in
//! subdirectories, so tests/lib.rs declares the submodules.

pub mod error;
pub mod pipeline;
pub mod rules;
pub mod scope;

pub use error::ConvertError;
pub use rules::Rule;
pub use scope::Scope;

/// Convert one text under the given scope.
///
/// # Example
///
/// ```
/// use rdmd_convert::{markdownify, Scope};
///
/// let out = markdownify(r"Both \emph{italics} and \bold{bold} text.", Scope::Simple).unwrap();
/// assert_eq!(out, "Both *italics* and **bold** text.");
/// ```
pub fn markdownify(text: &str, scope: Scope) -> Result<String, ConvertError> {
    pipeline::run(scope.rules(), text)
}

/// Convert each element of a sequence independently.
///
/// The output has the same length and order as the input; element `i` of the
/// output derives only from element `i` of the input.
pub fn markdownify_all(texts: &[String], scope: Scope) -> Result<Vec<String>, ConvertError> {
    pipeline::run_all(scope.rules(), texts)
}
