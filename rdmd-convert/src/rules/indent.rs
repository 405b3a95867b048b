//! Continuation-line indentation
//!
//! Documentation blocks are sequences of lines carrying a doc-comment marker
//! (one or more `#` followed by `'`). For `@param` and `@return` entries that
//! span several lines, Markdown needs every continuation line indented two
//! spaces past the marker to keep the entry a single nested block.
//!
//! The pattern matches one (predecessor, continuation) line pair: a tag line
//! or an already-indented continuation, followed by a marker line whose
//! content is non-blank, does not open a new `@tag`, and is not yet two
//! spaces in. Matches within one pass are non-overlapping, so a pass only
//! reaches the first missing line of each chain; the rule is iterated until
//! the text stops changing (see [`super::MAX_PASSES`]). Each pass indents at
//! least one line or leaves the text alone, so the fixed point arrives after
//! at most one pass per continuation line.

use super::Rule;

/// The indentation rule, iterated to a fixed point by the pipeline.
///
/// Predecessor alternatives: `@param`/`@return` tag line, or a line already
/// carrying the two-space indent. Continuation content: at most one space
/// after the marker, then a character that is neither a space (already
/// indented) nor `@` (a new tag). Blank marker lines match neither side, so
/// they end a chain.
pub(crate) fn rule() -> Rule {
    Rule::new(
        "indent-continuation",
        r"(?m)^([ \t]*#+'(?:[ \t]*@(?:param|return)\b[^\n]*|  [^\n]*))\n([ \t]*#+')( ?)([^ @\n][^\n]*)$",
        "${1}\n${2}  ${3}${4}",
    )
    .iterated()
}
