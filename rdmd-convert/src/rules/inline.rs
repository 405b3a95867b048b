//! Inline formatting rules
//!
//! Single- and two-argument commands whose arguments contain no unescaped
//! braces. These rules never look inside their arguments for further
//! commands; anything that should be resolved first (notably `\link{}` inside
//! `\code{}`) must be handled by an earlier rule in the pipeline.

use super::Rule;

/// The inline formatting rules in their canonical order.
///
/// The five patterns are mutually exclusive, so the order here does not
/// affect the output; it is fixed for determinism.
pub(crate) fn rules() -> Vec<Rule> {
    vec![code(), emphasis(), bold(), hyperlink(), bare_url()]
}

/// `\code{X}` → `` `X` ``
fn code() -> Rule {
    Rule::new("code", r"\\code\{([^{}]+)\}", "`${1}`")
}

/// `\emph{X}` → `*X*`
fn emphasis() -> Rule {
    Rule::new("emphasis", r"\\emph\{([^{}]+)\}", "*${1}*")
}

/// `\bold{X}` or `\strong{X}` → `**X**`
fn bold() -> Rule {
    Rule::new("bold", r"\\(?:bold|strong)\{([^{}]+)\}", "**${1}**")
}

/// `\href{URL}{LABEL}` → `[LABEL](URL)`
fn hyperlink() -> Rule {
    Rule::new("hyperlink", r"\\href\{([^{}]+)\}\{([^{}]+)\}", "[${2}](${1})")
}

/// `\url{URL}` → `<URL>`
fn bare_url() -> Rule {
    Rule::new("bare-url", r"\\url\{([^{}]+)\}", "<${1}>")
}
