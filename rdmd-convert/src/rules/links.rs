//! Cross-reference rules
//!
//! Reference commands vary along two axes: whether the reference is wrapped
//! in a code span (`\code{\link{...}}`) or bare (`\link{...}`), and the kind
//! of target (local topic, aliased same-package topic, cross-package topic,
//! self-aliased cross-package function, S4 class). One rule covers each
//! combination, plus a removal rule used by the `unlink` scope.
//!
//! Two constraints shape these patterns:
//!
//! - Label and topic captures are lazy and stop at `}` or `[`, so an optional
//!   trailing `()` is captured separately instead of being swallowed into the
//!   label. The `()` marker may appear inside or outside the closing brace;
//!   both spellings produce the same output.
//! - The self-aliased rules need the package name to re-occur verbatim before
//!   `::` inside the braces. The regex engine has no in-pattern
//!   back-references, so the rules capture both spans and compare them after
//!   the match; on mismatch the rule declines and the general cross-package
//!   rule (which must run later) picks the span up.

use super::Rule;
use regex::Captures;

/// The cross-reference rules in their mandatory order: every code-wrapped
/// rule before any bare rule, and each aliased/self-aliased rule before its
/// general counterpart, whose pattern is a superset match.
pub(crate) fn rules() -> Vec<Rule> {
    vec![
        code_local(),
        code_self_aliased(),
        code_cross_package(),
        code_aliased(),
        code_unqualified(),
        code_s4_class(),
        s4_class(),
        local(),
        self_aliased(),
        cross_package(),
        aliased(),
        unqualified(),
    ]
}

/// `\code{\link{NAME}}`, with `()` optional inside or outside → `[NAME()]`
fn code_local() -> Rule {
    Rule::new(
        "code-local-link",
        r"\\code\{\\link\{([^}\[]+?)(?:\(\))?\}(?:\(\))?\}",
        "[${1}()]",
    )
}

/// `\code{\link[pkg:pkg]{pkg::name}}` → `[pkg::name()]`
///
/// Fires only when all three package spans are literally identical.
fn code_self_aliased() -> Rule {
    Rule::with(
        "code-self-aliased-link",
        r"\\code\{\\link\[([^:\]]+):([^\]]+)\]\{([^:}\[]+)::([^}\[]+?)(?:\(\))?\}(?:\(\))?\}",
        rewrite_code_self_aliased,
    )
}

fn rewrite_code_self_aliased(caps: &Captures) -> Option<String> {
    if caps[1] != caps[2] || caps[1] != caps[3] {
        return None;
    }
    Some(format!("[{}::{}()]", &caps[1], &caps[4]))
}

/// `\code{\link[pkg:topic]{LABEL}}` → `` [`LABEL()`][pkg::topic] ``
fn code_cross_package() -> Rule {
    Rule::new(
        "code-cross-package-link",
        r"\\code\{\\link\[([^:\]]+):([^\]]+)\]\{([^}\[]+?)(?:\(\))?\}(?:\(\))?\}",
        "[`${3}()`][${1}::${2}]",
    )
}

/// `\code{\link[=topic]{LABEL}}` → `` [`LABEL()`][topic] ``
fn code_aliased() -> Rule {
    Rule::new(
        "code-aliased-link",
        r"\\code\{\\link\[=([^\]]+)\]\{([^}\[]+?)(?:\(\))?\}(?:\(\))?\}",
        "[`${2}()`][${1}]",
    )
}

/// `\code{\link[pkg]{LABEL}}` → `[pkg::LABEL()]`
fn code_unqualified() -> Rule {
    Rule::new(
        "code-unqualified-link",
        r"\\code\{\\link\[([^=:\]][^:\]]*)\]\{([^}\[]+?)(?:\(\))?\}(?:\(\))?\}",
        "[${1}::${2}()]",
    )
}

/// `\code{\linkS4class{NAME}}` → `[NAME-class]`
fn code_s4_class() -> Rule {
    Rule::new(
        "code-s4-class-link",
        r"\\code\{\\linkS4class\{([^}\[]+)\}\}",
        "[${1}-class]",
    )
}

/// `\linkS4class{NAME}` → `[NAME-class]`
fn s4_class() -> Rule {
    Rule::new("s4-class-link", r"\\linkS4class\{([^}\[]+)\}", "[${1}-class]")
}

/// `\link{NAME}` → `[NAME]`
fn local() -> Rule {
    Rule::new("local-link", r"\\link\{([^}\[]+)\}", "[${1}]")
}

/// `\link[pkg:pkg]{pkg::name}` → `[pkg::name]`
fn self_aliased() -> Rule {
    Rule::with(
        "self-aliased-link",
        r"\\link\[([^:\]]+):([^\]]+)\]\{([^:}\[]+)::([^}\[]+)\}",
        rewrite_self_aliased,
    )
}

fn rewrite_self_aliased(caps: &Captures) -> Option<String> {
    if caps[1] != caps[2] || caps[1] != caps[3] {
        return None;
    }
    Some(format!("[{}::{}]", &caps[1], &caps[4]))
}

/// `\link[pkg:topic]{LABEL}` → `[LABEL][pkg::topic]`
fn cross_package() -> Rule {
    Rule::new(
        "cross-package-link",
        r"\\link\[([^:\]]+):([^\]]+)\]\{([^}\[]+)\}",
        "[${3}][${1}::${2}]",
    )
}

/// `\link[=topic]{LABEL}` → `[LABEL][topic]`
fn aliased() -> Rule {
    Rule::new(
        "aliased-link",
        r"\\link\[=([^\]]+)\]\{([^}\[]+)\}",
        "[${2}][${1}]",
    )
}

/// `\link[pkg]{LABEL}` → `[LABEL][pkg::LABEL]`
///
/// The label doubles as the target topic; the unqualified form carries no
/// separate topic to thread through.
fn unqualified() -> Rule {
    Rule::new(
        "unqualified-link",
        r"\\link\[([^=:\]][^:\]]*)\]\{([^}\[]+)\}",
        "[${2}][${1}::${2}]",
    )
}

/// `\link{NAME}` or `\link[pkg]{NAME}` → `NAME`
///
/// Only used by the `unlink` scope: drops the reference and keeps the text.
pub(crate) fn strip() -> Rule {
    Rule::new("strip-link", r"\\link(?:\[[^\]]*\])?\{([^}\[]+)\}", "${1}")
}
