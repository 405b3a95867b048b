//! Rewrite rules
//!
//! A [`Rule`] is a single pattern/replacement pair. Applying a rule rewrites
//! every non-overlapping match in the text, left to right; text outside the
//! matches is passed through untouched. Rules never reject input: a span that
//! does not match is simply left alone.
//!
//! Rules are grouped by what they convert:
//! - [`inline`]: inline formatting commands (`\code{}`, `\emph{}`, ...)
//! - [`links`]: the cross-reference family (`\link{}` and friends)
//! - [`indent`]: continuation-line indentation for `@param`/`@return` blocks
//!
//! The relative order in which rules run is part of the conversion contract,
//! not an implementation detail. See [`crate::scope`] for the ordered lists.

use crate::error::ConvertError;
use regex::{Captures, Regex};

pub(crate) mod indent;
pub(crate) mod inline;
pub(crate) mod links;

/// Ceiling for iterated rules. A rule that has not settled after this many
/// passes is assumed to be diverging, which indicates a bug in the rule
/// itself rather than unusual input.
pub const MAX_PASSES: usize = 100;

/// How a rule produces its replacement text.
enum Rewrite {
    /// Expand a `$n` capture template into the replacement.
    Template(&'static str),
    /// Compute the replacement from the captures. Returning `None` leaves
    /// the matched span untouched (the match is still consumed).
    With(fn(&Captures) -> Option<String>),
}

/// A named pattern/replacement pair applied globally to a text.
pub struct Rule {
    name: &'static str,
    pattern: Regex,
    rewrite: Rewrite,
    iterated: bool,
}

impl Rule {
    fn build(name: &'static str, pattern: &str, rewrite: Rewrite) -> Self {
        let pattern = Regex::new(pattern).expect("rule patterns are statically known and valid");
        Rule {
            name,
            pattern,
            rewrite,
            iterated: false,
        }
    }

    /// Rule whose replacement is a `$n` capture template.
    pub(crate) fn new(name: &'static str, pattern: &str, template: &'static str) -> Self {
        Self::build(name, pattern, Rewrite::Template(template))
    }

    /// Rule whose replacement is computed from the captures.
    pub(crate) fn with(
        name: &'static str,
        pattern: &str,
        rewrite: fn(&Captures) -> Option<String>,
    ) -> Self {
        Self::build(name, pattern, Rewrite::With(rewrite))
    }

    /// Mark the rule as iterated: [`Rule::apply`] re-runs it until the text
    /// stops changing instead of applying it once.
    pub(crate) fn iterated(mut self) -> Self {
        self.iterated = true;
        self
    }

    /// Stable identifier, usable to assert rule ordering.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Rewrite all non-overlapping matches once.
    fn apply_once(&self, text: &str) -> String {
        match self.rewrite {
            Rewrite::Template(template) => self.pattern.replace_all(text, template).into_owned(),
            Rewrite::With(rewrite) => self
                .pattern
                .replace_all(text, |caps: &Captures| {
                    rewrite(caps).unwrap_or_else(|| caps[0].to_string())
                })
                .into_owned(),
        }
    }

    /// Apply the rule to a text.
    ///
    /// Plain rules run a single global substitution. Iterated rules re-run
    /// the substitution until a fixed point is reached, bounded by
    /// [`MAX_PASSES`]; exceeding the ceiling is surfaced as
    /// [`ConvertError::TooManyPasses`] rather than returning partial work.
    pub fn apply(&self, text: &str) -> Result<String, ConvertError> {
        if !self.iterated {
            return Ok(self.apply_once(text));
        }

        let mut current = text.to_string();
        for _ in 0..MAX_PASSES {
            let next = self.apply_once(&current);
            if next == current {
                return Ok(current);
            }
            current = next;
        }
        Err(ConvertError::TooManyPasses(format!(
            "rule '{}' did not reach a fixed point within {MAX_PASSES} passes",
            self.name
        )))
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .field("iterated", &self.iterated)
            .finish()
    }
}
