//! Conversion scopes
//!
//! A [`Scope`] selects which rules run and, just as importantly, the order
//! they run in. Ordering is a correctness contract: `Full` places every
//! code-wrapped reference rule before the generic `code` rule so that
//! `\code{\link{...}}` resolves as a reference instead of collapsing into a
//! code span with an unconverted `\link{}` inside, and each aliased or
//! self-aliased reference rule runs before the general rule whose pattern
//! would otherwise consume its input with the wrong output.

use crate::error::ConvertError;
use crate::rules::{indent, inline, links, Rule};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which subset of the conversion runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Every reference rule, then the inline formatting rules.
    Full,
    /// Inline formatting only; references are left alone.
    Simple,
    /// Strip `\link{}` references, keeping their text.
    Unlink,
    /// Indent `@param`/`@return` continuation lines.
    Indent,
    /// Change nothing.
    None,
}

static FULL: Lazy<Vec<Rule>> = Lazy::new(|| {
    let mut rules = links::rules();
    rules.extend(inline::rules());
    rules
});

static SIMPLE: Lazy<Vec<Rule>> = Lazy::new(inline::rules);

static UNLINK: Lazy<Vec<Rule>> = Lazy::new(|| vec![links::strip()]);

static INDENT: Lazy<Vec<Rule>> = Lazy::new(|| vec![indent::rule()]);

static NONE: Lazy<Vec<Rule>> = Lazy::new(Vec::new);

impl Scope {
    /// The ordered rule list this scope resolves to.
    pub fn rules(&self) -> &'static [Rule] {
        match self {
            Scope::Full => FULL.as_slice(),
            Scope::Simple => SIMPLE.as_slice(),
            Scope::Unlink => UNLINK.as_slice(),
            Scope::Indent => INDENT.as_slice(),
            Scope::None => NONE.as_slice(),
        }
    }

    /// Canonical lowercase name, as accepted by [`Scope::from_str`].
    pub fn name(&self) -> &'static str {
        match self {
            Scope::Full => "full",
            Scope::Simple => "simple",
            Scope::Unlink => "unlink",
            Scope::Indent => "indent",
            Scope::None => "none",
        }
    }

    /// All scopes, for listings and diagnostics.
    pub fn all() -> &'static [Scope] {
        &[
            Scope::Full,
            Scope::Simple,
            Scope::Unlink,
            Scope::Indent,
            Scope::None,
        ]
    }
}

impl Default for Scope {
    fn default() -> Self {
        Scope::Full
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scope {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(Scope::Full),
            "simple" => Ok(Scope::Simple),
            "unlink" => Ok(Scope::Unlink),
            "indent" => Ok(Scope::Indent),
            "none" => Ok(Scope::None),
            other => Err(ConvertError::ScopeNotFound(other.to_string())),
        }
    }
}
