//! Pipeline execution
//!
//! A pipeline is an ordered rule list folded over a text: each rule consumes
//! the previous rule's output. Sequences of texts are converted element by
//! element; elements never interact, and the output has the same length and
//! order as the input.

use crate::error::ConvertError;
use crate::rules::Rule;

/// Fold an ordered rule list over one text.
pub fn run(rules: &[Rule], text: &str) -> Result<String, ConvertError> {
    let mut current = text.to_string();
    for rule in rules {
        current = rule.apply(&current)?;
    }
    Ok(current)
}

/// Apply [`run`] to each element of a sequence independently.
pub fn run_all(rules: &[Rule], texts: &[String]) -> Result<Vec<String>, ConvertError> {
    texts.iter().map(|text| run(rules, text)).collect()
}
