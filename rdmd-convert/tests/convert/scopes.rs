//! Scope resolution and the cross-scope conversion contract

use rdmd_convert::{markdownify, markdownify_all, ConvertError, Rule, Scope};
use std::str::FromStr;

#[test]
fn test_none_scope_is_identity() {
    let texts = vec![
        r"\code{\link{identity}}.".to_string(),
        "#' @param x a thing\n#' continued".to_string(),
        String::new(),
    ];
    assert_eq!(markdownify_all(&texts, Scope::None).unwrap(), texts);
}

#[test]
fn test_output_cardinality_matches_input() {
    let texts: Vec<String> = (0..25).map(|i| format!(r"item \emph{{{i}}}")).collect();
    for scope in Scope::all() {
        let out = markdownify_all(&texts, *scope).unwrap();
        assert_eq!(out.len(), texts.len(), "scope {scope}");
    }
}

#[test]
fn test_elements_are_converted_independently() {
    let texts = vec![r"\emph{a}".to_string(), r"\emph{b}".to_string()];
    let together = markdownify_all(&texts, Scope::Simple).unwrap();
    for (text, expected) in texts.iter().zip(&together) {
        assert_eq!(&markdownify(text, Scope::Simple).unwrap(), expected);
    }
}

#[test]
fn test_scope_names_parse() {
    assert_eq!(Scope::from_str("full").unwrap(), Scope::Full);
    assert_eq!(Scope::from_str("simple").unwrap(), Scope::Simple);
    assert_eq!(Scope::from_str("unlink").unwrap(), Scope::Unlink);
    assert_eq!(Scope::from_str("indent").unwrap(), Scope::Indent);
    assert_eq!(Scope::from_str("none").unwrap(), Scope::None);
    assert!(matches!(
        Scope::from_str("FULL"),
        Err(ConvertError::ScopeNotFound(_))
    ));
}

#[test]
fn test_default_scope_is_full() {
    assert_eq!(Scope::default(), Scope::Full);
}

#[test]
fn test_every_code_wrapped_rule_precedes_the_code_rule() {
    let names: Vec<_> = Scope::Full.rules().iter().map(Rule::name).collect();
    let code_at = names.iter().position(|n| *n == "code").unwrap();
    for (i, name) in names.iter().enumerate() {
        if name.starts_with("code-") {
            assert!(i < code_at, "{name} must run before the generic code rule");
        }
    }
}

#[test]
fn test_aliased_rules_precede_their_general_counterparts() {
    let names: Vec<_> = Scope::Full.rules().iter().map(Rule::name).collect();
    let position = |n: &str| names.iter().position(|x| *x == n).unwrap();
    assert!(position("code-self-aliased-link") < position("code-cross-package-link"));
    assert!(position("self-aliased-link") < position("cross-package-link"));
    assert!(position("code-aliased-link") < position("code-unqualified-link"));
    assert!(position("aliased-link") < position("unqualified-link"));
}
