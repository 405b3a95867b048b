//! Inline formatting conversions (`simple` scope)

use rdmd_convert::{markdownify, Scope};

fn simple(text: &str) -> String {
    markdownify(text, Scope::Simple).unwrap()
}

#[test]
fn test_emphasis_and_bold() {
    assert_eq!(
        simple(r"Both \emph{italics} and \bold{bold} text."),
        "Both *italics* and **bold** text."
    );
}

#[test]
fn test_strong_is_bold() {
    assert_eq!(simple(r"\strong{important}"), "**important**");
}

#[test]
fn test_code_span() {
    assert_eq!(simple(r"Call \code{mean(x, na.rm = TRUE)} first."), "Call `mean(x, na.rm = TRUE)` first.");
}

#[test]
fn test_hyperlink_and_bare_url() {
    assert_eq!(
        simple(r"See \href{https://r-project.org}{the R site} or \url{https://cran.r-project.org}."),
        "See [the R site](https://r-project.org) or <https://cran.r-project.org>."
    );
}

#[test]
fn test_simple_leaves_references_alone() {
    // Reference commands belong to the full scope; simple must not touch
    // them, including a reference wrapped in \code{} (the brace inside the
    // argument keeps the code rule from matching).
    let text = r"\code{\link{foo}} and \link{bar}";
    assert_eq!(simple(text), text);
}

#[test]
fn test_brace_in_argument_means_no_match() {
    let text = r"\code{if (x) {y} else {z}}";
    assert_eq!(simple(text), text);
}

#[test]
fn test_simple_is_idempotent_on_converted_output() {
    let converted = simple(r"Both \emph{italics} and \bold{bold} text with \code{code}.");
    assert_eq!(simple(&converted), converted);
}

#[test]
fn test_multiline_text() {
    assert_eq!(
        simple("first \\emph{a}\nsecond \\emph{b}\n"),
        "first *a*\nsecond *b*\n"
    );
}
