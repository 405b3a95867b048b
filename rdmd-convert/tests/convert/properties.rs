//! Property tests for the engine-wide guarantees

use proptest::prelude::*;
use rdmd_convert::{markdownify, markdownify_all, Scope};

proptest! {
    #[test]
    fn none_scope_is_identity_for_any_input(text in any::<String>()) {
        prop_assert_eq!(markdownify(&text, Scope::None).unwrap(), text);
    }

    #[test]
    fn conversion_preserves_cardinality(
        texts in proptest::collection::vec(any::<String>(), 0..16)
    ) {
        for scope in [Scope::Full, Scope::Simple, Scope::Unlink, Scope::None] {
            let out = markdownify_all(&texts, scope).unwrap();
            prop_assert_eq!(out.len(), texts.len());
        }
    }

    #[test]
    fn command_free_text_passes_through_every_scope(
        text in r"[a-zA-Z0-9 .,:;!?*_()\[\]-]{0,80}"
    ) {
        // No backslash commands and no doc-comment markers: nothing to do.
        for scope in Scope::all() {
            prop_assert_eq!(markdownify(&text, *scope).unwrap(), text.clone());
        }
    }

    #[test]
    fn full_scope_output_is_stable(name in "[a-z][a-z0-9_]{0,12}") {
        // Converted output contains no Rd commands, so a second run is a
        // no-op regardless of what the first run produced.
        let text = format!(
            "\\code{{\\link{{{name}}}}} and \\link[pkg]{{{name}}} with \\emph{{{name}}}"
        );
        let once = markdownify(&text, Scope::Full).unwrap();
        let twice = markdownify(&once, Scope::Full).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn indentation_converges_on_bounded_blocks(lines in 1usize..30) {
        let mut block = String::from("#' @param x a thing");
        for i in 0..lines {
            block.push_str(&format!("\n#' continuation {i}"));
        }
        let once = markdownify(&block, Scope::Indent).unwrap();
        // Every continuation line picked up the indent, and the result is a
        // fixed point.
        for line in once.lines().skip(1) {
            prop_assert!(line.starts_with("#'   continuation"));
        }
        prop_assert_eq!(markdownify(&once, Scope::Indent).unwrap(), once);
    }
}
