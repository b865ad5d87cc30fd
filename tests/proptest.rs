//! Property-based tests for the wikiconv pipeline.
//!
//! These tests use proptest to generate random inputs and verify that
//! the parser and renderer handle them gracefully.

use proptest::prelude::*;

use wikiconv_config::{Config, RulesConfig};
use wikiconv_core::{ListToken, TableToken, Token};
use wikiconv_parser::{trim, Parser};
use wikiconv_render::Renderer;

/// Generate a random wiki-like string.
fn wiki_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x20-\x7E\n\t]*").unwrap()
}

/// Generate a random line of plain words.
fn word_line() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[a-z]{1,12}( [a-z]{1,12}){0,8}").unwrap()
}

/// Generate a heading line.
fn heading() -> impl Strategy<Value = String> {
    (1..=6usize, word_line()).prop_map(|(level, text)| format!("{} {}\n", "=".repeat(level), text))
}

/// Generate a bullet list block.
fn list_block() -> impl Strategy<Value = String> {
    prop::collection::vec((1..=3usize, word_line()), 1..8).prop_map(|items| {
        items
            .iter()
            .map(|(depth, text)| format!("{} {}", "*".repeat(*depth), text))
            .collect::<Vec<_>>()
            .join("\n")
            + "\n"
    })
}

/// Generate a pipe table block along with its widest row.
fn table_block() -> impl Strategy<Value = (String, usize)> {
    prop::collection::vec(
        prop::collection::vec(prop::string::string_regex(r"[a-z]{1,8}").unwrap(), 1..6),
        1..6,
    )
    .prop_map(|rows| {
        let max_cols = rows.iter().map(Vec::len).max().unwrap();
        let block = rows
            .iter()
            .map(|cells| format!("|{}|", cells.join("|")))
            .collect::<Vec<_>>()
            .join("\n")
            + "\n";
        (block, max_cols)
    })
}

// =============================================================================
// Parser Property Tests
// =============================================================================

proptest! {
    /// The parser should never panic on any input.
    #[test]
    fn parser_never_panics(input in wiki_string()) {
        let _ = Parser::new().parse(&input);
    }

    /// Headings always tokenize to a start/end pair.
    #[test]
    fn headings_tokenize_in_pairs(h in heading()) {
        let doc = Parser::new().parse(&h);
        prop_assert_eq!(doc.tokens_for("heading").len(), 2);
    }

    /// Every opened list is closed.
    #[test]
    fn list_starts_and_ends_balance(block in list_block()) {
        let doc = Parser::new().parse(&block);
        let mut starts = 0;
        let mut ends = 0;
        for token in doc.tokens() {
            match token {
                Token::List(ListToken::BulletListStart { .. })
                | Token::List(ListToken::NumberListStart { .. }) => starts += 1,
                Token::List(ListToken::BulletListEnd { .. })
                | Token::List(ListToken::NumberListEnd { .. }) => ends += 1,
                _ => {}
            }
        }
        prop_assert_eq!(starts, ends);
        prop_assert!(starts >= 1);
    }

    /// The table column count is the widest row's cell count.
    #[test]
    fn table_cols_track_widest_row((block, max_cols) in table_block()) {
        let doc = Parser::new().parse(&block);
        let cols = doc.tokens().find_map(|t| match t {
            Token::Table(TableToken::TableStart { cols, .. }) => Some(*cols),
            _ => None,
        });
        prop_assert_eq!(cols, Some(max_cols));
    }

    /// A bare URL in running text tokenizes exactly once.
    #[test]
    fn bare_url_tokenizes(path in prop::string::string_regex(r"[a-z0-9/]{0,20}").unwrap()) {
        let input = format!("see http://example.com/{} after\n", path);
        let doc = Parser::new().parse(&input);
        prop_assert_eq!(doc.tokens_for("url").len(), 1);
    }

    /// With every rule disabled nothing is tokenized and the source
    /// text survives byte for byte.
    #[test]
    fn disabled_rules_preserve_text(input in prop::string::string_regex(r"[\x20-\x7E\n]*").unwrap()) {
        let mut config = Config::default();
        config.rules = RulesConfig::all_disabled();
        let doc = Parser::with_config(config).parse(&input);
        prop_assert_eq!(doc.tokens().count(), 0);
        let text: String = doc.iter().filter_map(|s| s.as_text()).collect();
        prop_assert_eq!(text, input);
    }
}

// =============================================================================
// Trim Property Tests
// =============================================================================

proptest! {
    /// Trim never panics.
    #[test]
    fn trim_never_panics(input in wiki_string()) {
        let _ = trim::trim(&input);
    }

    /// On digit-free text the trim passes are idempotent.
    #[test]
    fn trim_is_idempotent_without_digits(
        input in prop::string::string_regex(r"[a-zA-Z \t\n.,;:!?*#=|-]*").unwrap()
    ) {
        let once = trim::trim(&input);
        prop_assert_eq!(trim::trim(&once), once);
    }

    /// Trimmed text never contains runs of three or more newlines.
    #[test]
    fn trim_collapses_newline_runs(input in wiki_string()) {
        let out = trim::trim(&input);
        prop_assert!(!out.contains("\n\n\n"));
    }
}

// =============================================================================
// Renderer Property Tests
// =============================================================================

proptest! {
    /// The full pipeline should never panic on any input.
    #[test]
    fn pipeline_never_panics(input in wiki_string()) {
        let doc = Parser::new().parse(&input);
        let _ = Renderer::new().render(&doc);
    }

    /// Rendered output never stacks more than one blank line.
    #[test]
    fn output_never_stacks_blank_lines(input in wiki_string()) {
        let doc = Parser::new().parse(&input);
        let out = Renderer::new().render(&doc);
        prop_assert!(!out.contains("\n\n\n"));
    }

    /// One renderer serves any number of documents identically; the
    /// table and definition list state never leaks across calls.
    #[test]
    fn rendering_is_deterministic(input in wiki_string()) {
        let doc = Parser::new().parse(&input);
        let renderer = Renderer::new();
        prop_assert_eq!(renderer.render(&doc), renderer.render(&doc));
    }
}
