//! Bullet, number, and definition list rules.
//!
//! A list is a maximal run of marker-prefixed lines. Marker repetition
//! sets the nesting depth; list start/end tokens carry 0-based levels
//! and item tokens carry 1-based levels, which the renderer relies on
//! to emit one marker per item level and a closing newline only for
//! the outermost list.

use regex::Regex;
use std::sync::LazyLock;
use wikiconv_core::{DeflistToken, Document, ListToken, Segment, Token};

use crate::apply_regex;

/// Regex for a run of list lines: markers, whitespace, item text
static LIST_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)(?:^[*#]+[ \t][^\n]*\n?)+").unwrap());

/// Regex for one list line
static LIST_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([*#]+)[ \t]+(.*)$").unwrap());

/// Regex for a run of definition list lines
static DEFLIST_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)(?:^;[^\n]*\n?)+").unwrap());

/// Regex for one definition line: term with optional narrative
static DEFLIST_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^;[ \t]*([^:\n]*?)[ \t]*(?::[ \t]*(.*))?$").unwrap());

fn list_start(kind: char, level: usize) -> Token {
    match kind {
        '#' => Token::List(ListToken::NumberListStart { level }),
        _ => Token::List(ListToken::BulletListStart { level }),
    }
}

fn list_end(kind: char, level: usize) -> Token {
    match kind {
        '#' => Token::List(ListToken::NumberListEnd { level }),
        _ => Token::List(ListToken::BulletListEnd { level }),
    }
}

fn item_start(kind: char, level: usize) -> Token {
    match kind {
        '#' => Token::List(ListToken::NumberItemStart { level }),
        _ => Token::List(ListToken::BulletItemStart { level }),
    }
}

fn item_end(kind: char) -> Token {
    match kind {
        '#' => Token::List(ListToken::NumberItemEnd),
        _ => Token::List(ListToken::BulletItemEnd),
    }
}

/// The bullet/number list rule.
pub fn list(doc: Document) -> Document {
    apply_regex(doc, &LIST_RUN_RE, |caps| {
        let block = &caps[0];
        let mut segs: Vec<Segment> = Vec::new();
        // one open-list marker char per nesting level
        let mut stack: Vec<char> = Vec::new();

        for line in block.lines() {
            let Some(line_caps) = LIST_LINE_RE.captures(line) else {
                continue;
            };
            let kinds: Vec<char> = line_caps[1].chars().collect();
            let depth = kinds.len();

            while stack.len() > depth {
                let kind = stack.pop().unwrap();
                segs.push(Segment::Token(list_end(kind, stack.len())));
            }
            if stack.len() == depth && stack.last() != kinds.last() {
                let kind = stack.pop().unwrap();
                segs.push(Segment::Token(list_end(kind, stack.len())));
            }
            while stack.len() < depth {
                let kind = kinds[stack.len()];
                segs.push(Segment::Token(list_start(kind, stack.len())));
                stack.push(kind);
            }

            let kind = kinds[depth - 1];
            segs.push(Segment::Token(item_start(kind, depth)));
            segs.push(Segment::Text(line_caps[2].to_string()));
            segs.push(Segment::Token(item_end(kind)));
        }

        while let Some(kind) = stack.pop() {
            segs.push(Segment::Token(list_end(kind, stack.len())));
        }
        if block.ends_with('\n') {
            segs.push(Segment::Text("\n".to_string()));
        }
        Some(segs)
    })
}

/// The definition list rule.
pub fn deflist(doc: Document) -> Document {
    apply_regex(doc, &DEFLIST_RUN_RE, |caps| {
        let block = &caps[0];
        let mut segs = vec![Segment::Token(Token::Deflist(DeflistToken::ListStart))];

        for line in block.lines() {
            let Some(line_caps) = DEFLIST_LINE_RE.captures(line) else {
                continue;
            };
            segs.push(Segment::Token(Token::Deflist(DeflistToken::TermStart)));
            segs.push(Segment::Text(line_caps[1].to_string()));
            segs.push(Segment::Token(Token::Deflist(DeflistToken::TermEnd)));
            if let Some(narr) = line_caps.get(2) {
                let narr = narr.as_str().trim();
                if !narr.is_empty() {
                    segs.push(Segment::Token(Token::Deflist(DeflistToken::NarrStart)));
                    segs.push(Segment::Text(narr.to_string()));
                    segs.push(Segment::Token(Token::Deflist(DeflistToken::NarrEnd)));
                }
            }
        }

        segs.push(Segment::Token(Token::Deflist(DeflistToken::ListEnd)));
        if block.ends_with('\n') {
            segs.push(Segment::Text("\n".to_string()));
        }
        Some(segs)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_tokens(input: &str) -> Vec<Token> {
        list(Document::from_text(input))
            .tokens()
            .cloned()
            .collect()
    }

    #[test]
    fn test_flat_bullet_list() {
        let tokens = list_tokens("* a\n* b\n");
        assert_eq!(
            tokens,
            vec![
                Token::List(ListToken::BulletListStart { level: 0 }),
                Token::List(ListToken::BulletItemStart { level: 1 }),
                Token::List(ListToken::BulletItemEnd),
                Token::List(ListToken::BulletItemStart { level: 1 }),
                Token::List(ListToken::BulletItemEnd),
                Token::List(ListToken::BulletListEnd { level: 0 }),
            ]
        );
    }

    #[test]
    fn test_nested_list_levels() {
        let tokens = list_tokens("* a\n** b\n* c\n");
        assert_eq!(
            tokens,
            vec![
                Token::List(ListToken::BulletListStart { level: 0 }),
                Token::List(ListToken::BulletItemStart { level: 1 }),
                Token::List(ListToken::BulletItemEnd),
                Token::List(ListToken::BulletListStart { level: 1 }),
                Token::List(ListToken::BulletItemStart { level: 2 }),
                Token::List(ListToken::BulletItemEnd),
                Token::List(ListToken::BulletListEnd { level: 1 }),
                Token::List(ListToken::BulletItemStart { level: 1 }),
                Token::List(ListToken::BulletItemEnd),
                Token::List(ListToken::BulletListEnd { level: 0 }),
            ]
        );
    }

    #[test]
    fn test_number_list() {
        let tokens = list_tokens("# one\n# two\n");
        assert_eq!(
            tokens[0],
            Token::List(ListToken::NumberListStart { level: 0 })
        );
        assert_eq!(
            tokens.last().unwrap(),
            &Token::List(ListToken::NumberListEnd { level: 0 })
        );
    }

    #[test]
    fn test_type_change_closes_and_reopens() {
        let tokens = list_tokens("* a\n# b\n");
        assert_eq!(
            tokens,
            vec![
                Token::List(ListToken::BulletListStart { level: 0 }),
                Token::List(ListToken::BulletItemStart { level: 1 }),
                Token::List(ListToken::BulletItemEnd),
                Token::List(ListToken::BulletListEnd { level: 0 }),
                Token::List(ListToken::NumberListStart { level: 0 }),
                Token::List(ListToken::NumberItemStart { level: 1 }),
                Token::List(ListToken::NumberItemEnd),
                Token::List(ListToken::NumberListEnd { level: 0 }),
            ]
        );
    }

    #[test]
    fn test_item_text_stays_parseable() {
        let doc = list(Document::from_text("* has **bold** inside\n"));
        let text: String = doc.iter().filter_map(|s| s.as_text()).collect();
        assert!(text.contains("**bold**"));
    }

    #[test]
    fn test_marker_without_space_is_not_a_list() {
        let doc = list(Document::from_text("**bold** not a list\n"));
        assert_eq!(doc.tokens().count(), 0);
    }

    #[test]
    fn test_deflist_term_and_narrative() {
        let doc = deflist(Document::from_text("; term : meaning\n"));
        let tokens: Vec<_> = doc.tokens().cloned().collect();
        assert_eq!(
            tokens,
            vec![
                Token::Deflist(DeflistToken::ListStart),
                Token::Deflist(DeflistToken::TermStart),
                Token::Deflist(DeflistToken::TermEnd),
                Token::Deflist(DeflistToken::NarrStart),
                Token::Deflist(DeflistToken::NarrEnd),
                Token::Deflist(DeflistToken::ListEnd),
            ]
        );
        let text: String = doc.iter().filter_map(|s| s.as_text()).collect();
        assert!(text.contains("term"));
        assert!(text.contains("meaning"));
    }

    #[test]
    fn test_deflist_term_without_narrative() {
        let doc = deflist(Document::from_text("; alone\n"));
        let tokens: Vec<_> = doc.tokens().cloned().collect();
        assert_eq!(
            tokens,
            vec![
                Token::Deflist(DeflistToken::ListStart),
                Token::Deflist(DeflistToken::TermStart),
                Token::Deflist(DeflistToken::TermEnd),
                Token::Deflist(DeflistToken::ListEnd),
            ]
        );
    }
}
