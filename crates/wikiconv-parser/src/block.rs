//! Block-level parse rules and the paragraph pass.
//!
//! Block rules are line-anchored. The paragraph pass runs after every
//! other block rule: it splits the document into blank-line-separated
//! chunks, wraps plain chunks in paragraph tokens, and leaves chunks
//! that open with a block token unwrapped with a single newline
//! separator.

use regex::Regex;
use std::sync::LazyLock;
use wikiconv_core::{Document, Segment, Side, Token};

use crate::apply_regex;
use crate::entities::encode_html_entities;

/// Regex for code blocks: <code> or <code type="lang">
static CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<code(?:\s+type="([^"]*)")?>\n?(.*?)\n?</code>"#).unwrap()
});

/// Regex for preformatted blocks: {{{ and }}} on their own lines
static PREFORMATTED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?ms)^\{\{\{$\n(.*?)\n^\}\}\}$").unwrap());

/// Regex for a redirect line
static REDIRECT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#redirect\s+(\S+)[ \t]*$").unwrap());

/// Regex for headings: 1-6 equals signs, optional closing run
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(={1,6})[ \t]*(.+?)[ \t]*=*[ \t]*$").unwrap());

/// Regex for a horizontal rule: a line of 4+ dashes
static HORIZ_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^-{4,}[ \t]*$").unwrap());

/// Regex for the table-of-contents placeholder
static TOC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\[toc\]\]").unwrap());

/// Regex for a centered line: ::text::
static CENTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^::[ \t]*(.+?)[ \t]*::$").unwrap());

/// Regex for a run of blockquote lines
static BLOCKQUOTE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)(?:^>[^\n]*\n?)+").unwrap());

/// Regex for a blank-line chunk separator
static PARA_SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());

/// The code rule. The payload is stored verbatim; blank lines around
/// the token force block separation.
pub fn code(doc: Document) -> Document {
    apply_regex(doc, &CODE_RE, |caps| {
        let language = caps
            .get(1)
            .map(|m| m.as_str().to_string())
            .filter(|l| !l.is_empty());
        Some(vec![
            Segment::Text("\n\n".to_string()),
            Segment::Token(Token::Code {
                text: caps[2].to_string(),
                language,
            }),
            Segment::Text("\n\n".to_string()),
        ])
    })
}

/// The preformatted rule. The payload is entity-encoded so markup
/// metacharacters render literally downstream.
pub fn preformatted(doc: Document) -> Document {
    apply_regex(doc, &PREFORMATTED_RE, |caps| {
        Some(vec![
            Segment::Text("\n\n".to_string()),
            Segment::Token(Token::Preformatted {
                text: encode_html_entities(&caps[1]),
            }),
            Segment::Text("\n\n".to_string()),
        ])
    })
}

/// The redirect rule. The target page name is captured into the token
/// payload so the link rules further down the pipeline never see it.
pub fn redirect(doc: Document) -> Document {
    apply_regex(doc, &REDIRECT_RE, |caps| {
        Some(vec![Segment::Token(Token::Redirect {
            page: caps[1].to_string(),
        })])
    })
}

/// The heading rule. Title text stays parseable by later rules.
pub fn heading(doc: Document) -> Document {
    apply_regex(doc, &HEADING_RE, |caps| {
        let level = caps[1].len() as u8;
        Some(vec![
            Segment::Token(Token::Heading {
                side: Side::Start,
                level,
            }),
            Segment::Text(caps[2].to_string()),
            Segment::Token(Token::Heading {
                side: Side::End,
                level,
            }),
        ])
    })
}

pub fn horiz(doc: Document) -> Document {
    apply_regex(doc, &HORIZ_RE, |_| Some(vec![Segment::Token(Token::Horiz)]))
}

pub fn toc(doc: Document) -> Document {
    apply_regex(doc, &TOC_RE, |_| Some(vec![Segment::Token(Token::Toc)]))
}

pub fn center(doc: Document) -> Document {
    apply_regex(doc, &CENTER_RE, |caps| {
        Some(vec![
            Segment::Token(Token::Center { side: Side::Start }),
            Segment::Text(caps[1].to_string()),
            Segment::Token(Token::Center { side: Side::End }),
        ])
    })
}

/// The blockquote rule. Depth is the count of leading `>` markers;
/// depth 1 is the outermost quote.
pub fn blockquote(doc: Document) -> Document {
    apply_regex(doc, &BLOCKQUOTE_RUN_RE, |caps| {
        let block = &caps[0];
        let mut segs: Vec<Segment> = Vec::new();
        let mut depth = 0;

        for line in block.lines() {
            let line_depth = line.chars().take_while(|&c| c == '>').count();
            let text = line[line_depth..].trim_start();

            while depth > line_depth {
                segs.push(Segment::Token(Token::Blockquote {
                    side: Side::End,
                    level: depth,
                }));
                depth -= 1;
            }
            while depth < line_depth {
                depth += 1;
                segs.push(Segment::Token(Token::Blockquote {
                    side: Side::Start,
                    level: depth,
                }));
            }

            if !text.is_empty() {
                segs.push(Segment::Text(text.to_string()));
                segs.push(Segment::Text("\n".to_string()));
            }
        }
        while depth > 0 {
            segs.push(Segment::Token(Token::Blockquote {
                side: Side::End,
                level: depth,
            }));
            depth -= 1;
        }
        if block.ends_with('\n') {
            segs.push(Segment::Text("\n".to_string()));
        }
        Some(segs)
    })
}

enum Chunk {
    Empty,
    Block,
    Wrapped,
}

fn classify(chunk: &[Segment]) -> Chunk {
    for seg in chunk {
        match seg {
            Segment::Text(t) if t.trim().is_empty() => continue,
            Segment::Text(_) => return Chunk::Wrapped,
            Segment::Token(t) if t.is_block_start() => return Chunk::Block,
            Segment::Token(_) => return Chunk::Wrapped,
        }
    }
    Chunk::Empty
}

/// The paragraph pass. Must run after every other block rule and
/// before the inline rules.
pub fn paragraph(doc: Document) -> Document {
    // split into chunks on blank-line separators
    let mut chunks: Vec<Vec<Segment>> = vec![Vec::new()];
    for seg in doc {
        match seg {
            Segment::Token(_) => chunks.last_mut().unwrap().push(seg),
            Segment::Text(text) => {
                let mut last = 0;
                for m in PARA_SPLIT_RE.find_iter(&text) {
                    let piece = &text[last..m.start()];
                    if !piece.is_empty() {
                        chunks
                            .last_mut()
                            .unwrap()
                            .push(Segment::Text(piece.to_string()));
                    }
                    chunks.push(Vec::new());
                    last = m.end();
                }
                let piece = &text[last..];
                if !piece.is_empty() {
                    chunks
                        .last_mut()
                        .unwrap()
                        .push(Segment::Text(piece.to_string()));
                }
            }
        }
    }

    let mut out = Document::new();
    for chunk in chunks {
        match classify(&chunk) {
            Chunk::Empty => {}
            Chunk::Block => {
                for seg in chunk {
                    out.push(seg);
                }
                out.push_text("\n");
            }
            Chunk::Wrapped => {
                out.push_token(Token::Paragraph { side: Side::Start });
                let len = chunk.len();
                for (i, seg) in chunk.into_iter().enumerate() {
                    match seg {
                        Segment::Text(t) => {
                            let t = if i == 0 { t.trim_start() } else { t.as_str() };
                            let t = if i == len - 1 { t.trim_end() } else { t };
                            out.push_text(t);
                        }
                        token => out.push(token),
                    }
                }
                out.push_token(Token::Paragraph { side: Side::End });
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(doc: &Document) -> String {
        doc.iter().filter_map(|s| s.as_text()).collect()
    }

    #[test]
    fn test_code_block() {
        let doc = code(Document::from_text("<code>\nsample code\n</code>"));
        let token = doc.tokens().next().unwrap();
        match token {
            Token::Code { text, language } => {
                assert_eq!(text, "sample code");
                assert!(language.is_none());
            }
            other => panic!("unexpected token {:?}", other),
        }
    }

    #[test]
    fn test_code_block_with_language() {
        let doc = code(Document::from_text("<code type=\"php\">\necho 1;\n</code>"));
        let token = doc.tokens().next().unwrap();
        match token {
            Token::Code { text, language } => {
                assert_eq!(text, "echo 1;");
                assert_eq!(language.as_deref(), Some("php"));
            }
            other => panic!("unexpected token {:?}", other),
        }
    }

    #[test]
    fn test_preformatted_encodes_entities() {
        let doc = preformatted(Document::from_text("\n{{{\n<b>x</b>\n}}}\n"));
        let token = doc.tokens().next().unwrap();
        match token {
            Token::Preformatted { text } => assert_eq!(text, "&lt;b&gt;x&lt;/b&gt;"),
            other => panic!("unexpected token {:?}", other),
        }
    }

    #[test]
    fn test_preformatted_needs_own_lines() {
        let doc = preformatted(Document::from_text("inline {{{ not a block }}} text"));
        assert_eq!(doc.tokens().count(), 0);
    }

    #[test]
    fn test_redirect() {
        let doc = redirect(Document::from_text("#redirect TargetPage\n"));
        let first = doc.tokens().next();
        assert_eq!(
            first,
            Some(&Token::Redirect {
                page: "TargetPage".to_string()
            })
        );
        assert!(!text_of(&doc).contains("TargetPage"));
    }

    #[test]
    fn test_heading_levels_and_closing_run() {
        let doc = heading(Document::from_text("== Title ==\n"));
        let tokens: Vec<_> = doc.tokens().collect();
        assert_eq!(
            tokens[0],
            &Token::Heading {
                side: Side::Start,
                level: 2
            }
        );
        assert!(text_of(&doc).contains("Title"));
        assert!(!text_of(&doc).contains('='));
    }

    #[test]
    fn test_heading_without_closing_run() {
        let doc = heading(Document::from_text("= Top\n"));
        assert_eq!(
            doc.tokens().next(),
            Some(&Token::Heading {
                side: Side::Start,
                level: 1
            })
        );
    }

    #[test]
    fn test_horiz() {
        let doc = horiz(Document::from_text("----\n"));
        assert_eq!(doc.tokens().next(), Some(&Token::Horiz));
    }

    #[test]
    fn test_horiz_needs_four_dashes() {
        let doc = horiz(Document::from_text("---\n"));
        assert_eq!(doc.tokens().count(), 0);
    }

    #[test]
    fn test_center() {
        let doc = center(Document::from_text("::middle::\n"));
        assert_eq!(doc.tokens_for("center").len(), 2);
        assert!(text_of(&doc).contains("middle"));
    }

    #[test]
    fn test_blockquote_depth() {
        let doc = blockquote(Document::from_text("> outer\n>> inner\n> outer again\n"));
        let tokens: Vec<_> = doc.tokens().cloned().collect();
        assert_eq!(
            tokens,
            vec![
                Token::Blockquote {
                    side: Side::Start,
                    level: 1
                },
                Token::Blockquote {
                    side: Side::Start,
                    level: 2
                },
                Token::Blockquote {
                    side: Side::End,
                    level: 2
                },
                Token::Blockquote {
                    side: Side::End,
                    level: 1
                },
            ]
        );
    }

    #[test]
    fn test_paragraph_wraps_plain_chunk() {
        let doc = paragraph(Document::from_text("one\n\ntwo\n"));
        let tokens: Vec<_> = doc.tokens().cloned().collect();
        assert_eq!(
            tokens,
            vec![
                Token::Paragraph { side: Side::Start },
                Token::Paragraph { side: Side::End },
                Token::Paragraph { side: Side::Start },
                Token::Paragraph { side: Side::End },
            ]
        );
    }

    #[test]
    fn test_paragraph_leaves_block_chunk_unwrapped() {
        let mut doc = Document::new();
        doc.push_token(Token::Horiz);
        doc.push_text("\n\nplain");
        let out = paragraph(doc);
        let tokens: Vec<_> = out.tokens().cloned().collect();
        assert_eq!(
            tokens,
            vec![
                Token::Horiz,
                Token::Paragraph { side: Side::Start },
                Token::Paragraph { side: Side::End },
            ]
        );
    }

    #[test]
    fn test_paragraph_trims_chunk_edges() {
        let doc = paragraph(Document::from_text("line one\nline two\n"));
        let text = text_of(&doc);
        assert_eq!(text, "line one\nline two");
    }

    #[test]
    fn test_paragraph_drops_blank_chunks() {
        let doc = paragraph(Document::from_text("\n\n\n\na\n\n\n\n"));
        assert_eq!(doc.tokens().count(), 2);
    }
}
