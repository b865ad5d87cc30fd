//! Inline parse rules: phrase markup, links, and images.
//!
//! All rules here split text spans around single- or paired-token
//! constructs. Paired phrase markers put the inner text back into the
//! document as a literal span, so later rules still parse it.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use wikiconv_core::{Document, Segment, Side, Token};

use crate::apply_regex;

/// Regex for raw spans: ``text``
static RAW_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"``([^\n]+?)``").unwrap());

/// Regex for teletype spans: `text`
static TT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`\n]+)`").unwrap());

/// Regex for a forced line break: two backslashes
static BREAK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\\\").unwrap());

/// Regex for images: {{src}} or {{src|alt}}
static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^{}|\n]+)(?:\|([^{}\n]*))?\}\}").unwrap());

/// Regex for bracketed URLs: [href], [href text], [href|text]
static URL_BRACKET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(https?://[^\s\]|]+)(?:(?:\s+|\s*\|\s*)([^\]\n]+?))?\s*\]").unwrap()
});

/// Regex for bare URLs
static URL_BARE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https?://[^\s<>"\[\]]+"#).unwrap());

/// Regex for named anchors: [[#name]]
static ANCHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[#\s*([A-Za-z][\w-]*)\s*\]\]").unwrap());

/// Regex for interwiki links: [[Site:Page]] or [[Site:Page|text]]
static INTERWIKI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\[([A-Za-z0-9]+):([^\]|\n]+)(?:\|([^\]\n]+))?\]\]").unwrap()
});

/// Regex for free links: [[page]] or [[page|text]]
static FREELINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\[\s*([^#|\]\n][^|\]\n]*?)\s*(?:\|\s*([^\]\n]+?)\s*)?\]\]").unwrap()
});

/// Regex for bare CamelCase page links. The leading group stands in
/// for a negative lookbehind and is reinserted by the replacement.
static WIKILINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[^A-Za-z0-9\[])([A-Z][a-z0-9]+(?:[A-Z][a-z0-9]+)+)").unwrap()
});

/// Regex for colored text: ##color|text##
static COLORTEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"##([^|\n#]+)\|([^#\n]*)##").unwrap());

/// Regex for strong: '''text'''
static STRONG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"'''(.*?)'''").unwrap());

/// Regex for bold: **text**
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

/// Regex for emphasis: ''text''
static EMPHASIS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"''(.*?)''").unwrap());

/// Regex for italic: //text//
static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"//(.*?)//").unwrap());

/// Regex for underline: __text__
static UNDERLINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__(.*?)__").unwrap());

/// Regex for superscript: ^^text^^
static SUPERSCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\^\^(.*?)\^\^").unwrap());

/// Wrap each match's inner text in a pair of identical marker tokens.
fn phrase(doc: Document, re: &Regex, token: Token) -> Document {
    apply_regex(doc, re, |caps| {
        Some(vec![
            Segment::Token(token.clone()),
            Segment::Text(caps[1].to_string()),
            Segment::Token(token.clone()),
        ])
    })
}

pub fn raw(doc: Document) -> Document {
    apply_regex(doc, &RAW_RE, |caps| {
        Some(vec![Segment::Token(Token::Raw {
            text: caps[1].to_string(),
        })])
    })
}

pub fn tt(doc: Document) -> Document {
    apply_regex(doc, &TT_RE, |caps| {
        Some(vec![
            Segment::Token(Token::Tt { side: Side::Start }),
            Segment::Text(caps[1].to_string()),
            Segment::Token(Token::Tt { side: Side::End }),
        ])
    })
}

pub fn linebreak(doc: Document) -> Document {
    apply_regex(doc, &BREAK_RE, |_| Some(vec![Segment::Token(Token::Break)]))
}

/// The image rule. `alt` and `title` both default to the source path
/// when the alt segment trims to empty.
pub fn image(doc: Document) -> Document {
    apply_regex(doc, &IMAGE_RE, |caps| {
        let src = caps[1].trim().to_string();
        let alt = caps
            .get(2)
            .map(|m| m.as_str().trim())
            .filter(|a| !a.is_empty())
            .unwrap_or(&src)
            .to_string();
        Some(vec![Segment::Token(Token::Image {
            src,
            attrs: vec![
                ("alt".to_string(), alt.clone()),
                ("title".to_string(), alt),
            ],
        })])
    })
}

/// The URL rule: bracketed links first, then bare URLs in whatever
/// text is left. Trailing sentence punctuation on a bare URL stays
/// outside the link.
pub fn url(doc: Document) -> Document {
    let doc = apply_regex(doc, &URL_BRACKET_RE, |caps| {
        Some(vec![Segment::Token(Token::Url {
            href: caps[1].to_string(),
            text: caps.get(2).map(|m| m.as_str().to_string()),
            side: None,
        })])
    });
    apply_regex(doc, &URL_BARE_RE, |caps| {
        let m = &caps[0];
        let href = m.trim_end_matches(['.', ',', ';', ':', '!', '?']);
        let tail = m[href.len()..].to_string();
        let mut segs = vec![Segment::Token(Token::Url {
            href: href.to_string(),
            text: None,
            side: None,
        })];
        if !tail.is_empty() {
            segs.push(Segment::Text(tail));
        }
        Some(segs)
    })
}

pub fn anchor(doc: Document) -> Document {
    apply_regex(doc, &ANCHOR_RE, |caps| {
        Some(vec![
            Segment::Token(Token::Anchor {
                side: Side::Start,
                name: Some(caps[1].to_string()),
            }),
            Segment::Token(Token::Anchor {
                side: Side::End,
                name: None,
            }),
        ])
    })
}

/// The interwiki rule declines any match whose site name is not in the
/// configured site map, leaving the text for the free link rule.
pub fn interwiki(doc: Document, sites: &BTreeMap<String, String>) -> Document {
    apply_regex(doc, &INTERWIKI_RE, |caps| {
        if !sites.contains_key(&caps[1]) {
            return None;
        }
        Some(vec![Segment::Token(Token::Interwiki {
            site: caps[1].to_string(),
            page: caps[2].to_string(),
            text: caps.get(3).map(|m| m.as_str().to_string()),
        })])
    })
}

pub fn freelink(doc: Document) -> Document {
    apply_regex(doc, &FREELINK_RE, |caps| {
        Some(vec![Segment::Token(Token::Freelink {
            page: caps[1].to_string(),
            text: caps.get(2).map(|m| m.as_str().to_string()),
            side: None,
        })])
    })
}

pub fn wikilink(doc: Document) -> Document {
    apply_regex(doc, &WIKILINK_RE, |caps| {
        let mut segs = Vec::new();
        if !caps[1].is_empty() {
            segs.push(Segment::Text(caps[1].to_string()));
        }
        segs.push(Segment::Token(Token::Wikilink {
            page: caps[2].to_string(),
            text: None,
            side: None,
        }));
        Some(segs)
    })
}

pub fn colortext(doc: Document) -> Document {
    apply_regex(doc, &COLORTEXT_RE, |caps| {
        Some(vec![
            Segment::Token(Token::Colortext {
                side: Side::Start,
                color: Some(caps[1].to_string()),
            }),
            Segment::Text(caps[2].to_string()),
            Segment::Token(Token::Colortext {
                side: Side::End,
                color: None,
            }),
        ])
    })
}

pub fn strong(doc: Document) -> Document {
    phrase(doc, &STRONG_RE, Token::Strong)
}

pub fn bold(doc: Document) -> Document {
    phrase(doc, &BOLD_RE, Token::Bold)
}

pub fn emphasis(doc: Document) -> Document {
    phrase(doc, &EMPHASIS_RE, Token::Emphasis)
}

pub fn italic(doc: Document) -> Document {
    phrase(doc, &ITALIC_RE, Token::Italic)
}

pub fn underline(doc: Document) -> Document {
    phrase(doc, &UNDERLINE_RE, Token::Underline)
}

pub fn superscript(doc: Document) -> Document {
    phrase(doc, &SUPERSCRIPT_RE, Token::Superscript)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(doc: &Document) -> String {
        doc.iter().filter_map(|s| s.as_text()).collect()
    }

    #[test]
    fn test_image_with_alt() {
        let doc = image(Document::from_text("{{a.png|alt text}}"));
        let token = doc.tokens().next().unwrap();
        match token {
            Token::Image { src, attrs } => {
                assert_eq!(src, "a.png");
                assert_eq!(attrs[0], ("alt".to_string(), "alt text".to_string()));
                assert_eq!(attrs[1], ("title".to_string(), "alt text".to_string()));
            }
            other => panic!("unexpected token {:?}", other),
        }
    }

    #[test]
    fn test_image_alt_defaults_to_src() {
        let doc = image(Document::from_text("{{a.png}}"));
        let token = doc.tokens().next().unwrap();
        match token {
            Token::Image { src, attrs } => {
                assert_eq!(src, "a.png");
                assert_eq!(attrs[0].1, "a.png");
                assert_eq!(attrs[1].1, "a.png");
            }
            other => panic!("unexpected token {:?}", other),
        }
    }

    #[test]
    fn test_image_empty_alt_defaults_to_src() {
        let doc = image(Document::from_text("{{a.png|  }}"));
        let token = doc.tokens().next().unwrap();
        match token {
            Token::Image { attrs, .. } => assert_eq!(attrs[0].1, "a.png"),
            other => panic!("unexpected token {:?}", other),
        }
    }

    #[test]
    fn test_bracketed_url_with_text() {
        let doc = url(Document::from_text("[http://example.com improve]"));
        let token = doc.tokens().next().unwrap();
        match token {
            Token::Url { href, text, side } => {
                assert_eq!(href, "http://example.com");
                assert_eq!(text.as_deref(), Some("improve"));
                assert!(side.is_none());
            }
            other => panic!("unexpected token {:?}", other),
        }
    }

    #[test]
    fn test_bracketed_url_pipe_text() {
        let doc = url(Document::from_text("[https://example.com/a|the page]"));
        let token = doc.tokens().next().unwrap();
        match token {
            Token::Url { href, text, .. } => {
                assert_eq!(href, "https://example.com/a");
                assert_eq!(text.as_deref(), Some("the page"));
            }
            other => panic!("unexpected token {:?}", other),
        }
    }

    #[test]
    fn test_bare_url_sheds_trailing_punctuation() {
        let doc = url(Document::from_text("see http://example.com/x. Next"));
        match doc.tokens().next().unwrap() {
            Token::Url { href, text, .. } => {
                assert_eq!(href, "http://example.com/x");
                assert!(text.is_none());
            }
            other => panic!("unexpected token {:?}", other),
        }
        assert_eq!(text_of(&doc), "see . Next");
    }

    #[test]
    fn test_anchor() {
        let doc = anchor(Document::from_text("[[#section-2]]"));
        let tokens: Vec<_> = doc.tokens().collect();
        assert_eq!(
            tokens[0],
            &Token::Anchor {
                side: Side::Start,
                name: Some("section-2".to_string())
            }
        );
        assert_eq!(
            tokens[1],
            &Token::Anchor {
                side: Side::End,
                name: None
            }
        );
    }

    #[test]
    fn test_interwiki_known_site() {
        let sites = BTreeMap::from([(
            "Advogato".to_string(),
            "http://advogato.org/%s".to_string(),
        )]);
        let doc = interwiki(Document::from_text("[[Advogato:proj/free]]"), &sites);
        let token = doc.tokens().next().unwrap();
        match token {
            Token::Interwiki { site, page, text } => {
                assert_eq!(site, "Advogato");
                assert_eq!(page, "proj/free");
                assert!(text.is_none());
            }
            other => panic!("unexpected token {:?}", other),
        }
    }

    #[test]
    fn test_interwiki_unknown_site_declined() {
        let sites = BTreeMap::new();
        let doc = interwiki(Document::from_text("[[Nowhere:page]]"), &sites);
        assert_eq!(doc.tokens().count(), 0);
        assert_eq!(text_of(&doc), "[[Nowhere:page]]");
    }

    #[test]
    fn test_freelink() {
        let doc = freelink(Document::from_text("[[how]] and [[a page|shown]]"));
        let tokens: Vec<_> = doc.tokens().collect();
        assert_eq!(
            tokens[0],
            &Token::Freelink {
                page: "how".to_string(),
                text: None,
                side: None
            }
        );
        assert_eq!(
            tokens[1],
            &Token::Freelink {
                page: "a page".to_string(),
                text: Some("shown".to_string()),
                side: None
            }
        );
    }

    #[test]
    fn test_wikilink_camelcase() {
        let doc = wikilink(Document::from_text("See HomePage and WikiWord2 now"));
        let tokens: Vec<_> = doc.tokens().collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(
            tokens[0],
            &Token::Wikilink {
                page: "HomePage".to_string(),
                text: None,
                side: None
            }
        );
    }

    #[test]
    fn test_wikilink_not_inside_word() {
        let doc = wikilink(Document::from_text("notCamelCase"));
        assert_eq!(doc.tokens().count(), 0);
    }

    #[test]
    fn test_wikilink_at_start_of_span() {
        let doc = wikilink(Document::from_text("HomePage first"));
        assert_eq!(doc.tokens_for("wikilink").len(), 1);
        assert_eq!(text_of(&doc), " first");
    }

    #[test]
    fn test_colortext() {
        let doc = colortext(Document::from_text("##red|stop##"));
        let tokens: Vec<_> = doc.tokens().collect();
        assert_eq!(
            tokens[0],
            &Token::Colortext {
                side: Side::Start,
                color: Some("red".to_string())
            }
        );
        assert_eq!(text_of(&doc), "stop");
    }

    #[test]
    fn test_phrase_pairs() {
        let doc = bold(Document::from_text("a **b** c"));
        let tokens: Vec<_> = doc.tokens().collect();
        assert_eq!(tokens, vec![&Token::Bold, &Token::Bold]);
        assert_eq!(text_of(&doc), "a b c");
    }

    #[test]
    fn test_strong_before_emphasis_ordering() {
        let doc = emphasis(strong(Document::from_text("'''s''' and ''e''")));
        assert_eq!(doc.tokens_for("strong").len(), 2);
        assert_eq!(doc.tokens_for("emphasis").len(), 2);
    }

    #[test]
    fn test_raw_and_tt() {
        let doc = tt(raw(Document::from_text("``**raw**`` and `mono`")));
        match doc.tokens().next().unwrap() {
            Token::Raw { text } => assert_eq!(text, "**raw**"),
            other => panic!("unexpected token {:?}", other),
        }
        assert_eq!(doc.tokens_for("tt").len(), 2);
    }

    #[test]
    fn test_linebreak() {
        let doc = linebreak(Document::from_text(r"one\\two"));
        assert_eq!(doc.tokens().next(), Some(&Token::Break));
        assert_eq!(text_of(&doc), "onetwo");
    }

    #[test]
    fn test_superscript_round_trip_markers() {
        let doc = superscript(Document::from_text("5^^th^^"));
        assert_eq!(doc.tokens_for("superscript").len(), 2);
        assert_eq!(text_of(&doc), "5th");
    }
}
