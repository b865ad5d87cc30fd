//! Wikiconv Parser
//!
//! Regex-driven parse rules for Creole-flavored wiki markup. Rules run
//! in a fixed order, one pass each, over a [`Document`] of literal text
//! spans and tokens; each rule splits text spans around the constructs
//! it recognizes and leaves everything else untouched. Malformed markup
//! never fails, it simply stays literal.
//!
//! # Example
//!
//! ```
//! use wikiconv_parser::Parser;
//!
//! let parser = Parser::new();
//! let doc = parser.parse("A **bold** word.\n");
//! assert_eq!(doc.tokens_for("bold").len(), 2);
//! ```

pub mod block;
pub mod entities;
pub mod inline;
pub mod list;
pub mod table;
pub mod trim;

pub use entities::encode_html_entities;

use regex::Regex;
use wikiconv_config::Config;
use wikiconv_core::{Document, Segment};

/// Apply one rule's regex to every text span of a document.
///
/// The closure receives each match and returns the replacement
/// segments, or `None` to decline the match and keep it as literal
/// text. Tokens already in the document pass through untouched, so a
/// rule can never see inside an earlier rule's payload.
pub(crate) fn apply_regex<F>(doc: Document, re: &Regex, mut replace: F) -> Document
where
    F: FnMut(&regex::Captures) -> Option<Vec<Segment>>,
{
    let mut out = Document::new();
    for seg in doc {
        match seg {
            Segment::Token(token) => out.push_token(token),
            Segment::Text(text) => {
                let mut last = 0;
                for caps in re.captures_iter(&text) {
                    let m = caps.get(0).unwrap();
                    if let Some(replacement) = replace(&caps) {
                        out.push_text(&text[last..m.start()]);
                        for seg in replacement {
                            out.push(seg);
                        }
                        last = m.end();
                    }
                }
                out.push_text(&text[last..]);
            }
        }
    }
    out
}

/// The parse stage driver.
///
/// Holds the configuration and applies the enabled rules in their
/// fixed order. The order is not configurable; rules can only be
/// switched off.
pub struct Parser {
    config: Config,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Create a parser with the default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create a parser with an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Parse one document body into a segment sequence.
    ///
    /// Line endings are normalized to `\n` first; the Trim pass then
    /// normalizes whitespace before any tokenizing rule runs.
    pub fn parse(&self, text: &str) -> Document {
        let rules = &self.config.rules;

        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        let text = if rules.trim { trim::trim(&text) } else { text };

        let mut doc = Document::from_text(text);
        if rules.code {
            doc = block::code(doc);
        }
        if rules.raw {
            doc = inline::raw(doc);
        }
        if rules.preformatted {
            doc = block::preformatted(doc);
        }
        if rules.redirect {
            doc = block::redirect(doc);
        }
        if rules.heading {
            doc = block::heading(doc);
        }
        if rules.horiz {
            doc = block::horiz(doc);
        }
        if rules.break_ {
            doc = inline::linebreak(doc);
        }
        if rules.blockquote {
            doc = block::blockquote(doc);
        }
        if rules.list {
            doc = list::list(doc);
        }
        if rules.deflist {
            doc = list::deflist(doc);
        }
        if rules.table {
            doc = table::table(doc);
        }
        if rules.image {
            doc = inline::image(doc);
        }
        if rules.toc {
            doc = block::toc(doc);
        }
        if rules.center {
            doc = block::center(doc);
        }
        if rules.paragraph {
            doc = block::paragraph(doc);
        }
        if rules.url {
            doc = inline::url(doc);
        }
        if rules.anchor {
            doc = inline::anchor(doc);
        }
        if rules.interwiki {
            doc = inline::interwiki(doc, &self.config.parse.sites);
        }
        if rules.freelink {
            doc = inline::freelink(doc);
        }
        if rules.wikilink && self.config.parse.camelcase {
            doc = inline::wikilink(doc);
        }
        if rules.colortext {
            doc = inline::colortext(doc);
        }
        if rules.strong {
            doc = inline::strong(doc);
        }
        if rules.bold {
            doc = inline::bold(doc);
        }
        if rules.emphasis {
            doc = inline::emphasis(doc);
        }
        if rules.italic {
            doc = inline::italic(doc);
        }
        if rules.underline {
            doc = inline::underline(doc);
        }
        if rules.tt {
            doc = inline::tt(doc);
        }
        if rules.superscript {
            doc = inline::superscript(doc);
        }

        log::debug!("parsed into {} segments", doc.len());
        doc
    }
}
