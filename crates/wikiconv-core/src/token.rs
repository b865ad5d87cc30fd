//! The token model for parsed wiki markup.
//!
//! Each parse rule replaces matched source text with one or more tokens.
//! Tokens carry the structured options a renderer needs and nothing else;
//! they are created during parsing, consumed exactly once during rendering,
//! and never mutated in between. Paired constructs (headings, phrase markup,
//! table cells) are represented by start/end tokens with literal text
//! segments between them, so later rules can still parse that text.

use serde::{Deserialize, Serialize};

/// Which end of a paired construct a token marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Start,
    End,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Start => write!(f, "start"),
            Side::End => write!(f, "end"),
        }
    }
}

/// Tokens produced by the bullet/number list rule.
///
/// List start/end levels are 0-based (the outermost list is level 0);
/// item levels are 1-based (a top-level item is level 1). The renderer
/// relies on this to emit one marker per item level and a closing newline
/// only for the outermost list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListToken {
    BulletListStart { level: usize },
    BulletListEnd { level: usize },
    NumberListStart { level: usize },
    NumberListEnd { level: usize },
    BulletItemStart { level: usize },
    BulletItemEnd,
    NumberItemStart { level: usize },
    NumberItemEnd,
}

/// Tokens produced by the definition list rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeflistToken {
    ListStart,
    ListEnd,
    TermStart,
    TermEnd,
    NarrStart,
    NarrEnd,
}

/// Tokens produced by the table rule.
///
/// `cols` is the maximum per-row cell count minus one across the whole
/// table; rows with fewer cells are not padded, so a renderer must
/// tolerate short rows. `span` is the number of columns a cell occupies
/// in the flattened pipe-table output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableToken {
    TableStart { rows: usize, cols: usize },
    TableEnd,
    RowStart,
    RowEnd,
    CellStart { header: bool, span: usize },
    CellEnd { span: usize },
}

/// A parsed markup construct.
///
/// Variants mirror the parse rules one-to-one. Link-family variants carry
/// `side: None` for the self-contained single-token form and
/// `Some(Start)`/`Some(End)` for the paired form whose display text sits
/// between the tokens as literal segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Token {
    /// Named anchor point: `[[#name]]`.
    Anchor { side: Side, name: Option<String> },
    /// Block quotation, depth 1 is the outermost quote.
    Blockquote { side: Side, level: usize },
    Bold,
    Strong,
    Emphasis,
    Italic,
    Underline,
    Superscript,
    Tt { side: Side },
    Center { side: Side },
    /// Colored text; `color` is a name or six hex digits without `#`.
    Colortext { side: Side, color: Option<String> },
    Box { side: Side },
    /// Forced line break.
    Break,
    /// Code block with optional language tag. The payload is stored
    /// verbatim and never re-parsed.
    Code { text: String, language: Option<String> },
    Deflist(DeflistToken),
    Heading { side: Side, level: u8 },
    /// Horizontal rule.
    Horiz,
    /// Inline image. `attrs` keeps insertion order (alt before title).
    Image { src: String, attrs: Vec<(String, String)> },
    /// External URL link.
    Url { href: String, text: Option<String>, side: Option<Side> },
    /// Bracketed free link to a wiki page.
    Freelink { page: String, text: Option<String>, side: Option<Side> },
    /// CamelCase link to a wiki page.
    Wikilink { page: String, text: Option<String>, side: Option<Side> },
    /// Link to a page on a configured remote wiki.
    Interwiki { site: String, page: String, text: Option<String> },
    List(ListToken),
    Newline,
    Paragraph { side: Side },
    /// Preformatted block; the payload is HTML-entity-encoded at parse
    /// time so markup metacharacters render literally downstream.
    Preformatted { text: String },
    /// Raw text exempt from further parsing.
    Raw { text: String },
    /// Page redirect. The target travels inside the token, opaque to
    /// the link rules that run later.
    Redirect { page: String },
    Table(TableToken),
    /// Marker that joins adjacent blocks; renders to nothing.
    Tighten,
    /// Table-of-contents placeholder.
    Toc,
}

impl Token {
    /// The name of the rule this token belongs to, for logs and the
    /// token dump.
    pub fn rule(&self) -> &'static str {
        match self {
            Token::Anchor { .. } => "anchor",
            Token::Blockquote { .. } => "blockquote",
            Token::Bold => "bold",
            Token::Strong => "strong",
            Token::Emphasis => "emphasis",
            Token::Italic => "italic",
            Token::Underline => "underline",
            Token::Superscript => "superscript",
            Token::Tt { .. } => "tt",
            Token::Center { .. } => "center",
            Token::Colortext { .. } => "colortext",
            Token::Box { .. } => "box",
            Token::Break => "break",
            Token::Code { .. } => "code",
            Token::Deflist(_) => "deflist",
            Token::Heading { .. } => "heading",
            Token::Horiz => "horiz",
            Token::Image { .. } => "image",
            Token::Url { .. } => "url",
            Token::Freelink { .. } => "freelink",
            Token::Wikilink { .. } => "wikilink",
            Token::Interwiki { .. } => "interwiki",
            Token::List(_) => "list",
            Token::Newline => "newline",
            Token::Paragraph { .. } => "paragraph",
            Token::Preformatted { .. } => "preformatted",
            Token::Raw { .. } => "raw",
            Token::Redirect { .. } => "redirect",
            Token::Table(_) => "table",
            Token::Tighten => "tighten",
            Token::Toc => "toc",
        }
    }

    /// Whether this token opens a block-level construct. The paragraph
    /// rule refuses to wrap chunks that lead with one of these.
    pub fn is_block_start(&self) -> bool {
        matches!(
            self,
            Token::Blockquote { side: Side::Start, .. }
                | Token::Code { .. }
                | Token::Deflist(DeflistToken::ListStart)
                | Token::Heading { side: Side::Start, .. }
                | Token::Horiz
                | Token::List(ListToken::BulletListStart { .. })
                | Token::List(ListToken::NumberListStart { .. })
                | Token::Preformatted { .. }
                | Token::Redirect { .. }
                | Token::Table(TableToken::TableStart { .. })
                | Token::Toc
        )
    }
}
