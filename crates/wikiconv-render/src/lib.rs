//! Wikiconv Render
//!
//! Renders a parsed [`Document`] into TikiWiki markup. Each token kind
//! has a pure rendering function; the two renderers that need to know
//! the previously rendered token (tables and definition lists) thread
//! that state through explicit per-document flow structs instead of
//! keeping it in the renderer.
//!
//! # Example
//!
//! ```
//! use wikiconv_parser::Parser;
//! use wikiconv_render::Renderer;
//!
//! let doc = Parser::new().parse("**bold**\n");
//! let out = Renderer::new().render(&doc);
//! assert_eq!(out, "__bold__\n\n");
//! ```

pub mod block;
pub mod inline;
pub mod list;
pub mod table;

pub use list::DeflistFlow;
pub use table::TableFlow;

use wikiconv_config::RenderConfig;
use wikiconv_core::{Document, Segment, Token};

/// Append a rendered piece, clamping the newline run that straddles
/// the seam to at most two. Only leading newlines of the piece are
/// dropped; its interior is appended verbatim, so Code and
/// Preformatted payloads pass through untouched.
fn push_clamped(out: &mut String, piece: &str) {
    let trailing = out.len() - out.trim_end_matches('\n').len();
    let leading = piece.len() - piece.trim_start_matches('\n').len();
    let keep = leading.min(2_usize.saturating_sub(trailing));
    out.push_str(&piece[leading - keep..]);
}

/// The render stage driver.
#[derive(Debug, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a renderer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with an explicit configuration.
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a whole document.
    ///
    /// Table and definition list state is created here and dropped
    /// when the document is done, so one renderer can serve any number
    /// of documents. Block renderers each close their own construct
    /// with newlines; blank lines stacking where blocks meet are
    /// clamped at each seam, never inside a rendered piece.
    pub fn render(&self, doc: &Document) -> String {
        let mut out = String::new();
        let mut table = TableFlow::new();
        let mut deflist = DeflistFlow::new();

        for seg in doc.iter() {
            match seg {
                Segment::Text(text) => push_clamped(&mut out, text),
                Segment::Token(token) => {
                    push_clamped(&mut out, &self.token(token, &mut table, &mut deflist))
                }
            }
        }

        out
    }

    /// Render one token.
    pub fn token(&self, token: &Token, table: &mut TableFlow, deflist: &mut DeflistFlow) -> String {
        match token {
            Token::Anchor { side, name } => inline::anchor(*side, name.as_deref()),
            Token::Blockquote { side, .. } => block::blockquote(*side),
            Token::Bold => inline::bold(),
            Token::Strong => inline::strong(),
            Token::Emphasis => inline::emphasis(),
            Token::Italic => inline::italic(),
            Token::Underline => inline::underline(),
            Token::Superscript => inline::superscript(),
            Token::Tt { side } => inline::tt(*side),
            Token::Center { side } => inline::center(*side),
            Token::Colortext { side, color } => inline::colortext(*side, color.as_deref()),
            Token::Box { side } => inline::boxed(*side),
            Token::Break => inline::linebreak(),
            Token::Code { text, language } => block::code(text, language.as_deref()),
            Token::Deflist(t) => deflist.token(t),
            Token::Heading { side, level } => block::heading(*side, *level),
            Token::Horiz => block::horiz(),
            Token::Image { src, attrs } => inline::image(src, attrs, &self.config.image_prefix),
            Token::Url { href, text, side } => inline::url(href, text.as_deref(), *side),
            Token::Freelink { page, text, side } => inline::pagelink(page, text.as_deref(), *side),
            Token::Wikilink { page, text, side } => inline::pagelink(page, text.as_deref(), *side),
            Token::Interwiki { site, page, text } => {
                inline::interwiki(site, page, text.as_deref())
            }
            Token::List(t) => list::list(t),
            Token::Newline => inline::newline(),
            Token::Paragraph { side } => block::paragraph(*side),
            Token::Preformatted { text } => block::preformatted(text),
            Token::Raw { text } => block::raw(text),
            Token::Redirect { page } => block::redirect(page),
            Token::Table(t) => table.token(t),
            Token::Tighten => inline::tighten(),
            Token::Toc => block::toc(),
        }
    }
}
