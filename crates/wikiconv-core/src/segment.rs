//! The parsed document model.
//!
//! A document is an ordered sequence of literal text spans and tokens.
//! Parse rules transform a document by splitting its text spans around
//! new tokens; text produced between paired tokens (table cells, heading
//! titles) stays parseable by later rules, while token payloads are
//! opaque. The renderer walks the sequence once, copying text through
//! and expanding each token.

use serde::{Deserialize, Serialize};

use crate::token::Token;

/// One element of a parsed document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Segment {
    /// A literal text span, copied to the output unchanged.
    Text(String),
    /// A parsed markup construct, expanded by the renderer.
    Token(Token),
}

impl Segment {
    pub fn is_text(&self) -> bool {
        matches!(self, Segment::Text(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Segment::Text(t) => Some(t),
            Segment::Token(_) => None,
        }
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Segment::Text(_) => None,
            Segment::Token(t) => Some(t),
        }
    }
}

/// An ordered sequence of segments.
///
/// `push_text` merges adjacent text spans so rules never see an
/// artificially split literal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    segments: Vec<Segment>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a document from raw source text.
    pub fn from_text(text: impl Into<String>) -> Self {
        let mut doc = Self::new();
        doc.push_text(text.into());
        doc
    }

    /// Append a literal text span, merging with a trailing text span.
    /// Empty text is dropped.
    pub fn push_text(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if text.is_empty() {
            return;
        }
        if let Some(Segment::Text(last)) = self.segments.last_mut() {
            last.push_str(text);
        } else {
            self.segments.push(Segment::Text(text.to_string()));
        }
    }

    /// Append a token.
    pub fn push_token(&mut self, token: Token) {
        self.segments.push(Segment::Token(token));
    }

    pub fn push(&mut self, segment: Segment) {
        match segment {
            Segment::Text(t) => self.push_text(t),
            Segment::Token(t) => self.push_token(t),
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// All tokens, in document order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.segments.iter().filter_map(Segment::as_token)
    }

    /// Tokens belonging to one rule, in document order.
    pub fn tokens_for(&self, rule: &str) -> Vec<&Token> {
        self.tokens().filter(|t| t.rule() == rule).collect()
    }
}

impl IntoIterator for Document {
    type Item = Segment;
    type IntoIter = std::vec::IntoIter<Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

impl FromIterator<Segment> for Document {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        let mut doc = Document::new();
        for seg in iter {
            doc.push(seg);
        }
        doc
    }
}
