//! Bullet, number, and definition list renderers.
//!
//! List markers repeat per item level; only the outermost list end
//! (level 0) closes with a newline. The definition list renderer is
//! stateful like the table renderer: a term starting directly after a
//! term end needs its own line.

use wikiconv_core::{DeflistToken, ListToken};

/// Render one bullet/number list token.
pub fn list(token: &ListToken) -> String {
    match token {
        ListToken::BulletListStart { .. } | ListToken::NumberListStart { .. } => String::new(),
        ListToken::BulletListEnd { level } | ListToken::NumberListEnd { level } => {
            if *level == 0 {
                "\n".to_string()
            } else {
                String::new()
            }
        }
        ListToken::BulletItemStart { level } => "*".repeat(*level),
        ListToken::NumberItemStart { level } => "#".repeat(*level),
        ListToken::BulletItemEnd | ListToken::NumberItemEnd => "\n".to_string(),
    }
}

/// Per-document definition list rendering state.
#[derive(Debug, Default)]
pub struct DeflistFlow {
    last: Option<DeflistToken>,
}

impl DeflistFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render one definition list token.
    pub fn token(&mut self, token: &DeflistToken) -> String {
        let out = match token {
            DeflistToken::ListStart => "{DL()}\n".to_string(),
            DeflistToken::ListEnd => "{DL}\n\n".to_string(),
            DeflistToken::TermStart => {
                if self.last == Some(DeflistToken::TermEnd) {
                    "\n".to_string()
                } else {
                    String::new()
                }
            }
            DeflistToken::TermEnd => ": ".to_string(),
            DeflistToken::NarrStart => String::new(),
            DeflistToken::NarrEnd => "\n".to_string(),
        };
        self.last = Some(*token);
        out
    }
}
