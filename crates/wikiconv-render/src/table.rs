//! The table renderer.
//!
//! The only stateful renderer besides the definition list: separator
//! insertion depends on the previously rendered table token. The state
//! lives in a [`TableFlow`] created per document, never in the
//! renderer itself.

use wikiconv_core::TableToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Last {
    TableStart,
    TableEnd,
    RowStart,
    RowEnd,
    CellStart,
    CellEnd,
}

/// Per-document table rendering state.
#[derive(Debug, Default)]
pub struct TableFlow {
    last: Option<Last>,
}

impl TableFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render one table token.
    ///
    /// A `cell_start` directly after a `cell_end` gets a ` | `
    /// separator; a `row_start` anywhere but directly after
    /// `table_start` gets a newline; a `cell_end` with span *n* emits
    /// *n - 1* separator groups for the merged columns.
    pub fn token(&mut self, token: &TableToken) -> String {
        let (out, kind) = match token {
            TableToken::TableStart { .. } => ("||".to_string(), Last::TableStart),
            TableToken::TableEnd => ("||".to_string(), Last::TableEnd),
            TableToken::RowStart => {
                let sep = if self.last == Some(Last::TableStart) {
                    ""
                } else {
                    "\n"
                };
                (sep.to_string(), Last::RowStart)
            }
            TableToken::RowEnd => (String::new(), Last::RowEnd),
            TableToken::CellStart { .. } => {
                let sep = if self.last == Some(Last::CellEnd) {
                    " | "
                } else {
                    ""
                };
                (sep.to_string(), Last::CellStart)
            }
            TableToken::CellEnd { span } => {
                (" | ".repeat(span.saturating_sub(1)), Last::CellEnd)
            }
        };
        self.last = Some(kind);
        out
    }
}
