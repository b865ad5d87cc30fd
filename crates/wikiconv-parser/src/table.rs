//! The table rule.
//!
//! A table is a maximal run of lines starting with `|`. Each row is
//! split on `|`; the part before the first pipe and an empty trailing
//! part are ignored, but a non-empty trailing part is real content. An
//! empty interior cell toggles a header flag for the next non-empty
//! cell and is not emitted itself. Rows with fewer cells than the
//! table's column count are kept as-is; nothing pads or rejects them.

use regex::Regex;
use std::sync::LazyLock;
use wikiconv_core::{Document, Segment, TableToken, Token};

use crate::apply_regex;

/// Regex for a run of table lines
static TABLE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)(?:^\|[^\n]*\n?)+").unwrap());

struct Cell {
    header: bool,
    text: String,
}

fn parse_row(line: &str) -> (usize, Vec<Cell>) {
    let mut parts: Vec<&str> = line.split('|').collect();
    // an empty trailing part is the closing pipe, not a cell
    if parts.len() > 1 && parts.last().unwrap().trim().is_empty() {
        parts.pop();
    }
    let width = parts.len().saturating_sub(1);

    let mut cells = Vec::new();
    let mut header = false;
    for part in &parts[1..] {
        let text = part.trim();
        if text.is_empty() {
            header = !header;
        } else {
            cells.push(Cell {
                header,
                text: text.to_string(),
            });
            header = false;
        }
    }
    (width, cells)
}

/// The table rule. `cols` is the maximum row width observed; short
/// rows are the renderer's problem.
pub fn table(doc: Document) -> Document {
    apply_regex(doc, &TABLE_RUN_RE, |caps| {
        let block = caps[0].trim_end_matches('\n');

        let mut num_cols = 0;
        let mut rows = Vec::new();
        for line in block.lines() {
            let (width, cells) = parse_row(line);
            num_cols = num_cols.max(width);
            rows.push(cells);
        }

        let mut segs = vec![Segment::Token(Token::Table(TableToken::TableStart {
            rows: rows.len(),
            cols: num_cols,
        }))];
        for row in rows {
            segs.push(Segment::Token(Token::Table(TableToken::RowStart)));
            for cell in row {
                segs.push(Segment::Token(Token::Table(TableToken::CellStart {
                    header: cell.header,
                    span: 1,
                })));
                segs.push(Segment::Text(cell.text));
                segs.push(Segment::Token(Token::Table(TableToken::CellEnd {
                    span: 1,
                })));
            }
            segs.push(Segment::Token(Token::Table(TableToken::RowEnd)));
        }
        segs.push(Segment::Token(Token::Table(TableToken::TableEnd)));
        if caps[0].ends_with('\n') {
            segs.push(Segment::Text("\n".to_string()));
        }
        Some(segs)
    })
}
