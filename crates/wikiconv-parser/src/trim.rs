//! Whole-document text normalization, run before any tokenizing rule.
//!
//! Four passes in fixed order:
//!
//! 1. Collapse whitespace around newlines (trims line edges).
//! 2. Replace a line containing only `-` with a blank line.
//! 3. Collapse runs of 3+ newlines to exactly 2.
//! 4. Convert a digit run with a directly attached alphabetic suffix
//!    into superscript markup (`5th` becomes `5^^th^^`).
//!
//! Pass 4 matches any alphabetic suffix, not only ordinal suffixes, so
//! `5pm` becomes `5^^pm^^` as well. `5 years` is untouched because of
//! the space. This is long-standing behavior that documents depend on;
//! do not narrow the pattern. Colored-text spans are exempt from pass
//! 4: a digit-led hex code like `##0000FF|blue##` is a color, not an
//! ordinal, and must reach the colortext rule intact.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for whitespace hugging a newline
static LINE_EDGE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]*\n[ \t]*").unwrap());

/// Regex for a line containing only a single dash
static DASH_LINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^-$").unwrap());

/// Regex for runs of three or more newlines
static NEWLINE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Regex for a digit run with an attached alphabetic suffix. The
/// leading `(^|\W)` group stands in for a `(?<!\w)` lookbehind, which
/// the regex engine does not support; the replacement reinserts it.
static ORDINAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)(^|\W)(\d+)([A-Za-z]+)").unwrap());

/// Regex for a colored-text span, same shape the colortext rule
/// recognizes later
static COLOR_SPAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"##([^|\n#]+)\|([^#\n]*)##").unwrap());

/// Run the normalization passes over a whole document.
pub fn trim(text: &str) -> String {
    let text = LINE_EDGE_RE.replace_all(text, "\n");
    let text = DASH_LINE_RE.replace_all(&text, "");
    let text = NEWLINE_RUN_RE.replace_all(&text, "\n\n");
    superscript_ordinals(&text)
}

/// The ordinal pass, applied outside colored-text spans only. The
/// `##` delimiter hugging a span keeps the slice boundaries on
/// non-word characters, so slicing does not change what matches.
fn superscript_ordinals(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in COLOR_SPAN_RE.find_iter(text) {
        out.push_str(&ordinals(&text[last..m.start()]));
        out.push_str(m.as_str());
        last = m.end();
    }
    out.push_str(&ordinals(&text[last..]));
    out
}

fn ordinals(text: &str) -> String {
    ORDINAL_RE
        .replace_all(text, |caps: &regex::Captures| {
            format!("{}{}^^{}^^", &caps[1], &caps[2], &caps[3])
        })
        .into_owned()
}
