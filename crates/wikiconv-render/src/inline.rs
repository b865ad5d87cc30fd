//! Inline token renderers: phrase markup, links, and images.
//!
//! Every function here is pure; the outputs are fixed by the Tiki
//! dialect. Link-family tokens collapse the text part when it equals
//! the target, so round-tripped markup stays minimal.

use wikiconv_core::Side;

pub fn bold() -> String {
    "__".to_string()
}

pub fn strong() -> String {
    "__".to_string()
}

pub fn emphasis() -> String {
    "''".to_string()
}

pub fn italic() -> String {
    "''".to_string()
}

pub fn underline() -> String {
    "===".to_string()
}

pub fn superscript() -> String {
    "^^".to_string()
}

pub fn tt(side: Side) -> String {
    match side {
        Side::Start => "-+".to_string(),
        Side::End => "+-".to_string(),
    }
}

pub fn center(_side: Side) -> String {
    "::".to_string()
}

pub fn boxed(_side: Side) -> String {
    "^".to_string()
}

pub fn linebreak() -> String {
    "\n".to_string()
}

pub fn newline() -> String {
    "\n".to_string()
}

pub fn tighten() -> String {
    String::new()
}

/// A named color passes through; six hex digits get a `#` prefix.
pub fn colortext(side: Side, color: Option<&str>) -> String {
    match side {
        Side::Start => {
            let color = color.unwrap_or_default();
            if color.len() == 6 && color.chars().all(|c| c.is_ascii_hexdigit()) {
                format!("~~#{}:", color)
            } else {
                format!("~~{}:", color)
            }
        }
        Side::End => "~~".to_string(),
    }
}

pub fn anchor(side: Side, name: Option<&str>) -> String {
    match side {
        Side::Start => format!("(({}", name.unwrap_or_default()),
        Side::End => "))".to_string(),
    }
}

/// External URL link. The single-token form collapses when the display
/// text equals the target.
pub fn url(href: &str, text: Option<&str>, side: Option<Side>) -> String {
    match side {
        None => match text {
            Some(text) if text != href => format!("[{}|{}]", href, text),
            _ => format!("[{}]", href),
        },
        Some(Side::Start) => match text {
            Some(text) if text != href => format!("[{}|", href),
            _ => format!("[{}", href),
        },
        Some(Side::End) => "]".to_string(),
    }
}

/// Free links and CamelCase links render identically.
pub fn pagelink(page: &str, text: Option<&str>, side: Option<Side>) -> String {
    match side {
        None => match text {
            Some(text) if text != page => format!("(({}|{}))", page, text),
            _ => format!("(({}))", page),
        },
        Some(Side::Start) => format!("(({}|", page),
        Some(Side::End) => "))".to_string(),
    }
}

pub fn interwiki(site: &str, page: &str, text: Option<&str>) -> String {
    match text {
        Some(text) => format!("(({}:{}|{}))", site, page, text),
        None => format!("(({}:{}))", site, page),
    }
}

/// Inline image. The configured prefix is prepended to every source;
/// attribute order is preserved from the parse.
pub fn image(src: &str, attrs: &[(String, String)], prefix: &str) -> String {
    let mut out = format!("{{img src=\"{}{}\"", prefix, src);
    for (key, value) in attrs {
        out.push_str(&format!(" {}=\"{}\"", key, value));
    }
    out.push('}');
    out
}
