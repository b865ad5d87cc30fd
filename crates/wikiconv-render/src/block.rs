//! Block token renderers.

use wikiconv_core::Side;

/// Heading markers repeat per level; the end token closes the line.
pub fn heading(side: Side, level: u8) -> String {
    match side {
        Side::Start => "!".repeat(level as usize),
        Side::End => "\n".to_string(),
    }
}

pub fn horiz() -> String {
    "\n---\n".to_string()
}

/// Code block; a language tag becomes the Tiki `colors` parameter.
pub fn code(text: &str, language: Option<&str>) -> String {
    match language {
        Some(language) => format!("{{CODE(colors=>{})}}\n{}\n{{CODE}}", language, text),
        None => format!("{{CODE()}}\n{}\n{{CODE}}", text),
    }
}

pub fn preformatted(text: &str) -> String {
    format!("~pp~{}~/pp~", text)
}

pub fn raw(text: &str) -> String {
    format!("~np~{}~/np~", text)
}

pub fn blockquote(side: Side) -> String {
    match side {
        Side::Start => "{QUOTE()}\n".to_string(),
        Side::End => "{QUOTE}\n\n".to_string(),
    }
}

pub fn redirect(page: &str) -> String {
    format!("{{redirect page=\"{}\"}}", page)
}

pub fn toc() -> String {
    "\n{maketoc}\n".to_string()
}

pub fn paragraph(side: Side) -> String {
    match side {
        Side::Start => String::new(),
        Side::End => "\n\n".to_string(),
    }
}
