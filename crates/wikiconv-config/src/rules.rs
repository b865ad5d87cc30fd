//! Per-rule enable flags.
//!
//! This module contains the `RulesConfig` struct which holds one
//! boolean per parse rule. Disabling a rule leaves its source markup
//! untouched in the output text.

use serde::{Deserialize, Serialize};

/// Parse rule enable flags.
///
/// Field order matches the order rules are applied in; the config
/// cannot reorder rules, only switch them off.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RulesConfig {
    #[serde(default = "default_true")]
    pub trim: bool,
    #[serde(default = "default_true")]
    pub code: bool,
    #[serde(default = "default_true")]
    pub raw: bool,
    #[serde(default = "default_true")]
    pub preformatted: bool,
    #[serde(default = "default_true")]
    pub redirect: bool,
    #[serde(default = "default_true")]
    pub heading: bool,
    #[serde(default = "default_true")]
    pub horiz: bool,
    #[serde(default = "default_true", rename = "Break")]
    pub break_: bool,
    #[serde(default = "default_true")]
    pub blockquote: bool,
    #[serde(default = "default_true")]
    pub list: bool,
    #[serde(default = "default_true")]
    pub deflist: bool,
    #[serde(default = "default_true")]
    pub table: bool,
    #[serde(default = "default_true")]
    pub image: bool,
    #[serde(default = "default_true")]
    pub toc: bool,
    #[serde(default = "default_true")]
    pub center: bool,
    #[serde(default = "default_true")]
    pub paragraph: bool,
    #[serde(default = "default_true")]
    pub url: bool,
    #[serde(default = "default_true")]
    pub anchor: bool,
    #[serde(default = "default_true")]
    pub interwiki: bool,
    #[serde(default = "default_true")]
    pub freelink: bool,
    #[serde(default = "default_true")]
    pub wikilink: bool,
    #[serde(default = "default_true")]
    pub colortext: bool,
    #[serde(default = "default_true")]
    pub strong: bool,
    #[serde(default = "default_true")]
    pub bold: bool,
    #[serde(default = "default_true")]
    pub emphasis: bool,
    #[serde(default = "default_true")]
    pub italic: bool,
    #[serde(default = "default_true")]
    pub underline: bool,
    #[serde(default = "default_true")]
    pub tt: bool,
    #[serde(default = "default_true")]
    pub superscript: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::all_enabled()
    }
}

impl RulesConfig {
    /// Merge another RulesConfig into this one.
    ///
    /// All fields are copied from `other` since they're all simple
    /// values with no "unset" state in TOML. In practice the override
    /// file carries only the values the user wants to change, and the
    /// serde defaults fill in the rest before merging.
    pub fn merge(&mut self, other: &RulesConfig) {
        *self = other.clone();
    }

    /// Create a RulesConfig with every rule enabled.
    pub fn all_enabled() -> Self {
        Self {
            trim: true,
            code: true,
            raw: true,
            preformatted: true,
            redirect: true,
            heading: true,
            horiz: true,
            break_: true,
            blockquote: true,
            list: true,
            deflist: true,
            table: true,
            image: true,
            toc: true,
            center: true,
            paragraph: true,
            url: true,
            anchor: true,
            interwiki: true,
            freelink: true,
            wikilink: true,
            colortext: true,
            strong: true,
            bold: true,
            emphasis: true,
            italic: true,
            underline: true,
            tt: true,
            superscript: true,
        }
    }

    /// Create a RulesConfig with every rule disabled.
    pub fn all_disabled() -> Self {
        Self {
            trim: false,
            code: false,
            raw: false,
            preformatted: false,
            redirect: false,
            heading: false,
            horiz: false,
            break_: false,
            blockquote: false,
            list: false,
            deflist: false,
            table: false,
            image: false,
            toc: false,
            center: false,
            paragraph: false,
            url: false,
            anchor: false,
            interwiki: false,
            freelink: false,
            wikilink: false,
            colortext: false,
            strong: false,
            bold: false,
            emphasis: false,
            italic: false,
            underline: false,
            tt: false,
            superscript: false,
        }
    }
}

fn default_true() -> bool {
    true
}
