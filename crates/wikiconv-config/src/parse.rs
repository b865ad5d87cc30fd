//! Parse-stage configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Settings consumed by the parse stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParseConfig {
    /// Recognize bare CamelCase words as page links.
    /// Default: true
    #[serde(default = "default_true")]
    pub camelcase: bool,

    /// Known remote wikis for `[[Site:Page]]` links, mapping a site
    /// name to a URL pattern with `%s` where the page name goes.
    /// A bracketed link whose site is not listed here is left for the
    /// free link rule.
    #[serde(default = "default_sites")]
    pub sites: BTreeMap<String, String>,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            camelcase: true,
            sites: default_sites(),
        }
    }
}

impl ParseConfig {
    /// Merge another ParseConfig into this one.
    ///
    /// All fields are copied from `other`; the override file carries
    /// only the values the user wants to change and serde defaults
    /// fill in the rest before merging.
    pub fn merge(&mut self, other: &ParseConfig) {
        self.camelcase = other.camelcase;
        self.sites = other.sites.clone();
    }
}

fn default_true() -> bool {
    true
}

fn default_sites() -> BTreeMap<String, String> {
    BTreeMap::from([
        (
            "MeatBall".to_string(),
            "http://www.usemod.com/cgi-bin/mb.pl?%s".to_string(),
        ),
        ("Advogato".to_string(), "http://advogato.org/%s".to_string()),
        ("Wiki".to_string(), "http://c2.com/cgi/wiki?%s".to_string()),
    ])
}
