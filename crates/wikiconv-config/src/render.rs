//! Render-stage configuration.

use serde::{Deserialize, Serialize};

/// Settings consumed by the render stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RenderConfig {
    /// Path prefixed to every relative image source.
    /// Default: "img/wiki_up/"
    #[serde(default = "default_image_prefix")]
    pub image_prefix: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_prefix: default_image_prefix(),
        }
    }
}

impl RenderConfig {
    /// Merge another RenderConfig into this one.
    pub fn merge(&mut self, other: &RenderConfig) {
        self.image_prefix = other.image_prefix.clone();
    }
}

fn default_image_prefix() -> String {
    "img/wiki_up/".to_string()
}
