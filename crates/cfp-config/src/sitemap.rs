//! Sitemap generation configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://zetech-feedback-portal.vercel.app".into()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SitemapConfig {
    /// Public base URL the sitemap entries are rooted at.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}
