//! services/brief.rs
//! Content brief schema, as exported by the authoring tool (JSON).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ContentBrief {
    // Source page for the brief; not one of the reviewed fields.
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub meta_title: String,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default)]
    pub h1: String,
    #[serde(default)]
    pub header_caption: String,

    // Body headers in document order
    #[serde(default)]
    pub headers: Vec<Header>,

    #[serde(default)]
    pub faqs: FaqSection,
    #[serde(default)]
    pub product_nav: ProductNav,
    #[serde(default)]
    pub cta: CtaSection,
}

impl ContentBrief {
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parsing content brief JSON")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading brief file {}", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn header_count(&self, level: HeaderLevel) -> usize {
        self.headers.iter().filter(|h| h.level == level).count()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Header {
    pub level: HeaderLevel,
    #[serde(default)]
    pub text: String,
}

// Unrecognized levels (H5, H6, ...) deserialize to Other and are skipped
// during review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum HeaderLevel {
    H2,
    H3,
    H4,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FaqSection {
    #[serde(default)]
    pub header: String,
    #[serde(default)]
    pub questions: Vec<FaqEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FaqEntry {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProductNav {
    #[serde(default)]
    pub tabs: Vec<NavTab>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NavTab {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub linked_section: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CtaSection {
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub position: String,
}
