use std::collections::BTreeMap;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StyleLexicon {
    pub name: String,
    pub version: String,

    // Reserved product-family prefix, matched on the lowercased token
    pub brand_prefix: String,

    // Lowercase tokens that start with the prefix but are not family
    // names; they resolve through [terms] like any other shorthand
    #[serde(default)]
    pub prefix_exceptions: Vec<String>,

    // lowercase shorthand -> canonical display form
    #[serde(default)]
    pub terms: BTreeMap<String, String>,
}

impl StyleLexicon {
    /// Parse and validate a lexicon from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let lexicon: StyleLexicon =
            toml::from_str(text).context("failed to parse style lexicon TOML")?;
        lexicon.validate()?;
        Ok(lexicon)
    }

    /// Structural checks shared by the embedded copy and on-disk overrides.
    ///
    /// # Returns
    /// - `Ok(())` when the lexicon is usable.
    /// - `Err` naming the first offending entry otherwise.
    pub fn validate(&self) -> Result<()> {
        if self.brand_prefix.is_empty() {
            bail!("lexicon '{}': brand_prefix must not be empty", self.name);
        }
        if self.brand_prefix != self.brand_prefix.to_lowercase() {
            bail!("lexicon '{}': brand_prefix must be lowercase", self.name);
        }
        for key in self.terms.keys() {
            if key != &key.to_lowercase() {
                bail!("lexicon '{}': term key '{}' must be lowercase", self.name, key);
            }
        }
        for exception in &self.prefix_exceptions {
            if exception != &exception.to_lowercase() {
                bail!(
                    "lexicon '{}': prefix exception '{}' must be lowercase",
                    self.name,
                    exception
                );
            }
            if !exception.starts_with(&self.brand_prefix) {
                bail!(
                    "lexicon '{}': prefix exception '{}' does not start with '{}'",
                    self.name,
                    exception,
                    self.brand_prefix
                );
            }
        }
        Ok(())
    }

    /// True when the token belongs to the reserved product family.
    ///
    /// Family membership is decided on the lowercased core: it must start
    /// with `brand_prefix` and not be listed in `prefix_exceptions`.
    pub fn is_brand_token(&self, core: &str) -> bool {
        let lower = core.to_lowercase();
        lower.starts_with(&self.brand_prefix)
            && !self.prefix_exceptions.iter().any(|e| e == &lower)
    }

    /// Canonical display form for a shorthand, if the lexicon knows one.
    pub fn lookup(&self, core: &str) -> Option<&str> {
        self.terms.get(&core.to_lowercase()).map(|s| s.as_str())
    }

    /// Single-token canonicalization: family names win over the terms
    /// table, unknown tokens come back unchanged.
    pub fn canonical_core<'a>(&'a self, core: &'a str) -> &'a str {
        if self.is_brand_token(core) {
            return core;
        }
        self.lookup(core).unwrap_or(core)
    }
}
