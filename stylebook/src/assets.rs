use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::types::StyleLexicon;

/// === Embedded house lexicon ===
pub const HOUSE_STYLE_TOML_NAME: &str = "lexicon.toml";
pub const HOUSE_STYLE_TOML: &str = include_str!("../assets/house_style.toml");

/// Parse the embedded lexicon once per process.
pub fn embedded() -> Result<&'static StyleLexicon> {
    static EMBEDDED: OnceCell<StyleLexicon> = OnceCell::new();
    EMBEDDED.get_or_try_init(|| StyleLexicon::from_toml_str(HOUSE_STYLE_TOML))
}

/// Seed a missing default lexicon into a destination directory (idempotent).
/// Returns a list of files that were created.
pub fn write_default_lexicon(dir: impl AsRef<Path>) -> Result<Vec<String>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).with_context(|| format!("create_dir_all({:?})", dir))?;

    let mut created = Vec::new();

    let path = dir.join(HOUSE_STYLE_TOML_NAME);
    if !path.exists() {
        fs::write(&path, HOUSE_STYLE_TOML).with_context(|| format!("write {:?}", path))?;
        created.push(HOUSE_STYLE_TOML_NAME.to_string());
    }

    Ok(created)
}

/// Load a lexicon from disk, falling back to the embedded copy when the
/// file does not exist. Parse errors in an existing file are reported,
/// not silently replaced.
pub fn load_or_embedded(path: &Path) -> Result<StyleLexicon> {
    if path.exists() {
        let text = fs::read_to_string(path).with_context(|| format!("read {:?}", path))?;
        return StyleLexicon::from_toml_str(&text)
            .with_context(|| format!("parse lexicon {:?}", path));
    }
    Ok(embedded()?.clone())
}

/// Convenience: resolve `<root>/lexicon/<name>`
pub fn lexicon_path(root: &Path, name: &str) -> PathBuf {
    root.join("lexicon").join(name)
}
