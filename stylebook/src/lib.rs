// Public modules so copydesk-core can use them
pub mod assets;
pub mod casing;
pub mod normalize;
pub mod shorthand;
pub mod types;

pub use assets::{embedded, load_or_embedded, write_default_lexicon, HOUSE_STYLE_TOML};
pub use casing::{
    apply, capital_case, repair_acronym_plurals, sentence_case, title_case, CaseOutcome,
    CaseRule,
};
pub use shorthand::normalize_shorthands;
pub use types::StyleLexicon;
