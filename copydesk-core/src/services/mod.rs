// src/services/mod.rs

pub mod advisor;   // second-opinion seam + merge policy
pub mod brief;     // content brief model (JSON in)
pub mod redline;   // word-level diff rendering for fix hints
pub mod reviewer;  // field walk: normalize -> casing -> advisor
pub mod summary;   // roll-up tables for reports

// Public API
pub use advisor::{Advisor, Opinion, SecondOpinion};
pub use brief::ContentBrief;
pub use reviewer::{FieldRole, Verdict};
pub use summary::{FailedItem, SummaryRow};
