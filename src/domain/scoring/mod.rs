//! Scoring module - Pure services turning answers into a style profile.
//!
//! - `compute_scores` - answers to four axis totals
//! - `classify_dominant` - quadrant products to a single color profile
//! - `rank_composites` - sum composites for the primary/secondary narrative

mod classifier;
mod profiles;
mod ranking;
mod scores;

pub use classifier::{classify_dominant, quadrant_products};
pub use profiles::ColorProfile;
pub use ranking::{rank_composites, CompositeScore, StyleNarrative};
pub use scores::{compute_scores, Scores};
