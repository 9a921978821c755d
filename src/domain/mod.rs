//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, auth)
//! - `questionnaire` - Question catalog, slider values, and answers
//! - `scoring` - Axis totals, dominant profile, and composite ranking
//! - `session` - Questionnaire session lifecycle and snapshots
//! - `coaching` - Prompt and history rules for the AI coach
//! - `team` - Team roster summary for admins

pub mod coaching;
pub mod foundation;
pub mod questionnaire;
pub mod scoring;
pub mod session;
pub mod team;
