//! Questionnaire module - Catalog of trait-pair questions and answers.
//!
//! - `Axis`, `AxisGroup`, `AxisPair` - the four score accumulators and their groupings
//! - `QuestionPair` - one slider between two traits, tied to an axis pair
//! - `QuestionCatalog` - the validated, ordered question list
//! - `SliderValue` - bounded 1..=6 answer value
//! - `AnswerMap` - answers keyed by question id

mod answers;
mod axis;
mod catalog;
mod question;
mod slider;

pub use answers::AnswerMap;
pub use axis::{Axis, AxisGroup, AxisPair};
pub use catalog::{CatalogError, QuestionCatalog};
pub use question::{QuestionId, QuestionPair};
pub use slider::SliderValue;
