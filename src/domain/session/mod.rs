//! Session domain module.
//!
//! Tracks one questionnaire attempt through `Intro -> Questionnaire -> Results`
//! and its durable snapshot.

mod action;
mod aggregate;
mod errors;
mod snapshot;
mod stage;

pub use action::SessionAction;
pub use aggregate::QuestionnaireSession;
pub use errors::SessionError;
pub use snapshot::SessionSnapshot;
pub use stage::Stage;
