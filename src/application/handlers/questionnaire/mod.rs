//! Questionnaire handlers - resume, navigate, and score a session.

mod apply_action;
mod get_results;
mod load_session;

pub use apply_action::{ApplyActionCommand, ApplyActionHandler};
pub use get_results::{GetResultsHandler, GetResultsQuery, ProfileResults};
pub use load_session::{LoadSessionHandler, LoadSessionQuery};

pub(crate) use load_session::resume_session;
