//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod coaching;
pub mod questionnaire;
pub mod team;

pub use coaching::{AskCoachCommand, AskCoachError, AskCoachHandler, CoachAnswer, CoachingLimits};
pub use questionnaire::{
    ApplyActionCommand, ApplyActionHandler, GetResultsHandler, GetResultsQuery,
    LoadSessionHandler, LoadSessionQuery, ProfileResults,
};
pub use team::{GetTeamSummaryHandler, GetTeamSummaryQuery, TeamSummaryError};
