//! Application layer - Commands, Queries, and Handlers.
//!
//! Orchestrates domain operations and coordinates between ports. Command
//! handlers change session state; query handlers only read it.

pub mod handlers;

pub use handlers::{
    // Questionnaire
    ApplyActionCommand, ApplyActionHandler, GetResultsHandler, GetResultsQuery,
    LoadSessionHandler, LoadSessionQuery, ProfileResults,
    // Coaching
    AskCoachCommand, AskCoachError, AskCoachHandler, CoachAnswer, CoachingLimits,
    // Team
    GetTeamSummaryHandler, GetTeamSummaryQuery, TeamSummaryError,
};
