//! Team dashboard handlers (full feature set).

mod get_team_summary;

pub use get_team_summary::{GetTeamSummaryHandler, GetTeamSummaryQuery, TeamSummaryError};
