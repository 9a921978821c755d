//! GetTeamSummaryHandler - Admin dashboard query.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::{AuthenticatedUser, DomainError, ErrorCode, TeamName};
use crate::domain::team::TeamSummary;
use crate::ports::{DirectoryError, UserDirectory};

#[derive(Debug, Clone)]
pub struct GetTeamSummaryQuery {
    pub requester: AuthenticatedUser,
    pub team: TeamName,
}

#[derive(Debug, Error)]
pub enum TeamSummaryError {
    #[error("Only an admin of team {0} can view its dashboard")]
    Forbidden(TeamName),

    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

impl From<TeamSummaryError> for DomainError {
    fn from(err: TeamSummaryError) -> Self {
        match err {
            TeamSummaryError::Forbidden(team) => {
                DomainError::new(ErrorCode::Forbidden, format!("Not an admin of team {}", team))
                    .with_detail("team", team.to_string())
            }
            TeamSummaryError::Directory(e) => e.into(),
        }
    }
}

pub struct GetTeamSummaryHandler {
    directory: Arc<dyn UserDirectory>,
}

impl GetTeamSummaryHandler {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }

    pub async fn handle(&self, query: GetTeamSummaryQuery) -> Result<TeamSummary, TeamSummaryError> {
        if !query.requester.administers(&query.team) {
            tracing::warn!(
                user_id = %query.requester.id,
                team = %query.team,
                "Team dashboard denied"
            );
            return Err(TeamSummaryError::Forbidden(query.team));
        }

        let members = self.directory.list_team(&query.team).await?;
        let summary = TeamSummary::from_members(query.team, &members);
        tracing::debug!(
            team = %summary.team,
            completed = summary.completed,
            pending = summary.pending,
            "Team summary built"
        );
        Ok(summary)
    }
}
