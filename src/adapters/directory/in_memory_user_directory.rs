//! In-memory UserDirectory for tests and development.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{AuthenticatedUser, TeamName, UserId};
use crate::domain::scoring::Scores;
use crate::domain::team::TeamMember;
use crate::ports::{DirectoryError, UserDirectory};

#[derive(Debug, Clone)]
struct Entry {
    team: Option<TeamName>,
    member: TeamMember,
}

/// Directory held in a shared map keyed by user id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    entries: Arc<RwLock<HashMap<UserId, Entry>>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a roster entry.
    pub async fn add_member(&self, team: TeamName, member: TeamMember) {
        self.entries.write().await.insert(
            member.user_id.clone(),
            Entry {
                team: Some(team),
                member,
            },
        );
    }

    /// Returns the recorded scores for a user, if any.
    pub async fn scores_of(&self, user_id: &UserId) -> Option<Scores> {
        self.entries
            .read()
            .await
            .get(user_id)
            .and_then(|e| e.member.scores)
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn record_scores(
        &self,
        user: &AuthenticatedUser,
        scores: &Scores,
    ) -> Result<(), DirectoryError> {
        let mut entries = self.entries.write().await;
        let entry = entries.entry(user.id.clone()).or_insert_with(|| Entry {
            team: None,
            member: TeamMember {
                user_id: user.id.clone(),
                display_name: None,
                email: None,
                scores: None,
            },
        });

        if let Some(team) = &user.team {
            entry.team = Some(team.clone());
        }
        if user.email.is_some() {
            entry.member.email = user.email.clone();
        }
        if user.display_name.is_some() {
            entry.member.display_name = user.display_name.clone();
        }
        entry.member.scores = Some(*scores);
        Ok(())
    }

    async fn list_team(&self, team: &TeamName) -> Result<Vec<TeamMember>, DirectoryError> {
        let mut members: Vec<TeamMember> = self
            .entries
            .read()
            .await
            .values()
            .filter(|e| e.team.as_ref() == Some(team))
            .map(|e| e.member.clone())
            .collect();

        members.sort_by(|a, b| {
            let key = |m: &TeamMember| {
                m.display_name
                    .clone()
                    .unwrap_or_else(|| m.user_id.to_string())
            };
            key(a).cmp(&key(b))
        });
        Ok(members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(name: &str) -> TeamName {
        TeamName::new(name).unwrap()
    }

    fn pending(id: &str, name: &str) -> TeamMember {
        TeamMember {
            user_id: UserId::new(id).unwrap(),
            display_name: Some(name.to_string()),
            email: None,
            scores: None,
        }
    }

    #[tokio::test]
    async fn record_scores_upserts_and_keeps_seeded_team() {
        let directory = InMemoryUserDirectory::new();
        directory.add_member(team("core"), pending("u-1", "Bea")).await;

        let user = AuthenticatedUser::new(UserId::new("u-1").unwrap());
        let scores = Scores::new(10, 65, 40, 35);
        directory.record_scores(&user, &scores).await.unwrap();
        directory.record_scores(&user, &scores).await.unwrap();

        let members = directory.list_team(&team("core")).await.unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].scores, Some(scores));
        assert_eq!(members[0].display_name.as_deref(), Some("Bea"));
    }

    #[tokio::test]
    async fn list_team_filters_and_sorts_by_name() {
        let directory = InMemoryUserDirectory::new();
        directory.add_member(team("core"), pending("u-2", "Zed")).await;
        directory.add_member(team("core"), pending("u-1", "Amy")).await;
        directory.add_member(team("ops"), pending("u-3", "Bob")).await;

        let names: Vec<_> = directory
            .list_team(&team("core"))
            .await
            .unwrap()
            .into_iter()
            .filter_map(|m| m.display_name)
            .collect();
        assert_eq!(names, vec!["Amy", "Zed"]);
    }

    #[tokio::test]
    async fn users_without_team_are_not_listed() {
        let directory = InMemoryUserDirectory::new();
        let user = AuthenticatedUser::new(UserId::new("solo").unwrap());
        directory
            .record_scores(&user, &Scores::new(1, 2, 3, 4))
            .await
            .unwrap();

        assert!(directory.list_team(&team("core")).await.unwrap().is_empty());
        assert!(directory.scores_of(&user.id).await.is_some());
    }
}
