//! PostgreSQL implementation of UserDirectory.
//!
//! Backed by the `style_profiles` table. Rows may be pre-seeded with a
//! team and no scores; those members show as pending on the dashboard.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::foundation::{AuthenticatedUser, TeamName, UserId};
use crate::domain::scoring::Scores;
use crate::domain::team::TeamMember;
use crate::ports::{DirectoryError, UserDirectory};

pub struct PostgresUserDirectory {
    pool: PgPool,
}

impl PostgresUserDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    user_id: String,
    email: Option<String>,
    display_name: Option<String>,
    score_a: Option<i32>,
    score_b: Option<i32>,
    score_c: Option<i32>,
    score_d: Option<i32>,
    #[allow(dead_code)]
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProfileRow> for TeamMember {
    type Error = DirectoryError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        let invalid = |reason: String| DirectoryError::InvalidRow {
            user_id: row.user_id.clone(),
            reason,
        };

        let scores = match (row.score_a, row.score_b, row.score_c, row.score_d) {
            (Some(a), Some(b), Some(c), Some(d)) => Some(Scores::new(
                to_score(a).map_err(&invalid)?,
                to_score(b).map_err(&invalid)?,
                to_score(c).map_err(&invalid)?,
                to_score(d).map_err(&invalid)?,
            )),
            (None, None, None, None) => None,
            _ => return Err(invalid("partially recorded scores".to_string())),
        };

        let user_id = UserId::new(row.user_id.clone()).map_err(|e| invalid(e.to_string()))?;

        Ok(TeamMember {
            user_id,
            display_name: row.display_name,
            email: row.email,
            scores,
        })
    }
}

fn to_score(value: i32) -> Result<u32, String> {
    u32::try_from(value).map_err(|_| format!("negative score {}", value))
}

fn to_column(value: u32) -> Result<i32, DirectoryError> {
    i32::try_from(value).map_err(|_| DirectoryError::database(format!("score {} overflows", value)))
}

#[async_trait]
impl UserDirectory for PostgresUserDirectory {
    async fn record_scores(
        &self,
        user: &AuthenticatedUser,
        scores: &Scores,
    ) -> Result<(), DirectoryError> {
        // Keep an existing team assignment when the token carries none.
        sqlx::query(
            r#"
            INSERT INTO style_profiles (
                user_id, email, display_name, team, score_a, score_b, score_c, score_d, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW())
            ON CONFLICT (user_id) DO UPDATE SET
                email = COALESCE(EXCLUDED.email, style_profiles.email),
                display_name = COALESCE(EXCLUDED.display_name, style_profiles.display_name),
                team = COALESCE(EXCLUDED.team, style_profiles.team),
                score_a = EXCLUDED.score_a,
                score_b = EXCLUDED.score_b,
                score_c = EXCLUDED.score_c,
                score_d = EXCLUDED.score_d,
                updated_at = NOW()
            "#,
        )
        .bind(user.id.as_str())
        .bind(&user.email)
        .bind(&user.display_name)
        .bind(user.team.as_ref().map(|t| t.as_str()))
        .bind(to_column(scores.a)?)
        .bind(to_column(scores.b)?)
        .bind(to_column(scores.c)?)
        .bind(to_column(scores.d)?)
        .execute(&self.pool)
        .await
        .map_err(|e| DirectoryError::database(format!("Failed to record scores: {}", e)))?;

        Ok(())
    }

    async fn list_team(&self, team: &TeamName) -> Result<Vec<TeamMember>, DirectoryError> {
        let rows: Vec<ProfileRow> = sqlx::query_as(
            r#"
            SELECT user_id, email, display_name, score_a, score_b, score_c, score_d, updated_at
            FROM style_profiles
            WHERE team = $1
            ORDER BY COALESCE(display_name, user_id)
            "#,
        )
        .bind(team.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DirectoryError::database(format!("Failed to list team: {}", e)))?;

        rows.into_iter().map(TeamMember::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(scores: [Option<i32>; 4]) -> ProfileRow {
        ProfileRow {
            user_id: "u-1".to_string(),
            email: Some("u1@example.com".to_string()),
            display_name: None,
            score_a: scores[0],
            score_b: scores[1],
            score_c: scores[2],
            score_d: scores[3],
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn complete_row_maps_to_scored_member() {
        let member = TeamMember::try_from(row([Some(40), Some(35), Some(20), Some(55)])).unwrap();
        assert_eq!(member.scores, Some(Scores::new(40, 35, 20, 55)));
        assert_eq!(member.user_id.as_str(), "u-1");
    }

    #[test]
    fn empty_scores_map_to_pending_member() {
        let member = TeamMember::try_from(row([None; 4])).unwrap();
        assert!(member.scores.is_none());
    }

    #[test]
    fn partial_or_negative_scores_are_rejected() {
        assert!(TeamMember::try_from(row([Some(1), None, None, None])).is_err());
        assert!(TeamMember::try_from(row([Some(-1), Some(0), Some(0), Some(0)])).is_err());
    }
}
