//! Team roster summary for the admin dashboard.
//!
//! Reuses the single-profile classifier and sum ranking unchanged, so a
//! member's row always matches what they see on their own results page.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{TeamName, UserId};
use crate::domain::scoring::{classify_dominant, ColorProfile, Scores, StyleNarrative};

/// A roster entry as returned by the user directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub user_id: UserId,
    pub display_name: Option<String>,
    pub email: Option<String>,
    /// Present once the member has reached results at least once.
    pub scores: Option<Scores>,
}

/// Number of members whose dominant style is `profile`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorCount {
    pub profile: ColorProfile,
    pub count: usize,
}

/// One member's row on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSummary {
    pub user_id: UserId,
    pub display_name: Option<String>,
    pub scores: Option<Scores>,
    pub dominant: Option<ColorProfile>,
    pub narrative: Option<StyleNarrative>,
}

/// Aggregate view of a team's style distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub team: TeamName,
    /// Counts in `ColorProfile::ALL` order, including zeros.
    pub color_counts: Vec<ColorCount>,
    pub completed: usize,
    pub pending: usize,
    /// Integer mean over completed members; absent when none completed.
    pub mean_scores: Option<Scores>,
    pub members: Vec<MemberSummary>,
}

impl TeamSummary {
    pub fn from_members(team: TeamName, members: &[TeamMember]) -> Self {
        let mut counts = [0usize; 4];
        let mut totals = [0u64; 4];
        let mut completed = 0usize;

        let rows: Vec<MemberSummary> = members
            .iter()
            .map(|member| {
                let dominant = member.scores.as_ref().map(classify_dominant);
                let narrative = member.scores.as_ref().map(StyleNarrative::from_scores);

                if let (Some(scores), Some(profile)) = (member.scores, dominant) {
                    completed += 1;
                    if let Some(slot) = ColorProfile::ALL.iter().position(|p| *p == profile) {
                        counts[slot] += 1;
                    }
                    let values = [scores.a, scores.b, scores.c, scores.d];
                    for (total, value) in totals.iter_mut().zip(values) {
                        *total += value as u64;
                    }
                }

                MemberSummary {
                    user_id: member.user_id.clone(),
                    display_name: member.display_name.clone(),
                    scores: member.scores,
                    dominant,
                    narrative,
                }
            })
            .collect();

        let mean_scores = (completed > 0).then(|| {
            let n = completed as u64;
            Scores::new(
                (totals[0] / n) as u32,
                (totals[1] / n) as u32,
                (totals[2] / n) as u32,
                (totals[3] / n) as u32,
            )
        });

        Self {
            team,
            color_counts: ColorProfile::ALL
                .iter()
                .zip(counts)
                .map(|(&profile, count)| ColorCount { profile, count })
                .collect(),
            completed,
            pending: members.len() - completed,
            mean_scores,
            members: rows,
        }
    }

    /// Count for one profile.
    pub fn count_of(&self, profile: ColorProfile) -> usize {
        self.color_counts
            .iter()
            .find(|c| c.profile == profile)
            .map_or(0, |c| c.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str, scores: Option<Scores>) -> TeamMember {
        TeamMember {
            user_id: UserId::new(id).unwrap(),
            display_name: Some(id.to_uppercase()),
            email: None,
            scores,
        }
    }

    fn team() -> TeamName {
        TeamName::new("platform").unwrap()
    }

    #[test]
    fn counts_dominant_styles_and_pending_members() {
        let members = vec![
            member("red", Some(Scores::new(75, 0, 75, 0))),
            member("green", Some(Scores::new(0, 75, 0, 75))),
            member("green2", Some(Scores::new(30, 45, 30, 45))),
            member("new", None),
        ];
        let summary = TeamSummary::from_members(team(), &members);

        assert_eq!(summary.completed, 3);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.count_of(ColorProfile::Red), 1);
        assert_eq!(summary.count_of(ColorProfile::Green), 2);
        assert_eq!(summary.count_of(ColorProfile::Blue), 0);
        assert_eq!(
            summary.color_counts.iter().map(|c| c.profile).collect::<Vec<_>>(),
            ColorProfile::ALL.to_vec()
        );
    }

    #[test]
    fn mean_uses_integer_division_over_completed_members() {
        let members = vec![
            member("a", Some(Scores::new(75, 0, 75, 0))),
            member("b", Some(Scores::new(0, 75, 0, 75))),
            member("c", None),
        ];
        let summary = TeamSummary::from_members(team(), &members);
        assert_eq!(summary.mean_scores, Some(Scores::new(37, 37, 37, 37)));
    }

    #[test]
    fn member_rows_reuse_classifier_and_ranking() {
        let scores = Scores::new(10, 10, 10, 10);
        let summary = TeamSummary::from_members(team(), &[member("tie", Some(scores))]);
        let row = &summary.members[0];

        assert_eq!(row.dominant, Some(classify_dominant(&scores)));
        assert_eq!(row.narrative, Some(StyleNarrative::from_scores(&scores)));
    }

    #[test]
    fn empty_roster_has_no_mean() {
        let summary = TeamSummary::from_members(team(), &[]);
        assert_eq!(summary.completed, 0);
        assert_eq!(summary.pending, 0);
        assert!(summary.mean_scores.is_none());
        assert!(summary.members.is_empty());
    }

    #[test]
    fn pending_members_have_no_style() {
        let summary = TeamSummary::from_members(team(), &[member("new", None)]);
        assert!(summary.members[0].dominant.is_none());
        assert!(summary.members[0].narrative.is_none());
    }
}
