//! Sum-based composite ranking used for the style narrative.
//!
//! This is separate from [`classify_dominant`](super::classify_dominant):
//! the headline profile uses products, the narrative ranks sums.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ColorProfile, Scores};
use crate::domain::questionnaire::Axis;

/// A two-axis sum tied to the profile sharing those axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeScore {
    pub profile: ColorProfile,
    pub axes: (Axis, Axis),
    pub value: u32,
}

impl CompositeScore {
    fn of(scores: &Scores, profile: ColorProfile) -> Self {
        let axes = profile.axes();
        Self {
            profile,
            axes,
            value: scores[axes.0] + scores[axes.1],
        }
    }

    /// Label such as `A+C`.
    pub fn label(&self) -> String {
        format!("{}+{}", self.axes.0, self.axes.1)
    }
}

// Input order for the ranking: A+C, A+D, B+D, B+C.
const COMPOSITE_ORDER: [ColorProfile; 4] = [
    ColorProfile::Red,
    ColorProfile::Yellow,
    ColorProfile::Green,
    ColorProfile::Blue,
];

/// Ranks the four composites by value, highest first.
///
/// The sort is stable, so equal values keep `A+C, A+D, B+D, B+C` order.
pub fn rank_composites(scores: &Scores) -> Vec<CompositeScore> {
    let mut composites: Vec<CompositeScore> = COMPOSITE_ORDER
        .iter()
        .map(|&profile| CompositeScore::of(scores, profile))
        .collect();
    composites.sort_by(|x, y| y.value.cmp(&x.value));
    composites
}

/// Primary and secondary tendencies drawn from the top two composites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleNarrative {
    pub primary: CompositeScore,
    pub secondary: CompositeScore,
}

impl StyleNarrative {
    pub fn from_scores(scores: &Scores) -> Self {
        let ranked = rank_composites(scores);
        Self {
            primary: ranked[0],
            secondary: ranked[1],
        }
    }

    /// Short prose summary for prompts and result views.
    pub fn summary(&self) -> String {
        format!(
            "Primarily {} ({}, {} {}), with a secondary {} tendency ({}, {} {}).",
            self.primary.profile,
            self.primary.profile.title(),
            self.primary.label(),
            self.primary.value,
            self.secondary.profile,
            self.secondary.profile.title(),
            self.secondary.label(),
            self.secondary.value,
        )
    }
}

impl fmt::Display for StyleNarrative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}
