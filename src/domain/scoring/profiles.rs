//! The four color profiles and their reference text.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::questionnaire::Axis;

/// Dominant communication style.
///
/// Variant order is the classifier's tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorProfile {
    /// Outgoing and task-focused
    Red,
    /// Reserved and task-focused
    Blue,
    /// Outgoing and people-focused
    Yellow,
    /// Reserved and people-focused
    Green,
}

impl ColorProfile {
    pub const ALL: [ColorProfile; 4] = [
        ColorProfile::Red,
        ColorProfile::Blue,
        ColorProfile::Yellow,
        ColorProfile::Green,
    ];

    /// The two axes whose strength defines this profile.
    pub fn axes(&self) -> (Axis, Axis) {
        match self {
            Self::Red => (Axis::A, Axis::C),
            Self::Blue => (Axis::B, Axis::C),
            Self::Yellow => (Axis::A, Axis::D),
            Self::Green => (Axis::B, Axis::D),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Red => "The Director",
            Self::Blue => "The Analyst",
            Self::Yellow => "The Inspirer",
            Self::Green => "The Supporter",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Red => {
                "Decisive and results-oriented. You move quickly, speak directly, \
                 and take charge when a goal is on the line."
            }
            Self::Blue => {
                "Precise and thoughtful. You value accuracy, prefer to work from \
                 evidence, and think carefully before you commit."
            }
            Self::Yellow => {
                "Enthusiastic and sociable. You bring energy to a room, share ideas \
                 freely, and rally people around a vision."
            }
            Self::Green => {
                "Patient and caring. You listen closely, build trust over time, and \
                 keep the team steady and connected."
            }
        }
    }

    pub fn strengths(&self) -> &'static [&'static str] {
        match self {
            Self::Red => &[
                "Makes decisions quickly under pressure",
                "Drives work toward clear outcomes",
                "Communicates expectations plainly",
            ],
            Self::Blue => &[
                "Produces careful, well-reasoned work",
                "Spots risks and inconsistencies early",
                "Holds a high standard for quality",
            ],
            Self::Yellow => &[
                "Generates ideas and enthusiasm",
                "Builds rapport with new people easily",
                "Persuades and motivates others",
            ],
            Self::Green => &[
                "Listens with genuine attention",
                "Creates a calm, reliable team climate",
                "Supports colleagues through change",
            ],
        }
    }

    pub fn growth_areas(&self) -> &'static [&'static str] {
        match self {
            Self::Red => &[
                "Pause to hear other viewpoints before deciding",
                "Acknowledge the people side of a change",
            ],
            Self::Blue => &[
                "Share work before it feels perfect",
                "Voice opinions earlier in discussions",
            ],
            Self::Yellow => &[
                "Follow through on details after the kickoff",
                "Leave room for quieter voices",
            ],
            Self::Green => &[
                "Raise disagreement openly and early",
                "Accept change without waiting for consensus",
            ],
        }
    }
}

impl fmt::Display for ColorProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => write!(f, "Red"),
            Self::Blue => write!(f, "Blue"),
            Self::Yellow => write!(f, "Yellow"),
            Self::Green => write!(f, "Green"),
        }
    }
}
