//! Questionnaire stage lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Where a questionnaire attempt currently is.
///
/// `Results` is not terminal: `edit` returns to the questionnaire and
/// `reset` returns to the intro.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    #[default]
    Intro,
    Questionnaire,
    Results,
}

impl Stage {
    /// Returns true if this stage requires a passed authentication gate.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Stage::Intro)
    }
}

impl StateMachine for Stage {
    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            Stage::Intro => vec![Stage::Questionnaire],
            Stage::Questionnaire => vec![Stage::Results, Stage::Intro],
            Stage::Results => vec![Stage::Questionnaire, Stage::Intro],
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Intro => write!(f, "intro"),
            Stage::Questionnaire => write!(f, "questionnaire"),
            Stage::Results => write!(f, "results"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intro_only_starts_questionnaire() {
        assert!(Stage::Intro.can_transition_to(&Stage::Questionnaire));
        assert!(!Stage::Intro.can_transition_to(&Stage::Results));
    }

    #[test]
    fn results_can_edit_or_reset() {
        assert!(Stage::Results.can_transition_to(&Stage::Questionnaire));
        assert!(Stage::Results.can_transition_to(&Stage::Intro));
    }

    #[test]
    fn no_stage_is_terminal() {
        for stage in [Stage::Intro, Stage::Questionnaire, Stage::Results] {
            assert!(!stage.is_terminal());
        }
    }

    #[test]
    fn illegal_transition_is_an_error() {
        assert!(Stage::Intro.transition_to(Stage::Results).is_err());
        assert_eq!(
            Stage::Questionnaire.transition_to(Stage::Results).unwrap(),
            Stage::Results
        );
    }

    #[test]
    fn only_intro_is_open_to_anonymous_callers() {
        assert!(!Stage::Intro.requires_auth());
        assert!(Stage::Questionnaire.requires_auth());
        assert!(Stage::Results.requires_auth());
    }
}
