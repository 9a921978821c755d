//! State machine trait for stage enums.
//!
//! Gives lifecycle enums a single place to declare which moves are legal,
//! so aggregates validate transitions the same way everywhere.

use super::ValidationError;

/// Trait for enums that represent a state machine.
///
/// Implementors list their legal targets; `transition_to` and
/// `is_terminal` come for free.
///
/// ```ignore
/// let next = Stage::Intro.transition_to(Stage::Questionnaire)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns all valid target states from the current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Returns true if a move from self to target is legal.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// Performs the transition, returning an error if it is not legal.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if the current state has no outgoing transitions.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
