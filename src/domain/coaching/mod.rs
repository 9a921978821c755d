//! Coaching module - Prompt and history rules for the AI coach.

mod conversation;
mod errors;
mod prompt;

pub use conversation::{trim_history, CoachingTurn, TurnRole};
pub use errors::{CoachingError, COACH_UNAVAILABLE_MESSAGE};
pub use prompt::CoachingPrompt;
