//! Coaching handlers.

mod ask_coach;

pub use ask_coach::{AskCoachCommand, AskCoachError, AskCoachHandler, CoachAnswer, CoachingLimits};
