//! HTTP adapter for the results coach.

mod dto;
mod handlers;
mod routes;

pub use dto::{AskCoachRequest, AskCoachResponse};
pub use handlers::CoachingHandlers;
pub use routes::coaching_routes;
