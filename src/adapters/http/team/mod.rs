//! HTTP adapter for the admin team dashboard.

mod handlers;
mod routes;

pub use handlers::TeamHandlers;
pub use routes::team_routes;
