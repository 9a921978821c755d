//! HTTP adapter for the shared-password login (simple feature set).

mod dto;
mod handlers;
mod routes;

pub use dto::{LoginRequest, LoginResponse};
pub use handlers::LoginHandlers;
pub use routes::auth_routes;
