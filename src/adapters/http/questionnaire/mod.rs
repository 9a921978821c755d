//! HTTP adapter for the questionnaire: catalog, session, and results.

mod dto;
mod handlers;
mod routes;

pub use dto::{ActionRequest, CatalogResponse, ResultsResponse, SessionView};
pub use handlers::QuestionnaireHandlers;
pub use routes::questionnaire_routes;
