//! PostgreSQL adapters.
//!
//! - `PostgresUserDirectory` - Team roster and recorded scores in `style_profiles`

mod user_directory;

pub use user_directory::PostgresUserDirectory;
