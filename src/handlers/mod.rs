mod auth;
mod jobs;

pub use auth::{handle_login, handle_register};
pub use jobs::list_jobs;
