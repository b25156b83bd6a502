// Defines the API error taxonomy and a result type alias using the thiserror crate.
use thiserror::Error;

// Make the response module public
pub mod response;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Username and password are required.")]
    MissingCredentials,

    #[error("Username already taken.")]
    UsernameTaken,

    // Unknown username and wrong password share one variant so responses
    // never reveal which usernames exist.
    #[error("Invalid username or password.")]
    InvalidCredentials,

    // The #[from] attribute automatically converts a bcrypt::BcryptError into an ApiError::Hash using the From trait.
    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

// Custom result type
pub type ApiResult<T> = Result<T, ApiError>;
