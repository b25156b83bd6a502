use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use bcrypt::{hash, verify};

use crate::errors::{ApiError, ApiResult};
use crate::models::User;

/// In-memory credential store, shared by all request handlers. Records are
/// created by registration, never mutated or deleted, and live until the
/// process exits.
pub struct UserStore {
    users: Arc<Mutex<HashMap<String, User>>>,
    bcrypt_cost: u32,
}

impl UserStore {
    pub fn new(bcrypt_cost: u32) -> Self {
        Self {
            users: Arc::new(Mutex::new(HashMap::new())),
            bcrypt_cost,
        }
    }

    /// Hashes the password and inserts a new user record. The existence
    /// check and the insertion happen under one lock, so two concurrent
    /// registrations for the same username cannot both succeed.
    pub fn register(&self, username: &str, password: &str) -> ApiResult<()> {
        if username.is_empty() || password.is_empty() {
            return Err(ApiError::MissingCredentials);
        }

        // Fail fast on taken usernames before paying for the hash; the
        // entry check below still decides under the lock.
        if self.users.lock().unwrap().contains_key(username) {
            return Err(ApiError::UsernameTaken);
        }

        let password_hash = hash(password, self.bcrypt_cost)?;

        match self.users.lock().unwrap().entry(username.to_string()) {
            Entry::Occupied(_) => Err(ApiError::UsernameTaken),
            Entry::Vacant(slot) => {
                slot.insert(User {
                    username: username.to_string(),
                    password_hash,
                });
                Ok(())
            }
        }
    }

    /// Verifies the supplied password against the stored hash and returns
    /// the username on success. Unknown usernames and wrong passwords are
    /// deliberately indistinguishable to the caller. Read-only.
    pub fn authenticate(&self, username: &str, password: &str) -> ApiResult<String> {
        if username.is_empty() || password.is_empty() {
            return Err(ApiError::MissingCredentials);
        }

        // Clone the hash out so the lock is not held across the slow verify
        let password_hash = self
            .users
            .lock()
            .unwrap()
            .get(username)
            .map(|user| user.password_hash.clone());

        let Some(password_hash) = password_hash else {
            return Err(ApiError::InvalidCredentials);
        };

        if verify(password, &password_hash)? {
            Ok(username.to_string())
        } else {
            Err(ApiError::InvalidCredentials)
        }
    }
}

impl Clone for UserStore {
    fn clone(&self) -> Self {
        Self {
            users: self.users.clone(),
            bcrypt_cost: self.bcrypt_cost,
        }
    }
}
