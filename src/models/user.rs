#[derive(Debug, Clone)]
pub struct User {
    pub username: String,
    pub password_hash: String,  // We store hashed passwords, not plain text
}
