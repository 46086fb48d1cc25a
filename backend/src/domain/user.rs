//! Registered user record.

/// A registered account: the login email and its bcrypt hash.
///
/// Users are created once at registration and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    email: String,
    password_hash: String,
}

impl User {
    /// Build a user from a normalised email and an already computed hash.
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }

    /// Login email, unique across users.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Salted password hash in the hasher's encoded form.
    pub fn password_hash(&self) -> &str {
        self.password_hash.as_str()
    }
}
