//! User entity, the persisted record shape.

/// A registered user.
///
/// The identity is assigned by the store on insert. Email uniqueness is a
/// recommended invariant but is not enforced anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl User {
    /// Creates a new User instance.
    pub fn new(id: i64, name: String, email: String) -> Self {
        Self { id, name, email }
    }
}

/// Input data for creating a user, before an identity exists.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}
