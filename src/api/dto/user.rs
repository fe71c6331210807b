//! DTOs for user management.

use serde::{Deserialize, Serialize};

/// Wire projection of a persisted user.
///
/// Structurally identical to the entity today; kept separate so the API
/// contract does not track the persistence representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Request body for creating or replacing a user.
///
/// Any `id` sent by the client is irrelevant: on create the store assigns one,
/// on update the path parameter wins.
#[derive(Debug, Clone, Deserialize)]
pub struct UserBody {
    pub name: String,
    pub email: String,
}
