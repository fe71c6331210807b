//! User lifecycle service.

use std::sync::Arc;

use crate::api::dto::{UserBody, UserDto};
use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use serde_json::json;

/// Service orchestrating user persistence and entity/DTO conversion.
///
/// This is the only place business rules would live; today the operations map
/// straight onto the repository. There is no validation stage: any well-formed
/// strings are accepted for `name` and `email`.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns every user as a DTO, preserving the store's ordering.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_all_users(&self) -> Result<Vec<UserDto>, AppError> {
        let users = self.repository.find_all().await?;
        Ok(users.into_iter().map(to_dto).collect())
    }

    /// Retrieves a single user by identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user matches the id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_user_by_id(&self, id: i64) -> Result<UserDto, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .map(to_dto)
            .ok_or_else(|| AppError::not_found("User not found", json!({ "id": id })))
    }

    /// Creates a user from the request body and returns it with its
    /// assigned identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_user(&self, body: UserBody) -> Result<UserDto, AppError> {
        let new_user = NewUser {
            name: body.name,
            email: body.email,
        };

        let user = self.repository.insert(new_user).await?;
        Ok(to_dto(user))
    }

    /// Replaces the user at `id` with the request body.
    ///
    /// The identity is forced to the path parameter regardless of anything the
    /// client sent. Because the store upserts, an id that does not exist yet
    /// is created rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_user(&self, id: i64, body: UserBody) -> Result<UserDto, AppError> {
        let user = User::new(id, body.name, body.email);

        let user = self.repository.upsert(user).await?;
        Ok(to_dto(user))
    }

    /// Deletes the user at `id`. Succeeds whether or not the id existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete_by_id(id).await
    }
}

fn to_dto(user: User) -> UserDto {
    UserDto {
        id: user.id,
        name: user.name,
        email: user.email,
    }
}
