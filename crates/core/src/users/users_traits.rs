//! User repository and service traits.

use async_trait::async_trait;

use super::users_model::{NewUser, User, UserProfileUpdate, UserSummary};
use crate::errors::Result;

/// Trait defining the contract for User repository operations.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    /// Inserts a user and returns the stored row.
    async fn create(&self, new_user: NewUser) -> Result<User>;

    /// Replaces name, email and weight of an existing user.
    ///
    /// Fails with `DatabaseError::NotFound` when the user does not exist.
    async fn update_profile(&self, user_id: i32, update: UserProfileUpdate) -> Result<User>;

    /// Retrieves a user by ID. Absence is `Ok(None)`.
    fn get_by_id(&self, user_id: i32) -> Result<Option<User>>;

    /// Lists every user except `exclude_user_id`, ordered by ID.
    fn list_except(&self, exclude_user_id: i32) -> Result<Vec<UserSummary>>;
}

/// Trait defining the contract for User service operations.
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn create_user(&self, new_user: NewUser) -> Result<User>;
    async fn update_profile(&self, user_id: i32, update: UserProfileUpdate) -> Result<User>;
    fn get_profile(&self, user_id: i32) -> Result<Option<User>>;
    fn list_users(&self, exclude_user_id: i32) -> Result<Vec<UserSummary>>;
}
