use log::debug;
use std::sync::Arc;

use super::users_model::{NewUser, User, UserProfileUpdate, UserSummary};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::errors::Result;

/// Service for managing user profiles
pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl UserServiceTrait for UserService {
    async fn create_user(&self, new_user: NewUser) -> Result<User> {
        new_user.validate()?;
        debug!("Creating user {}", new_user.email);
        self.repository.create(new_user).await
    }

    async fn update_profile(&self, user_id: i32, update: UserProfileUpdate) -> Result<User> {
        update.validate()?;
        self.repository.update_profile(user_id, update).await
    }

    fn get_profile(&self, user_id: i32) -> Result<Option<User>> {
        self.repository.get_by_id(user_id)
    }

    fn list_users(&self, exclude_user_id: i32) -> Result<Vec<UserSummary>> {
        self.repository.list_except(exclude_user_id)
    }
}
