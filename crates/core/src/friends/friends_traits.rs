use async_trait::async_trait;

use crate::errors::Result;
use crate::users::UserSummary;

/// Persistence of directed `user -> friend` edges.
#[async_trait]
pub trait FriendRepositoryTrait: Send + Sync {
    /// Inserts the edge. A duplicate pair is a unique constraint violation.
    async fn add(&self, user_id: i32, friend_id: i32) -> Result<()>;

    /// Removes the edge, returning how many rows went away (0 or 1).
    async fn remove(&self, user_id: i32, friend_id: i32) -> Result<usize>;

    /// Users that `user_id` has added, ordered by ID.
    fn list_friends(&self, user_id: i32) -> Result<Vec<UserSummary>>;
}

#[async_trait]
pub trait FriendServiceTrait: Send + Sync {
    async fn add_friend(&self, user_id: i32, friend_id: i32) -> Result<()>;
    async fn remove_friend(&self, user_id: i32, friend_id: i32) -> Result<usize>;
    fn list_friends(&self, user_id: i32) -> Result<Vec<UserSummary>>;

    /// Other users that are not yet friends of `user_id`.
    fn friend_candidates(&self, user_id: i32) -> Result<Vec<UserSummary>>;
}
