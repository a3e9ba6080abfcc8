use crate::errors::Result;
use crate::goals::goals_model::{Goal, NewGoal};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for goal repository operations
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    /// Deactivates every active goal of the user and inserts `new_goal` as the
    /// active one, as a single atomic write.
    async fn replace_active_goal(&self, new_goal: NewGoal, start_date: NaiveDate) -> Result<Goal>;

    /// All rows flagged active for the user, without collapsing duplicates.
    fn load_active_goals(&self, user_id: i32) -> Result<Vec<Goal>>;

    /// Goal history of the user, newest first.
    fn load_goals(&self, user_id: i32) -> Result<Vec<Goal>>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    async fn set_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    fn get_active_goal(&self, user_id: i32) -> Result<Option<Goal>>;
    fn get_goals(&self, user_id: i32) -> Result<Vec<Goal>>;
}
