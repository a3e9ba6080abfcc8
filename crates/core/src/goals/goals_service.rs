use log::{info, warn};
use std::sync::Arc;

use super::goals_model::{Goal, NewGoal};
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::errors::{Error, Result};
use crate::utils::time_utils::local_today;

pub struct GoalService {
    goal_repo: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    pub fn new(goal_repo: Arc<dyn GoalRepositoryTrait>) -> Self {
        GoalService { goal_repo }
    }
}

#[async_trait::async_trait]
impl GoalServiceTrait for GoalService {
    async fn set_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        new_goal.validate()?;
        let today = local_today();
        let goal = self.goal_repo.replace_active_goal(new_goal, today).await?;
        info!("User {} set goal {}", goal.user_id, goal.id);
        Ok(goal)
    }

    fn get_active_goal(&self, user_id: i32) -> Result<Option<Goal>> {
        let mut active = self.goal_repo.load_active_goals(user_id)?;
        match active.len() {
            0 => Ok(None),
            1 => Ok(active.pop()),
            n => {
                warn!("User {} has {} active goals", user_id, n);
                Err(Error::DataIntegrity(format!(
                    "user {} has {} active goals, expected at most one",
                    user_id, n
                )))
            }
        }
    }

    fn get_goals(&self, user_id: i32) -> Result<Vec<Goal>> {
        self.goal_repo.load_goals(user_id)
    }
}
