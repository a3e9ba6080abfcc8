use log::{debug, info};
use std::sync::Arc;

use super::workouts_model::{Exercise, NewWorkout, Workout, WorkoutDraft};
use super::workouts_traits::{WorkoutRepositoryTrait, WorkoutServiceTrait};
use crate::errors::Result;

/// Service for logging and browsing workouts
pub struct WorkoutService {
    repository: Arc<dyn WorkoutRepositoryTrait>,
}

impl WorkoutService {
    pub fn new(repository: Arc<dyn WorkoutRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl WorkoutServiceTrait for WorkoutService {
    async fn log_workout(&self, new_workout: NewWorkout) -> Result<Workout> {
        new_workout.validate()?;
        debug!(
            "Logging workout for user {} on {} with {} exercises",
            new_workout.user_id,
            new_workout.workout_date,
            new_workout.exercises.len()
        );
        let workout = self.repository.log_workout(new_workout).await?;
        info!("Logged workout {} for user {}", workout.id, workout.user_id);
        Ok(workout)
    }

    async fn log_draft(&self, draft: WorkoutDraft) -> Result<Workout> {
        let new_workout = draft.into_new_workout()?;
        self.log_workout(new_workout).await
    }

    async fn delete_workout(&self, workout_id: i32) -> Result<usize> {
        self.repository.delete(workout_id).await
    }

    fn list_workouts(&self, user_id: i32) -> Result<Vec<Workout>> {
        self.repository.list_for_user(user_id)
    }

    fn get_workout_details(&self, workout_id: i32) -> Result<Vec<Exercise>> {
        self.repository.get_exercises(workout_id)
    }
}
