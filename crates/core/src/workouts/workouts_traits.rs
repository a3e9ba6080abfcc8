//! Workout repository and service traits.

use async_trait::async_trait;

use super::workouts_model::{Exercise, NewWorkout, Workout, WorkoutDraft};
use crate::errors::Result;

/// Trait defining the contract for Workout repository operations.
#[async_trait]
pub trait WorkoutRepositoryTrait: Send + Sync {
    /// Inserts the workout header and all of its exercises in one transaction.
    ///
    /// Either every row is committed or none is; any failure is reported as
    /// `DatabaseError::TransactionFailed`.
    async fn log_workout(&self, new_workout: NewWorkout) -> Result<Workout>;

    /// Deletes a workout; its exercises go with it.
    ///
    /// Returns the number of deleted workout rows.
    async fn delete(&self, workout_id: i32) -> Result<usize>;

    /// Workouts of a user, most recent date first.
    fn list_for_user(&self, user_id: i32) -> Result<Vec<Workout>>;

    /// Exercises of a workout in insertion order.
    fn get_exercises(&self, workout_id: i32) -> Result<Vec<Exercise>>;
}

/// Trait defining the contract for Workout service operations.
#[async_trait]
pub trait WorkoutServiceTrait: Send + Sync {
    async fn log_workout(&self, new_workout: NewWorkout) -> Result<Workout>;
    async fn log_draft(&self, draft: WorkoutDraft) -> Result<Workout>;
    async fn delete_workout(&self, workout_id: i32) -> Result<usize>;
    fn list_workouts(&self, user_id: i32) -> Result<Vec<Workout>>;
    fn get_workout_details(&self, workout_id: i32) -> Result<Vec<Exercise>>;
}
