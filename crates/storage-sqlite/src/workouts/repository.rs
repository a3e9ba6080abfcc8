use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use log::warn;
use std::sync::Arc;

use fittrack_core::errors::{DatabaseError, Error};
use fittrack_core::workouts::{Exercise, NewWorkout, Workout, WorkoutRepositoryTrait};
use fittrack_core::Result;

use super::model::{ExerciseDB, NewExerciseDB, NewWorkoutDB, WorkoutDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{exercises, users, workouts};

pub struct WorkoutRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl WorkoutRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        WorkoutRepository { pool, writer }
    }

    pub(crate) fn insert_workout_with_exercises(
        conn: &mut SqliteConnection,
        new_workout: NewWorkout,
    ) -> Result<WorkoutDB> {
        let header = NewWorkoutDB {
            user_id: new_workout.user_id,
            workout_date: new_workout.workout_date,
            duration_minutes: new_workout.duration_minutes,
        };

        let workout_db = diesel::insert_into(workouts::table)
            .values(&header)
            .returning(WorkoutDB::as_returning())
            .get_result(conn)
            .map_err(StorageError::from)?;

        for exercise in new_workout.exercises {
            let row = NewExerciseDB::for_workout(workout_db.id, exercise);
            diesel::insert_into(exercises::table)
                .values(&row)
                .execute(conn)
                .map_err(StorageError::from)?;
        }

        Ok(workout_db)
    }
}

#[async_trait]
impl WorkoutRepositoryTrait for WorkoutRepository {
    async fn log_workout(&self, new_workout: NewWorkout) -> Result<Workout> {
        let user_id = new_workout.user_id;
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Workout> {
                let owner = users::table
                    .find(user_id)
                    .select(users::id)
                    .first::<i32>(conn)
                    .optional()
                    .map_err(StorageError::from)?;
                if owner.is_none() {
                    return Err(Error::Database(DatabaseError::NotFound(format!(
                        "User {} not found",
                        user_id
                    ))));
                }
                let workout_db = Self::insert_workout_with_exercises(conn, new_workout)?;
                Ok(Workout::from(workout_db))
            })
            .await
            .map_err(|e| {
                if e.is_unavailable() || e.is_not_found() {
                    return e;
                }
                warn!("Workout for user {} rolled back: {}", user_id, e);
                let cause = match e {
                    Error::Database(inner) => inner.to_string(),
                    other => other.to_string(),
                };
                Error::Database(DatabaseError::TransactionFailed(cause))
            })
    }

    async fn delete(&self, workout_id: i32) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(workouts::table.find(workout_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }

    fn list_for_user(&self, user_id: i32) -> Result<Vec<Workout>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = workouts::table
            .filter(workouts::user_id.eq(user_id))
            .order((workouts::workout_date.desc(), workouts::id.desc()))
            .select(WorkoutDB::as_select())
            .load(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Workout::from).collect())
    }

    fn get_exercises(&self, workout_id: i32) -> Result<Vec<Exercise>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = exercises::table
            .filter(exercises::workout_id.eq(workout_id))
            .order(exercises::id.asc())
            .select(ExerciseDB::as_select())
            .load(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Exercise::from).collect())
    }
}
