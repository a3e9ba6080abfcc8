//! Database models for workouts and exercises.

use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use fittrack_core::workouts::{Exercise, NewExercise, Workout};

#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::workouts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDB {
    pub id: i32,
    pub user_id: i32,
    pub workout_date: NaiveDate,
    pub duration_minutes: Option<i32>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::workouts)]
pub struct NewWorkoutDB {
    pub user_id: i32,
    pub workout_date: NaiveDate,
    pub duration_minutes: Option<i32>,
}

#[derive(
    Queryable,
    Identifiable,
    Associations,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(WorkoutDB, foreign_key = workout_id))]
#[diesel(table_name = crate::schema::exercises)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ExerciseDB {
    pub id: i32,
    pub workout_id: i32,
    pub exercise_name: String,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight_kg: Option<f64>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::exercises)]
pub struct NewExerciseDB {
    pub workout_id: i32,
    pub exercise_name: String,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight_kg: Option<f64>,
}

impl NewExerciseDB {
    pub fn for_workout(workout_id: i32, domain: NewExercise) -> Self {
        Self {
            workout_id,
            exercise_name: domain.name,
            sets: domain.sets,
            reps: domain.reps,
            weight_kg: domain.weight_kg,
        }
    }
}

impl From<WorkoutDB> for Workout {
    fn from(db: WorkoutDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            workout_date: db.workout_date,
            duration_minutes: db.duration_minutes,
        }
    }
}

impl From<ExerciseDB> for Exercise {
    fn from(db: ExerciseDB) -> Self {
        Self {
            id: db.id,
            workout_id: db.workout_id,
            name: db.exercise_name,
            sets: db.sets,
            reps: db.reps,
            weight_kg: db.weight_kg,
        }
    }
}
