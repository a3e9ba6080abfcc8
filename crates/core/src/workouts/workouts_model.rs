//! Workout domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// A logged workout session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: i32,
    pub user_id: i32,
    pub workout_date: NaiveDate,
    pub duration_minutes: Option<i32>,
}

/// One exercise row belonging to a workout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: i32,
    pub workout_id: i32,
    pub name: String,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight_kg: Option<f64>,
}

/// Exercise payload of the logging transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewExercise {
    pub name: String,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight_kg: Option<f64>,
}

/// Input of the workout-logging transaction: one header plus its exercises.
///
/// Exercise names are stored as given; blank names are the caller's concern
/// (see [`WorkoutDraft::into_new_workout`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkout {
    pub user_id: i32,
    pub workout_date: NaiveDate,
    pub duration_minutes: Option<i32>,
    pub exercises: Vec<NewExercise>,
}

impl NewExercise {
    /// Sets and reps start at one; weight is a finite, non-negative number.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(Error::Validation(ValidationError::InvalidInput(msg)));
        if matches!(self.sets, Some(sets) if sets < 1) {
            return invalid(format!("Sets for '{}' must be at least 1", self.name));
        }
        if matches!(self.reps, Some(reps) if reps < 1) {
            return invalid(format!("Reps for '{}' must be at least 1", self.name));
        }
        if matches!(self.weight_kg, Some(w) if !w.is_finite() || w < 0.0) {
            return invalid(format!("Weight for '{}' must be a non-negative number", self.name));
        }
        Ok(())
    }
}

impl NewWorkout {
    pub fn validate(&self) -> Result<()> {
        if let Some(duration) = self.duration_minutes {
            if duration < 1 {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Duration must be at least one minute".to_string(),
                )));
            }
        }
        self.exercises.iter().try_for_each(NewExercise::validate)
    }
}

/// A single row of a workout being composed on the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseDraft {
    #[serde(default)]
    pub name: String,
    pub sets: i32,
    pub reps: i32,
    pub weight_kg: f64,
}

impl Default for ExerciseDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            sets: 3,
            reps: 10,
            weight_kg: 20.0,
        }
    }
}

impl ExerciseDraft {
    pub fn new(name: impl Into<String>, sets: i32, reps: i32, weight_kg: f64) -> Self {
        Self {
            name: name.into(),
            sets,
            reps,
            weight_kg,
        }
    }

    fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

/// Client-local workout being built up row by row before it is logged.
///
/// The draft is owned by whoever composes it and handed to the logging call
/// explicitly; nothing about it is shared between callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDraft {
    pub user_id: i32,
    pub workout_date: NaiveDate,
    pub duration_minutes: i32,
    #[serde(default)]
    pub exercises: Vec<ExerciseDraft>,
}

impl WorkoutDraft {
    /// Starts a draft with a single blank exercise row.
    pub fn new(user_id: i32, workout_date: NaiveDate, duration_minutes: i32) -> Self {
        Self {
            user_id,
            workout_date,
            duration_minutes,
            exercises: vec![ExerciseDraft::default()],
        }
    }

    /// Appends a blank row with the default sets/reps/weight.
    pub fn add_blank_exercise(&mut self) -> &mut ExerciseDraft {
        self.exercises.push(ExerciseDraft::default());
        let last = self.exercises.len() - 1;
        &mut self.exercises[last]
    }

    pub fn add_exercise(&mut self, exercise: ExerciseDraft) -> &mut Self {
        self.exercises.push(exercise);
        self
    }

    /// Rows that will actually be logged.
    pub fn filled_exercises(&self) -> impl Iterator<Item = &ExerciseDraft> {
        self.exercises.iter().filter(|e| !e.is_blank())
    }

    /// Drops blank-named rows and produces the transaction input.
    ///
    /// A draft with no named exercise left, or with a named row outside the
    /// sets/reps/weight limits, is rejected.
    pub fn into_new_workout(self) -> Result<NewWorkout> {
        let exercises: Vec<NewExercise> = self
            .exercises
            .into_iter()
            .filter(|e| !e.is_blank())
            .map(|e| NewExercise {
                name: e.name.trim().to_string(),
                sets: Some(e.sets),
                reps: Some(e.reps),
                weight_kg: Some(e.weight_kg),
            })
            .collect();

        if exercises.is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Please add at least one exercise".to_string(),
            )));
        }

        let new_workout = NewWorkout {
            user_id: self.user_id,
            workout_date: self.workout_date,
            duration_minutes: Some(self.duration_minutes),
            exercises,
        };
        new_workout.validate()?;
        Ok(new_workout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 12).unwrap()
    }

    #[test]
    fn test_new_draft_has_one_blank_row() {
        let draft = WorkoutDraft::new(1, date(), 45);
        assert_eq!(draft.exercises, vec![ExerciseDraft::default()]);
        assert_eq!(draft.filled_exercises().count(), 0);
    }

    #[test]
    fn test_into_new_workout_drops_blank_names() {
        let mut draft = WorkoutDraft::new(1, date(), 60);
        draft.exercises[0].name = "Bench Press".to_string();
        draft.add_blank_exercise();
        draft.add_exercise(ExerciseDraft::new("  Squat ", 4, 8, 80.0));
        draft.add_exercise(ExerciseDraft::new("   ", 1, 1, 0.0));

        let workout = draft.into_new_workout().unwrap();
        let names: Vec<&str> = workout.exercises.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Bench Press", "Squat"]);
        assert_eq!(workout.duration_minutes, Some(60));
        assert_eq!(workout.exercises[1].weight_kg, Some(80.0));
    }

    #[test]
    fn test_into_new_workout_rejects_empty_draft() {
        let mut draft = WorkoutDraft::new(1, date(), 30);
        draft.add_blank_exercise();
        let err = draft.into_new_workout().unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_into_new_workout_rejects_out_of_range_rows() {
        for row in [
            ExerciseDraft::new("Squat", 0, 10, 60.0),
            ExerciseDraft::new("Squat", 3, 0, 60.0),
            ExerciseDraft::new("Squat", 3, 10, -1.0),
            ExerciseDraft::new("Squat", 3, 10, f64::NAN),
        ] {
            let mut draft = WorkoutDraft::new(1, date(), 30);
            draft.exercises[0] = ExerciseDraft::new("Bench Press", 3, 10, 50.0);
            draft.add_exercise(row.clone());
            let err = draft.into_new_workout().unwrap_err();
            assert!(matches!(err, Error::Validation(_)), "{:?} accepted", row);
        }
    }

    #[test]
    fn test_blank_rows_are_not_range_checked() {
        let mut draft = WorkoutDraft::new(1, date(), 30);
        draft.exercises[0] = ExerciseDraft::new("Running", 1, 1, 0.0);
        draft.add_exercise(ExerciseDraft::new("  ", 0, 0, -5.0));
        let workout = draft.into_new_workout().unwrap();
        assert_eq!(workout.exercises.len(), 1);
        assert_eq!(workout.exercises[0].weight_kg, Some(0.0));
    }

    #[test]
    fn test_add_blank_exercise_returns_editable_row() {
        let mut draft = WorkoutDraft::new(2, date(), 20);
        draft.add_blank_exercise().name = "Running".to_string();
        assert_eq!(draft.exercises.len(), 2);
        assert_eq!(draft.exercises[1].name, "Running");
        assert_eq!(draft.exercises[1].sets, 3);
    }

    #[test]
    fn test_new_workout_validate_duration() {
        let mut workout = NewWorkout {
            user_id: 1,
            workout_date: date(),
            duration_minutes: Some(0),
            exercises: vec![],
        };
        assert!(workout.validate().is_err());
        workout.duration_minutes = None;
        assert!(workout.validate().is_ok());
        workout.duration_minutes = Some(1);
        assert!(workout.validate().is_ok());
        workout.exercises.push(NewExercise {
            name: "Lunge".to_string(),
            sets: Some(3),
            reps: None,
            weight_kg: Some(-2.5),
        });
        assert!(matches!(workout.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_draft_deserializes_without_exercises() {
        let draft: WorkoutDraft = serde_json::from_str(
            r#"{"userId":1,"workoutDate":"2024-03-12","durationMinutes":40}"#,
        )
        .unwrap();
        assert!(draft.exercises.is_empty());
        assert_eq!(draft.workout_date, date());
    }
}
