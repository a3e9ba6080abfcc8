//! SQLite storage implementation for workouts and their exercises.

mod model;
mod repository;

pub use model::{ExerciseDB, NewExerciseDB, NewWorkoutDB, WorkoutDB};
pub use repository::WorkoutRepository;
