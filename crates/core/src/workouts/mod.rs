//! Workouts module - workout and exercise models, the logging draft, services, and traits.

mod workouts_model;
mod workouts_service;
mod workouts_traits;

pub use workouts_model::{
    Exercise, ExerciseDraft, NewExercise, NewWorkout, Workout, WorkoutDraft,
};
pub use workouts_service::WorkoutService;
pub use workouts_traits::{WorkoutRepositoryTrait, WorkoutServiceTrait};
