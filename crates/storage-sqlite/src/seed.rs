//! Demo data for a fresh database.

use chrono::{Duration, NaiveDate};
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::info;

use fittrack_core::utils::time_utils::week_start;
use fittrack_core::workouts::{NewExercise, NewWorkout};
use fittrack_core::Result;

use crate::db::WriteHandle;
use crate::errors::StorageError;
use crate::friends::FriendDB;
use crate::schema::{friends, users};
use crate::users::NewUserDB;
use crate::workouts::WorkoutRepository;

const DEMO_USERS: [(&str, &str, f64); 4] = [
    ("Alice", "alice@email.com", 60.5),
    ("Bob", "bob@email.com", 85.0),
    ("Charlie", "charlie@email.com", 72.3),
    ("Diana", "diana@email.com", 55.0),
];

type DemoLift = (&'static str, i32, i32, f64);

/// Inserts the demo users, friendships and this week's workouts when the
/// users table is empty. Everything goes in as one transaction.
///
/// Returns `false` without writing anything if any user already exists.
pub async fn seed_demo_data(writer: &WriteHandle, today: NaiveDate) -> Result<bool> {
    let monday = week_start(today);

    let seeded = writer
        .exec(move |conn: &mut SqliteConnection| -> Result<bool> {
            let existing: i64 = users::table
                .count()
                .get_result(conn)
                .map_err(StorageError::from)?;
            if existing > 0 {
                return Ok(false);
            }

            let mut ids = Vec::with_capacity(DEMO_USERS.len());
            for (name, email, weight) in DEMO_USERS {
                let id: i32 = diesel::insert_into(users::table)
                    .values(&NewUserDB {
                        name: name.to_string(),
                        email: email.to_string(),
                        weight_kg: Some(weight),
                    })
                    .returning(users::id)
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                ids.push(id);
            }
            let (alice, bob, diana) = (ids[0], ids[1], ids[3]);

            diesel::insert_into(friends::table)
                .values(&vec![
                    FriendDB {
                        user_id: alice,
                        friend_id: bob,
                    },
                    FriendDB {
                        user_id: alice,
                        friend_id: diana,
                    },
                ])
                .execute(conn)
                .map_err(StorageError::from)?;

            let plan: [(i32, i64, i32, &[DemoLift]); 4] = [
                (
                    alice,
                    1,
                    60,
                    &[("Bench Press", 3, 10, 50.0), ("Squat", 4, 8, 80.0)],
                ),
                (bob, 0, 75, &[("Running", 1, 1, 0.0), ("Pull-ups", 5, 5, 0.0)]),
                (diana, 2, 45, &[("Yoga", 1, 1, 0.0)]),
                (
                    alice,
                    3,
                    55,
                    &[("Bench Press", 3, 12, 52.5), ("Deadlift", 3, 6, 100.0)],
                ),
            ];

            for (user_id, offset, minutes, lifts) in plan {
                let new_workout = NewWorkout {
                    user_id,
                    workout_date: monday + Duration::days(offset),
                    duration_minutes: Some(minutes),
                    exercises: lifts
                        .iter()
                        .map(|(name, sets, reps, weight)| NewExercise {
                            name: name.to_string(),
                            sets: Some(*sets),
                            reps: Some(*reps),
                            weight_kg: Some(*weight),
                        })
                        .collect(),
                };
                WorkoutRepository::insert_workout_with_exercises(conn, new_workout)?;
            }

            Ok(true)
        })
        .await?;

    if seeded {
        info!("Seeded demo data for the week of {}", monday);
    }
    Ok(seeded)
}
