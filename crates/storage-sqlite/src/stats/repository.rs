use diesel::dsl::{max, min, sum};
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::sql_types::{BigInt, Date, Double, Integer, Nullable, Text};
use diesel::SqliteConnection;
use std::sync::Arc;

use fittrack_core::stats::{LeaderboardEntry, StatsRepositoryTrait, WeightRange};
use fittrack_core::utils::time_utils::WeekWindow;
use fittrack_core::Result;

use crate::db::get_connection;
use crate::errors::StorageError;
use crate::schema::{exercises, workouts};

#[derive(QueryableByName, Debug)]
struct LeaderboardRow {
    #[diesel(sql_type = Integer)]
    user_id: i32,
    #[diesel(sql_type = Text)]
    name: String,
    #[diesel(sql_type = BigInt)]
    total_minutes: i64,
}

impl From<LeaderboardRow> for LeaderboardEntry {
    fn from(row: LeaderboardRow) -> Self {
        Self {
            user_id: row.user_id,
            name: row.name,
            total_minutes: row.total_minutes,
        }
    }
}

pub struct StatsRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
}

impl StatsRepository {
    pub fn new(pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>) -> Self {
        StatsRepository { pool }
    }
}

impl StatsRepositoryTrait for StatsRepository {
    fn leaderboard(&self, window: WeekWindow) -> Result<Vec<LeaderboardEntry>> {
        let mut conn = get_connection(&self.pool)?;

        // The date range sits in the join condition so users without a
        // workout in the window keep their row with a zero total.
        let rows: Vec<LeaderboardRow> = diesel::sql_query(
            r#"
            SELECT
                u.id AS user_id,
                u.name AS name,
                CAST(COALESCE(SUM(w.duration_minutes), 0) AS INTEGER) AS total_minutes
            FROM users u
            LEFT JOIN workouts w
                ON w.user_id = u.id
               AND w.workout_date >= ?1
               AND w.workout_date <= ?2
            GROUP BY u.id, u.name
            ORDER BY total_minutes DESC, u.id ASC
            "#,
        )
        .bind::<Date, _>(window.start)
        .bind::<Date, _>(window.end)
        .load(&mut conn)
        .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(LeaderboardEntry::from).collect())
    }

    fn count_workouts(&self, user_id: i32) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        Ok(workouts::table
            .filter(workouts::user_id.eq(user_id))
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(StorageError::from)?)
    }

    fn total_duration(&self, user_id: i32) -> Result<Option<i64>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(workouts::table
            .filter(workouts::user_id.eq(user_id))
            .select(sum(workouts::duration_minutes))
            .get_result::<Option<i64>>(&mut conn)
            .map_err(StorageError::from)?)
    }

    fn average_duration(&self, user_id: i32) -> Result<Option<f64>> {
        let mut conn = get_connection(&self.pool)?;

        #[derive(QueryableByName, Debug)]
        struct AverageDuration {
            #[diesel(sql_type = Nullable<Double>)]
            avg_duration: Option<f64>,
        }

        let result: AverageDuration = diesel::sql_query(
            "SELECT AVG(duration_minutes) AS avg_duration FROM workouts WHERE user_id = ?1",
        )
        .bind::<Integer, _>(user_id)
        .get_result(&mut conn)
        .map_err(StorageError::from)?;

        Ok(result.avg_duration)
    }

    fn exercise_weight_range(&self, user_id: i32, exercise_name: &str) -> Result<WeightRange> {
        let mut conn = get_connection(&self.pool)?;

        let user_workouts = workouts::table
            .filter(workouts::user_id.eq(user_id))
            .select(workouts::id);

        let (min_weight_kg, max_weight_kg) = exercises::table
            .filter(exercises::workout_id.eq_any(user_workouts))
            .filter(exercises::exercise_name.eq(exercise_name))
            .select((min(exercises::weight_kg), max(exercises::weight_kg)))
            .get_result::<(Option<f64>, Option<f64>)>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(WeightRange {
            min_weight_kg,
            max_weight_kg,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{insert_user, setup_db};
    use crate::workouts::WorkoutRepository;
    use chrono::NaiveDate;
    use fittrack_core::workouts::{NewExercise, NewWorkout, WorkoutRepositoryTrait};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    // Monday 2024-03-11 .. Thursday 2024-03-14
    fn window() -> WeekWindow {
        WeekWindow::current(day(14))
    }

    async fn log(
        repo: &WorkoutRepository,
        user_id: i32,
        d: u32,
        minutes: i32,
        lifts: &[(&str, f64)],
    ) {
        repo.log_workout(NewWorkout {
            user_id,
            workout_date: day(d),
            duration_minutes: Some(minutes),
            exercises: lifts
                .iter()
                .map(|(name, weight)| NewExercise {
                    name: name.to_string(),
                    sets: Some(3),
                    reps: Some(10),
                    weight_kg: Some(*weight),
                })
                .collect(),
        })
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_leaderboard_sums_current_week_and_keeps_idle_users() {
        let db = setup_db();
        let workouts_repo = WorkoutRepository::new(Arc::clone(&db.pool), db.writer.clone());
        let stats = StatsRepository::new(Arc::clone(&db.pool));
        let a = insert_user(&db.pool, "A", "a@email.com");
        let b = insert_user(&db.pool, "B", "b@email.com");
        let c = insert_user(&db.pool, "C", "c@email.com");

        log(&workouts_repo, a, 12, 60, &[("Squat", 80.0)]).await;
        log(&workouts_repo, a, 13, 55, &[("Yoga", 0.0)]).await;
        log(&workouts_repo, b, 11, 75, &[("Running", 0.0)]).await;
        // Previous week and future dates are outside the window.
        log(&workouts_repo, c, 10, 90, &[("Running", 0.0)]).await;
        log(&workouts_repo, b, 15, 30, &[("Running", 0.0)]).await;

        let board = stats.leaderboard(window()).unwrap();

        assert_eq!(
            board,
            vec![
                LeaderboardEntry {
                    user_id: a,
                    name: "A".to_string(),
                    total_minutes: 115
                },
                LeaderboardEntry {
                    user_id: b,
                    name: "B".to_string(),
                    total_minutes: 75
                },
                LeaderboardEntry {
                    user_id: c,
                    name: "C".to_string(),
                    total_minutes: 0
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_leaderboard_ties_ordered_by_user_id() {
        let db = setup_db();
        let workouts_repo = WorkoutRepository::new(Arc::clone(&db.pool), db.writer.clone());
        let stats = StatsRepository::new(Arc::clone(&db.pool));
        let first = insert_user(&db.pool, "Zed", "z@email.com");
        let second = insert_user(&db.pool, "Amy", "amy@email.com");

        log(&workouts_repo, second, 12, 40, &[("Yoga", 0.0)]).await;
        log(&workouts_repo, first, 13, 40, &[("Yoga", 0.0)]).await;

        let ids: Vec<i32> = stats
            .leaderboard(window())
            .unwrap()
            .into_iter()
            .map(|e| e.user_id)
            .collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[tokio::test]
    async fn test_aggregates_for_user_without_workouts() {
        let db = setup_db();
        let stats = StatsRepository::new(Arc::clone(&db.pool));
        let idle = insert_user(&db.pool, "Idle", "idle@email.com");

        assert_eq!(stats.count_workouts(idle).unwrap(), 0);
        assert_eq!(stats.total_duration(idle).unwrap(), None);
        assert_eq!(stats.average_duration(idle).unwrap(), None);
        assert_eq!(
            stats.exercise_weight_range(idle, "Bench Press").unwrap(),
            WeightRange::default()
        );
    }

    #[tokio::test]
    async fn test_aggregates_scoped_to_user_and_exact_exercise_name() {
        let db = setup_db();
        let workouts_repo = WorkoutRepository::new(Arc::clone(&db.pool), db.writer.clone());
        let stats = StatsRepository::new(Arc::clone(&db.pool));
        let alice = insert_user(&db.pool, "Alice", "alice@email.com");
        let bob = insert_user(&db.pool, "Bob", "bob@email.com");

        log(&workouts_repo, alice, 11, 60, &[("Bench Press", 50.0)]).await;
        log(
            &workouts_repo,
            alice,
            12,
            45,
            &[("Bench Press", 52.5), ("bench press", 99.0)],
        )
        .await;
        log(&workouts_repo, bob, 12, 30, &[("Bench Press", 120.0)]).await;

        assert_eq!(stats.count_workouts(alice).unwrap(), 2);
        assert_eq!(stats.total_duration(alice).unwrap(), Some(105));
        assert_eq!(stats.average_duration(alice).unwrap(), Some(52.5));
        assert_eq!(
            stats.exercise_weight_range(alice, "Bench Press").unwrap(),
            WeightRange {
                min_weight_kg: Some(50.0),
                max_weight_kg: Some(52.5),
            }
        );
    }
}
