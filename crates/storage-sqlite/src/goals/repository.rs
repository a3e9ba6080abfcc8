use chrono::NaiveDate;
use fittrack_core::goals::{Goal, GoalRepositoryTrait, NewGoal};
use fittrack_core::Result;

use super::model::{GoalDB, NewGoalDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::goals;
use crate::schema::goals::dsl::*;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct GoalRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl GoalRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        GoalRepository { pool, writer }
    }

    fn load_goals_impl(&self, owner_id: i32, only_active: bool) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = goals
            .filter(user_id.eq(owner_id))
            .order((start_date.desc(), id.desc()))
            .select(GoalDB::as_select())
            .into_boxed::<diesel::sqlite::Sqlite>();
        if only_active {
            query = query.filter(is_active.eq(true));
        }
        let goals_db = query.load::<GoalDB>(&mut conn).map_err(StorageError::from)?;
        Ok(goals_db.into_iter().map(Goal::from).collect())
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    async fn replace_active_goal(&self, new_goal: NewGoal, starts_on: NaiveDate) -> Result<Goal> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Goal> {
                let new_goal_db = NewGoalDB::active_from(new_goal, starts_on);

                diesel::update(
                    goals
                        .filter(user_id.eq(new_goal_db.user_id))
                        .filter(is_active.eq(true)),
                )
                .set(is_active.eq(false))
                .execute(conn)
                .map_err(StorageError::from)?;

                let result_db = diesel::insert_into(goals::table)
                    .values(&new_goal_db)
                    .returning(GoalDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Goal::from(result_db))
            })
            .await
    }

    fn load_active_goals(&self, owner_id: i32) -> Result<Vec<Goal>> {
        self.load_goals_impl(owner_id, true)
    }

    fn load_goals(&self, owner_id: i32) -> Result<Vec<Goal>> {
        self.load_goals_impl(owner_id, false)
    }
}
