use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;

use fittrack_core::friends::FriendRepositoryTrait;
use fittrack_core::users::UserSummary;
use fittrack_core::Result;

use super::model::FriendDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{friends, users};
use crate::users::UserSummaryDB;

pub struct FriendRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl FriendRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        FriendRepository { pool, writer }
    }
}

#[async_trait]
impl FriendRepositoryTrait for FriendRepository {
    async fn add(&self, user_id: i32, friend_id: i32) -> Result<()> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                diesel::insert_into(friends::table)
                    .values(FriendDB { user_id, friend_id })
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn remove(&self, user_id: i32, friend_id: i32) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(friends::table.find((user_id, friend_id)))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }

    fn list_friends(&self, user_id: i32) -> Result<Vec<UserSummary>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = users::table
            .inner_join(friends::table.on(friends::friend_id.eq(users::id)))
            .filter(friends::user_id.eq(user_id))
            .order(users::id.asc())
            .select(UserSummaryDB::as_select())
            .load(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(UserSummary::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{insert_user, raw_count, setup_db};
    use fittrack_core::errors::{DatabaseError, Error};

    #[tokio::test]
    async fn test_friendship_is_directed() {
        let db = setup_db();
        let repo = FriendRepository::new(Arc::clone(&db.pool), db.writer.clone());
        let alice = insert_user(&db.pool, "Alice", "alice@email.com");
        let bob = insert_user(&db.pool, "Bob", "bob@email.com");
        let diana = insert_user(&db.pool, "Diana", "diana@email.com");

        repo.add(alice, diana).await.unwrap();
        repo.add(alice, bob).await.unwrap();

        let names: Vec<String> = repo
            .list_friends(alice)
            .unwrap()
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, vec!["Bob", "Diana"]);
        assert!(repo.list_friends(bob).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_friendship_is_constraint_violation() {
        let db = setup_db();
        let repo = FriendRepository::new(Arc::clone(&db.pool), db.writer.clone());
        let alice = insert_user(&db.pool, "Alice", "alice@email.com");
        let bob = insert_user(&db.pool, "Bob", "bob@email.com");

        repo.add(alice, bob).await.unwrap();
        let err = repo.add(alice, bob).await.unwrap_err();

        assert!(err.is_constraint_violation());
        assert_eq!(raw_count(&db.db_path, "SELECT COUNT(*) FROM friends"), 1);
    }

    #[tokio::test]
    async fn test_unknown_friend_is_foreign_key_violation() {
        let db = setup_db();
        let repo = FriendRepository::new(Arc::clone(&db.pool), db.writer.clone());
        let alice = insert_user(&db.pool, "Alice", "alice@email.com");

        let err = repo.add(alice, 404).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Database(DatabaseError::ForeignKeyViolation(_))
        ));
    }

    #[tokio::test]
    async fn test_remove_friend() {
        let db = setup_db();
        let repo = FriendRepository::new(Arc::clone(&db.pool), db.writer.clone());
        let alice = insert_user(&db.pool, "Alice", "alice@email.com");
        let bob = insert_user(&db.pool, "Bob", "bob@email.com");

        repo.add(alice, bob).await.unwrap();
        assert_eq!(repo.remove(alice, bob).await.unwrap(), 1);
        assert_eq!(repo.remove(alice, bob).await.unwrap(), 0);
        assert!(repo.list_friends(alice).unwrap().is_empty());
    }
}
