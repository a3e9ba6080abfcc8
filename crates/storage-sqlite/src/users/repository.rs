use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;

use fittrack_core::errors::{DatabaseError, Error};
use fittrack_core::users::{NewUser, User, UserProfileUpdate, UserRepositoryTrait, UserSummary};
use fittrack_core::Result;

use super::model::{NewUserDB, UserDB, UserProfileChangeset, UserSummaryDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::users;
use crate::schema::users::dsl::*;

pub struct UserRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        UserRepository { pool, writer }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let new_user_db: NewUserDB = new_user.into();
                let result_db = diesel::insert_into(users::table)
                    .values(&new_user_db)
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(User::from(result_db))
            })
            .await
    }

    async fn update_profile(&self, user_id: i32, update: UserProfileUpdate) -> Result<User> {
        let changeset: UserProfileChangeset = update.into();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let result_db = diesel::update(users.find(user_id))
                    .set(&changeset)
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .optional()
                    .map_err(StorageError::from)?;

                result_db.map(User::from).ok_or_else(|| {
                    Error::Database(DatabaseError::NotFound(format!(
                        "User {} not found",
                        user_id
                    )))
                })
            })
            .await
    }

    fn get_by_id(&self, user_id: i32) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        let user_db = users
            .find(user_id)
            .select(UserDB::as_select())
            .first(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(user_db.map(User::from))
    }

    fn list_except(&self, exclude_user_id: i32) -> Result<Vec<UserSummary>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = users
            .filter(id.ne(exclude_user_id))
            .order(id.asc())
            .select(UserSummaryDB::as_select())
            .load(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(UserSummary::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_db;

    fn new_user(user_name: &str, user_email: &str) -> NewUser {
        NewUser {
            name: user_name.to_string(),
            email: user_email.to_string(),
            weight_kg: Some(70.0),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let db = setup_db();
        let repo = UserRepository::new(Arc::clone(&db.pool), db.writer.clone());

        let created = repo
            .create(new_user("Alice Smith", "alice@email.com"))
            .await
            .unwrap();
        let fetched = repo.get_by_id(created.id).unwrap();

        assert_eq!(fetched, Some(created));
        assert_eq!(repo.get_by_id(9999).unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_unique_violation() {
        let db = setup_db();
        let repo = UserRepository::new(Arc::clone(&db.pool), db.writer.clone());

        repo.create(new_user("Alice", "alice@email.com"))
            .await
            .unwrap();
        let err = repo
            .create(new_user("Alicia", "alice@email.com"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Database(DatabaseError::UniqueViolation(_))
        ));
    }

    #[tokio::test]
    async fn test_update_profile_replaces_fields() {
        let db = setup_db();
        let repo = UserRepository::new(Arc::clone(&db.pool), db.writer.clone());
        let alice = repo
            .create(new_user("Alice", "alice@email.com"))
            .await
            .unwrap();

        let updated = repo
            .update_profile(
                alice.id,
                UserProfileUpdate {
                    name: "Alice Cooper".to_string(),
                    email: "ac@email.com".to_string(),
                    weight_kg: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Alice Cooper");
        assert_eq!(updated.email, "ac@email.com");
        assert_eq!(updated.weight_kg, None);
        assert_eq!(repo.get_by_id(alice.id).unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_missing_user_is_not_found() {
        let db = setup_db();
        let repo = UserRepository::new(Arc::clone(&db.pool), db.writer.clone());

        let err = repo
            .update_profile(
                42,
                UserProfileUpdate {
                    name: "Nobody".to_string(),
                    email: "nobody@email.com".to_string(),
                    weight_kg: None,
                },
            )
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_list_except_excludes_current_user() {
        let db = setup_db();
        let repo = UserRepository::new(Arc::clone(&db.pool), db.writer.clone());
        let alice = repo.create(new_user("Alice", "a@email.com")).await.unwrap();
        let bob = repo.create(new_user("Bob", "b@email.com")).await.unwrap();
        let charlie = repo
            .create(new_user("Charlie", "c@email.com"))
            .await
            .unwrap();

        let others = repo.list_except(alice.id).unwrap();

        assert_eq!(
            others,
            vec![
                UserSummary {
                    id: bob.id,
                    name: "Bob".to_string()
                },
                UserSummary {
                    id: charlie.id,
                    name: "Charlie".to_string()
                },
            ]
        );
    }
}
