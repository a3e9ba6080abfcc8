//! Shared fixtures for repository tests.

use std::sync::Arc;

use diesel::prelude::*;
use tempfile::{tempdir, TempDir};

use crate::db::{create_pool, get_connection, run_migrations, write_actor::spawn_writer};
use crate::db::{DbPool, WriteHandle};
use crate::schema::users;

/// A migrated database in a temp directory. The directory lives as long as this value.
pub struct TestDb {
    pub pool: Arc<DbPool>,
    pub writer: WriteHandle,
    pub db_path: String,
    _temp_dir: TempDir,
}

/// Must be called from inside a Tokio runtime (the writer actor is spawned on it).
pub fn setup_db() -> TestDb {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_string_lossy()
        .to_string();

    let pool = create_pool(&db_path).expect("Failed to create pool");
    run_migrations(&pool).expect("Failed to run migrations");
    let writer = spawn_writer((*pool).clone());

    TestDb {
        pool,
        writer,
        db_path,
        _temp_dir: temp_dir,
    }
}

/// Inserts a user directly and returns its ID.
pub fn insert_user(pool: &Arc<DbPool>, name: &str, email: &str) -> i32 {
    let mut conn = get_connection(pool).expect("Failed to get connection");
    diesel::insert_into(users::table)
        .values((users::name.eq(name), users::email.eq(email)))
        .returning(users::id)
        .get_result(&mut conn)
        .expect("Failed to insert test user")
}

/// Row count read through a separate raw SQLite handle, bypassing the pool.
pub fn raw_count(db_path: &str, sql: &str) -> i64 {
    let conn = rusqlite::Connection::open(db_path).expect("Failed to open raw connection");
    conn.query_row(sql, [], |row| row.get(0))
        .expect("Failed to run raw count")
}
