use diesel::prelude::*;

/// A directed `user_id -> friend_id` edge.
#[derive(Insertable, Queryable, Selectable, PartialEq, Eq, Debug, Clone, Copy)]
#[diesel(table_name = crate::schema::friends)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct FriendDB {
    pub user_id: i32,
    pub friend_id: i32,
}
