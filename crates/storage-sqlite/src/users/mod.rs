//! SQLite storage implementation for users.

mod model;
mod repository;

pub use model::{NewUserDB, UserDB, UserProfileChangeset, UserSummaryDB};
pub use repository::UserRepository;
