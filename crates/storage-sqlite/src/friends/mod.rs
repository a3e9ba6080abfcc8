//! SQLite storage implementation for friendships.

mod model;
mod repository;

pub use model::FriendDB;
pub use repository::FriendRepository;
