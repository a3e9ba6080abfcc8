//! Friends module - the directed friendship graph between users.

mod friends_service;
mod friends_traits;

pub use friends_service::FriendService;
pub use friends_traits::{FriendRepositoryTrait, FriendServiceTrait};
