use log::info;
use std::collections::HashSet;
use std::sync::Arc;

use super::friends_traits::{FriendRepositoryTrait, FriendServiceTrait};
use crate::errors::{Error, Result, ValidationError};
use crate::users::{UserRepositoryTrait, UserSummary};

pub struct FriendService {
    friend_repository: Arc<dyn FriendRepositoryTrait>,
    user_repository: Arc<dyn UserRepositoryTrait>,
}

impl FriendService {
    pub fn new(
        friend_repository: Arc<dyn FriendRepositoryTrait>,
        user_repository: Arc<dyn UserRepositoryTrait>,
    ) -> Self {
        Self {
            friend_repository,
            user_repository,
        }
    }
}

#[async_trait::async_trait]
impl FriendServiceTrait for FriendService {
    async fn add_friend(&self, user_id: i32, friend_id: i32) -> Result<()> {
        if user_id == friend_id {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "A user cannot befriend themselves".to_string(),
            )));
        }
        self.friend_repository.add(user_id, friend_id).await?;
        info!("User {} added friend {}", user_id, friend_id);
        Ok(())
    }

    async fn remove_friend(&self, user_id: i32, friend_id: i32) -> Result<usize> {
        self.friend_repository.remove(user_id, friend_id).await
    }

    fn list_friends(&self, user_id: i32) -> Result<Vec<UserSummary>> {
        self.friend_repository.list_friends(user_id)
    }

    fn friend_candidates(&self, user_id: i32) -> Result<Vec<UserSummary>> {
        let friend_ids: HashSet<i32> = self
            .friend_repository
            .list_friends(user_id)?
            .into_iter()
            .map(|f| f.id)
            .collect();

        Ok(self
            .user_repository
            .list_except(user_id)?
            .into_iter()
            .filter(|u| !friend_ids.contains(&u.id))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::{NewUser, User, UserProfileUpdate};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockUserRepository {
        users: Vec<UserSummary>,
    }

    #[async_trait]
    impl UserRepositoryTrait for MockUserRepository {
        async fn create(&self, _new_user: NewUser) -> Result<User> {
            unimplemented!()
        }

        async fn update_profile(&self, _user_id: i32, _update: UserProfileUpdate) -> Result<User> {
            unimplemented!()
        }

        fn get_by_id(&self, _user_id: i32) -> Result<Option<User>> {
            unimplemented!()
        }

        fn list_except(&self, exclude_user_id: i32) -> Result<Vec<UserSummary>> {
            Ok(self
                .users
                .iter()
                .filter(|u| u.id != exclude_user_id)
                .cloned()
                .collect())
        }
    }

    #[derive(Default)]
    struct MockFriendRepository {
        edges: Mutex<Vec<(i32, i32)>>,
        names: Vec<UserSummary>,
    }

    #[async_trait]
    impl FriendRepositoryTrait for MockFriendRepository {
        async fn add(&self, user_id: i32, friend_id: i32) -> Result<()> {
            self.edges.lock().unwrap().push((user_id, friend_id));
            Ok(())
        }

        async fn remove(&self, user_id: i32, friend_id: i32) -> Result<usize> {
            let mut edges = self.edges.lock().unwrap();
            let before = edges.len();
            edges.retain(|e| *e != (user_id, friend_id));
            Ok(before - edges.len())
        }

        fn list_friends(&self, user_id: i32) -> Result<Vec<UserSummary>> {
            let edges = self.edges.lock().unwrap();
            Ok(self
                .names
                .iter()
                .filter(|u| edges.contains(&(user_id, u.id)))
                .cloned()
                .collect())
        }
    }

    fn summaries() -> Vec<UserSummary> {
        ["Alice", "Bob", "Charlie", "Diana"]
            .iter()
            .enumerate()
            .map(|(i, name)| UserSummary {
                id: i as i32 + 1,
                name: name.to_string(),
            })
            .collect()
    }

    fn service() -> (FriendService, Arc<MockFriendRepository>) {
        let friends = Arc::new(MockFriendRepository {
            edges: Mutex::new(vec![(1, 2), (1, 4)]),
            names: summaries(),
        });
        let users = Arc::new(MockUserRepository { users: summaries() });
        (FriendService::new(friends.clone(), users), friends)
    }

    #[tokio::test]
    async fn test_add_friend_rejects_self() {
        let (service, repo) = service();
        let result = service.add_friend(3, 3).await;
        assert!(matches!(result, Err(Error::Validation(_))));
        assert_eq!(repo.edges.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_friend_candidates_excludes_self_and_existing_friends() {
        let (service, _) = service();
        let candidates = service.friend_candidates(1).unwrap();
        let names: Vec<&str> = candidates.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Charlie"]);
    }

    #[tokio::test]
    async fn test_remove_friend_reports_rows() {
        let (service, _) = service();
        assert_eq!(service.remove_friend(1, 2).await.unwrap(), 1);
        assert_eq!(service.remove_friend(1, 2).await.unwrap(), 0);
        assert_eq!(service.friend_candidates(1).unwrap().len(), 2);
    }
}
