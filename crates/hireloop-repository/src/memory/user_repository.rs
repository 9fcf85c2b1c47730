//! In-memory user collection.

use crate::traits::UserRepository;
use async_trait::async_trait;
use hireloop_core::{HireloopError, HireloopResult, User};
use parking_lot::RwLock;

/// In-memory `users` collection.
///
/// Enforces uniqueness of `clerk_id` the way the MySQL unique index does.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection holding `users`.
    #[must_use]
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> HireloopResult<User> {
        let mut users = self.users.write();
        if users.iter().any(|u| u.clerk_id == user.clerk_id) {
            return Err(HireloopError::Conflict(format!(
                "user with clerk id {} already exists",
                user.clerk_id
            )));
        }
        users.push(user.clone());
        Ok(user.clone())
    }

    async fn find_all(&self) -> HireloopResult<Vec<User>> {
        Ok(self.users.read().clone())
    }

    async fn find_by_clerk_id(&self, clerk_id: &str) -> HireloopResult<Option<User>> {
        Ok(self.users.read().iter().find(|u| u.clerk_id == clerk_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hireloop_core::{Email, NewUser};

    fn user(clerk_id: &str) -> User {
        User::create(NewUser {
            name: "Grace Hopper".to_string(),
            email: Email::new_unchecked(format!("{}@example.com", clerk_id)),
            clerk_id: clerk_id.to_string(),
            image: None,
        })
    }

    #[tokio::test]
    async fn test_insert_and_find_by_clerk_id() {
        let repo = InMemoryUserRepository::new();
        repo.insert(&user("user_grace")).await.unwrap();

        let found = repo.find_by_clerk_id("user_grace").await.unwrap().unwrap();
        assert_eq!(found.clerk_id, "user_grace");
        assert!(repo.find_by_clerk_id("user_other").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_clerk_id_conflicts() {
        let repo = InMemoryUserRepository::with_users(vec![user("user_grace")]);
        let err = repo.insert(&user("user_grace")).await.unwrap_err();
        assert!(matches!(err, HireloopError::Conflict(_)));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }
}
