//! User service implementation.

use crate::cache::{cache_keys, CacheExt, CacheInterface, CachePolicy};
use crate::user_service::UserService;
use async_trait::async_trait;
use hireloop_core::{Caller, HireloopError, HireloopResult, NewUser, User, UserId, ValidateExt};
use hireloop_repository::UserRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

/// User service backed by the `users` collection and the response cache.
#[derive(Component)]
#[shaku(interface = UserService)]
pub struct UserServiceComponent {
    #[shaku(inject)]
    users: Arc<dyn UserRepository>,
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
    policy: CachePolicy,
}

impl UserServiceComponent {
    /// Creates the service outside of a shaku module.
    #[must_use]
    pub fn new(
        users: Arc<dyn UserRepository>,
        cache: Arc<dyn CacheInterface>,
        policy: CachePolicy,
    ) -> Self {
        Self {
            users,
            cache,
            policy,
        }
    }
}

#[async_trait]
impl UserService for UserServiceComponent {
    async fn sync_user(&self, request: NewUser) -> HireloopResult<Option<UserId>> {
        request.validate_request()?;

        // Existence is checked against the store, never the cache.
        if self.users.find_by_clerk_id(&request.clerk_id).await?.is_some() {
            debug!("User {} already synced", request.clerk_id);
            return Ok(None);
        }

        let created = match self.users.insert(&User::create(request)).await {
            Ok(user) => user,
            Err(HireloopError::Conflict(reason)) => {
                debug!("Concurrent sync lost the race: {}", reason);
                return Ok(None);
            }
            Err(e) => return Err(e),
        };
        info!("User {} synced for clerk id {}", created.id, created.clerk_id);

        self.cache
            .invalidate(&self.policy.after_user_created(&created))
            .await;
        Ok(Some(created.id))
    }

    async fn list_users(&self, caller: &Caller) -> HireloopResult<Vec<User>> {
        let subject = caller.require()?;
        let key = self.policy.all_users_key(subject);

        self.cache
            .read_through(&key, self.policy.ttl(), || self.users.find_all())
            .await
    }

    async fn get_by_clerk_id(&self, clerk_id: &str) -> HireloopResult<Option<User>> {
        let key = cache_keys::user_by_clerk_id(clerk_id);

        self.cache
            .read_through(&key, self.policy.ttl(), || self.users.find_by_clerk_id(clerk_id))
            .await
    }
}

impl std::fmt::Debug for UserServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceComponent")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::InMemoryCache;
    use hireloop_core::{Email, UserRole};
    use hireloop_repository::InMemoryUserRepository;

    fn service(policy: CachePolicy) -> UserServiceComponent {
        UserServiceComponent::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryCache::new()),
            policy,
        )
    }

    fn payload(clerk_id: &str) -> NewUser {
        NewUser {
            name: "Linus".to_string(),
            email: Email::new("linus@example.com").unwrap(),
            clerk_id: clerk_id.to_string(),
            image: None,
        }
    }

    #[tokio::test]
    async fn test_sync_is_idempotent() {
        let service = service(CachePolicy::scoped());
        let first = service.sync_user(payload("user_linus")).await.unwrap();
        let second = service.sync_user(payload("user_linus")).await.unwrap();
        assert!(first.is_some());
        assert!(second.is_none());

        let users = service.list_users(&Caller::authenticated("user_linus")).await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].role, UserRole::Candidate);
    }

    #[tokio::test]
    async fn test_list_users_requires_identity() {
        let service = service(CachePolicy::scoped());
        let err = service.list_users(&Caller::Anonymous).await.unwrap_err();
        assert!(matches!(err, HireloopError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_scoped_sync_clears_cached_absence() {
        let service = service(CachePolicy::scoped());
        assert!(service.get_by_clerk_id("user_new").await.unwrap().is_none());

        service.sync_user(payload("user_new")).await.unwrap();
        assert!(service.get_by_clerk_id("user_new").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_legacy_sync_keeps_cached_absence() {
        let service = service(CachePolicy::legacy());
        assert!(service.get_by_clerk_id("user_new").await.unwrap().is_none());

        service.sync_user(payload("user_new")).await.unwrap();
        assert!(service.get_by_clerk_id("user_new").await.unwrap().is_none());
    }
}
