//! User service trait definition.

use async_trait::async_trait;
use hireloop_core::{Caller, HireloopResult, Interface, NewUser, User, UserId};

/// Cached access to users.
#[async_trait]
pub trait UserService: Interface + Send + Sync {
    /// Creates the user for a clerk id unless one already exists.
    ///
    /// Returns the new id, or `None` when the user was already known.
    async fn sync_user(&self, request: NewUser) -> HireloopResult<Option<UserId>>;

    /// Lists every user. Requires an authenticated caller.
    async fn list_users(&self, caller: &Caller) -> HireloopResult<Vec<User>>;

    /// Finds a user by external auth id. Absence is cached too.
    async fn get_by_clerk_id(&self, clerk_id: &str) -> HireloopResult<Option<User>>;
}
