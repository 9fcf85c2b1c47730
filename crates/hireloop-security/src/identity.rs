//! Identity provider seam.

use crate::TokenProvider;
use hireloop_core::Caller;
use tracing::debug;

/// Resolves the caller behind a request.
///
/// Resolution never fails: a missing or rejected token yields
/// [`Caller::Anonymous`], and each operation decides whether it tolerates that.
pub trait IdentityProvider: Send + Sync {
    /// Resolves a caller from an optional bearer token.
    fn resolve(&self, bearer_token: Option<&str>) -> Caller;
}

impl IdentityProvider for TokenProvider {
    fn resolve(&self, bearer_token: Option<&str>) -> Caller {
        let Some(token) = bearer_token else {
            return Caller::Anonymous;
        };

        match self.validate_token(token) {
            Ok(claims) => Caller::authenticated(claims.sub),
            Err(e) => {
                debug!("Treating request as anonymous: {}", e);
                Caller::Anonymous
            }
        }
    }
}
