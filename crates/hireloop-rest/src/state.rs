//! Application state for Axum handlers.

use hireloop_core::HealthCheck;
use hireloop_security::IdentityProvider;
use hireloop_service::{
    CommentService, DashboardService, InterviewService, ServiceSet, UserService,
};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub interview_service: Arc<dyn InterviewService>,
    pub comment_service: Arc<dyn CommentService>,
    pub user_service: Arc<dyn UserService>,
    pub dashboard_service: Arc<dyn DashboardService>,
    pub identity: Arc<dyn IdentityProvider>,
    pub health_checks: Vec<Arc<dyn HealthCheck>>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(services: ServiceSet, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            interview_service: services.interviews,
            comment_service: services.comments,
            user_service: services.users,
            dashboard_service: services.dashboard,
            identity,
            health_checks: Vec::new(),
        }
    }

    /// Adds a dependency probed by `/ready`.
    #[must_use]
    pub fn with_health_check(mut self, check: Arc<dyn HealthCheck>) -> Self {
        self.health_checks.push(check);
        self
    }
}
