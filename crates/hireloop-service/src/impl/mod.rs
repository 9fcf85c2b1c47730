//! Service implementations.
//!
//! Trait definitions live in the parent module (e.g. `interview_service.rs`).

pub mod comment_service_impl;
pub mod dashboard_service_impl;
pub mod interview_service_impl;
pub mod user_service_impl;

pub use comment_service_impl::{CommentServiceComponent, CommentServiceComponentParameters};
pub use dashboard_service_impl::DashboardServiceComponent;
pub use interview_service_impl::{InterviewServiceComponent, InterviewServiceComponentParameters};
pub use user_service_impl::{UserServiceComponent, UserServiceComponentParameters};
