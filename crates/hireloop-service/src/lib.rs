//! # Hireloop Service
//!
//! Cache-aside access layer over the document store: interviews, comments
//! and users, plus the dashboard summary and the meeting-setup controller.

pub mod cache;
pub mod comment_service;
pub mod dashboard_service;
pub mod dto;
pub mod r#impl;
pub mod interview_service;
pub mod meeting;
pub mod services;
pub mod user_service;

pub use cache::*;
pub use comment_service::*;
pub use dashboard_service::*;
pub use dto::*;
pub use interview_service::*;
pub use meeting::*;
pub use services::ServiceSet;
pub use user_service::*;
