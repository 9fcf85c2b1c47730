//! Process-local store backend.
//!
//! Collections are vectors behind `parking_lot` locks, so scans return records
//! in insertion order just like the hosted document store does.

mod comment_repository;
mod interview_repository;
mod user_repository;

pub use comment_repository::InMemoryCommentRepository;
pub use interview_repository::InMemoryInterviewRepository;
pub use user_repository::InMemoryUserRepository;
