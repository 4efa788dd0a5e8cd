//! In-memory adapters for the core's store ports

mod meeting_repository;
pub mod seed;

pub use meeting_repository::InMemoryMeetingRepository;
