//! # Agenda Hub Infra
//!
//! Adapters behind the core's port interfaces.
//!
//! This crate contains:
//! - The in-memory meeting store and its demo seed
//! - The hosted-auth HTTP client
//! - The reminder scheduler driving periodic notification sweeps
//! - The configuration loader
//!
//! ## Architecture
//! - Implements `agendahub-core` ports
//! - All I/O lives here; the core stays pure

pub mod auth;
pub mod config;
pub mod memory;
pub mod scheduling;

pub use auth::HostedAuthClient;
pub use memory::{InMemoryMeetingRepository, seed};
pub use scheduling::{ReminderScheduler, ReminderSchedulerConfig, SchedulerError, SchedulerResult};
