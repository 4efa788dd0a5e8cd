//! Background scheduling for periodic notification sweeps

mod error;
mod reminder_scheduler;

pub use error::{SchedulerError, SchedulerResult};
pub use reminder_scheduler::{ReminderScheduler, ReminderSchedulerConfig};
