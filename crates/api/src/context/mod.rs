//! Application context wiring services to their adapters

use std::sync::Arc;

use agendahub_core::{
    AuthGateway, ChatService, MeetingRepository, NotificationCenter, PlatformFilter,
    SchedulingService,
};
use agendahub_domain::{Config, Result};
use agendahub_infra::{seed, HostedAuthClient, InMemoryMeetingRepository, ReminderScheduler};
use parking_lot::RwLock;
use tracing::info;

/// Shared application state handed to every handler.
///
/// All mutation funnels through these fields; nothing else holds ambient
/// state. The in-memory stores live exactly as long as the process.
pub struct AppContext {
    pub config: Config,
    pub meetings: Arc<dyn MeetingRepository>,
    pub scheduling: SchedulingService,
    pub notifications: Arc<RwLock<NotificationCenter>>,
    pub filter: RwLock<PlatformFilter>,
    pub chat: RwLock<ChatService>,
    pub auth: Arc<dyn AuthGateway>,
}

impl AppContext {
    /// Wire the full context from configuration.
    pub fn new(config: Config) -> Result<Self> {
        let meetings: Arc<dyn MeetingRepository> = if config.seed_demo_data {
            Arc::new(InMemoryMeetingRepository::with_seed(seed::demo_meetings()))
        } else {
            Arc::new(InMemoryMeetingRepository::new())
        };
        let auth: Arc<dyn AuthGateway> = Arc::new(HostedAuthClient::new(&config.auth)?);

        info!(seeded = config.seed_demo_data, "application context created");
        Ok(Self {
            scheduling: SchedulingService::new(Arc::clone(&meetings)),
            meetings,
            notifications: Arc::new(RwLock::new(NotificationCenter::new())),
            filter: RwLock::new(PlatformFilter::all()),
            chat: RwLock::new(ChatService::seeded()),
            auth,
            config,
        })
    }

    /// Scheduler instance bound to this context's store and center.
    pub fn reminder_scheduler(&self) -> ReminderScheduler {
        ReminderScheduler::new(
            self.config.reminders.cron_expression.clone(),
            Arc::clone(&self.meetings),
            Arc::clone(&self.notifications),
        )
    }
}
