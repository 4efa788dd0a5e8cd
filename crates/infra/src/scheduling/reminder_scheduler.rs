//! Reminder scheduler for periodic notification sweeps.
//!
//! Cron-driven trigger for the upcoming-meeting generator: each tick reads
//! the meeting store and re-runs the sweep against the shared notification
//! center. Join handles are tracked, cancellation is explicit, and every
//! asynchronous operation is wrapped in a timeout.

use std::sync::Arc;
use std::time::Duration;

use agendahub_core::{MeetingRepository, NotificationCenter};
use agendahub_domain::Result as DomainResult;
use chrono::Local;
use parking_lot::RwLock;
use tokio::task::JoinHandle;
use tokio_cron_scheduler::{Job, JobScheduler};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

use super::error::{SchedulerError, SchedulerResult};

/// Configuration for the reminder scheduler
#[derive(Debug, Clone)]
pub struct ReminderSchedulerConfig {
    /// Cron expression describing the sweep cadence.
    pub cron_expression: String,
    /// Timeout applied to a single sweep execution.
    pub job_timeout: Duration,
    /// Timeout for starting the underlying scheduler.
    pub start_timeout: Duration,
    /// Timeout for stopping the scheduler.
    pub stop_timeout: Duration,
    /// Timeout for awaiting the monitor task join handle.
    pub join_timeout: Duration,
}

impl Default for ReminderSchedulerConfig {
    fn default() -> Self {
        Self {
            cron_expression: "0 * * * * *".into(), // every minute
            job_timeout: Duration::from_secs(30),
            start_timeout: Duration::from_secs(5),
            stop_timeout: Duration::from_secs(5),
            join_timeout: Duration::from_secs(5),
        }
    }
}

/// Notification sweep scheduler with explicit lifecycle management
pub struct ReminderScheduler {
    scheduler: Option<JobScheduler>,
    config: ReminderSchedulerConfig,
    monitor_handle: Option<JoinHandle<()>>,
    cancellation: CancellationToken,
    repository: Arc<dyn MeetingRepository>,
    center: Arc<RwLock<NotificationCenter>>,
}

impl ReminderScheduler {
    /// Create a scheduler with the default configuration.
    pub fn new(
        cron_expression: String,
        repository: Arc<dyn MeetingRepository>,
        center: Arc<RwLock<NotificationCenter>>,
    ) -> Self {
        let config = ReminderSchedulerConfig { cron_expression, ..Default::default() };
        Self::with_config(config, repository, center)
    }

    /// Create a scheduler with a custom configuration.
    pub fn with_config(
        config: ReminderSchedulerConfig,
        repository: Arc<dyn MeetingRepository>,
        center: Arc<RwLock<NotificationCenter>>,
    ) -> Self {
        Self {
            scheduler: None,
            config,
            monitor_handle: None,
            cancellation: CancellationToken::new(),
            repository,
            center,
        }
    }

    /// Start the scheduler, spawning the monitoring task.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> SchedulerResult<()> {
        if self.is_running() {
            return Err(SchedulerError::AlreadyRunning);
        }

        self.cancellation = CancellationToken::new();

        let scheduler_instance = self.build_scheduler().await?;
        let start_timeout = self.config.start_timeout;

        let start_result = tokio::time::timeout(start_timeout, scheduler_instance.start())
            .await
            .map_err(|_| SchedulerError::Timeout { seconds: start_timeout.as_secs() })?;
        start_result.map_err(|e| SchedulerError::StartFailed(e.to_string()))?;

        self.scheduler = Some(scheduler_instance);

        let cancel = self.cancellation.clone();
        let handle = tokio::spawn(async move {
            Self::monitor_task(cancel).await;
        });
        self.monitor_handle = Some(handle);

        info!(cron = %self.config.cron_expression, "reminder scheduler started");
        Ok(())
    }

    /// Stop the scheduler and wait for the monitor task to finish.
    #[instrument(skip(self))]
    pub async fn stop(&mut self) -> SchedulerResult<()> {
        if !self.is_running() {
            return Err(SchedulerError::NotRunning);
        }

        self.cancellation.cancel();

        let mut scheduler = match self.scheduler.take() {
            Some(scheduler) => scheduler,
            None => return Err(SchedulerError::NotRunning),
        };

        let stop_timeout = self.config.stop_timeout;
        let stop_result =
            tokio::time::timeout(stop_timeout, async move { scheduler.shutdown().await })
                .await
                .map_err(|_| SchedulerError::Timeout { seconds: stop_timeout.as_secs() })?;
        stop_result.map_err(|e| SchedulerError::StopFailed(e.to_string()))?;

        if let Some(handle) = self.monitor_handle.take() {
            let join_timeout = self.config.join_timeout;
            tokio::time::timeout(join_timeout, handle)
                .await
                .map_err(|_| SchedulerError::Timeout { seconds: join_timeout.as_secs() })?
                .map_err(|e| SchedulerError::TaskJoinFailed(e.to_string()))?;
        }

        info!("reminder scheduler stopped");
        self.cancellation = CancellationToken::new();
        Ok(())
    }

    /// Returns true when a scheduler instance is active.
    pub fn is_running(&self) -> bool {
        self.scheduler.is_some()
    }

    async fn build_scheduler(&self) -> SchedulerResult<JobScheduler> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| SchedulerError::CreationFailed(e.to_string()))?;

        let cron_expr = self.config.cron_expression.clone();
        let job_timeout = self.config.job_timeout;
        let repository = Arc::clone(&self.repository);
        let center = Arc::clone(&self.center);

        let job_definition = Job::new_async(cron_expr.as_str(), move |_id, _lock| {
            let repository = Arc::clone(&repository);
            let center = Arc::clone(&center);

            Box::pin(async move {
                match tokio::time::timeout(job_timeout, perform_sweep(repository, center)).await
                {
                    Ok(Ok(added)) => {
                        if added > 0 {
                            debug!(added, "reminder sweep finished");
                        }
                    }
                    Ok(Err(err)) => {
                        error!(error = ?err, "reminder sweep failed");
                    }
                    Err(_) => {
                        warn!(timeout_secs = job_timeout.as_secs(), "reminder sweep timed out");
                    }
                }
            })
        })
        .map_err(|e| SchedulerError::JobRegistrationFailed(e.to_string()))?;

        let job_id = job_definition.guid();
        scheduler
            .add(job_definition)
            .await
            .map_err(|e| SchedulerError::JobRegistrationFailed(e.to_string()))?;

        debug!(cron = %self.config.cron_expression, job_id = %job_id, "registered reminder job");
        Ok(scheduler)
    }

    async fn monitor_task(cancel: CancellationToken) {
        cancel.cancelled().await;
        debug!("reminder scheduler monitor cancelled");
    }
}

/// One sweep: read the store, re-run the generator against wall-clock now.
async fn perform_sweep(
    repository: Arc<dyn MeetingRepository>,
    center: Arc<RwLock<NotificationCenter>>,
) -> DomainResult<usize> {
    let meetings = repository.list().await?;
    let now = Local::now().naive_local();
    Ok(center.write().sweep(&meetings, now))
}

impl Drop for ReminderScheduler {
    fn drop(&mut self) {
        if self.is_running() {
            warn!("ReminderScheduler dropped while running; cancelling tasks");
            self.cancellation.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use agendahub_domain::{Meeting, Platform, Recurrence};
    use chrono::Duration as ChronoDuration;

    use super::*;
    use crate::memory::InMemoryMeetingRepository;

    fn scheduler_under_test() -> ReminderScheduler {
        let repository = Arc::new(InMemoryMeetingRepository::new());
        let center = Arc::new(RwLock::new(NotificationCenter::new()));
        // Fires at 03:00; never during a test run's lifetime.
        ReminderScheduler::new("0 0 3 * * *".into(), repository, center)
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn lifecycle_runs_successfully() {
        let mut scheduler = scheduler_under_test();

        scheduler.start().await.expect("start succeeds");
        assert!(scheduler.is_running());
        scheduler.stop().await.expect("stop succeeds");
        assert!(!scheduler.is_running());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn double_start_is_rejected() {
        let mut scheduler = scheduler_under_test();

        scheduler.start().await.expect("first start");
        let err = scheduler.start().await.expect_err("second start fails");
        assert!(matches!(err, SchedulerError::AlreadyRunning));
        scheduler.stop().await.expect("stop succeeds");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn stop_without_start_is_rejected() {
        let mut scheduler = scheduler_under_test();
        let err = scheduler.stop().await.expect_err("nothing to stop");
        assert!(matches!(err, SchedulerError::NotRunning));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn restart_after_stop_succeeds() {
        let mut scheduler = scheduler_under_test();

        scheduler.start().await.expect("start succeeds");
        scheduler.stop().await.expect("stop succeeds");
        scheduler.start().await.expect("start again");
        scheduler.stop().await.expect("stop again");
    }

    #[tokio::test]
    async fn sweep_reads_store_and_fills_center() {
        let now = Local::now().naive_local();
        let start = now + ChronoDuration::minutes(10);
        let repository: Arc<dyn MeetingRepository> =
            Arc::new(InMemoryMeetingRepository::with_seed(vec![Meeting {
            id: "m1".into(),
            title: "Imminent".into(),
            date: start.date(),
            time: start.time(),
            platform: Platform::Zoom,
            participants: vec![],
            agenda: None,
            recurrence: Recurrence::None,
            link: None,
        }]));
        let center = Arc::new(RwLock::new(NotificationCenter::new()));

        let added = perform_sweep(Arc::clone(&repository), Arc::clone(&center))
            .await
            .expect("sweep never fails on the in-memory store");
        assert_eq!(added, 1);
        assert_eq!(center.read().unread_count(), 1);
    }
}
