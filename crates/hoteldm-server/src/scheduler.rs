//! Background job scheduler.
//!
//! Initialises a [`JobScheduler`] at server startup and registers the
//! recurring supplier refresh.

use std::{sync::Arc, time::Duration};

use hoteldm_pipeline::{RefreshCoordinator, RefreshOutcome};
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

/// Builds and starts the background job scheduler.
///
/// Returns the running [`JobScheduler`] handle, which must be kept alive
/// for the lifetime of the process. Dropping it shuts down all jobs.
///
/// # Errors
///
/// Returns [`JobSchedulerError`] if the scheduler cannot be initialised,
/// the job cannot be registered, or the scheduler fails to start.
pub async fn build_scheduler(
    coordinator: Arc<RefreshCoordinator>,
    interval_secs: u64,
) -> Result<JobScheduler, JobSchedulerError> {
    let scheduler = JobScheduler::new().await?;

    register_refresh_job(&scheduler, coordinator, interval_secs).await?;

    scheduler.start().await?;
    Ok(scheduler)
}

/// Register the supplier refresh job, repeating every `interval_secs`.
///
/// A tick that lands while the previous cycle still holds the gate is
/// skipped by the coordinator itself; nothing queues up behind it.
async fn register_refresh_job(
    scheduler: &JobScheduler,
    coordinator: Arc<RefreshCoordinator>,
    interval_secs: u64,
) -> Result<(), JobSchedulerError> {
    let job = Job::new_repeated_async(Duration::from_secs(interval_secs), move |_uuid, _lock| {
        let coordinator = Arc::clone(&coordinator);

        Box::pin(async move {
            run_refresh(&coordinator).await;
        })
    })?;

    scheduler.add(job).await?;
    tracing::info!(interval_secs, "scheduler: registered supplier refresh job");
    Ok(())
}

/// Run one cycle and log how it ended. Errors never escape the job.
pub async fn run_refresh(coordinator: &RefreshCoordinator) {
    match coordinator.run_cycle().await {
        Ok(RefreshOutcome::Published {
            hotels,
            destinations,
        }) => {
            tracing::debug!(hotels, destinations, "scheduler: refresh cycle complete");
        }
        Ok(RefreshOutcome::Skipped) => {
            tracing::debug!("scheduler: refresh cycle skipped");
        }
        // run_cycle already logged the failing supplier at error.
        Err(e) => {
            tracing::debug!(
                error = %e,
                "scheduler: refresh cycle failed; keeping previous snapshot"
            );
        }
    }
}
