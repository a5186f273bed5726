//! In-process daily trigger for the refresh endpoint.
//!
//! One `RefreshScheduler` is built at process start and shared behind an
//! `Arc`. It calls the endpoint over HTTP, exactly like an external cron
//! would, so the cron secret check and the run lock apply to it as well.

use anyhow::{Context, Result};
use std::{
    sync::atomic::{AtomicBool, Ordering},
    time::Duration,
};
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument};

use crate::{config::Config, refresh::RefreshTrigger};

pub struct RefreshScheduler {
    trigger: RefreshTrigger,
    cron: String,
    startup_delay: Duration,
    initialized: AtomicBool,
    jobs: Mutex<Option<JobScheduler>>,
    warm_up: Mutex<Option<CancellationToken>>,
}

impl RefreshScheduler {
    pub fn new(trigger: RefreshTrigger, cron: impl Into<String>, startup_delay: Duration) -> Self {
        Self {
            trigger,
            cron: cron.into(),
            startup_delay,
            initialized: AtomicBool::new(false),
            jobs: Mutex::new(None),
            warm_up: Mutex::new(None),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            RefreshTrigger::from_config(config),
            config.refresh_cron(),
            config.refresh_startup_delay(),
        )
    }

    pub fn is_running(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    /// Register the cron job and schedule the warm-up call.
    ///
    /// Returns `Ok(false)` without registering anything when already started.
    #[instrument(skip(self), fields(cron = %self.cron))]
    pub async fn start(&self) -> Result<bool> {
        if self.initialized.swap(true, Ordering::SeqCst) {
            info!("refresh scheduler already initialised");
            return Ok(false);
        }

        let scheduler = match self.build_job_scheduler().await {
            Ok(scheduler) => scheduler,
            Err(e) => {
                self.initialized.store(false, Ordering::SeqCst);
                return Err(e);
            }
        };
        *self.jobs.lock().await = Some(scheduler);

        let token = CancellationToken::new();
        *self.warm_up.lock().await = Some(token.clone());

        let trigger = self.trigger.clone();
        let delay = self.startup_delay;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => debug!("warm-up refresh cancelled"),
                _ = tokio::time::sleep(delay) => fire(&trigger, "startup").await,
            }
        });

        info!(endpoint = self.trigger.endpoint(), "refresh scheduler started");
        Ok(true)
    }

    async fn build_job_scheduler(&self) -> Result<JobScheduler> {
        let scheduler = JobScheduler::new()
            .await
            .context("creating job scheduler")?;

        let trigger = self.trigger.clone();
        let job = Job::new_async(self.cron.as_str(), move |_uuid, _lock| {
            let trigger = trigger.clone();
            Box::pin(async move { fire(&trigger, "cron").await })
        })
        .with_context(|| format!("creating refresh job for cron {}", self.cron))?;

        scheduler.add(job).await.context("adding refresh job")?;
        scheduler.start().await.context("starting job scheduler")?;
        Ok(scheduler)
    }

    /// Shut the cron job down and cancel a pending warm-up.
    pub async fn stop(&self) -> Result<()> {
        if let Some(token) = self.warm_up.lock().await.take() {
            token.cancel();
        }

        let scheduler = self.jobs.lock().await.take();
        self.initialized.store(false, Ordering::SeqCst);

        if let Some(mut scheduler) = scheduler {
            scheduler
                .shutdown()
                .await
                .context("shutting down job scheduler")?;
            info!("refresh scheduler stopped");
        }
        Ok(())
    }
}

/// One trigger attempt. Failures are logged and wait for the next tick.
async fn fire(trigger: &RefreshTrigger, reason: &'static str) {
    match trigger.trigger().await {
        Ok((status, body)) if status.is_success() => {
            info!(reason, %status, %body, "scheduled refresh finished");
        }
        Ok((status, body)) => {
            error!(reason, %status, %body, "scheduled refresh failed");
        }
        Err(e) => {
            error!(reason, "scheduled refresh could not be triggered: {:#}", e);
        }
    }
}
