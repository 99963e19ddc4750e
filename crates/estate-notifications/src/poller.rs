//! Background polling of the notification feed
//!
//! The poller fetches once right away and then on a fixed period. Each poll
//! is awaited inside the same task before the next tick is taken, so at most
//! one request is ever in flight. A slow response delays the following poll
//! instead of stacking requests; ticks missed meanwhile are skipped.

use crate::config::NotificationConfig;
use crate::error::Result;
use crate::service::{SharedCenter, refresh};
use crate::source::NotificationSource;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Called with the new unread count whenever it grows
pub type UnreadHook = Arc<dyn Fn(usize) + Send + Sync>;

pub struct NotificationPoller {
	source: Arc<dyn NotificationSource>,
	center: SharedCenter,
	interval: Duration,
	on_new_unread: Option<UnreadHook>,
}

impl NotificationPoller {
	pub fn new(
		source: Arc<dyn NotificationSource>,
		center: SharedCenter,
		config: &NotificationConfig,
	) -> Self {
		Self {
			source,
			center,
			interval: config.effective_poll_interval(),
			on_new_unread: None,
		}
	}

	/// Hook for the "new notification" cue
	pub fn on_new_unread(mut self, hook: impl Fn(usize) + Send + Sync + 'static) -> Self {
		self.on_new_unread = Some(Arc::new(hook));
		self
	}

	pub fn interval(&self) -> Duration {
		self.interval
	}

	/// Runs a single poll; returns whether unread grew
	pub async fn poll_once(&self) -> Result<bool> {
		let grew = refresh(self.source.as_ref(), &self.center).await?;
		if grew {
			let unread = self.center.lock().unread_count();
			tracing::info!(unread, "new unread notifications");
			if let Some(hook) = &self.on_new_unread {
				hook(unread);
			}
		}
		Ok(grew)
	}

	/// Starts polling on the current Tokio runtime
	///
	/// Polling stops when the returned handle is shut down or dropped.
	pub fn spawn(self) -> PollerHandle {
		let task = tokio::spawn(async move {
			let mut interval = tokio::time::interval(self.interval);
			interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

			loop {
				interval.tick().await;
				if let Err(err) = self.poll_once().await {
					tracing::warn!(error = %err, "notification poll failed, keeping cached feed");
				}
			}
		});
		tracing::debug!("notification poller started");
		PollerHandle { task: Some(task) }
	}
}

impl std::fmt::Debug for NotificationPoller {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("NotificationPoller")
			.field("interval", &self.interval)
			.field("has_hook", &self.on_new_unread.is_some())
			.finish_non_exhaustive()
	}
}

/// Owner of a running poller
#[derive(Debug)]
pub struct PollerHandle {
	task: Option<JoinHandle<()>>,
}

impl PollerHandle {
	pub fn is_running(&self) -> bool {
		self.task.as_ref().is_some_and(|task| !task.is_finished())
	}

	/// Stops polling and waits for the task to wind down
	pub async fn shutdown(mut self) {
		if let Some(task) = self.task.take() {
			task.abort();
			let _ = task.await;
			tracing::debug!("notification poller stopped");
		}
	}
}

impl Drop for PollerHandle {
	fn drop(&mut self) {
		if let Some(task) = self.task.take() {
			task.abort();
		}
	}
}
