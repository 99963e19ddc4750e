//! Server-backed notification operations
//!
//! Every change the user makes (mark read, mark all read, delete) is sent to
//! the server first; the cached [`NotificationCenter`] is only updated once
//! the server has accepted it, so a failed request leaves the cache as the
//! server last described it.

use crate::center::NotificationCenter;
use crate::error::{NotificationError, Result};
use crate::model::{Notification, NotificationId};
use crate::source::NotificationSource;
use parking_lot::Mutex;
use std::sync::Arc;

/// Notification state shared between the poller and the UI
pub type SharedCenter = Arc<Mutex<NotificationCenter>>;

/// Fetches the feed and applies it; returns whether unread grew
///
/// The lock is only taken after the response is in, never across the request.
pub(crate) async fn refresh(source: &dyn NotificationSource, center: &SharedCenter) -> Result<bool> {
	let feed = source.fetch().await?;
	Ok(center.lock().apply_feed(feed))
}

#[derive(Clone)]
pub struct NotificationService {
	source: Arc<dyn NotificationSource>,
	center: SharedCenter,
}

impl NotificationService {
	pub fn new(source: Arc<dyn NotificationSource>) -> Self {
		Self::with_center(source, SharedCenter::default())
	}

	/// Shares an existing center, typically the one a poller updates
	pub fn with_center(source: Arc<dyn NotificationSource>, center: SharedCenter) -> Self {
		Self { source, center }
	}

	pub fn center(&self) -> &SharedCenter {
		&self.center
	}

	pub fn source(&self) -> &Arc<dyn NotificationSource> {
		&self.source
	}

	pub async fn refresh(&self) -> Result<bool> {
		refresh(self.source.as_ref(), &self.center).await
	}

	pub async fn mark_read(&self, id: NotificationId) -> Result<bool> {
		self.source.mark_read(id).await?;
		let changed = self.center.lock().mark_read(id);
		tracing::debug!(id, changed, "notification marked read");
		Ok(changed)
	}

	pub async fn mark_all_read(&self) -> Result<()> {
		self.source.mark_all_read().await?;
		self.center.lock().mark_all_read();
		tracing::debug!("all notifications marked read");
		Ok(())
	}

	pub async fn delete(&self, id: NotificationId) -> Result<Option<Notification>> {
		self.source.delete(id).await?;
		let removed = self.center.lock().remove(id);
		tracing::debug!(id, found = removed.is_some(), "notification deleted");
		Ok(removed)
	}

	/// Adds a notification delivered out of band; no server round-trip
	pub fn push(&self, notification: Notification) -> bool {
		self.center.lock().push(notification)
	}

	/// Clears the cache, e.g. on logout
	pub fn reset(&self) {
		self.center.lock().reset();
	}

	/// Click on a notification: marks it read if needed and returns where to go
	///
	/// A rejected mark-read is logged and does not stop navigation; the cache
	/// then still shows the notification as unread.
	pub async fn open(&self, id: NotificationId) -> Result<Option<String>> {
		let notification = self
			.center
			.lock()
			.get(id)
			.cloned()
			.ok_or(NotificationError::NotFound(id))?;
		if !notification.is_read {
			if let Err(err) = self.mark_read(id).await {
				tracing::warn!(id, error = %err, "failed to mark opened notification read");
			}
		}
		Ok(notification.route())
	}
}

impl std::fmt::Debug for NotificationService {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("NotificationService")
			.field("center", &self.center)
			.finish_non_exhaustive()
	}
}
