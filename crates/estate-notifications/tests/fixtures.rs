//! Common test fixtures for estate-notifications tests

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use estate_notifications::{
	Notification, NotificationError, NotificationFeed, NotificationId, NotificationKind,
	NotificationSource, Result,
};
use parking_lot::Mutex;
use rstest::*;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

pub fn notification(id: NotificationId, kind: NotificationKind, is_read: bool) -> Notification {
	Notification {
		id,
		title: format!("Notification {id}"),
		message: String::new(),
		kind,
		is_read,
		created_at: Utc.with_ymd_and_hms(2024, 3, 14, 9, 0, 0).unwrap(),
		entity_type: None,
		entity_id: None,
	}
}

pub fn feed(notifications: Vec<Notification>) -> NotificationFeed {
	let unread_count = notifications.iter().filter(|n| !n.is_read).count();
	NotificationFeed {
		notifications,
		unread_count,
	}
}

/// In-memory source replaying a script of fetch results
///
/// `None` entries fail with a 500. Once the script runs out the last
/// successful feed is served again.
#[derive(Default)]
pub struct ScriptedSource {
	script: Mutex<VecDeque<Option<NotificationFeed>>>,
	last: Mutex<NotificationFeed>,
	latency: Duration,
	pub fetches: AtomicUsize,
	in_flight: AtomicUsize,
	pub max_in_flight: AtomicUsize,
	pub reject_writes: AtomicBool,
	pub writes: Mutex<Vec<String>>,
}

impl ScriptedSource {
	pub fn new(script: Vec<Option<NotificationFeed>>) -> Self {
		Self {
			script: Mutex::new(script.into()),
			..Self::default()
		}
	}

	pub fn with_latency(mut self, latency: Duration) -> Self {
		self.latency = latency;
		self
	}

	pub fn fetch_count(&self) -> usize {
		self.fetches.load(Ordering::SeqCst)
	}

	fn write(&self, call: String) -> Result<()> {
		if self.reject_writes.load(Ordering::SeqCst) {
			return Err(NotificationError::Api {
				status: 503,
				body: "unavailable".to_string(),
			});
		}
		self.writes.lock().push(call);
		Ok(())
	}
}

#[async_trait]
impl NotificationSource for ScriptedSource {
	async fn fetch(&self) -> Result<NotificationFeed> {
		let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
		self.max_in_flight.fetch_max(now, Ordering::SeqCst);
		self.fetches.fetch_add(1, Ordering::SeqCst);

		if !self.latency.is_zero() {
			tokio::time::sleep(self.latency).await;
		}

		let next = self.script.lock().pop_front();
		self.in_flight.fetch_sub(1, Ordering::SeqCst);
		match next {
			Some(Some(feed)) => {
				*self.last.lock() = feed.clone();
				Ok(feed)
			}
			Some(None) => Err(NotificationError::Api {
				status: 500,
				body: "boom".to_string(),
			}),
			None => Ok(self.last.lock().clone()),
		}
	}

	async fn mark_read(&self, id: NotificationId) -> Result<()> {
		self.write(format!("read {id}"))
	}

	async fn mark_all_read(&self) -> Result<()> {
		self.write("read all".to_string())
	}

	async fn delete(&self, id: NotificationId) -> Result<()> {
		self.write(format!("delete {id}"))
	}
}

/// Two unread leads and a read payment
#[fixture]
pub fn inbox() -> NotificationFeed {
	feed(vec![
		notification(1, NotificationKind::Lead, false),
		notification(2, NotificationKind::Payment, true),
		notification(3, NotificationKind::FollowUp, false),
	])
}
