//! Cached notification state
//!
//! [`NotificationCenter`] is the client-side copy of the user's notification
//! feed plus the unread counter shown on the bell. It is plain state: server
//! round-trips happen in [`NotificationService`](crate::NotificationService)
//! and [`NotificationPoller`](crate::NotificationPoller), which update the
//! center after the server has accepted a change.

use crate::model::{Notification, NotificationFeed, NotificationId, NotificationKind};

/// How many notifications the bell dropdown lists before "View all"
pub const DROPDOWN_LIMIT: usize = 10;

/// Filter tabs of the notification dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationFilter {
	#[default]
	All,
	Unread,
	Kind(NotificationKind),
}

impl NotificationFilter {
	pub fn accepts(&self, notification: &Notification) -> bool {
		match self {
			Self::All => true,
			Self::Unread => !notification.is_read,
			Self::Kind(kind) => notification.kind == *kind,
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationCenter {
	notifications: Vec<Notification>,
	unread_count: usize,
}

impl NotificationCenter {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn notifications(&self) -> &[Notification] {
		&self.notifications
	}

	pub fn unread_count(&self) -> usize {
		self.unread_count
	}

	pub fn get(&self, id: NotificationId) -> Option<&Notification> {
		self.notifications.iter().find(|n| n.id == id)
	}

	/// Replaces the cached feed with a fresh one from the server
	///
	/// Returns `true` when the unread count went up, which is when the user
	/// gets an audible cue.
	pub fn apply_feed(&mut self, feed: NotificationFeed) -> bool {
		let grew = feed.unread_count > self.unread_count;
		tracing::debug!(
			previous = self.unread_count,
			unread = feed.unread_count,
			total = feed.notifications.len(),
			"notification feed applied"
		);
		self.notifications = feed.notifications;
		self.unread_count = feed.unread_count;
		grew
	}

	/// Marks one notification read; the counter only drops if it was unread
	///
	/// Returns whether anything changed.
	pub fn mark_read(&mut self, id: NotificationId) -> bool {
		let Some(notification) = self.notifications.iter_mut().find(|n| n.id == id) else {
			return false;
		};
		if notification.is_read {
			return false;
		}
		notification.is_read = true;
		self.unread_count = self.unread_count.saturating_sub(1);
		true
	}

	pub fn mark_all_read(&mut self) {
		for notification in &mut self.notifications {
			notification.is_read = true;
		}
		self.unread_count = 0;
	}

	/// Drops a notification; the counter only drops if it was unread
	pub fn remove(&mut self, id: NotificationId) -> Option<Notification> {
		let index = self.notifications.iter().position(|n| n.id == id)?;
		let removed = self.notifications.remove(index);
		if !removed.is_read {
			self.unread_count = self.unread_count.saturating_sub(1);
		}
		Some(removed)
	}

	/// Adds a notification that arrived outside the regular feed, newest first
	///
	/// Returns `true` when it is unread.
	pub fn push(&mut self, notification: Notification) -> bool {
		let unread = !notification.is_read;
		if unread {
			self.unread_count += 1;
		}
		self.notifications.insert(0, notification);
		unread
	}

	/// Forgets everything, e.g. on logout
	pub fn reset(&mut self) {
		self.notifications.clear();
		self.unread_count = 0;
	}

	pub fn filtered(&self, filter: NotificationFilter) -> Vec<&Notification> {
		self.notifications
			.iter()
			.filter(|n| filter.accepts(n))
			.collect()
	}

	/// Count shown on a filter tab
	///
	/// The unread tab shows the server's unread counter rather than counting
	/// the cached list, which may be truncated.
	pub fn count(&self, filter: NotificationFilter) -> usize {
		match filter {
			NotificationFilter::Unread => self.unread_count,
			_ => self.filtered(filter).len(),
		}
	}

	/// The dropdown's list for `filter` and whether a "View all" link follows
	pub fn preview(&self, filter: NotificationFilter) -> (Vec<&Notification>, bool) {
		let mut items = self.filtered(filter);
		let more = items.len() > DROPDOWN_LIMIT;
		items.truncate(DROPDOWN_LIMIT);
		(items, more)
	}

	/// Text of the bell badge; hidden at zero, capped at `9+`
	pub fn badge_label(&self) -> Option<String> {
		match self.unread_count {
			0 => None,
			n if n > 9 => Some("9+".to_string()),
			n => Some(n.to_string()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::Utc;

	fn item(id: NotificationId, kind: NotificationKind, is_read: bool) -> Notification {
		Notification {
			id,
			title: format!("#{id}"),
			message: String::new(),
			kind,
			is_read,
			created_at: Utc::now(),
			entity_type: None,
			entity_id: None,
		}
	}

	fn center() -> NotificationCenter {
		let mut center = NotificationCenter::new();
		center.apply_feed(NotificationFeed {
			notifications: vec![
				item(1, NotificationKind::Lead, false),
				item(2, NotificationKind::Payment, true),
				item(3, NotificationKind::Lead, false),
			],
			unread_count: 2,
		});
		center
	}

	#[test]
	fn test_apply_feed_reports_growth() {
		let mut center = center();
		let same = NotificationFeed {
			notifications: center.notifications().to_vec(),
			unread_count: 2,
		};
		assert!(!center.apply_feed(same));

		let grown = NotificationFeed {
			notifications: vec![item(4, NotificationKind::System, false)],
			unread_count: 3,
		};
		assert!(center.apply_feed(grown));
		assert_eq!(center.notifications().len(), 1);
		assert_eq!(center.unread_count(), 3);
	}

	#[test]
	fn test_mark_read_only_counts_unread() {
		let mut center = center();
		assert!(!center.mark_read(2));
		assert_eq!(center.unread_count(), 2);
		assert!(center.mark_read(1));
		assert!(!center.mark_read(1));
		assert_eq!(center.unread_count(), 1);
		assert!(!center.mark_read(99));
	}

	#[test]
	fn test_counter_never_underflows() {
		let mut center = NotificationCenter::new();
		center.apply_feed(NotificationFeed {
			notifications: vec![item(1, NotificationKind::Lead, false)],
			unread_count: 0,
		});
		center.mark_read(1);
		assert_eq!(center.unread_count(), 0);
	}

	#[test]
	fn test_remove() {
		let mut center = center();
		assert_eq!(center.remove(2).map(|n| n.id), Some(2));
		assert_eq!(center.unread_count(), 2);
		center.remove(3);
		assert_eq!(center.unread_count(), 1);
		assert!(center.remove(3).is_none());
	}

	#[test]
	fn test_push_prepends() {
		let mut center = center();
		assert!(center.push(item(9, NotificationKind::Property, false)));
		assert!(!center.push(item(10, NotificationKind::Property, true)));
		assert_eq!(center.notifications()[0].id, 10);
		assert_eq!(center.notifications()[1].id, 9);
		assert_eq!(center.unread_count(), 3);
	}

	#[test]
	fn test_mark_all_and_reset() {
		let mut center = center();
		center.mark_all_read();
		assert_eq!(center.unread_count(), 0);
		assert!(center.notifications().iter().all(|n| n.is_read));
		center.reset();
		assert!(center.notifications().is_empty());
	}

	#[test]
	fn test_filters_and_counts() {
		let center = center();
		assert_eq!(center.count(NotificationFilter::All), 3);
		assert_eq!(center.count(NotificationFilter::Kind(NotificationKind::Lead)), 2);
		assert_eq!(center.count(NotificationFilter::Kind(NotificationKind::Property)), 0);
		let unread: Vec<_> = center
			.filtered(NotificationFilter::Unread)
			.iter()
			.map(|n| n.id)
			.collect();
		assert_eq!(unread, vec![1, 3]);
	}

	#[test]
	fn test_unread_tab_uses_server_counter() {
		let mut center = NotificationCenter::new();
		center.apply_feed(NotificationFeed {
			notifications: vec![item(1, NotificationKind::Lead, false)],
			unread_count: 14,
		});
		assert_eq!(center.count(NotificationFilter::Unread), 14);
		assert_eq!(center.badge_label().as_deref(), Some("9+"));
	}

	#[test]
	fn test_badge_label() {
		let mut center = NotificationCenter::new();
		assert_eq!(center.badge_label(), None);
		for id in 0..9 {
			center.push(item(id, NotificationKind::System, false));
		}
		assert_eq!(center.badge_label().as_deref(), Some("9"));
	}

	#[test]
	fn test_preview_limit() {
		let mut center = NotificationCenter::new();
		for id in 0..12 {
			center.push(item(id, NotificationKind::System, true));
		}
		let (items, more) = center.preview(NotificationFilter::All);
		assert_eq!(items.len(), DROPDOWN_LIMIT);
		assert!(more);
		assert_eq!(items[0].id, 11);

		let (items, more) = center.preview(NotificationFilter::Unread);
		assert!(items.is_empty());
		assert!(!more);
	}
}
