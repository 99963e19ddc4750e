//! Notification center for the estate CRM
//!
//! Keeps the signed-in user's notification feed in sync with the REST API:
//! a cached [`NotificationCenter`] behind a shared lock, a
//! [`NotificationPoller`] refreshing it in the background and a
//! [`NotificationService`] for the changes the user makes from the bell
//! dropdown.
//!
//! # Architecture
//!
//! ```mermaid
//! graph LR
//!     A[NotificationPoller] -->|fetch| B[NotificationSource]
//!     C[NotificationService] -->|mark read / delete| B
//!     B --> D[HttpNotificationSource]
//!     A -->|apply_feed| E[SharedCenter]
//!     C -->|on success| E
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use estate_notifications::{
//!     HttpNotificationSource, NotificationConfig, NotificationPoller, NotificationService,
//! };
//! use std::sync::Arc;
//!
//! # async fn run() -> estate_notifications::Result<()> {
//! let config = NotificationConfig::new().with_auth_token("token");
//! let source = Arc::new(HttpNotificationSource::new(&config)?);
//! let service = NotificationService::new(source.clone());
//!
//! let poller = NotificationPoller::new(source, service.center().clone(), &config)
//!     .on_new_unread(|unread| println!("{unread} unread"));
//! let handle = poller.spawn();
//!
//! service.mark_all_read().await?;
//! handle.shutdown().await;
//! # Ok(())
//! # }
//! ```

pub mod center;
pub mod config;
pub mod error;
pub mod model;
pub mod poller;
pub mod service;
pub mod source;

pub use center::{NotificationCenter, NotificationFilter};
pub use config::NotificationConfig;
pub use error::{NotificationError, Result};
pub use model::{Notification, NotificationFeed, NotificationId, NotificationKind};
pub use poller::{NotificationPoller, PollerHandle};
pub use service::{NotificationService, SharedCenter};
pub use source::{HttpNotificationSource, NotificationSource};
