//! Where notifications come from
//!
//! [`NotificationSource`] abstracts the four notification endpoints so the
//! poller and service can run against the real REST API
//! ([`HttpNotificationSource`]) or an in-memory double in tests.

use crate::config::NotificationConfig;
use crate::error::{NotificationError, Result};
use crate::model::{NotificationFeed, NotificationId};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[async_trait]
pub trait NotificationSource: Send + Sync {
	/// Current feed with the server-side unread count
	async fn fetch(&self) -> Result<NotificationFeed>;

	async fn mark_read(&self, id: NotificationId) -> Result<()>;

	async fn mark_all_read(&self) -> Result<()>;

	async fn delete(&self, id: NotificationId) -> Result<()>;
}

/// REST client for the notification endpoints
///
/// - `GET /notifications`
/// - `PUT /notifications/{id}/read`
/// - `PUT /notifications/mark-all-read`
/// - `DELETE /notifications/{id}`
#[derive(Debug, Clone)]
pub struct HttpNotificationSource {
	client: Client,
	base_url: String,
	auth_token: Option<String>,
}

impl HttpNotificationSource {
	pub fn new(config: &NotificationConfig) -> Result<Self> {
		let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
		Self::with_client(config, client)
	}

	/// Uses a preconfigured client (proxies, custom TLS, shared pool)
	pub fn with_client(config: &NotificationConfig, client: Client) -> Result<Self> {
		let base_url = config.api_base_url.trim_end_matches('/');
		if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
			return Err(NotificationError::InvalidBaseUrl(config.api_base_url.clone()));
		}
		Ok(Self {
			client,
			base_url: base_url.to_string(),
			auth_token: config.auth_token.clone(),
		})
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	fn request(&self, method: Method, path: &str) -> RequestBuilder {
		let url = format!("{}{}", self.base_url, path);
		let builder = self.client.request(method, url);
		match &self.auth_token {
			Some(token) => builder.bearer_auth(token),
			None => builder,
		}
	}

	async fn send(&self, method: Method, path: &str) -> Result<Response> {
		let response = self.request(method.clone(), path).send().await?;
		let status = response.status();
		if !status.is_success() {
			let body = response
				.text()
				.await
				.unwrap_or_else(|_| "Unknown error".to_string());
			tracing::warn!(%method, path, status = status.as_u16(), "notification request rejected");
			return Err(NotificationError::Api {
				status: status.as_u16(),
				body,
			});
		}
		Ok(response)
	}
}

#[async_trait]
impl NotificationSource for HttpNotificationSource {
	async fn fetch(&self) -> Result<NotificationFeed> {
		let body = self.send(Method::GET, "/notifications").await?.text().await?;
		Ok(serde_json::from_str(&body)?)
	}

	async fn mark_read(&self, id: NotificationId) -> Result<()> {
		self.send(Method::PUT, &format!("/notifications/{id}/read"))
			.await?;
		Ok(())
	}

	async fn mark_all_read(&self) -> Result<()> {
		self.send(Method::PUT, "/notifications/mark-all-read").await?;
		Ok(())
	}

	async fn delete(&self, id: NotificationId) -> Result<()> {
		self.send(Method::DELETE, &format!("/notifications/{id}"))
			.await?;
		Ok(())
	}
}
