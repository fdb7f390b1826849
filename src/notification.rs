use crate::error::Error;
use crate::payload::EncodedPayload;
use crate::request::NotificationRequest;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tracing::{debug, info};

pub const FCM_ENDPOINT: &str = "https://fcm.googleapis.com/fcm/send";
pub const ENDPOINT_ENV: &str = "FCM_SUBMIT_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushRequest {
    pub url: String,
    pub authorization: String,
    pub body: String,
}

/// What the push service answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub status: u16,
    pub body: String,
}

impl Delivery {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: PushRequest) -> Result<Delivery, Error>;
}

#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: PushRequest) -> Result<Delivery, Error> {
        let response = self
            .client
            .post(&request.url)
            .header(AUTHORIZATION, request.authorization)
            .header(CONTENT_TYPE, "application/json")
            .body(request.body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(Delivery { status, body })
    }
}

#[derive(Debug, Clone)]
pub struct Notifier<T = HttpTransport> {
    transport: T,
    endpoint: String,
}

impl Notifier<HttpTransport> {
    /// Posts to the FCM endpoint unless `FCM_SUBMIT_ENDPOINT` points elsewhere.
    pub fn new() -> Self {
        let endpoint = std::env::var(ENDPOINT_ENV)
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| FCM_ENDPOINT.to_string());
        Self::with_transport(HttpTransport::new(), endpoint)
    }
}

impl<T: Transport> Notifier<T> {
    pub fn with_transport(transport: T, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Encodes and sends a single notification. Any non-2xx answer is an error.
    pub async fn notify(&self, request: &NotificationRequest) -> Result<Delivery, Error> {
        let body = EncodedPayload::new(request).to_json()?;
        debug!(endpoint = %self.endpoint, "payload : {}", body);

        let delivery = self
            .transport
            .send(PushRequest {
                url: self.endpoint.clone(),
                authorization: format!("key={}", request.token),
                body,
            })
            .await?;

        debug!(status = delivery.status, "response : {}", delivery.body);

        if !delivery.is_success() {
            return Err(Error::Rejected {
                status: delivery.status,
                body: delivery.body,
            });
        }

        info!(status = delivery.status, "notification delivered");
        Ok(delivery)
    }
}
