//! Delivery of contact messages through the EmailJS REST API.

use serde::Serialize;
use thiserror::Error;

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

pub const DELIVERY_FAILED: &str =
    "Error sending message. Please try again or contact me directly.";

/// Provider identifiers, baked in at build time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailConfig {
    /// Reads `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID` and `EMAILJS_PUBLIC_KEY`
    /// from the build environment. Absent values become empty strings and are
    /// sent as such; the provider then rejects the request.
    pub fn from_build_env() -> Self {
        Self {
            service_id: option_env!("EMAILJS_SERVICE_ID")
                .unwrap_or_default()
                .to_string(),
            template_id: option_env!("EMAILJS_TEMPLATE_ID")
                .unwrap_or_default()
                .to_string(),
            public_key: option_env!("EMAILJS_PUBLIC_KEY")
                .unwrap_or_default()
                .to_string(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.service_id.is_empty() && !self.template_id.is_empty() && !self.public_key.is_empty()
    }

    /// Logs a warning when any identifier is missing. Does not fail.
    pub fn warn_if_incomplete(&self) {
        if !self.is_complete() {
            log::warn!(
                "email delivery is not fully configured (service: {}, template: {}, key: {}); messages will fail to send",
                !self.service_id.is_empty(),
                !self.template_id.is_empty(),
                !self.public_key.is_empty(),
            );
        }
    }
}

/// Template parameters for one delivery. Built from sanitized form fields and
/// dropped once the call resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailPayload {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_name: String,
    pub reply_to: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub status: u16,
    pub text: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("network error: {0}")]
    Network(String),

    #[error("provider rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("could not read provider response: {0}")]
    Decode(String),
}

impl DeliveryError {
    /// Every delivery failure surfaces the same retry hint to the visitor.
    pub fn user_message(&self) -> &'static str {
        DELIVERY_FAILED
    }
}

impl From<reqwest::Error> for DeliveryError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

#[allow(async_fn_in_trait)]
pub trait EmailGateway {
    async fn send(
        &self,
        payload: &EmailPayload,
        config: &EmailConfig,
    ) -> Result<DeliveryReceipt, DeliveryError>;
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a EmailPayload,
}

fn request_body<'a>(payload: &'a EmailPayload, config: &'a EmailConfig) -> SendRequest<'a> {
    SendRequest {
        service_id: &config.service_id,
        template_id: &config.template_id,
        user_id: &config.public_key,
        template_params: payload,
    }
}

#[derive(Debug, Clone)]
pub struct EmailJsClient {
    http: reqwest::Client,
    endpoint: String,
}

impl EmailJsClient {
    pub fn new() -> Self {
        Self::with_endpoint(EMAILJS_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for EmailJsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailGateway for EmailJsClient {
    async fn send(
        &self,
        payload: &EmailPayload,
        config: &EmailConfig,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&request_body(payload, config))
            .send()
            .await?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| DeliveryError::Decode(e.to_string()))?;
        if status.is_success() {
            Ok(DeliveryReceipt {
                status: status.as_u16(),
                text,
            })
        } else {
            Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body: text,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    fn payload() -> EmailPayload {
        EmailPayload {
            from_name: "Ada".to_string(),
            from_email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "A message long enough".to_string(),
            to_name: "Salma El Rhaiti".to_string(),
            reply_to: "ada@example.com".to_string(),
        }
    }

    #[test]
    fn test_request_body_shape() {
        let config = EmailConfig {
            service_id: "service_x".to_string(),
            template_id: "template_y".to_string(),
            public_key: "key_z".to_string(),
        };
        let payload = payload();
        let body = serde_json::to_value(request_body(&payload, &config)).unwrap();
        assert_eq!(
            body,
            json!({
                "service_id": "service_x",
                "template_id": "template_y",
                "user_id": "key_z",
                "template_params": {
                    "from_name": "Ada",
                    "from_email": "ada@example.com",
                    "subject": "Hello",
                    "message": "A message long enough",
                    "to_name": "Salma El Rhaiti",
                    "reply_to": "ada@example.com",
                }
            })
        );
    }

    #[test]
    fn test_missing_config_is_passed_through_as_empty() {
        let config = EmailConfig::default();
        assert!(!config.is_complete());
        let payload = payload();
        let body = serde_json::to_value(request_body(&payload, &config)).unwrap();
        assert_eq!(body["service_id"], "");
        assert_eq!(body["user_id"], "");
    }

    #[test]
    fn test_complete_config() {
        let config = EmailConfig {
            service_id: "s".to_string(),
            template_id: "t".to_string(),
            public_key: "k".to_string(),
        };
        assert!(config.is_complete());
        let partial = EmailConfig {
            template_id: String::new(),
            ..config
        };
        assert!(!partial.is_complete());
    }

    #[test]
    fn test_every_failure_has_the_same_user_message() {
        let errors = [
            DeliveryError::Network("dns".to_string()),
            DeliveryError::Rejected {
                status: 400,
                body: "The service ID is invalid".to_string(),
            },
            DeliveryError::Decode("eof".to_string()),
        ];
        for err in errors {
            assert_eq!(err.user_message(), DELIVERY_FAILED);
        }
    }

    #[test]
    fn test_rejection_display_keeps_provider_detail() {
        let err = DeliveryError::Rejected {
            status: 412,
            body: "template not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "provider rejected the message (412): template not found"
        );
    }

    /// Serves one canned HTTP response on a local port and returns its URL.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = stream.read(&mut buf).unwrap();
                request.extend_from_slice(&buf[..n]);
                if n == 0 || request_complete(&request) {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: text/plain\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
        });
        format!("http://{addr}/api/v1.0/email/send")
    }

    fn request_complete(request: &[u8]) -> bool {
        let text = String::from_utf8_lossy(request);
        let Some(split) = text.find("\r\n\r\n") else {
            return false;
        };
        let length = text[..split]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        request.len() >= split + 4 + length
    }

    #[tokio::test]
    async fn test_send_success_returns_receipt() {
        let client = EmailJsClient::with_endpoint(serve_once("200 OK", "OK"));
        let receipt = client.send(&payload(), &EmailConfig::default()).await;
        assert_eq!(
            receipt,
            Ok(DeliveryReceipt {
                status: 200,
                text: "OK".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_send_non_success_is_rejected() {
        let client = EmailJsClient::with_endpoint(serve_once(
            "400 Bad Request",
            "The service ID is invalid",
        ));
        let result = client.send(&payload(), &EmailConfig::default()).await;
        assert_eq!(
            result,
            Err(DeliveryError::Rejected {
                status: 400,
                body: "The service ID is invalid".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_send_unreachable_is_network_error() {
        let addr = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();
        let client = EmailJsClient::with_endpoint(format!("http://{addr}/send"));
        let result = client.send(&payload(), &EmailConfig::default()).await;
        assert!(
            matches!(result, Err(DeliveryError::Network(_))),
            "{result:?}"
        );
    }

    #[test]
    fn test_client_defaults_to_emailjs() {
        assert_eq!(EmailJsClient::default().endpoint(), EMAILJS_ENDPOINT);
        assert_eq!(
            EmailJsClient::with_endpoint("http://localhost:9/send").endpoint(),
            "http://localhost:9/send"
        );
    }
}
