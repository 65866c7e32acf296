//! Sending through a mailing HTTP API.
//!
//! The API takes a JSON payload at `{base}/api/mailing/v1/send`, identifies
//! the caller through the `Ds-Domain` and `Ds-Appsecret` headers and answers
//! `201 Created` on success.

use serde::Serialize;

use crate::error::MailError;

/// Path appended to the configured base URL.
pub const SEND_PATH: &str = "/api/mailing/v1/send";

/// The only status treated as success.
pub const CREATED: u16 = 201;

/// Where and as whom to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailApiConfig {
    pub base_url: String,
    /// Sent in the `Ds-Domain` header.
    pub domain: String,
    /// Sent in the `Ds-Appsecret` header.
    pub app_secret: String,
    pub sender_email: String,
    pub sender_name: String,
}

/// JSON body of a send request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MailPayload {
    pub content: String,
    pub subject: String,
    pub mail_to: String,
    pub from_email: String,
    pub from_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Performs HTTP POST requests.
pub trait HttpTransport: Send + Sync {
    fn post(&self, request: &HttpRequest) -> Result<HttpResponse, MailError>;
}

pub struct MailApiClient<T: HttpTransport> {
    config: MailApiConfig,
    transport: T,
}

impl<T: HttpTransport> MailApiClient<T> {
    pub fn new(config: MailApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn payload(&self, content: &str, recipient: &str, subject: &str) -> MailPayload {
        MailPayload {
            content: content.to_string(),
            subject: subject.to_string(),
            mail_to: recipient.to_string(),
            from_email: self.config.sender_email.clone(),
            from_name: self.config.sender_name.clone(),
        }
    }

    /// The request `send` would post.
    pub fn request(
        &self,
        content: &str,
        recipient: &str,
        subject: &str,
    ) -> Result<HttpRequest, MailError> {
        let body = serde_json::to_string(&self.payload(content, recipient, subject))?;
        Ok(HttpRequest {
            url: format!("{}{}", self.config.base_url.trim_end_matches('/'), SEND_PATH),
            headers: vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("Ds-Domain".to_string(), self.config.domain.clone()),
                ("Ds-Appsecret".to_string(), self.config.app_secret.clone()),
            ],
            body,
        })
    }

    /// Posts the message. Any status other than 201 is an error.
    pub fn send(&self, content: &str, recipient: &str, subject: &str) -> Result<(), MailError> {
        let request = self.request(content, recipient, subject)?;
        let response = self.transport.post(&request)?;
        if response.status != CREATED {
            tracing::warn!(status = response.status, url = %request.url, "mailing API rejected message");
            return Err(MailError::UnexpectedStatus {
                status: response.status,
                body: response.body,
            });
        }
        tracing::info!(to = recipient, subject, "email queued through mailing API");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Fixed {
        status: u16,
        seen: Mutex<Option<HttpRequest>>,
    }

    impl Fixed {
        fn new(status: u16) -> Self {
            Self {
                status,
                seen: Mutex::new(None),
            }
        }
    }

    impl HttpTransport for Fixed {
        fn post(&self, request: &HttpRequest) -> Result<HttpResponse, MailError> {
            *self.seen.lock().unwrap() = Some(request.clone());
            Ok(HttpResponse {
                status: self.status,
                body: String::new(),
            })
        }
    }

    fn config() -> MailApiConfig {
        MailApiConfig {
            base_url: "http://mail.internal/".into(),
            domain: "shop.example.com".into(),
            app_secret: "s3cret".into(),
            sender_email: "system@example.com".into(),
            sender_name: "Shop".into(),
        }
    }

    #[test]
    fn test_request_shape() {
        let client = MailApiClient::new(config(), Fixed::new(201));
        let request = client.request("Hi", "ada@example.com", "Welcome").unwrap();
        assert_eq!(request.url, "http://mail.internal/api/mailing/v1/send");
        assert_eq!(request.header("ds-domain"), Some("shop.example.com"));
        assert_eq!(request.header("Ds-Appsecret"), Some("s3cret"));
        assert_eq!(
            request.body,
            r#"{"content":"Hi","subject":"Welcome","mailTo":"ada@example.com","fromEmail":"system@example.com","fromName":"Shop"}"#
        );
    }

    #[test]
    fn test_created_is_success() {
        let client = MailApiClient::new(config(), Fixed::new(201));
        client.send("Hi", "ada@example.com", "Welcome").unwrap();
        assert!(client.transport.seen.lock().unwrap().is_some());
    }

    #[test]
    fn test_other_statuses_fail() {
        for status in [200, 202, 400, 500] {
            let client = MailApiClient::new(config(), Fixed::new(status));
            let err = client.send("Hi", "ada@example.com", "Welcome").unwrap_err();
            assert!(
                matches!(err, MailError::UnexpectedStatus { status: s, .. } if s == status),
                "{status}"
            );
        }
    }
}
