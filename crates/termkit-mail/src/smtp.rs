//! Sending through SMTP.
//!
//! [`SmtpMailer`] resolves the sender, logs the message and passes an
//! [`OutgoingMail`] to its [`SmtpTransport`]. Connecting to the server is
//! the transport's job.
//!
//! ```rust
//! use termkit_mail::{MailError, OutgoingMail, SmtpMailer, SmtpSettings, SmtpTransport};
//!
//! struct Accept;
//!
//! impl SmtpTransport for Accept {
//!     fn deliver(&self, _: &SmtpSettings, mail: &OutgoingMail) -> Result<bool, MailError> {
//!         Ok(mail.to.contains('@'))
//!     }
//! }
//!
//! let mailer = SmtpMailer::new(SmtpSettings::default(), Accept)
//!     .sender("Billing", "billing@example.com");
//! assert!(mailer.send("<p>Paid</p>", "ada@example.com", "Receipt", true).unwrap());
//! ```

use chrono::Local;
use serde::Serialize;

use crate::error::MailError;
use crate::settings::SmtpSettings;

/// Format of the timestamp in mail log entries.
pub const LOG_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A fully addressed message, ready for a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub from: String,
    pub from_name: String,
    pub to: String,
    pub subject: String,
    pub body: String,
    pub is_html: bool,
}

/// What gets logged for every message sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MailLogEntry {
    pub datetime: String,
    pub from: String,
    pub from_name: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl MailLogEntry {
    fn for_mail(mail: &OutgoingMail) -> Self {
        Self {
            datetime: Local::now().format(LOG_TIME_FORMAT).to_string(),
            from: mail.from.clone(),
            from_name: mail.from_name.clone(),
            to: mail.to.clone(),
            subject: mail.subject.clone(),
            body: mail.body.clone(),
        }
    }

    /// The entry as one line of JSON, as it appears in the log.
    pub fn to_json(&self) -> Result<String, MailError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Delivers composed messages to an SMTP server.
pub trait SmtpTransport: Send + Sync {
    /// Deliver `mail` using `settings`. Returns whether the server accepted it.
    fn deliver(&self, settings: &SmtpSettings, mail: &OutgoingMail) -> Result<bool, MailError>;
}

#[derive(Debug, Clone)]
struct Sender {
    name: String,
    email: String,
}

pub struct SmtpMailer<T: SmtpTransport> {
    settings: SmtpSettings,
    transport: T,
    sender: Option<Sender>,
}

impl<T: SmtpTransport> SmtpMailer<T> {
    pub fn new(settings: SmtpSettings, transport: T) -> Self {
        Self {
            settings,
            transport,
            sender: None,
        }
    }

    /// A mailer using the process-wide settings from [`SmtpSettings::global`].
    pub fn from_env(transport: T) -> Result<Self, MailError> {
        Ok(Self::new(SmtpSettings::global()?.clone(), transport))
    }

    /// Send as `name <email>` instead of the configured sender.
    pub fn sender(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.sender = Some(Sender {
            name: name.into(),
            email: email.into(),
        });
        self
    }

    pub fn settings(&self) -> &SmtpSettings {
        &self.settings
    }

    /// The message `send` would deliver.
    pub fn compose(&self, body: &str, recipient: &str, subject: &str, is_html: bool) -> OutgoingMail {
        let (from_name, from) = match &self.sender {
            Some(sender) => (sender.name.clone(), sender.email.clone()),
            None => (
                self.settings.sender_name.clone(),
                self.settings.sender_email.clone(),
            ),
        };
        OutgoingMail {
            from,
            from_name,
            to: recipient.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
            is_html,
        }
    }

    /// Logs and delivers a message. Returns the transport's verdict.
    pub fn send(
        &self,
        body: &str,
        recipient: &str,
        subject: &str,
        is_html: bool,
    ) -> Result<bool, MailError> {
        let mail = self.compose(body, recipient, subject, is_html);
        let entry = MailLogEntry::for_mail(&mail).to_json()?;
        tracing::info!(target: "termkit_mail::email", %entry, "sending email");
        self.transport.deliver(&self.settings, &mail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        sent: Mutex<Vec<OutgoingMail>>,
    }

    impl SmtpTransport for Recorder {
        fn deliver(&self, _: &SmtpSettings, mail: &OutgoingMail) -> Result<bool, MailError> {
            self.sent.lock().unwrap().push(mail.clone());
            Ok(true)
        }
    }

    fn settings() -> SmtpSettings {
        SmtpSettings {
            sender_email: "noreply@example.com".into(),
            sender_name: "Example".into(),
            ..SmtpSettings::default()
        }
    }

    #[test]
    fn test_default_sender_from_settings() {
        let mailer = SmtpMailer::new(settings(), Recorder::default());
        let mail = mailer.compose("hi", "ada@example.com", "Hello", false);
        assert_eq!(mail.from, "noreply@example.com");
        assert_eq!(mail.from_name, "Example");
        assert!(!mail.is_html);
    }

    #[test]
    fn test_sender_override() {
        let mailer =
            SmtpMailer::new(settings(), Recorder::default()).sender("Billing", "billing@example.com");
        assert!(mailer.send("<b>x</b>", "ada@example.com", "Invoice", true).unwrap());
        let sent = mailer.transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].from, "billing@example.com");
        assert_eq!(sent[0].from_name, "Billing");
        assert_eq!(sent[0].to, "ada@example.com");
        assert_eq!(sent[0].subject, "Invoice");
        assert!(sent[0].is_html);
    }

    #[test]
    fn test_log_entry_shape() {
        let mailer = SmtpMailer::new(settings(), Recorder::default());
        let entry = MailLogEntry::for_mail(&mailer.compose("b", "t@example.com", "s", true));
        assert_eq!(entry.datetime.len(), "2024-01-01 00:00:00".len());
        let line = entry.to_json().unwrap();
        assert!(!line.contains('\n'));
        let json: serde_json::Value = serde_json::from_str(&line).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["datetime", "from", "fromName", "to", "subject", "body"]);
        assert_eq!(json["fromName"], "Example");
        assert_eq!(json["to"], "t@example.com");
    }
}
