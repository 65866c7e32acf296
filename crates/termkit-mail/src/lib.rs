//! Mail collaborators.
//!
//! Two ways of sending a message, both behind a transport trait so the
//! network side stays with the application:
//!
//! - [`SmtpMailer`] composes an [`OutgoingMail`] from [`SmtpSettings`]
//!   (read from `SMTP_*` environment variables) and hands it to an
//!   [`SmtpTransport`].
//! - [`MailApiClient`] posts a JSON payload to a mailing HTTP API through an
//!   [`HttpTransport`] and checks for `201 Created`.

pub mod api;
mod error;
pub mod settings;
pub mod smtp;

pub use api::{HttpRequest, HttpResponse, HttpTransport, MailApiClient, MailApiConfig, MailPayload};
pub use error::MailError;
pub use settings::SmtpSettings;
pub use smtp::{MailLogEntry, OutgoingMail, SmtpMailer, SmtpTransport};
