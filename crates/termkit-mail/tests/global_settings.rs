//! Process-environment settings. These tests touch real environment
//! variables and run serially.

use serial_test::serial;
use termkit_mail::{MailError, OutgoingMail, SmtpMailer, SmtpSettings, SmtpTransport};
use termkit_render::terminal::RealEnv;

struct Echo;

impl SmtpTransport for Echo {
    fn deliver(&self, settings: &SmtpSettings, mail: &OutgoingMail) -> Result<bool, MailError> {
        Ok(!settings.host.is_empty() && mail.from == settings.sender_email)
    }
}

fn set_smtp_env() {
    std::env::set_var("SMTP_HOST", "smtp.example.com");
    std::env::set_var("SMTP_PORT", "465");
    std::env::set_var("REQUIRE_TLS", "on");
    std::env::set_var("SENDER_EMAIL", "robot@example.com");
    std::env::set_var("SENDER_NAME", "Robot");
}

#[test]
#[serial]
fn reads_process_environment() {
    set_smtp_env();
    let settings = SmtpSettings::from_env(&RealEnv).unwrap();
    assert_eq!(settings.host, "smtp.example.com");
    assert_eq!(settings.port, 465);
    assert!(settings.require_tls);
}

#[test]
#[serial]
fn global_settings_are_read_once() {
    set_smtp_env();
    let first = SmtpSettings::global().unwrap();
    std::env::set_var("SMTP_HOST", "changed.example.com");
    let second = SmtpSettings::global().unwrap();
    assert!(std::ptr::eq(first, second));
    assert_eq!(second.host, "smtp.example.com");
    std::env::set_var("SMTP_HOST", "smtp.example.com");
}

#[test]
#[serial]
fn mailer_from_env_uses_global_sender() {
    set_smtp_env();
    let mailer = SmtpMailer::from_env(Echo).unwrap();
    assert!(mailer.send("body", "ada@example.com", "Hello", false).unwrap());
}
