use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value;
use termkit::mail::{MailError, OutgoingMail, SmtpMailer, SmtpSettings, SmtpTransport};
use termkit::{BorderStyle, ColorChoice, ColumnSpec, Console, Form, ListStyle};
use tracing::{debug, info};

pub fn style(text: &str, styles: &str, color: ColorChoice) -> Result<()> {
    debug!(codes = ?termkit::compile_style(styles).as_slice(), "compiled style");
    let mut console = Console::stdout().color(color);
    console.println(text, styles)?;
    Ok(())
}

pub fn table(
    file: Option<&Path>,
    border: BorderStyle,
    header_style: Option<String>,
    columns: &[String],
    color: ColorChoice,
) -> Result<()> {
    let text = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read records from stdin")?;
            text
        }
    };
    let records = parse_records(&text)?;
    let columns = parse_columns(columns);
    debug!(
        records = records.len(),
        columns = columns.as_ref().map_or(0, ColumnSpec::len),
        "rendering table"
    );

    let mut console = Console::stdout().color(color).border(border);
    if let Some(styles) = header_style {
        console = console.header_style(styles);
    }
    console.table(&records, columns.as_ref())?;
    Ok(())
}

pub fn list(items: &[String], ordered: bool, bullet: String, format: String) -> Result<()> {
    let style = ListStyle::unordered()
        .set_ordered(ordered)
        .bullet(bullet)
        .format(format);
    let mut console = Console::stdout();
    console.list_items(items, &style)?;
    Ok(())
}

pub fn form(config: &Path, prefix: String, suffix: String, color: ColorChoice) -> Result<()> {
    let text = fs::read_to_string(config)
        .with_context(|| format!("Failed to read {}", config.display()))?;
    let form = Form::from_json(&text)
        .with_context(|| format!("Invalid form in {}", config.display()))?
        .prompt_prefix(prefix)
        .prompt_suffix(suffix);
    info!(path = %config.display(), fields = form.len(), "loaded form");

    let mut console = Console::stdout().color(color);
    let answers = console.input_form(&form)?;
    println!("{}", serde_json::to_string_pretty(&answers)?);
    Ok(())
}

/// Prints the composed message instead of contacting a server.
struct DryRun;

impl SmtpTransport for DryRun {
    fn deliver(&self, settings: &SmtpSettings, mail: &OutgoingMail) -> Result<bool, MailError> {
        println!("Server:  {}:{} (tls: {})", settings.host, settings.port, settings.require_tls);
        println!("From:    {} <{}>", mail.from_name, mail.from);
        println!("To:      {}", mail.to);
        println!("Subject: {}", mail.subject);
        println!("HTML:    {}", mail.is_html);
        println!();
        println!("{}", mail.body);
        Ok(true)
    }
}

pub fn mail(to: &str, subject: &str, body: &str, is_html: bool, from: Option<&str>) -> Result<()> {
    let mut mailer = SmtpMailer::from_env(DryRun).context("Failed to load SMTP settings")?;
    if let Some(from) = from {
        let (name, email) = parse_sender(from)?;
        mailer = mailer.sender(name, email);
    }
    let delivered = mailer.send(body, to, subject, is_html)?;
    debug!(delivered, "dry run finished");
    Ok(())
}

fn parse_records(text: &str) -> Result<Vec<Value>> {
    match serde_json::from_str(text).context("Records are not valid JSON")? {
        Value::Array(records) => Ok(records),
        other => Ok(vec![other]),
    }
}

/// `KEY` or `KEY=LABEL` arguments; `None` when no column was given.
fn parse_columns(args: &[String]) -> Option<ColumnSpec> {
    if args.is_empty() {
        return None;
    }
    Some(
        args.iter()
            .map(|arg| match arg.split_once('=') {
                Some((key, label)) => (key, label),
                None => (arg.as_str(), arg.as_str()),
            })
            .collect(),
    )
}

/// `Name <email>`.
fn parse_sender(from: &str) -> Result<(String, String)> {
    let Some((name, rest)) = from.split_once('<') else {
        bail!("Sender must look like \"Name <email>\", got {:?}", from);
    };
    let Some(email) = rest.strip_suffix('>') else {
        bail!("Sender must look like \"Name <email>\", got {:?}", from);
    };
    Ok((name.trim().to_string(), email.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_records_array() {
        let records = parse_records(r#"[{"a": 1}, {"a": 2}]"#).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_parse_records_single_object() {
        let records = parse_records(r#"{"a": 1}"#).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_parse_records_invalid() {
        assert!(parse_records("[1,").is_err());
    }

    #[test]
    fn test_parse_columns() {
        assert_eq!(parse_columns(&[]), None);
        let columns = parse_columns(&["id".to_string(), "name=Customer".to_string()]).unwrap();
        assert_eq!(
            columns.iter().collect::<Vec<_>>(),
            vec![("id", "id"), ("name", "Customer")]
        );
    }

    #[test]
    fn test_parse_sender() {
        assert_eq!(
            parse_sender("Billing Team <billing@example.com>").unwrap(),
            ("Billing Team".to_string(), "billing@example.com".to_string())
        );
        assert!(parse_sender("billing@example.com").is_err());
    }
}
