#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Invalid SMTP port '{0}'")]
    InvalidPort(String),

    #[error("Mail transport failed: {0}")]
    Transport(String),

    #[error("Mailing API answered {status}, expected 201")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Could not encode mail payload: {0}")]
    Encode(#[from] serde_json::Error),
}
