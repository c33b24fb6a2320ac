use thiserror::Error;

/// Everything that can stop a record from reaching the spreadsheet
///
/// The display text is what the relay sends back to the page.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("missing configuration: {0} is not set")]
    MissingConfig(&'static str),

    #[error("invalid private key: {0}")]
    InvalidKey(String),

    #[error("failed to sign service account token")]
    Signing,

    #[error("request to Google failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("token request rejected ({status}): {message}")]
    TokenRejected { status: u16, message: String },

    #[error("Google Sheets API error ({status}): {message}")]
    SheetsApi { status: u16, message: String },

    #[error("unexpected response from Google: {0}")]
    UnexpectedResponse(String),

    #[error("invalid request body: {0}")]
    MalformedBody(String),
}

pub type RelayResult<T> = Result<T, RelayError>;
