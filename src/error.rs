/// Errors returned by the Airtable client.
///
/// Every failure is classified into one of these buckets and surfaced
/// immediately to the caller. Nothing is retried and nothing is fatal to the
/// process; the caller decides what to do.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A required environment variable is unset or empty.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// The request URL was never resolved against a table name.
    #[error("invalid request: {message}")]
    InvalidRequest { message: String },

    /// The request could not be built or the network call itself failed
    /// (connection error, timeout, body read failure).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The request payload could not be encoded as JSON.
    #[error("payload encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    /// Airtable answered with an HTTP status >= 300.
    #[error("server returned HTTP {status} for {url}")]
    Server { status: u16, url: String },
}

impl Error {
    /// The HTTP status code, when this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
