use thiserror::Error;

/// Failures talking to the account service.
///
/// `Rejected` is the service saying no (non-success status, optionally
/// with a `message` in the body); `Transport` covers connect, send and
/// timeout failures; `Decode` a success response whose body did not parse.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid API URL: {0}")]
    Config(String),
    #[error("request rejected ({status})")]
    Rejected { status: u16, message: Option<String> },
    #[error("network error: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("malformed response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl Error {
    /// Server-supplied message carried by a rejection, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Error::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// True for non-success status replies, as opposed to transport or
    /// decode failures.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Error::Rejected { .. })
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Decode(err)
        } else {
            Error::Transport(err)
        }
    }
}
