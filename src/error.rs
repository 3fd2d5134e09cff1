use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    /// The service answered with a status code of 300 or above.
    #[error("Error in spreadsheet request ({status}): {body}")]
    Request { status: u16, body: String },
    /// The response was not the XML we expected.
    #[error("Malformed feed: {0}")]
    Parse(String),
    #[error("No link with rel \"{0}\"")]
    LinkNotFound(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// The request never produced a status code (connection, TLS, body read).
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Status code of a failed request, if this error came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(e: quick_xml::Error) -> Self {
        Error::Parse(e.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(e: quick_xml::events::attributes::AttrError) -> Self {
        Error::Parse(e.to_string())
    }
}
