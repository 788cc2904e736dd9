use thiserror::Error;

#[derive(Error, Debug)]
pub enum HublookError {
    /// Single user-facing failure for anything that goes wrong between
    /// sending the GET and parsing the body. The UI never sees more detail.
    #[error("network error")]
    Network,

    #[error("http client error: {0}")]
    Http(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HublookError>;
