use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthorizeError {
    #[error("missing form field: {0}")]
    MissingField(&'static str),

    #[error("authorization URL is not a valid Location header: {0}")]
    InvalidLocation(String),
}
