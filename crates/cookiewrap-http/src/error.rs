use std::convert::Infallible;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CookieError {
    /// `key` or `value` of a cookie directive is missing or not a string.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// An optional field of an untyped options object has the wrong shape.
    #[error("malformed cookie options: {0}")]
    Options(#[from] serde_json::Error),

    #[error("unrecognized HTTP date: {0}")]
    InvalidDate(String),
}

// Typed `CookieOptions` convert into themselves with `Infallible`.
impl From<Infallible> for CookieError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

pub type Result<T, E = CookieError> = std::result::Result<T, E>;
