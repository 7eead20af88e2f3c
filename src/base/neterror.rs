use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum NetError {
    // URL Errors
    #[error("Invalid URL")]
    InvalidUrl,

    // Cookie Bridge Errors
    #[error("Cookie field `{field}` must have a value")]
    CookieMissingField { field: &'static str },
    #[error("Cookie field `{field}` must be a string")]
    CookieInvalidField { field: &'static str },
    #[error("Cookie expiration `{input}` does not match yyyy-MM-ddTHH:mm:ss.SSSZ")]
    CookieDateFormat { input: String },
    #[error("Cookie store I/O failed for {origin}: {message}")]
    CookieStoreIo { origin: String, message: String },
    #[error("{operation} is not supported on this platform, {hint}")]
    NotSupported {
        operation: &'static str,
        hint: &'static str,
    },

    #[error("Unknown error: {0}")]
    Unknown(i32),
}

impl NetError {
    pub fn as_i32(&self) -> i32 {
        match self {
            NetError::InvalidUrl => -300,
            // Bridge errors (custom codes starting at -10000)
            NetError::CookieMissingField { .. } => -10001,
            NetError::CookieInvalidField { .. } => -10002,
            NetError::CookieDateFormat { .. } => -10003,
            NetError::CookieStoreIo { .. } => -10004,
            NetError::NotSupported { .. } => -10005,
            NetError::Unknown(code) => *code,
        }
    }

    /// Create a missing-field validation error.
    pub fn missing_field(field: &'static str) -> Self {
        NetError::CookieMissingField { field }
    }

    /// Create a date format error for the given input.
    pub fn date_format(input: impl Into<String>) -> Self {
        NetError::CookieDateFormat {
            input: input.into(),
        }
    }

    /// Create a store I/O error carrying the origin it was addressed to.
    pub fn store_io(origin: impl Into<String>, err: std::io::Error) -> Self {
        NetError::CookieStoreIo {
            origin: origin.into(),
            message: err.to_string(),
        }
    }

    /// Returns true for the validation family (missing or mistyped fields).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            NetError::CookieMissingField { .. } | NetError::CookieInvalidField { .. }
        )
    }

    /// Returns true if the error came from the platform store.
    pub fn is_store_io(&self) -> bool {
        matches!(self, NetError::CookieStoreIo { .. })
    }
}

/// Only variants without payload can be rebuilt from a code; the rest map to
/// `Unknown`.
impl From<i32> for NetError {
    fn from(code: i32) -> Self {
        match code {
            -300 => NetError::InvalidUrl,
            _ => NetError::Unknown(code),
        }
    }
}

impl From<url::ParseError> for NetError {
    fn from(_: url::ParseError) -> Self {
        NetError::InvalidUrl
    }
}
