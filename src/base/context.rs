//! Ergonomic error context helpers.
//!
//! Provides an extension trait for adding context to `Result` types,
//! converting IO errors raised by a cookie store into context-rich
//! `NetError` variants.

use crate::base::neterror::NetError;
use std::io;
use url::Url;

/// Extension trait for adding context to IO Results.
pub trait StoreResultExt<T> {
    /// Add the store origin to an IO error.
    ///
    /// # Example
    /// ```ignore
    /// use cookiebridge::base::context::StoreResultExt;
    ///
    /// store.put(&origin, &headers).store_context(&origin)?;
    /// // Error: "Cookie store I/O failed for https://example.com/: disk full"
    /// ```
    fn store_context(self, origin: &Url) -> Result<T, NetError>;
}

impl<T> StoreResultExt<T> for Result<T, io::Error> {
    fn store_context(self, origin: &Url) -> Result<T, NetError> {
        self.map_err(|e| NetError::store_io(origin.as_str(), e))
    }
}
