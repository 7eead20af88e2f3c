//! The platform cookie store the bridge talks to.
//!
//! The bridge never stores cookies itself. It hands header maps to a
//! [`CookieStore`] and reads header maps back, the same contract a platform
//! HTTP stack exposes through its cookie handler.

use std::collections::HashMap;
use std::io;
use std::sync::Arc;
use url::Url;

/// Header name to list of values. Names are compared exactly as presented.
pub type HeaderLists = HashMap<String, Vec<String>>;

/// One-shot completion callback for [`CookieStore::clear_all`].
pub type ClearCallback = Box<dyn FnOnce() + Send + 'static>;

/// A cookie jar owned by the platform.
///
/// Implementations own storage, matching, expiry, and eviction; they are
/// expected to serialize access to their own state.
pub trait CookieStore: Send + Sync {
    /// Apply response headers (typically `Set-Cookie`) received from `uri`.
    fn put(&self, uri: &Url, headers: &HeaderLists) -> io::Result<()>;

    /// Return the request headers (typically `Cookie`) to send to `uri`.
    fn get(&self, uri: &Url, headers: &HeaderLists) -> io::Result<HeaderLists>;

    /// Remove every cookie, then call `on_complete` exactly once.
    fn clear_all(&self, on_complete: ClearCallback);
}

/// Blanket implementation for Arc-wrapped stores.
impl<S: CookieStore + ?Sized> CookieStore for Arc<S> {
    fn put(&self, uri: &Url, headers: &HeaderLists) -> io::Result<()> {
        (**self).put(uri, headers)
    }

    fn get(&self, uri: &Url, headers: &HeaderLists) -> io::Result<HeaderLists> {
        (**self).get(uri, headers)
    }

    fn clear_all(&self, on_complete: ClearCallback) {
        (**self).clear_all(on_complete)
    }
}

/// Build a header map holding a single value under `name`.
pub fn single_header(name: &str, value: impl Into<String>) -> HeaderLists {
    let mut headers = HeaderLists::with_capacity(1);
    headers.insert(name.to_string(), vec![value.into()]);
    headers
}
