//! The operation surface the application runtime calls into.

use crate::base::context::StoreResultExt;
use crate::base::neterror::NetError;
use crate::cookies::config::BridgeConfig;
use crate::cookies::descriptor::CookieDescriptor;
use crate::cookies::header::{self, CookieMap};
use crate::cookies::store::{single_header, CookieStore, HeaderLists};
use serde_json::{Map, Value};
use tokio::sync::oneshot;
use url::Url;

/// Adapter between an application runtime and a platform [`CookieStore`].
///
/// Every call is self-contained: the bridge keeps no cookie state, it only
/// validates, reformats, and forwards.
///
/// # Example
///
/// ```rust
/// use cookiebridge::cookies::bridge::CookieBridge;
/// use cookiebridge::cookies::descriptor::CookieDescriptor;
/// use cookiebridge::cookies::monster::CookieMonster;
///
/// let bridge = CookieBridge::new(CookieMonster::new());
/// bridge.set(&CookieDescriptor::new("theme", "dark", "https://example.com"))?;
///
/// let cookies = bridge.get("https://example.com")?;
/// assert_eq!(cookies["theme"], "dark");
/// # Ok::<(), cookiebridge::base::neterror::NetError>(())
/// ```
pub struct CookieBridge<S> {
    store: S,
    config: BridgeConfig,
}

impl<S: CookieStore> CookieBridge<S> {
    /// Name the bridge registers under with the application runtime.
    pub const NAME: &'static str = "RNCookieManagerAndroid";

    pub fn new(store: S) -> Self {
        Self::with_config(store, BridgeConfig::default())
    }

    pub fn with_config(store: S, config: BridgeConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Store a cookie described by the application.
    ///
    /// Validation and date conversion both happen before the store is
    /// touched, so a failed call never leaves a partial write behind.
    pub fn set(&self, cookie: &CookieDescriptor) -> Result<(), NetError> {
        cookie.validate()?;
        let line = header::to_set_cookie(cookie)?;
        let origin = Url::parse(&cookie.origin)?;

        let name = self.config.headers.set_cookie.as_ref();
        tracing::debug!(origin = %origin, header = name, cookie = %cookie.name, "writing cookie");
        self.store
            .put(&origin, &single_header(name, line))
            .store_context(&origin)
    }

    /// Parse an untyped cookie object and store it.
    pub fn set_from_bag(&self, bag: &Map<String, Value>) -> Result<(), NetError> {
        self.set(&CookieDescriptor::from_bag(bag)?)
    }

    /// Apply a raw `Set-Cookie` value received in some response from `url`.
    ///
    /// Returns `Ok(false)` when the store refused the write; the cause is
    /// logged but not surfaced.
    pub fn set_from_response(&self, url: &str, raw: &str) -> Result<bool, NetError> {
        let uri = Url::parse(url)?;
        let name = self.config.headers.response_set_cookie.as_ref();

        match self.store.put(&uri, &single_header(name, raw)) {
            Ok(()) => {
                tracing::debug!(origin = %uri, header = name, "applied response cookie");
                Ok(true)
            }
            Err(e) => {
                tracing::warn!(origin = %uri, error = %e, "cookie store rejected response cookie");
                Ok(false)
            }
        }
    }

    /// Response cookies are not exposed by the platform; the url is echoed.
    pub fn get_from_response(&self, url: &str) -> String {
        url.to_string()
    }

    /// Read the cookies the store would send to `url`.
    pub fn get(&self, url: &str) -> Result<CookieMap, NetError> {
        let uri = Url::parse(url)?;
        let response = self
            .store
            .get(&uri, &HeaderLists::new())
            .store_context(&uri)?;

        let name = self.config.headers.cookie.as_ref();
        let cookies = response
            .get(name)
            .and_then(|values| values.first())
            .map(|line| header::parse_cookie_header(line))
            .unwrap_or_default();

        tracing::debug!(origin = %uri, count = cookies.len(), "read cookies");
        Ok(cookies)
    }

    /// The platform offers no way to enumerate its whole jar.
    pub fn get_all(&self) -> Result<CookieMap, NetError> {
        Err(NetError::NotSupported {
            operation: "getAll",
            hint: "read cookies per url with get(url)",
        })
    }

    /// Remove every cookie from the store.
    ///
    /// Resolves once the store signals completion. A store that drops the
    /// callback without calling it is treated as done.
    pub async fn clear_all(&self) {
        let (tx, rx) = oneshot::channel();
        self.store.clear_all(Box::new(move || {
            let _ = tx.send(());
        }));

        if rx.await.is_err() {
            tracing::warn!("cookie store dropped clear callback without firing it");
        } else {
            tracing::debug!("cleared all cookies");
        }
    }

    /// Native requests and web views already share one jar here.
    pub fn rewrite_cookies_to_webkit(&self, url: &str) -> Result<(), NetError> {
        tracing::debug!(url = %url, "webkit rewrite is a no-op on this platform");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookies::config::{HeaderNames, Platform};
    use crate::cookies::store::ClearCallback;
    use serde_json::json;
    use std::io;
    use std::sync::Mutex;

    /// Records every write and answers reads with a canned header map.
    #[derive(Default)]
    struct RecordingStore {
        puts: Mutex<Vec<(String, HeaderLists)>>,
        response: HeaderLists,
        fail_put: bool,
    }

    impl CookieStore for RecordingStore {
        fn put(&self, uri: &Url, headers: &HeaderLists) -> io::Result<()> {
            if self.fail_put {
                return Err(io::Error::new(io::ErrorKind::Other, "jar is read-only"));
            }
            self.puts
                .lock()
                .unwrap()
                .push((uri.to_string(), headers.clone()));
            Ok(())
        }

        fn get(&self, _uri: &Url, headers: &HeaderLists) -> io::Result<HeaderLists> {
            assert!(headers.is_empty());
            Ok(self.response.clone())
        }

        fn clear_all(&self, on_complete: ClearCallback) {
            on_complete();
        }
    }

    fn puts(store: &RecordingStore) -> Vec<(String, HeaderLists)> {
        store.puts.lock().unwrap().clone()
    }

    #[test]
    fn test_set_writes_serialized_cookie_under_android_header() {
        let bridge = CookieBridge::new(RecordingStore::default());
        let cookie = CookieDescriptor::new("foo", "bar", "https://example.com")
            .path("/")
            .expiration("2024-01-15T10:30:00.000Z");

        bridge.set(&cookie).unwrap();

        let writes = puts(bridge.store());
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].0, "https://example.com/");
        assert_eq!(
            writes[0].1["Set-cookie"],
            vec!["foo=bar; Path=/; Expires=Mon, 15 Jan 2024 10:30:00 GMT;".to_string()]
        );
    }

    #[test]
    fn test_set_uses_configured_header_casing() {
        let bridge = CookieBridge::with_config(
            RecordingStore::default(),
            BridgeConfig::for_platform(Platform::Generic),
        );
        bridge
            .set(&CookieDescriptor::new("a", "1", "https://example.com"))
            .unwrap();
        assert!(puts(bridge.store())[0].1.contains_key("Set-Cookie"));
    }

    #[test]
    fn test_set_missing_field_never_writes() {
        let bridge = CookieBridge::new(RecordingStore::default());
        let err = bridge
            .set_from_bag(json!({"name": "a", "origin": "https://example.com"}).as_object().unwrap())
            .unwrap_err();
        assert_eq!(err, NetError::missing_field("value"));
        assert!(puts(bridge.store()).is_empty());
    }

    #[test]
    fn test_set_bad_date_never_writes() {
        let bridge = CookieBridge::new(RecordingStore::default());
        let cookie =
            CookieDescriptor::new("a", "1", "https://example.com").expiration("not-a-date");
        assert!(matches!(
            bridge.set(&cookie),
            Err(NetError::CookieDateFormat { .. })
        ));
        assert!(puts(bridge.store()).is_empty());
    }

    #[test]
    fn test_set_invalid_origin() {
        let bridge = CookieBridge::new(RecordingStore::default());
        let cookie = CookieDescriptor::new("a", "1", "not a url");
        assert_eq!(bridge.set(&cookie), Err(NetError::InvalidUrl));
        assert!(puts(bridge.store()).is_empty());
    }

    #[test]
    fn test_set_propagates_store_failure() {
        let store = RecordingStore {
            fail_put: true,
            ..Default::default()
        };
        let bridge = CookieBridge::new(store);
        let err = bridge
            .set(&CookieDescriptor::new("a", "1", "https://example.com"))
            .unwrap_err();
        assert!(err.is_store_io());
    }

    #[test]
    fn test_set_from_response_swallows_store_failure() {
        let store = RecordingStore {
            fail_put: true,
            ..Default::default()
        };
        let bridge = CookieBridge::new(store);
        assert_eq!(
            bridge.set_from_response("https://example.com", "a=1"),
            Ok(false)
        );
    }

    #[test]
    fn test_set_from_response_passes_raw_value() {
        let bridge = CookieBridge::new(RecordingStore::default());
        assert_eq!(
            bridge.set_from_response("https://example.com", "a=1; HttpOnly"),
            Ok(true)
        );
        assert_eq!(
            puts(bridge.store())[0].1["Set-Cookie"],
            vec!["a=1; HttpOnly".to_string()]
        );
    }

    #[test]
    fn test_get_parses_first_cookie_value() {
        let mut response = HeaderLists::new();
        response.insert(
            "Cookie".into(),
            vec!["a=1; b=2; c".into(), "ignored=1".into()],
        );
        let bridge = CookieBridge::new(RecordingStore {
            response,
            ..Default::default()
        });

        let map = bridge.get("https://example.com").unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["a"], "1");
        assert_eq!(map["b"], "2");
    }

    #[test]
    fn test_get_header_lookup_is_case_sensitive() {
        let mut response = HeaderLists::new();
        response.insert("cookie".into(), vec!["a=1".into()]);
        let bridge = CookieBridge::new(RecordingStore {
            response,
            ..Default::default()
        });
        assert!(bridge.get("https://example.com").unwrap().is_empty());

        let mut response = HeaderLists::new();
        response.insert("cookie".into(), vec!["a=1".into()]);
        let lower = HeaderNames {
            cookie: "cookie".into(),
            ..HeaderNames::STANDARD
        };
        let bridge = CookieBridge::with_config(
            RecordingStore {
                response,
                ..Default::default()
            },
            BridgeConfig::default().with_headers(lower),
        );
        assert_eq!(bridge.get("https://example.com").unwrap()["a"], "1");
    }

    #[test]
    fn test_get_all_not_supported() {
        let bridge = CookieBridge::new(RecordingStore::default());
        assert!(matches!(
            bridge.get_all(),
            Err(NetError::NotSupported { .. })
        ));
    }

    #[test]
    fn test_passthrough_operations() {
        let bridge = CookieBridge::new(RecordingStore::default());
        assert_eq!(
            bridge.get_from_response("https://example.com/x"),
            "https://example.com/x"
        );
        assert!(bridge.rewrite_cookies_to_webkit("https://example.com").is_ok());
        assert!(puts(bridge.store()).is_empty());
    }

    #[tokio::test]
    async fn test_clear_all_completes() {
        let bridge = CookieBridge::new(RecordingStore::default());
        bridge.clear_all().await;
    }

    struct ForgetfulStore;

    impl CookieStore for ForgetfulStore {
        fn put(&self, _: &Url, _: &HeaderLists) -> io::Result<()> {
            Ok(())
        }

        fn get(&self, _: &Url, _: &HeaderLists) -> io::Result<HeaderLists> {
            Ok(HeaderLists::new())
        }

        fn clear_all(&self, on_complete: ClearCallback) {
            drop(on_complete);
        }
    }

    #[tokio::test]
    async fn test_clear_all_completes_when_callback_dropped() {
        let bridge = CookieBridge::new(ForgetfulStore);
        bridge.clear_all().await;
    }
}
