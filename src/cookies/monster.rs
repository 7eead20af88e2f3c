use crate::cookies::canonical_cookie::CanonicalCookie;
use crate::cookies::store::{ClearCallback, CookieStore, HeaderLists};
use dashmap::DashMap;
use std::io;
use std::sync::Arc;
use time::OffsetDateTime;
use url::Url;

/// Maximum cookies per domain (Chromium default).
const MAX_COOKIES_PER_DOMAIN: usize = 50;

/// Maximum total cookies.
const MAX_COOKIES_TOTAL: usize = 3000;

/// Upper bound on cookie lifetime (RFC 6265bis, 400 days).
const MAX_COOKIE_AGE: time::Duration = time::Duration::days(400);

/// Header the store answers reads with.
const COOKIE_HEADER: &str = "Cookie";

/// In-memory cookie jar implementing [`CookieStore`].
///
/// Stands in for the platform's native jar: it owns domain and path matching,
/// expiry, and eviction, none of which the bridge does itself.
#[derive(Clone)]
pub struct CookieMonster {
    // Store: Map<Domain, List<Cookie>>
    store: Arc<DashMap<String, Vec<CanonicalCookie>>>,
}

impl Default for CookieMonster {
    fn default() -> Self {
        Self::new()
    }
}

impl CookieMonster {
    pub fn new() -> Self {
        Self {
            store: Arc::new(DashMap::new()),
        }
    }

    pub fn set_canonical_cookie(&self, cookie: CanonicalCookie) {
        let mut entry = self.store.entry(cookie.domain.clone()).or_default();

        // Same name and path replaces
        entry.retain(|c| c.name != cookie.name || c.path != cookie.path);

        while entry.len() >= MAX_COOKIES_PER_DOMAIN {
            let Some(oldest_idx) = entry
                .iter()
                .enumerate()
                .min_by_key(|(_, c)| c.creation_time)
                .map(|(i, _)| i)
            else {
                break;
            };
            entry.remove(oldest_idx);
        }

        entry.push(cookie);
        drop(entry); // Release lock before checking global count

        self.enforce_global_limit();
    }

    /// Evict the oldest cookies across all domains until under the cap.
    fn enforce_global_limit(&self) {
        while self.total_cookie_count() > MAX_COOKIES_TOTAL {
            let mut oldest: Option<(String, usize, OffsetDateTime)> = None;

            for entry in self.store.iter() {
                for (idx, cookie) in entry.value().iter().enumerate() {
                    let older = oldest
                        .as_ref()
                        .map_or(true, |(_, _, t)| cookie.creation_time < *t);
                    if older {
                        oldest = Some((entry.key().clone(), idx, cookie.creation_time));
                    }
                }
            }

            let Some((domain, idx, _)) = oldest else {
                break;
            };
            if let Some(mut entry) = self.store.get_mut(&domain) {
                if idx < entry.len() {
                    entry.remove(idx);
                }
            }
        }
    }

    /// Get cookies matching the URL, longest path first then oldest first.
    pub fn get_cookies_for_url(&self, url: &Url) -> Vec<CanonicalCookie> {
        let mut result = Vec::new();
        let host = url.host_str().unwrap_or("");
        let now = OffsetDateTime::now_utc();

        for domain in Self::get_matching_domains(host) {
            let Some(entry) = self.store.get(&domain) else {
                continue;
            };
            result.extend(
                entry
                    .iter()
                    .filter(|c| Self::domain_matches(&c.domain, host, c.host_only))
                    .filter(|c| Self::path_matches(&c.path, url.path()))
                    .filter(|c| !c.secure || url.scheme() == "https")
                    .filter(|c| !c.is_expired(now))
                    .cloned(),
            );
        }

        result.sort_by(|a, b| {
            b.path
                .len()
                .cmp(&a.path.len())
                .then_with(|| a.creation_time.cmp(&b.creation_time))
        });

        result
    }

    /// RFC 6265 domain matching.
    fn domain_matches(cookie_domain: &str, request_host: &str, host_only: bool) -> bool {
        if host_only {
            return cookie_domain.eq_ignore_ascii_case(request_host);
        }

        let cookie_domain = cookie_domain.trim_start_matches('.');
        if request_host.eq_ignore_ascii_case(cookie_domain) {
            return true;
        }

        // request_host must end with ".cookie_domain"
        let (h, d) = (request_host.as_bytes(), cookie_domain.as_bytes());
        h.len() > d.len()
            && h[h.len() - d.len()..].eq_ignore_ascii_case(d)
            && h[h.len() - d.len() - 1] == b'.'
    }

    /// RFC 6265 path matching.
    fn path_matches(cookie_path: &str, request_path: &str) -> bool {
        if request_path == cookie_path {
            return true;
        }

        match request_path.strip_prefix(cookie_path) {
            Some(rest) => cookie_path.ends_with('/') || rest.starts_with('/'),
            None => false,
        }
    }

    /// The host itself and all parent domains.
    /// For "foo.bar.example.com": "bar.example.com", "example.com".
    fn get_matching_domains(host: &str) -> Vec<String> {
        let mut domains = vec![host.to_lowercase()];

        let parts: Vec<&str> = host.split('.').collect();
        for i in 1..parts.len().saturating_sub(1) {
            domains.push(parts[i..].join(".").to_lowercase());
        }

        domains
    }

    /// Parse one `Set-Cookie` line received from `url` and store it.
    ///
    /// Returns false when the line is rejected (unparsable, foreign domain,
    /// or an invalid `__Secure-`/`__Host-` prefix), like browsers do silently.
    pub fn parse_and_save_cookie(&self, url: &Url, cookie_line: &str) -> bool {
        let parsed = match cookie::Cookie::parse(cookie_line) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "failed to parse cookie line");
                return false;
            }
        };

        let now = OffsetDateTime::now_utc();
        let host = url.host_str().unwrap_or("").to_lowercase();

        let (domain, host_only) = match parsed.domain() {
            Some(d) => {
                let d = d.trim_start_matches('.').to_lowercase();
                if !Self::domain_matches(&d, &host, false) {
                    tracing::debug!(url = %url, domain = %d, "cookie domain does not cover host");
                    return false;
                }
                (d, false)
            }
            None => (host, true),
        };

        // Max-Age takes precedence over Expires; both are capped at MAX_COOKIE_AGE
        let expiration_time = match parsed.max_age() {
            Some(max_age) => Some(now.checked_add(max_age.min(MAX_COOKIE_AGE)).unwrap_or(now)),
            None => parsed
                .expires()
                .and_then(|e| e.datetime())
                .map(|at| at.min(now + MAX_COOKIE_AGE)),
        };

        let cookie = CanonicalCookie {
            name: parsed.name().to_string(),
            value: parsed.value().to_string(),
            domain,
            path: parsed.path().unwrap_or("/").to_string(),
            creation_time: now,
            expiration_time,
            secure: parsed.secure().unwrap_or(false),
            host_only,
        };

        if !cookie.has_valid_prefix(url.scheme() == "https") {
            tracing::debug!(url = %url, name = %cookie.name, "rejecting cookie with invalid prefix");
            return false;
        }

        self.set_canonical_cookie(cookie);
        true
    }

    /// Get total cookie count.
    pub fn total_cookie_count(&self) -> usize {
        self.store.iter().map(|e| e.value().len()).sum()
    }

    /// Clear all cookies.
    pub fn clear(&self) {
        self.store.clear();
    }
}

impl CookieStore for CookieMonster {
    fn put(&self, uri: &Url, headers: &HeaderLists) -> io::Result<()> {
        for (name, values) in headers {
            if !name.eq_ignore_ascii_case("set-cookie") {
                continue;
            }
            for line in values {
                self.parse_and_save_cookie(uri, line);
            }
        }
        Ok(())
    }

    fn get(&self, uri: &Url, _headers: &HeaderLists) -> io::Result<HeaderLists> {
        let cookies = self.get_cookies_for_url(uri);
        let mut response = HeaderLists::new();
        if !cookies.is_empty() {
            let line = cookies
                .iter()
                .map(CanonicalCookie::pair)
                .collect::<Vec<_>>()
                .join("; ");
            response.insert(COOKIE_HEADER.to_string(), vec![line]);
        }
        Ok(response)
    }

    fn clear_all(&self, on_complete: ClearCallback) {
        self.clear();
        on_complete();
    }
}
