//! # cookiebridge
//!
//! Exposes a platform cookie store to an application runtime through a small
//! request/response surface.
//!
//! The platform's HTTP stack owns the cookie jar: storage, domain and path
//! matching, expiry, and eviction. `cookiebridge` validates cookie
//! descriptions coming from the application, serializes them into the
//! `Set-Cookie` strings the jar accepts, and parses the jar's `Cookie` header
//! back into a name/value map.
//!
//! ## Quick Start
//!
//! ```rust
//! use cookiebridge::cookies::bridge::CookieBridge;
//! use cookiebridge::cookies::descriptor::CookieDescriptor;
//! use cookiebridge::cookies::monster::CookieMonster;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), cookiebridge::base::neterror::NetError> {
//! let bridge = CookieBridge::new(CookieMonster::new());
//!
//! let cookie = CookieDescriptor::new("session", "abc123", "https://example.com")
//!     .path("/")
//!     .expiration("2099-01-15T10:30:00.000Z");
//! bridge.set(&cookie)?;
//!
//! assert_eq!(bridge.get("https://example.com")?["session"], "abc123");
//!
//! bridge.clear_all().await;
//! assert!(bridge.get("https://example.com")?.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error definitions and error context helpers
//! - [`cookies`] - The bridge, header formats, and the store contract
//!
//! ## Platform store
//!
//! Any type implementing [`CookieStore`](cookies::store::CookieStore) can back
//! the bridge. The store is passed in explicitly; the bridge never reaches for
//! a global jar. [`CookieMonster`](cookies::monster::CookieMonster) is an
//! in-memory implementation for tests and hosts without a native jar.

pub mod base;
pub mod cookies;
