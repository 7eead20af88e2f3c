//! Cookie bridge between an application runtime and a platform cookie store.
//!
//! The bridge does not keep cookies. It validates what the application sends,
//! reformats it into the header strings the platform store understands, and
//! turns the store's answers back into plain maps.
//!
//! # Architecture
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`bridge`] | [`CookieBridge`](bridge::CookieBridge), the operation surface |
//! | [`descriptor`] | Untyped object → [`CookieDescriptor`](descriptor::CookieDescriptor) |
//! | [`header`] | `Set-Cookie` serialization, `Cookie` header parsing |
//! | [`date`] | ISO-8601 → legacy cookie date |
//! | [`store`] | The [`CookieStore`](store::CookieStore) collaborator trait |
//! | [`config`] | Per-platform header names |
//! | [`monster`] | [`CookieMonster`](monster::CookieMonster), an in-memory store |
//!
//! # Setting and reading a cookie
//!
//! ```rust
//! use cookiebridge::cookies::bridge::CookieBridge;
//! use cookiebridge::cookies::monster::CookieMonster;
//! use serde_json::json;
//!
//! let bridge = CookieBridge::new(CookieMonster::new());
//! let cookie = json!({
//!     "name": "session",
//!     "value": "abc123",
//!     "origin": "https://example.com",
//!     "path": "/",
//!     "expiration": "2099-01-15T10:30:00.000Z",
//! });
//! bridge.set_from_bag(cookie.as_object().unwrap())?;
//!
//! let cookies = bridge.get("https://example.com/account")?;
//! assert_eq!(cookies["session"], "abc123");
//! # Ok::<(), cookiebridge::base::neterror::NetError>(())
//! ```
//!
//! # Operations
//!
//! | Operation | Result |
//! |-----------|--------|
//! | `set` / `set_from_bag` | `Ok(())` or a validation, date, URL, or store error |
//! | `get` | Cookie map, empty when nothing is stored |
//! | `set_from_response` | `Ok(false)` when the store refuses the write |
//! | `get_all` | Always `NotSupported` |
//! | `clear_all` | Completes once the store signals it |

pub mod bridge;
pub mod canonical_cookie;
pub mod config;
pub mod date;
pub mod descriptor;
pub mod header;
pub mod monster;
pub mod store;
