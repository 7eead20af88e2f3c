//! Bridge configuration.
//!
//! Header names are matched by the platform store as plain strings, so their
//! casing is part of the platform contract and lives here as explicit
//! constants rather than being assumed.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// The platform the bridge is running against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Android,
    Generic,
}

/// Header names used when talking to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderNames {
    /// Key of the request header read back by `get`.
    pub cookie: Cow<'static, str>,
    /// Key `set` writes its serialized cookie under.
    pub set_cookie: Cow<'static, str>,
    /// Key `set_from_response` writes the raw response value under.
    pub response_set_cookie: Cow<'static, str>,
}

impl HeaderNames {
    /// RFC 6265 casing.
    pub const STANDARD: HeaderNames = HeaderNames {
        cookie: Cow::Borrowed("Cookie"),
        set_cookie: Cow::Borrowed("Set-Cookie"),
        response_set_cookie: Cow::Borrowed("Set-Cookie"),
    };

    /// Casing expected by the Android cookie handler, which keys version-zero
    /// cookies under `Set-cookie`.
    pub const ANDROID: HeaderNames = HeaderNames {
        cookie: Cow::Borrowed("Cookie"),
        set_cookie: Cow::Borrowed("Set-cookie"),
        response_set_cookie: Cow::Borrowed("Set-Cookie"),
    };

    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Android => Self::ANDROID,
            Platform::Generic => Self::STANDARD,
        }
    }
}

impl Default for HeaderNames {
    fn default() -> Self {
        Self::ANDROID
    }
}

/// Configuration options for [`CookieBridge`](crate::cookies::bridge::CookieBridge).
///
/// When deserialized without a `headers` section, the header names follow
/// `platform`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RawBridgeConfig")]
pub struct BridgeConfig {
    /// Platform the store belongs to.
    pub platform: Platform,

    /// Header names used with the store.
    pub headers: HeaderNames,
}

/// On-disk form of [`BridgeConfig`]; every section is optional.
#[derive(Default, Deserialize)]
#[serde(default)]
struct RawBridgeConfig {
    platform: Platform,
    headers: Option<HeaderNames>,
}

impl From<RawBridgeConfig> for BridgeConfig {
    fn from(raw: RawBridgeConfig) -> Self {
        let config = Self::for_platform(raw.platform);
        match raw.headers {
            Some(headers) => config.with_headers(headers),
            None => config,
        }
    }
}

impl BridgeConfig {
    /// Configuration with the header casing of `platform`.
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            platform,
            headers: HeaderNames::for_platform(platform),
        }
    }

    /// Override the header names.
    pub fn with_headers(mut self, headers: HeaderNames) -> Self {
        self.headers = headers;
        self
    }
}
