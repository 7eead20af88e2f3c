//! Cookie expiry date reformatting.
//!
//! The application runtime describes expiry as an ISO-8601 UTC timestamp with
//! millisecond precision (`2024-01-15T10:30:00.000Z`). `Set-Cookie` headers
//! carry the legacy RFC 1123 style date instead
//! (`Mon, 15 Jan 2024 10:30:00 GMT`).

use crate::base::neterror::NetError;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::PrimitiveDateTime;

/// `yyyy-MM-dd'T'HH:mm:ss.SSS'Z'`
const ISO_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");

/// `EEE, dd MMM yyyy HH:mm:ss 'GMT'`
const COOKIE_DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

/// Parse an ISO-8601 expiry into a UTC wall-clock time.
pub fn parse_iso(timestamp: &str) -> Result<PrimitiveDateTime, NetError> {
    PrimitiveDateTime::parse(timestamp, ISO_FORMAT).map_err(|e| {
        tracing::debug!(input = %timestamp, error = %e, "rejecting cookie expiration");
        NetError::date_format(timestamp)
    })
}

/// Format a UTC wall-clock time as a legacy cookie date.
pub fn format_cookie_date(at: PrimitiveDateTime) -> Result<String, NetError> {
    at.format(COOKIE_DATE_FORMAT)
        .map_err(|_| NetError::date_format(at.to_string()))
}

/// Convert `yyyy-MM-ddTHH:mm:ss.SSSZ` to `EEE, dd MMM yyyy HH:mm:ss GMT`.
///
/// No fallback pattern is attempted: anything that does not match the ISO
/// form exactly fails with [`NetError::CookieDateFormat`].
pub fn iso_to_cookie_date(timestamp: &str) -> Result<String, NetError> {
    format_cookie_date(parse_iso(timestamp)?)
}
