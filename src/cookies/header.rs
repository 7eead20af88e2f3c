//! `Set-Cookie` serialization and `Cookie` header parsing.

use crate::base::neterror::NetError;
use crate::cookies::date;
use crate::cookies::descriptor::CookieDescriptor;
use std::collections::HashMap;

/// Cookie name to value, as read back from a `Cookie` header.
pub type CookieMap = HashMap<String, String>;

pub const DOMAIN_ATTRIBUTE: &str = "Domain";
pub const PATH_ATTRIBUTE: &str = "Path";
pub const EXPIRES_ATTRIBUTE: &str = "Expires";

/// Serialize a descriptor into `name=value; [Domain=d;] [Path=p;] [Expires=e;]`.
///
/// The expiration is converted to the legacy cookie date format; a malformed
/// expiration fails the whole serialization.
///
/// Name, value, domain, and path are written raw. A `;` inside any of them
/// starts a new attribute in the resulting line, so callers passing untrusted
/// input must reject or encode it first.
pub fn to_set_cookie(cookie: &CookieDescriptor) -> Result<String, NetError> {
    let mut line = format!("{}={};", cookie.name, cookie.value);

    if let Some(domain) = non_empty(&cookie.domain) {
        push_attribute(&mut line, DOMAIN_ATTRIBUTE, domain);
    }
    if let Some(path) = non_empty(&cookie.path) {
        push_attribute(&mut line, PATH_ATTRIBUTE, path);
    }
    if let Some(expiration) = non_empty(&cookie.expiration) {
        let expires = date::iso_to_cookie_date(expiration)?;
        push_attribute(&mut line, EXPIRES_ATTRIBUTE, &expires);
    }

    Ok(line)
}

fn push_attribute(line: &mut String, name: &str, value: &str) {
    line.push(' ');
    line.push_str(name);
    line.push('=');
    line.push_str(value);
    line.push(';');
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Parse a `Cookie` header (`a=1; b=2`) into a map.
///
/// Each piece is trimmed and split on its first `=`; pieces without `=` are
/// dropped. A repeated name keeps its last value.
pub fn parse_cookie_header(header: &str) -> CookieMap {
    let mut map = CookieMap::new();
    for piece in header.split(';') {
        if let Some((name, value)) = piece.trim().split_once('=') {
            map.insert(name.trim().to_string(), value.to_string());
        }
    }
    map
}
