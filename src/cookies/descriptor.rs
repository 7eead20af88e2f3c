use crate::base::neterror::NetError;
use serde_json::{Map, Value};

/// A cookie as described by the application runtime.
///
/// Required fields are guaranteed non-empty; optional fields are `None` when
/// the runtime left them absent, `null`, or empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieDescriptor {
    pub name: String,
    pub value: String,
    pub origin: String,
    pub domain: Option<String>,
    pub path: Option<String>,
    /// ISO-8601 `yyyy-MM-ddTHH:mm:ss.SSSZ`.
    pub expiration: Option<String>,
    /// Accepted for compatibility; never serialized.
    pub version: Option<String>,
}

impl CookieDescriptor {
    /// Build a descriptor from the three required fields.
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            origin: origin.into(),
            domain: None,
            path: None,
            expiration: None,
            version: None,
        }
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = non_empty(domain.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = non_empty(path.into());
        self
    }

    pub fn expiration(mut self, expiration: impl Into<String>) -> Self {
        self.expiration = non_empty(expiration.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = non_empty(version.into());
        self
    }

    /// Parse the untyped object handed over by the application runtime.
    ///
    /// Fields are checked in the order name, value, origin, so the first
    /// missing one is the one reported.
    pub fn from_bag(bag: &Map<String, Value>) -> Result<Self, NetError> {
        Ok(Self {
            name: required(bag, "name")?,
            value: required(bag, "value")?,
            origin: required(bag, "origin")?,
            domain: optional(bag, "domain")?,
            path: optional(bag, "path")?,
            version: optional(bag, "version")?,
            expiration: optional(bag, "expiration")?,
        })
    }

    /// Re-check the required-field invariant on a descriptor built by hand.
    pub fn validate(&self) -> Result<(), NetError> {
        for (field, value) in [
            ("name", &self.name),
            ("value", &self.value),
            ("origin", &self.origin),
        ] {
            if value.is_empty() {
                return Err(NetError::missing_field(field));
            }
        }
        Ok(())
    }
}

impl TryFrom<&Value> for CookieDescriptor {
    type Error = NetError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(bag) => Self::from_bag(bag),
            _ => Err(NetError::CookieInvalidField { field: "cookie" }),
        }
    }
}

fn non_empty(s: String) -> Option<String> {
    (!s.is_empty()).then_some(s)
}

fn optional(bag: &Map<String, Value>, field: &'static str) -> Result<Option<String>, NetError> {
    match bag.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(non_empty(s.clone())),
        Some(_) => Err(NetError::CookieInvalidField { field }),
    }
}

fn required(bag: &Map<String, Value>, field: &'static str) -> Result<String, NetError> {
    optional(bag, field)?.ok_or_else(|| NetError::missing_field(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bag(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_full_bag() {
        let d = CookieDescriptor::from_bag(&bag(json!({
            "name": "session",
            "value": "abc",
            "origin": "https://example.com",
            "domain": "example.com",
            "path": "/app",
            "version": "1",
            "expiration": "2024-01-15T10:30:00.000Z",
        })))
        .unwrap();

        assert_eq!(d.name, "session");
        assert_eq!(d.domain.as_deref(), Some("example.com"));
        assert_eq!(d.path.as_deref(), Some("/app"));
        assert_eq!(d.version.as_deref(), Some("1"));
        assert_eq!(d.expiration.as_deref(), Some("2024-01-15T10:30:00.000Z"));
    }

    #[test]
    fn test_missing_required_fields_named() {
        for field in ["name", "value", "origin"] {
            let mut b = bag(json!({
                "name": "n",
                "value": "v",
                "origin": "https://example.com",
            }));
            b.remove(field);
            assert_eq!(
                CookieDescriptor::from_bag(&b).unwrap_err(),
                NetError::missing_field(field)
            );
        }
    }

    #[test]
    fn test_empty_and_null_count_as_missing() {
        let b = bag(json!({"name": "", "value": "v", "origin": "o"}));
        assert_eq!(
            CookieDescriptor::from_bag(&b).unwrap_err(),
            NetError::missing_field("name")
        );

        let b = bag(json!({"name": "n", "value": null, "origin": "o"}));
        assert_eq!(
            CookieDescriptor::from_bag(&b).unwrap_err(),
            NetError::missing_field("value")
        );
    }

    #[test]
    fn test_empty_optionals_are_none() {
        let d = CookieDescriptor::from_bag(&bag(json!({
            "name": "n", "value": "v", "origin": "o",
            "domain": "", "path": null,
        })))
        .unwrap();
        assert_eq!(d.domain, None);
        assert_eq!(d.path, None);
        assert_eq!(d.expiration, None);
    }

    #[test]
    fn test_non_string_field_rejected() {
        let b = bag(json!({"name": "n", "value": 42, "origin": "o"}));
        assert_eq!(
            CookieDescriptor::from_bag(&b).unwrap_err(),
            NetError::CookieInvalidField { field: "value" }
        );
    }

    #[test]
    fn test_try_from_non_object() {
        assert!(CookieDescriptor::try_from(&json!("nope")).is_err());
    }

    #[test]
    fn test_builder_drops_empty_optionals() {
        let d = CookieDescriptor::new("n", "v", "o").domain("").path("/");
        assert_eq!(d.domain, None);
        assert_eq!(d.path.as_deref(), Some("/"));
        assert!(d.validate().is_ok());
        assert_eq!(
            CookieDescriptor::new("n", "", "o").validate().unwrap_err(),
            NetError::missing_field("value")
        );
    }
}
