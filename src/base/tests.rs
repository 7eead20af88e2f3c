use crate::base::neterror::NetError;

#[test]
fn test_net_error_roundtrip() {
    let original = NetError::InvalidUrl;
    let code = original.as_i32();
    assert_eq!(code, -300);
    let converted = NetError::from(code);
    assert!(matches!(converted, NetError::InvalidUrl));
}

#[test]
fn test_bridge_error_codes() {
    assert_eq!(NetError::missing_field("name").as_i32(), -10001);
    assert_eq!(
        NetError::CookieInvalidField { field: "path" }.as_i32(),
        -10002
    );
    assert_eq!(NetError::date_format("nope").as_i32(), -10003);
    assert_eq!(
        NetError::NotSupported {
            operation: "getAll",
            hint: "x"
        }
        .as_i32(),
        -10005
    );
}

#[test]
fn test_payload_codes_do_not_rebuild() {
    let err = NetError::CookieStoreIo {
        origin: "https://example.com/".into(),
        message: "boom".into(),
    };
    assert!(err.is_store_io());
    let converted = NetError::from(err.as_i32());
    assert_eq!(converted, NetError::Unknown(-10004));
    assert!(!converted.is_store_io());
}

#[test]
fn test_unknown_error() {
    let err = NetError::from(-9999);
    assert!(matches!(err, NetError::Unknown(-9999)));
}

#[test]
fn test_missing_field_message_names_field() {
    let err = NetError::missing_field("origin");
    assert!(err.is_validation());
    assert_eq!(err.to_string(), "Cookie field `origin` must have a value");
}
