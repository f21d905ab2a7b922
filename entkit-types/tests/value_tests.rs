use chrono::{TimeZone, Utc};
use entkit_types::{Opaque, Value};
use pretty_assertions::assert_eq;
use serde_json::json;

fn encode(v: &Value) -> String {
    serde_json::to_string(v).unwrap()
}

fn decode(s: &str) -> Value {
    serde_json::from_str(s).unwrap()
}

// ── Construction ─────────────────────────────────────────────────

#[test]
fn from_primitives_picks_matching_variant() {
    assert_eq!(Value::from(42), Value::I32(42));
    assert_eq!(Value::from(42i64), Value::I64(42));
    assert_eq!(Value::from(7u8), Value::U8(7));
    assert_eq!(Value::from(3.141529), Value::F64(3.141529));
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from("Ryan"), Value::String("Ryan".into()));
    assert_eq!(Value::from(vec![1u8, 2]), Value::Bytes(vec![1, 2]));
}

#[test]
fn from_option_maps_none_to_null() {
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some("x")), Value::String("x".into()));
}

#[test]
fn null_string_none_is_not_null() {
    assert!(Value::Null.is_null());
    assert!(!Value::null_string(None).is_null());
}

#[test]
fn type_names() {
    assert_eq!(Value::Null.type_name(), "null");
    assert_eq!(Value::I32(1).type_name(), "i32");
    assert_eq!(Value::null_string(None).type_name(), "null-string");
    assert_eq!(Value::Json(json!({})).type_name(), "json");
    assert_eq!(Value::Opaque(Opaque::new(5u8)).type_name(), "u8");
}

#[test]
fn opaque_equality_is_identity() {
    let a = Opaque::new(String::from("same"));
    let b = Opaque::new(String::from("same"));
    assert_eq!(a, a.clone());
    assert_ne!(a, b);
    assert_eq!(a.downcast_ref::<String>().map(String::as_str), Some("same"));
    assert!(a.downcast_ref::<u32>().is_none());
}

// ── Encoding ─────────────────────────────────────────────────────

#[test]
fn encodes_scalars_natively() {
    assert_eq!(encode(&Value::Null), "null");
    assert_eq!(encode(&Value::Bool(false)), "false");
    assert_eq!(encode(&Value::I8(-3)), "-3");
    assert_eq!(encode(&Value::U64(u64::MAX)), "18446744073709551615");
    assert_eq!(encode(&Value::F64(1.5)), "1.5");
    assert_eq!(encode(&Value::from("hi")), "\"hi\"");
}

#[test]
fn encodes_null_string_as_string_or_null() {
    assert_eq!(encode(&Value::null_string(Some("a".into()))), "\"a\"");
    assert_eq!(encode(&Value::null_string(None)), "null");
}

#[test]
fn encodes_bytes_as_base64() {
    assert_eq!(encode(&Value::from(&b"hello"[..])), "\"aGVsbG8=\"");
}

#[test]
fn encodes_time_as_rfc3339() {
    let t = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    assert_eq!(encode(&Value::Time(t)), "\"2024-01-02T03:04:05Z\"");
}

#[test]
fn encodes_json_verbatim() {
    assert_eq!(encode(&Value::Json(json!([1, "a"]))), "[1,\"a\"]");
}

#[test]
fn non_finite_floats_fail() {
    assert!(serde_json::to_string(&Value::F64(f64::NAN)).is_err());
    assert!(serde_json::to_string(&Value::F32(f32::INFINITY)).is_err());
}

#[test]
fn opaque_fails_with_type_name() {
    let err = serde_json::to_string(&Value::Opaque(Opaque::new(7u16))).unwrap_err();
    assert!(err.to_string().contains("unsupported type: u16"));
}

// ── Decoding ─────────────────────────────────────────────────────

#[test]
fn decodes_numbers_by_shape() {
    assert_eq!(decode("42"), Value::I64(42));
    assert_eq!(decode("-42"), Value::I64(-42));
    assert_eq!(decode("18446744073709551615"), Value::U64(u64::MAX));
    assert_eq!(decode("3.0"), Value::F64(3.0));
    assert_eq!(decode("1e3"), Value::F64(1000.0));
}

#[test]
fn decodes_structured_data_as_json() {
    assert_eq!(decode("[1,2]"), Value::Json(json!([1, 2])));
    assert_eq!(decode("{\"a\":true}"), Value::Json(json!({"a": true})));
}

#[test]
fn decode_normalizes_lossy_variants() {
    let bytes = Value::from(&b"hello"[..]);
    assert_eq!(decode(&encode(&bytes)), Value::String("aGVsbG8=".into()));

    let t = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    assert_eq!(
        decode(&encode(&Value::Time(t))),
        Value::String("2024-01-02T03:04:05Z".into())
    );

    assert_eq!(decode(&encode(&Value::null_string(None))), Value::Null);
    assert_eq!(decode(&encode(&Value::I16(9))), Value::I64(9));
    assert_eq!(decode(&encode(&Value::F32(3.14))), Value::F64(3.14));
}
