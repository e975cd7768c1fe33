use serde_json::{Value, json};

/// A complete S3 `sub` payload.
pub fn s3_sub() -> Value {
    json!({
        "access_key_id": "test_id",
        "secret_access_key": "test_secret",
        "region": "us-west-2",
        "bucket": "test_bucket",
        "path": "test/path"
    })
}

/// Restore envelope with the given header and an S3 payload; no optional fields.
pub fn restore_envelope(version: i64, storage_type: &str) -> Value {
    json!({
        "version": version,
        "type": storage_type,
        "sub": s3_sub()
    })
}

/// Backup envelope with the given header, a one hour interval, and an S3 payload.
pub fn backup_envelope(version: i64, storage_type: &str) -> Value {
    json!({
        "version": version,
        "type": storage_type,
        "interval": "1h",
        "sub": s3_sub()
    })
}

/// Pretty-printed JSON bytes, as a config file would hold them.
pub fn to_bytes(value: &Value) -> Vec<u8> {
    serde_json::to_vec_pretty(value).expect("serialize")
}
