//! S3-compatible object store configuration.

use super::StorageConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

const REDACTED: &str = "[REDACTED]";

/// Credentials and location for an S3-compatible bucket.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3Config {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,
    pub bucket: String,
    /// Object key (or key prefix) within the bucket.
    pub path: String,
    /// Custom endpoint for non-AWS stores; `None` uses the AWS endpoint for `region`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Address the bucket in the URL path instead of the host name.
    #[serde(default)]
    pub force_path_style: bool,
}

impl fmt::Debug for S3Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("S3Config")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &REDACTED)
            .field("region", &self.region)
            .field("bucket", &self.bucket)
            .field("path", &self.path)
            .field("endpoint", &self.endpoint)
            .field("force_path_style", &self.force_path_style)
            .finish()
    }
}

pub(super) fn decode(sub: Value) -> Result<StorageConfig, serde_json::Error> {
    serde_json::from_value(sub).map(StorageConfig::S3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn required_fields() -> Value {
        json!({
            "access_key_id": "test_id",
            "secret_access_key": "test_secret",
            "region": "us-west-2",
            "bucket": "test_bucket",
            "path": "test/path"
        })
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let config: S3Config = serde_json::from_value(required_fields()).expect("decode");
        assert_eq!(config.endpoint, None);
        assert!(!config.force_path_style);
    }

    #[test]
    fn optional_fields_are_read_when_present() {
        let mut sub = required_fields();
        sub["endpoint"] = json!("http://localhost:9000");
        sub["force_path_style"] = json!(true);
        let config: S3Config = serde_json::from_value(sub).expect("decode");
        assert_eq!(config.endpoint.as_deref(), Some("http://localhost:9000"));
        assert!(config.force_path_style);
    }

    #[test]
    fn every_required_field_is_enforced() {
        for field in ["access_key_id", "secret_access_key", "region", "bucket", "path"] {
            let mut sub = required_fields();
            sub.as_object_mut().expect("object").remove(field);
            let err = serde_json::from_value::<S3Config>(sub).unwrap_err();
            assert!(err.to_string().contains(field), "{field}: {err}");
        }
    }

    #[test]
    fn debug_output_redacts_secret() {
        let config: S3Config = serde_json::from_value(required_fields()).expect("decode");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("test_secret"));
        assert!(rendered.contains(REDACTED));
        assert!(rendered.contains("test_bucket"));
    }
}
