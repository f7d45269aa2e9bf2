use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CookieError;

/// A single cookie directive handed to `CookieWrapper::set`.
///
/// Every field except `key` and `value` is optional; an absent field means
/// the attribute is omitted from the `Set-Cookie` string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookieOptions {
    pub key: String,
    pub value: String,
    /// Lifetime in seconds (`Max-Age`). Also drives `Expires` when no
    /// explicit expiry is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default)]
    pub secure: bool,
    #[serde(default)]
    pub http_only: bool,
}

impl CookieOptions {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn max_age(mut self, seconds: i64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn expires(mut self, at: DateTime<Utc>) -> Self {
        self.expires = Some(at);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }
}

impl TryFrom<&Value> for CookieOptions {
    type Error = CookieError;

    fn try_from(options: &Value) -> Result<Self, Self::Error> {
        if !options.get("key").is_some_and(Value::is_string) {
            return Err(CookieError::InvalidArgument("wrong key"));
        }
        if !options.get("value").is_some_and(Value::is_string) {
            return Err(CookieError::InvalidArgument("wrong value"));
        }
        Ok(Self::deserialize(options)?)
    }
}

impl TryFrom<Value> for CookieOptions {
    type Error = CookieError;

    fn try_from(options: Value) -> Result<Self, Self::Error> {
        Self::try_from(&options)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    #[test]
    fn builder_sets_every_attribute() {
        let at = Utc.with_ymd_and_hms(2014, 10, 9, 8, 7, 6).unwrap();
        let options = CookieOptions::new("some", "value")
            .max_age(100)
            .expires(at)
            .path("/some")
            .domain(".new.domain")
            .secure(true)
            .http_only(true);

        assert_eq!(options.key, "some");
        assert_eq!(options.value, "value");
        assert_eq!(options.max_age, Some(100));
        assert_eq!(options.expires, Some(at));
        assert_eq!(options.path.as_deref(), Some("/some"));
        assert_eq!(options.domain.as_deref(), Some(".new.domain"));
        assert!(options.secure);
        assert!(options.http_only);
    }

    #[test]
    fn new_leaves_attributes_omitted() {
        let options = CookieOptions::new("a", "b");
        assert_eq!(options.max_age, None);
        assert_eq!(options.expires, None);
        assert_eq!(options.path, None);
        assert_eq!(options.domain, None);
        assert!(!options.secure);
        assert!(!options.http_only);
    }

    #[test]
    fn json_object_uses_camel_case_fields() {
        let options = CookieOptions::try_from(json!({
            "key": "some",
            "value": "value",
            "maxAge": 3600,
            "expires": "2014-10-09T08:07:06Z",
            "httpOnly": true
        }))
        .unwrap();

        assert_eq!(options.max_age, Some(3600));
        assert_eq!(
            options.expires,
            Some(Utc.with_ymd_and_hms(2014, 10, 9, 8, 7, 6).unwrap())
        );
        assert!(options.http_only);
        assert!(!options.secure);
    }

    #[test]
    fn non_string_key_is_wrong_key() {
        let err = CookieOptions::try_from(&json!({ "key": {} })).unwrap_err();
        assert!(matches!(err, CookieError::InvalidArgument("wrong key")));

        let err = CookieOptions::try_from(&json!({ "value": "v" })).unwrap_err();
        assert!(matches!(err, CookieError::InvalidArgument("wrong key")));
    }

    #[test]
    fn non_string_value_is_wrong_value() {
        let err = CookieOptions::try_from(&json!({ "key": "some", "value": {} })).unwrap_err();
        assert!(matches!(err, CookieError::InvalidArgument("wrong value")));

        let err = CookieOptions::try_from(&json!({ "key": "some" })).unwrap_err();
        assert!(matches!(err, CookieError::InvalidArgument("wrong value")));
    }

    #[test]
    fn mistyped_optional_field_is_options_error() {
        let err = CookieOptions::try_from(&json!({
            "key": "some",
            "value": "value",
            "maxAge": "soon"
        }))
        .unwrap_err();
        assert!(matches!(err, CookieError::Options(_)));
    }

    #[test]
    fn serializes_without_absent_attributes() {
        let rendered = serde_json::to_value(CookieOptions::new("a", "b").path("/")).unwrap();
        assert_eq!(
            rendered,
            json!({
                "key": "a",
                "value": "b",
                "path": "/",
                "secure": false,
                "httpOnly": false
            })
        );
    }
}
