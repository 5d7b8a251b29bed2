//! Response envelope used by most backend endpoints.

use serde::{Deserialize, Deserializer};

use crate::error::AppError;

/// A backend response body: `{status, message, payload}` or the bare payload.
///
/// Some endpoints wrap their result, others return it directly; both
/// shapes decode through this type.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ApiEnvelope<T> {
    Wrapped(Wrapped<T>),
    Bare(T),
}

/// The wrapped form. `payload` must be present but may be null.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Wrapped<T> {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(deserialize_with = "present_or_null")]
    pub payload: Option<T>,
}

fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

impl<T> ApiEnvelope<T> {
    /// Returns the payload, failing if the backend sent a null one.
    pub fn into_payload(self) -> Result<T, AppError> {
        match self {
            ApiEnvelope::Bare(payload) => Ok(payload),
            ApiEnvelope::Wrapped(Wrapped {
                payload: Some(payload),
                ..
            }) => Ok(payload),
            ApiEnvelope::Wrapped(Wrapped { message, .. }) => Err(AppError::decode(
                "Backend response has no payload",
                serde_json::json!({ "message": message }),
            )),
        }
    }
}

impl<T: Default> ApiEnvelope<T> {
    /// Returns the payload, or an empty value if the backend sent null.
    pub fn into_payload_or_default(self) -> T {
        match self {
            ApiEnvelope::Bare(payload) => payload,
            ApiEnvelope::Wrapped(wrapped) => wrapped.payload.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Item {
        name: String,
    }

    #[test]
    fn test_wrapped_payload_is_unwrapped() {
        let json = r#"{"status":"OK","message":"done","payload":[{"name":"a"}]}"#;
        let env: ApiEnvelope<Vec<Item>> = serde_json::from_str(json).unwrap();

        assert_eq!(env.into_payload().unwrap(), vec![Item { name: "a".into() }]);
    }

    #[test]
    fn test_bare_body_is_accepted() {
        let json = r#"[{"name":"a"},{"name":"b"}]"#;
        let env: ApiEnvelope<Vec<Item>> = serde_json::from_str(json).unwrap();

        assert_eq!(env.into_payload().unwrap().len(), 2);
    }

    #[test]
    fn test_bare_object_without_payload_key() {
        let env: ApiEnvelope<Item> = serde_json::from_str(r#"{"name":"x"}"#).unwrap();

        assert!(matches!(env, ApiEnvelope::Bare(_)));
    }

    #[test]
    fn test_null_payload() {
        let json = r#"{"status":"OK","message":"nothing","payload":null}"#;

        let env: ApiEnvelope<Vec<Item>> = serde_json::from_str(json).unwrap();
        let err = env.into_payload().unwrap_err();
        assert_eq!(err.code(), "decode_error");

        let env: ApiEnvelope<Vec<Item>> = serde_json::from_str(json).unwrap();
        assert!(env.into_payload_or_default().is_empty());
    }
}
