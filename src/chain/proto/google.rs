use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::chain::codec;

/// `google.protobuf.Any`: a type URL plus the encoded message bytes.
///
/// In JSON, payloads whose type is known to [`codec::any_registry`] are
/// expanded inline next to `@type`, the way the REST gateway renders them.
/// Unknown payloads round-trip as `{"@type", "value": <base64>}`; inline
/// fields of an unknown type cannot be re-encoded and fail to deserialize.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Any {
    #[prost(string, tag = "1")]
    pub type_url: String,
    #[prost(bytes = "vec", tag = "2")]
    pub value: Vec<u8>,
}

impl Any {
    pub fn new(type_url: impl Into<String>, value: Vec<u8>) -> Self {
        Self { type_url: type_url.into(), value }
    }

    fn opaque_json(&self) -> Value {
        use base64::Engine as _;
        let mut obj = Map::new();
        obj.insert("@type".to_string(), Value::String(self.type_url.clone()));
        obj.insert(
            "value".to_string(),
            Value::String(base64::engine::general_purpose::STANDARD.encode(&self.value)),
        );
        Value::Object(obj)
    }
}

impl Serialize for Any {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let expanded = match codec::any_registry::to_json(&self.type_url, &self.value) {
            Some(Ok(Value::Object(fields))) => {
                let mut obj = Map::with_capacity(fields.len() + 1);
                obj.insert("@type".to_string(), Value::String(self.type_url.clone()));
                obj.extend(fields);
                Value::Object(obj)
            }
            Some(Err(e)) => {
                log::debug!("Any payload {} did not decode: {}", self.type_url, e);
                self.opaque_json()
            }
            _ => self.opaque_json(),
        };
        expanded.serialize(s)
    }
}

impl<'de> Deserialize<'de> for Any {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let mut obj = match Value::deserialize(d)? {
            Value::Object(obj) => obj,
            Value::Null => return Ok(Any::default()),
            other => return Err(D::Error::custom(format!("expected Any object, got {other}"))),
        };
        let type_url = match obj.remove("@type") {
            Some(Value::String(url)) => url,
            Some(other) => return Err(D::Error::custom(format!("invalid @type {other}"))),
            None => String::new(),
        };

        // Opaque form: only `value` remains.
        if obj.len() == 1 {
            if let Some(Value::String(encoded)) = obj.get("value") {
                let value = super::json::base64_bytes::deserialize(Value::String(encoded.clone()))
                    .map_err(D::Error::custom)?;
                return Ok(Any { type_url, value });
            }
        }

        let has_fields = !obj.is_empty();
        match codec::any_registry::from_json(&type_url, Value::Object(obj)) {
            Some(Ok(value)) => Ok(Any { type_url, value }),
            Some(Err(e)) => Err(D::Error::custom(format!("invalid {type_url} payload: {e}"))),
            None if !has_fields => Ok(Any { type_url, value: Vec::new() }),
            None => Err(D::Error::custom(format!(
                "cannot encode inline fields of unregistered Any type {type_url}"
            ))),
        }
    }
}
