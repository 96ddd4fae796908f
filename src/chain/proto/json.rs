//! JSON mapping helpers used by the message types in this module tree.
//!
//! Output follows the node's REST gateway: 64-bit integers as decimal
//! strings, bytes as standard base64, enums by name, timestamps as RFC 3339
//! and durations as `"<seconds>s"`. Input is accepted in either casing and
//! with `null` members; [`normalize`] runs before any deserialization.

use std::fmt::Display;
use std::str::FromStr;

use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine as _;
use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

/// Drops `null` members and rewrites object keys to snake_case, recursively.
pub fn normalize(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (snake_case(&k), normalize(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize).collect()),
        other => other,
    }
}

/// `contractAddr` -> `contract_addr`, `LongBook` -> `long_book`,
/// `EVMAddress` -> `evm_address`. Keys already in snake_case pass through.
pub fn snake_case(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut out = String::with_capacity(key.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_uppercase() {
            out.push(c);
            continue;
        }
        let boundary = match i.checked_sub(1).map(|p| chars[p]) {
            None | Some('_') => false,
            Some(prev) if prev.is_ascii_lowercase() || prev.is_ascii_digit() => true,
            Some(prev) => {
                prev.is_ascii_uppercase()
                    && chars.get(i + 1).map_or(false, |next| next.is_ascii_lowercase())
            }
        };
        if boundary {
            out.push('_');
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}

fn unexpected(expected: &str, got: &Value) -> String {
    format!("expected {expected}, got {got}")
}

/// 64-bit integers: written as strings, read from strings or numbers.
pub mod num_str {
    use super::*;

    pub fn serialize<T: Display, S: Serializer>(value: &T, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(value)
    }

    pub fn deserialize<'de, T, D>(d: D) -> Result<T, D::Error>
    where
        T: FromStr + Default,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        match Value::deserialize(d)? {
            Value::Null => Ok(T::default()),
            Value::String(s) if s.is_empty() => Ok(T::default()),
            Value::String(s) => s.parse().map_err(D::Error::custom),
            Value::Number(n) => n.to_string().parse().map_err(D::Error::custom),
            other => Err(D::Error::custom(unexpected("integer", &other))),
        }
    }
}

fn decode_base64(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD
        .decode(text)
        .or_else(|_| STANDARD_NO_PAD.decode(text))
        .or_else(|_| URL_SAFE.decode(text))
        .or_else(|_| URL_SAFE_NO_PAD.decode(text))
}

pub mod base64_bytes {
    use super::*;

    pub fn serialize<T: AsRef<[u8]>, S: Serializer>(value: &T, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&STANDARD.encode(value.as_ref()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<u8>, D::Error> {
        match Value::deserialize(d)? {
            Value::Null => Ok(Vec::new()),
            Value::String(s) => decode_base64(&s).map_err(D::Error::custom),
            other => Err(D::Error::custom(unexpected("base64 string", &other))),
        }
    }
}

/// Repeated `bytes` fields.
pub mod base64_vec {
    use super::*;
    use serde::ser::SerializeSeq;

    pub fn serialize<S: Serializer>(value: &[Vec<u8>], s: S) -> Result<S::Ok, S::Error> {
        let mut seq = s.serialize_seq(Some(value.len()))?;
        for item in value {
            seq.serialize_element(&STANDARD.encode(item))?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Vec<u8>>, D::Error> {
        let items: Option<Vec<String>> = Option::deserialize(d)?;
        items
            .unwrap_or_default()
            .iter()
            .map(|s| decode_base64(s).map_err(D::Error::custom))
            .collect()
    }
}

pub mod timestamp_opt {
    use super::*;
    use chrono::{DateTime, SecondsFormat, Utc};
    use prost_types::Timestamp;

    pub fn serialize<S: Serializer>(value: &Option<Timestamp>, s: S) -> Result<S::Ok, S::Error> {
        let Some(ts) = value else {
            return s.serialize_none();
        };
        let nanos = u32::try_from(ts.nanos).map_err(S::Error::custom)?;
        let dt = DateTime::<Utc>::from_timestamp(ts.seconds, nanos)
            .ok_or_else(|| S::Error::custom("timestamp out of range"))?;
        s.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Timestamp>, D::Error> {
        match Value::deserialize(d)? {
            Value::Null => Ok(None),
            Value::String(s) => {
                let dt = DateTime::parse_from_rfc3339(&s).map_err(D::Error::custom)?;
                Ok(Some(Timestamp {
                    seconds: dt.timestamp(),
                    nanos: dt.timestamp_subsec_nanos() as i32,
                }))
            }
            other => Err(D::Error::custom(unexpected("RFC 3339 timestamp", &other))),
        }
    }
}

pub mod duration_opt {
    use super::*;
    use prost_types::Duration;

    pub fn format(d: &Duration) -> String {
        if d.nanos == 0 {
            return format!("{}s", d.seconds);
        }
        let sign = if d.seconds < 0 || d.nanos < 0 { "-" } else { "" };
        let fraction = format!("{:09}", d.nanos.unsigned_abs());
        format!(
            "{sign}{}.{}s",
            d.seconds.unsigned_abs(),
            fraction.trim_end_matches('0')
        )
    }

    pub fn parse(text: &str) -> Option<Duration> {
        let body = text.strip_suffix('s')?;
        let (negative, body) = match body.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, body),
        };
        let (whole, fraction) = body.split_once('.').unwrap_or((body, ""));
        if fraction.len() > 9 {
            return None;
        }
        let seconds: i64 = whole.parse().ok()?;
        let nanos: i32 = if fraction.is_empty() {
            0
        } else {
            format!("{fraction:0<9}").parse().ok()?
        };
        Some(if negative {
            Duration { seconds: -seconds, nanos: -nanos }
        } else {
            Duration { seconds, nanos }
        })
    }

    pub fn serialize<S: Serializer>(value: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(d) => s.serialize_str(&format(d)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
        match Value::deserialize(d)? {
            Value::Null => Ok(None),
            Value::String(s) => parse(&s)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid duration {s:?}"))),
            other => Err(D::Error::custom(unexpected("duration string", &other))),
        }
    }
}

/// Protobuf enums carried as `i32` fields.
pub trait ProtoEnum: Copy + Into<i32> + TryFrom<i32> {
    fn as_str_name(&self) -> &'static str;
    fn from_str_name(value: &str) -> Option<Self>;
}

pub fn serialize_enum<E: ProtoEnum, S: Serializer>(value: i32, s: S) -> Result<S::Ok, S::Error> {
    match E::try_from(value) {
        Ok(known) => s.serialize_str(known.as_str_name()),
        Err(_) => s.serialize_i32(value),
    }
}

pub fn deserialize_enum<'de, E: ProtoEnum, D: Deserializer<'de>>(d: D) -> Result<i32, D::Error> {
    match Value::deserialize(d)? {
        Value::Null => Ok(0),
        Value::String(name) => match E::from_str_name(&name) {
            Some(known) => Ok(known.into()),
            None => name
                .parse::<i32>()
                .map_err(|_| D::Error::custom(format!("unknown enum value {name:?}"))),
        },
        Value::Number(n) => n
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .ok_or_else(|| D::Error::custom(format!("enum value {n} out of range"))),
        other => Err(D::Error::custom(unexpected("enum name", &other))),
    }
}
