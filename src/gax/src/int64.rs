// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Serde codecs for 64-bit integers transported as JSON strings.
//!
//! The service formats 64-bit integers as strings, because JSON numbers lose
//! precision beyond 2^53. On input the service (and its emulators) may send
//! either form, so deserialization accepts strings and numbers; serialization
//! always emits strings.
//!
//! Use with `serde_with`:
//!
//! ```
//! # use gce_gax::int64::U64;
//! #[serde_with::serde_as]
//! #[derive(serde::Deserialize, serde::Serialize)]
//! struct Resource {
//!     #[serde_as(as = "Option<U64>")]
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     id: Option<u64>,
//! }
//! ```

use serde::de::Unexpected;

/// Codec for `i64` fields.
pub struct I64;

impl<'de> serde_with::DeserializeAs<'de, i64> for I64 {
    fn deserialize_as<D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        deserializer.deserialize_any(I64Visitor)
    }
}

impl serde_with::SerializeAs<i64> for I64 {
    fn serialize_as<S>(source: &i64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(source)
    }
}

#[derive(Clone, Copy)]
struct I64Visitor;

impl serde::de::Visitor<'_> for I64Visitor {
    type Value = i64;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a 64-bit signed integer")
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
        Ok(value)
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        i64::try_from(value)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &self))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        if value.fract() != 0.0 || value < i64::MIN as f64 || value > i64::MAX as f64 {
            return Err(E::invalid_value(Unexpected::Float(value), &self));
        }
        Ok(value as i64)
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        if let Ok(v) = value.parse::<i64>() {
            return Ok(v);
        }
        // The service never sends these, but proxies sometimes reformat
        // numeric strings with a trailing fraction.
        value
            .parse::<f64>()
            .ok()
            .and_then(|v| self.visit_f64::<E>(v).ok())
            .ok_or_else(|| E::invalid_value(Unexpected::Str(value), &self))
    }
}

/// Codec for `u64` fields.
pub struct U64;

impl<'de> serde_with::DeserializeAs<'de, u64> for U64 {
    fn deserialize_as<D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        deserializer.deserialize_any(U64Visitor)
    }
}

impl serde_with::SerializeAs<u64> for U64 {
    fn serialize_as<S>(source: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(source)
    }
}

#[derive(Clone, Copy)]
struct U64Visitor;

impl serde::de::Visitor<'_> for U64Visitor {
    type Value = u64;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a 64-bit unsigned integer")
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
        Ok(value)
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        u64::try_from(value)
            .map_err(|_| E::invalid_value(Unexpected::Signed(value), &self))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        if value.fract() != 0.0 || value < 0.0 || value > u64::MAX as f64 {
            return Err(E::invalid_value(Unexpected::Float(value), &self));
        }
        Ok(value as u64)
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        if let Ok(v) = value.parse::<u64>() {
            return Ok(v);
        }
        value
            .parse::<f64>()
            .ok()
            .and_then(|v| self.visit_f64::<E>(v).ok())
            .ok_or_else(|| E::invalid_value(Unexpected::Str(value), &self))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use anyhow::Result;
    use serde_json::{Value, json};
    use serde_with::{DeserializeAs, SerializeAs};
    use test_case::test_case;

    #[test_case(0, 0)]
    #[test_case("0", 0; "zero string")]
    #[test_case("2.0", 2)]
    #[test_case(3e5, 300_000)]
    #[test_case(-4e4, -40_000)]
    #[test_case(-42, -42)]
    #[test_case("-7", -7)]
    #[test_case(84, 84)]
    #[test_case(168.0, 168)]
    #[test_case(i64::MAX, i64::MAX; "max")]
    #[test_case(format!("{}", i64::MAX), i64::MAX; "max as string")]
    #[test_case(i64::MIN, i64::MIN; "min")]
    #[test_case(format!("{}", i64::MIN), i64::MIN; "min as string")]
    // Not quite a roundtrip test because we always serialize as strings.
    fn i64_deser_and_ser<T: serde::Serialize>(input: T, want: i64) -> Result<()> {
        let got = I64::deserialize_as(json!(input))?;
        assert_eq!(got, want);

        let serialized = I64::serialize_as(&got, serde_json::value::Serializer)?;
        assert_eq!(serialized, json!(got.to_string()));
        Ok(())
    }

    #[test_case(json!("abc"))]
    #[test_case(json!(123.4))]
    #[test_case(json!("234.5"))]
    #[test_case(json!(u64::MAX))]
    #[test_case(json!(format!("{}", i64::MAX as i128 * 2)); "out of range string")]
    #[test_case(json!({}))]
    fn i64_deser_error(input: Value) {
        let got = I64::deserialize_as(input).unwrap_err();
        assert!(got.is_data(), "{got:?}");
    }

    #[test_case(0, 0)]
    #[test_case("0", 0; "zero string")]
    #[test_case("2.0", 2)]
    #[test_case(3e5, 300_000)]
    #[test_case(84, 84)]
    #[test_case(u64::MAX, u64::MAX; "max")]
    #[test_case(format!("{}", u64::MAX), u64::MAX; "max as string")]
    fn u64_deser_and_ser<T: serde::Serialize>(input: T, want: u64) -> Result<()> {
        let got = U64::deserialize_as(json!(input))?;
        assert_eq!(got, want);

        let serialized = U64::serialize_as(&got, serde_json::value::Serializer)?;
        assert_eq!(serialized, json!(got.to_string()));
        Ok(())
    }

    #[test_case(json!("abc"))]
    #[test_case(json!(-1))]
    #[test_case(json!(123.4))]
    #[test_case(json!("-2"))]
    #[test_case(json!({}))]
    fn u64_deser_error(input: Value) {
        let got = U64::deserialize_as(input).unwrap_err();
        assert!(got.is_data(), "{got:?}");
    }
}
