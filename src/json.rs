//! Serde helpers for float channels that may not be finite.
//!
//! JSON has no representation for NaN or infinities, so those are written as
//! the strings `"NaN"`, `"Inf"` and `"-Inf"`. Reading is case insensitive.
//!
//! Use with `#[serde(with = "crate::json::f32_non_finite")]`.

pub(crate) mod f32_non_finite {
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub(crate) fn serialize<S>(value: &f32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match non_finite_name(*value) {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_f32(*value),
        }
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<f32, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => n
                .as_f64()
                .map(|f| f as f32)
                .ok_or_else(|| serde::de::Error::custom("expected f64")),
            Value::String(s) => parse_non_finite(&s).ok_or_else(|| {
                serde::de::Error::custom(format!(
                    r#"expected "NaN", "Inf" or "-Inf", found {s}"#
                ))
            }),
            other => Err(serde::de::Error::custom(format!(
                r#"expected number, "NaN", "Inf" or "-Inf", found {other}"#
            ))),
        }
    }

    fn non_finite_name(value: f32) -> Option<&'static str> {
        if value.is_nan() {
            Some("NaN")
        } else if value == f32::INFINITY {
            Some("Inf")
        } else if value == f32::NEG_INFINITY {
            Some("-Inf")
        } else {
            None
        }
    }

    fn parse_non_finite(s: &str) -> Option<f32> {
        match s.to_lowercase().as_str() {
            "nan" => Some(f32::NAN),
            "inf" => Some(f32::INFINITY),
            "-inf" => Some(f32::NEG_INFINITY),
            _ => None,
        }
    }
}
