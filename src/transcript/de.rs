//! Serde helpers for the loosely typed media object.
//!
//! Line numbers and timecodes arrive either as JSON numbers or as numeric
//! strings ("12", "3.48"), depending on which backend produced the file.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Int(u64),
    Float(f64),
    Text(String),
}

/// Deserialize a line index from a number or a numeric string.
pub fn line_index<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Int(n) => usize::try_from(n).map_err(D::Error::custom),
        NumberOrString::Float(f) if f >= 0.0 && f.fract() == 0.0 => Ok(f as usize),
        NumberOrString::Float(f) => Err(D::Error::custom(format!("'{f}' is not a line index"))),
        NumberOrString::Text(s) => s
            .trim()
            .parse::<usize>()
            .map_err(|_| D::Error::custom(format!("'{s}' is not a line index"))),
    }
}

/// Deserialize a timecode in seconds from a number or a numeric string.
pub fn seconds<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Int(n) => Ok(n as f64),
        NumberOrString::Float(f) => Ok(f),
        NumberOrString::Text(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .ok_or_else(|| D::Error::custom(format!("'{s}' is not a timecode"))),
    }
}

/// Deserialize an optional corpus identifier that may be numeric.
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<NumberOrString>::deserialize(deserializer)?.map(|value| match value {
            NumberOrString::Int(n) => n.to_string(),
            NumberOrString::Float(f) => f.to_string(),
            NumberOrString::Text(s) => s,
        }),
    )
}
