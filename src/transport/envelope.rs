use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown message status code: {code}")]
    UnknownMessageStatus { code: i64 },

    #[error("unknown {field} value: {value}")]
    UnknownConfigValue { field: &'static str, value: String },

    #[error("{field} is not a number: {value}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{method} response contains no entries")]
    MissingEntry { method: &'static str },
}

/// Top-level JSON object returned by every Kavenegar endpoint.
///
/// `entries` is left as raw JSON here; the per-endpoint decoders map it once
/// the envelope status has been checked.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    #[serde(rename = "return")]
    pub ret: ReturnBlock,
    #[serde(default)]
    pub entries: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReturnBlock {
    pub status: i64,
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope status value that means success.
pub const ENVELOPE_SUCCESS: i64 = 200;

pub fn decode_envelope(json: &str) -> Result<Envelope, TransportError> {
    Ok(serde_json::from_str(json)?)
}

/// Some numeric fields arrive as JSON numbers or as quoted strings depending
/// on the endpoint. Normalized at this boundary.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IntOrString {
    Int(i64),
    String(String),
}

impl IntOrString {
    pub fn into_i64(self, field: &'static str) -> Result<i64, TransportError> {
        match self {
            Self::Int(value) => Ok(value),
            Self::String(value) => {
                value
                    .trim()
                    .parse()
                    .map_err(|_| TransportError::InvalidNumber { field, value })
            }
        }
    }
}
