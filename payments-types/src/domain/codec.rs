//! Byte codec for domain entities.
//!
//! Entities are stored and transported as canonical JSON.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// An entity could not be turned into bytes.
#[derive(Debug, thiserror::Error)]
#[error("encode error: {0}")]
pub struct EncodeError(#[from] serde_json::Error);

/// Bytes are not well-formed for the target shape.
#[derive(Debug, thiserror::Error)]
#[error("decode error: {0}")]
pub struct DecodeError(#[source] serde_json::Error);

pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, EncodeError> {
    Ok(serde_json::to_vec(value)?)
}

pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, DecodeError> {
    serde_json::from_slice(bytes).map_err(DecodeError)
}
