//! # Wire Codec
//!
//! Explicit JSON mapping for [`AttributesRequest`].
//!
//! The mapping is hand-written rather than left to a reflective object
//! mapper so the three recognized payload shapes stay distinct:
//!
//! | wire payload               | decoded envelope        |
//! |----------------------------|-------------------------|
//! | `{}`                       | unset                   |
//! | `{"attributes": null}`     | unset                   |
//! | `{"attributes": []}`       | assigned-but-empty      |
//! | `{"attributes": [a, ...]}` | populated, order kept   |
//!
//! Encoding is the inverse: an unset envelope serializes to `{}` with the
//! `attributes` key omitted entirely, never written as `null`.
//!
//! Unrecognized sibling fields are ignored; accept-vs-reject policy for
//! extra fields belongs to the outer deserialization layer, not here.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::envelope::AttributesRequest;
use crate::errors::CodecError;

/// Maximum accepted payload size (256 KB). Oversized bodies are rejected
/// at the gate without being parsed.
pub const MAX_REQUEST_SIZE: usize = 256 * 1024;

/// Decode a raw JSON payload into an envelope.
///
/// This is the SYNTACTIC gate only: shape and size are checked here,
/// while the meaning of individual records is left to downstream
/// handlers.
pub fn decode<A>(raw: &[u8]) -> Result<AttributesRequest<A>, CodecError>
where
    A: DeserializeOwned,
{
    if raw.len() > MAX_REQUEST_SIZE {
        return Err(CodecError::PayloadTooLarge {
            size: raw.len(),
            limit: MAX_REQUEST_SIZE,
        });
    }

    let request: AttributesRequest<A> = serde_json::from_slice(raw)?;

    match request.attributes() {
        Some(records) => debug!(count = records.len(), "Decoded attributes request"),
        None => debug!("Decoded attributes request with attributes unset"),
    }

    Ok(request)
}

/// Encode an envelope back to its JSON wire form.
pub fn encode<A>(request: &AttributesRequest<A>) -> Result<Vec<u8>, CodecError>
where
    A: Serialize,
{
    Ok(serde_json::to_vec(request)?)
}
