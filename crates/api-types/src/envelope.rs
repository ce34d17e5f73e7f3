//! # `AttributesRequest` Envelope
//!
//! The wrapper for inbound document-attribute payloads.
//!
//! ## Contract
//!
//! - **Transport only**: the envelope carries records across the request
//!   boundary unchanged; it never inspects, validates, or reorders them.
//! - **Absent != Empty**: `attributes` unset means "no collection was ever
//!   assigned" and is never coerced into an empty collection. Consumers
//!   must handle both cases.
//! - **Overwrite, never merge**: assigning a collection replaces whatever
//!   was held before.
//! - **No defensive copy**: the envelope takes ownership of the supplied
//!   collection and hands the same allocation back out. It is a short-lived
//!   value object scoped to one request; no synchronization is provided.

use serde::{Deserialize, Serialize};

/// Request envelope for the document-attributes endpoints.
///
/// Generic over the attribute record type `A`: the record's shape (names,
/// values, typing rules) is defined by the consuming handler layer and is
/// opaque here. The wire form is a JSON object with a single recognized
/// field:
///
/// ```text
/// { "attributes": [ <record>, ... ] }
/// ```
///
/// The field may be absent (unset), an empty array, or a populated array;
/// all three shapes survive a round trip through [`crate::codec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributesRequest<A> {
    /// The attribute records to apply, in the order the client sent them.
    /// `None` means the field was never assigned; `Some(vec![])` means the
    /// client explicitly sent an empty collection.
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    attributes: Option<Vec<A>>,
}

impl<A> AttributesRequest<A> {
    /// Create an envelope with `attributes` unset.
    #[must_use]
    pub fn new() -> Self {
        Self { attributes: None }
    }

    /// Assign the attribute collection, consuming the envelope.
    ///
    /// Replaces any previously held collection; there are no merge
    /// semantics. Accepts any collection, including an empty one.
    #[must_use]
    pub fn with_attributes(mut self, attributes: Vec<A>) -> Self {
        self.attributes = Some(attributes);
        self
    }

    /// Assign the attribute collection in place.
    ///
    /// Same overwrite semantics as [`Self::with_attributes`].
    pub fn set_attributes(&mut self, attributes: Vec<A>) {
        self.attributes = Some(attributes);
    }

    /// Append a single record to the collection.
    ///
    /// On an unset envelope this creates a one-element collection, so the
    /// envelope leaves the unset state as soon as the first record arrives.
    pub fn push_attribute(&mut self, attribute: A) {
        self.attributes.get_or_insert_with(Vec::new).push(attribute);
    }

    /// Borrow the held records, or `None` when unset.
    #[must_use]
    pub fn attributes(&self) -> Option<&[A]> {
        self.attributes.as_deref()
    }

    /// Move the held collection out of the envelope.
    ///
    /// Returns the exact `Vec` that was assigned; no copy is made at any
    /// point between assignment and consumption.
    #[must_use]
    pub fn into_attributes(self) -> Option<Vec<A>> {
        self.attributes
    }

    /// Returns true iff no collection was ever assigned.
    ///
    /// Note the asymmetry with emptiness: an envelope holding `vec![]` is
    /// not unset.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.attributes.is_none()
    }
}

// Hand-written so that `A` is not required to implement `Default`.
impl<A> Default for AttributesRequest<A> {
    fn default() -> Self {
        Self::new()
    }
}
