//! # API Types Crate
//!
//! Boundary types for the document-management API. This crate defines the
//! request envelope that carries document-attribute records from the HTTP
//! front door into handler logic, together with the explicit wire codec.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: the wire shape of an inbound attributes
//!   request is defined here and nowhere else.
//! - **Transport Only**: the envelope performs no validation and no
//!   transformation; attribute semantics belong to the handlers that
//!   consume it.
//! - **Absent != Empty**: an envelope that was never assigned a collection
//!   is distinguishable from one assigned an empty collection, at the API
//!   level and on the wire.

pub mod codec;
pub mod envelope;
pub mod errors;

pub use envelope::AttributesRequest;
pub use errors::CodecError;
