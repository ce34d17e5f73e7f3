//! # Docstack Test Suite
//!
//! Unified test crate for the API boundary types.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/          # Wire-level request flows
//!     └── attribute_requests.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p docstack-tests
//!
//! # By category
//! cargo test -p docstack-tests integration::
//! ```
