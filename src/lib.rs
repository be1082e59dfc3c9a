//! Wire types and shape validation shared between a wallet-custody service
//! and the client code that talks to it: user-linking records, transaction
//! approvals, signer configurations, and wallet configuration options.
//!
//! Nothing in this crate performs I/O. Values are built immediately before a
//! request, serialized onto the wire, and discarded; untrusted input coming
//! back off the wire goes through the [`shape`] registry so that a malformed
//! signer configuration fails fast instead of reaching a signing operation.
#![warn(unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
#![forbid(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod shape;
pub mod types;

pub use error::ShapeError;
