//! Core types for the Gyre circular mixing engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the element handle shared by the link arena and the mixer, and the
//! error type every fallible Gyre operation returns.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;

pub use error::MixError;
pub use id::ElementId;
