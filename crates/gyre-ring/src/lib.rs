//! Index-linked circular arena for Gyre.
//!
//! Elements live in a dense arena addressed by [`ElementId`]; the circular
//! doubly-linked ordering is stored as two parallel `u32` index vectors
//! rather than as references, so there are no ownership cycles and the
//! whole ring is freed in one go when dropped.
//!
//! ```text
//! RingLinks
//! ├── next: Vec<u32>   (successor of each slot)
//! └── prev: Vec<u32>   (predecessor of each slot)
//! ```
//!
//! [`hops`] holds the floored modular arithmetic used to turn signed
//! offsets into the shortest walk around a ring.
//!
//! [`ElementId`]: gyre_core::ElementId

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod hops;
pub mod links;

pub use error::LinkError;
pub use hops::{shortest_hops, wrap_steps};
pub use links::{RingIter, RingLinks};
