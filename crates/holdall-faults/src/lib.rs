//! Fault taxonomy for the Holdall container workspace.
//!
//! This is the leaf crate with zero dependencies. It defines [`Fault`],
//! a tagged variant over the failure categories the demo programs report:
//! generic, memory, I/O, file-read, and file-write. Each variant carries
//! a fixed human-readable message; the generic variant carries whatever
//! the caller supplied at construction.
//!
//! `Fault` is a payload type, not a control-flow type: containers hold
//! faults, demos print them. It still implements [`std::error::Error`]
//! so it composes with ordinary error handling when needed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod fault;

pub use fault::Fault;
