//! Owning box-array container with bounds-checked positional access.
//!
//! [`BoxArray<T>`] is an ordered sequence of slots, each holding either
//! an exclusively owned, heap-allocated `T` or nothing. It is the
//! ownership-typed rendition of a raw owning-pointer array: destruction
//! on scope exit, deep copy via [`Clone`], and slot replacement that can
//! never leak or double-free are all enforced by the type system rather
//! than by manual bookkeeping.
//!
//! # Contracts
//!
//! - Indexed access (`get`, `get_mut`, `slot_mut`, `replace`, `take`)
//!   fails with [`ArrayError::OutOfBounds`] when `index >= len()`.
//! - [`BoxArray::remove_at`] with an out-of-range index is a silent
//!   no-op. The asymmetry with indexed access is deliberate and tested.
//! - Deep copy duplicates every occupied slot through `T::clone` into a
//!   fresh allocation; vacant slots copy as vacant.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod error;

pub use array::{BoxArray, Iter};
pub use error::ArrayError;
