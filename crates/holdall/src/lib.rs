//! Holdall: an owning box-array container and its demo companions.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Holdall sub-crates. For most users, adding `holdall` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use holdall::prelude::*;
//!
//! let mut faults: BoxArray<Fault> = BoxArray::new();
//! faults.push(Box::new(Fault::Memory));
//! faults.push(Box::new(Fault::FileRead));
//! assert_eq!(faults.len(), 2);
//! assert_eq!(faults.get(0).unwrap().map(Fault::message), Some("out of memory"));
//!
//! // Deep copy: the clone owns independent allocations.
//! let copy = faults.clone();
//! assert_eq!(copy.get(1).unwrap(), faults.get(1).unwrap());
//!
//! // Indexed access past the end is an error, not a panic.
//! assert!(faults.get(10).is_err());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`array`] | `holdall-array` | [`array::BoxArray`], [`array::ArrayError`] |
//! | [`faults`] | `holdall-faults` | the [`faults::Fault`] taxonomy |
//! | [`records`] | `holdall-records` | record type and readers |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Owning box-array container (`holdall-array`).
pub use holdall_array as array;

/// Fault taxonomy (`holdall-faults`).
pub use holdall_faults as faults;

/// Record parsing (`holdall-records`).
pub use holdall_records as records;

/// Common imports for typical Holdall usage.
///
/// ```rust
/// use holdall::prelude::*;
/// ```
pub mod prelude {
    pub use holdall_array::{ArrayError, BoxArray};
    pub use holdall_faults::Fault;
    pub use holdall_records::{read_records, read_records_path, Record, RecordError};
}
