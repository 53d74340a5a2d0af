//! Whitespace-token record parsing for the Holdall demos.
//!
//! Reads plain-text input of whitespace-separated token pairs into
//! [`Record`] values (brand, model). The reader is generic over
//! [`std::io::Read`] so tests can use `&[u8]` and callers can use
//! `BufReader<File>`; [`read_records_path`] wraps the latter.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod reader;
pub mod record;

pub use error::RecordError;
pub use reader::{read_records, read_records_path};
pub use record::Record;
