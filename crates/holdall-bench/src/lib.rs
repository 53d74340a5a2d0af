//! Benchmark profiles and utilities for the Holdall container workspace.
//!
//! Provides pre-built arrays for the criterion benches:
//!
//! - [`fault_array`]: n faults cycling through the non-generic variants
//! - [`sparse_fault_array`]: same, with every third slot vacant

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use holdall_array::BoxArray;
use holdall_faults::Fault;

static VARIANTS: [Fault; 4] = [Fault::Memory, Fault::Io, Fault::FileRead, Fault::FileWrite];

/// Build an array of `n` faults cycling through the non-generic variants.
pub fn fault_array(n: usize) -> BoxArray<Fault> {
    let mut array = BoxArray::new();
    for i in 0..n {
        array.push(Box::new(VARIANTS[i % VARIANTS.len()].clone()));
    }
    array
}

/// Build an array of `n` slots with every third slot vacant.
pub fn sparse_fault_array(n: usize) -> BoxArray<Fault> {
    let mut array = BoxArray::new();
    for i in 0..n {
        if i % 3 == 0 {
            array.push_vacant();
        } else {
            array.push(Box::new(VARIANTS[i % VARIANTS.len()].clone()));
        }
    }
    array
}
