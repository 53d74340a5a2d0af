//! Cars — read brand/model records from a text file and print them.
//!
//! Demonstrates:
//!   1. Reading whitespace-separated token pairs into value objects
//!   2. Printing the list in insertion order
//!   3. Automatic destruction at end of scope (each car announces its drop)
//!
//! Run with:
//!   cargo run --example cars -- [path]
//!
//! The path defaults to `car.txt` in the current directory. A missing
//! file prints a diagnostic to stderr and exits with status 1.

use std::env;
use std::process::ExitCode;

use holdall::prelude::*;

/// Wrapper that reports its own destruction, making drop order visible.
struct Announced(Record);

impl Drop for Announced {
    fn drop(&mut self) {
        println!("dropped: {}", self.0);
    }
}

fn main() -> ExitCode {
    let path = env::args().nth(1).unwrap_or_else(|| "car.txt".to_owned());

    let records = match read_records_path(&path) {
        Ok(records) => records,
        Err(err) => {
            eprintln!("cannot read {path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let cars: Vec<Announced> = records.into_iter().map(Announced).collect();

    println!("car list:");
    for car in &cars {
        println!("{}", car.0);
    }

    println!();
    println!("end of program — cars now drop in order:");
    ExitCode::SUCCESS
}
