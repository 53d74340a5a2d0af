//! Faults — exercise `BoxArray` with the fault taxonomy and a second type.
//!
//! Demonstrates:
//!   1. Filling a `BoxArray<Fault>` with one fault per category
//!   2. Indexed, bounds-checked access
//!   3. Catching an out-of-bounds error instead of crashing
//!   4. Genericity over a second element type
//!   5. In-place replacement that hands back the displaced element
//!   6. Deep copy
//!
//! Run with:
//!   cargo run --example faults

use holdall::prelude::*;

#[derive(Clone, Debug)]
struct Gadget {
    name: String,
    value: i32,
}

fn print_slots<T: std::fmt::Display>(array: &BoxArray<T>) {
    for (i, slot) in array.iter().enumerate() {
        match slot {
            Some(element) => println!("{i}: {element}"),
            None => println!("{i}: <vacant>"),
        }
    }
}

fn main() {
    println!("=== fault array ===");
    let mut faults: BoxArray<Fault> = BoxArray::new();
    faults.push(Box::new(Fault::Memory));
    faults.push(Box::new(Fault::Io));
    faults.push(Box::new(Fault::FileRead));
    faults.push(Box::new(Fault::FileWrite));
    print_slots(&faults);

    if let Ok(Some(first)) = faults.get(0) {
        println!("\nfirst: {first}");
    }
    if let Ok(Some(last)) = faults.get(faults.len() - 1) {
        println!("last: {last}");
    }

    println!("\n=== out-of-bounds access ===");
    println!("requesting index 10...");
    match faults.get(10) {
        Ok(_) => println!("index 10 unexpectedly valid"),
        Err(err) => println!("caught: {err}"),
    }

    println!("\n=== a second element type ===");
    let mut gadgets: BoxArray<Gadget> = BoxArray::new();
    gadgets.push(Box::new(Gadget {
        name: "widget".to_owned(),
        value: 100,
    }));
    gadgets.push(Box::new(Gadget {
        name: "sprocket".to_owned(),
        value: 200,
    }));
    for (i, slot) in gadgets.iter().enumerate() {
        if let Some(gadget) = slot {
            println!("{i}: {} (value: {})", gadget.name, gadget.value);
        }
    }

    println!("\n=== in-place replacement ===");
    let displaced = gadgets
        .replace(
            0,
            Box::new(Gadget {
                name: "rebuilt".to_owned(),
                value: 999,
            }),
        )
        .expect("index 0 exists");
    println!(
        "displaced: {:?}",
        displaced.map(|g| g.name).unwrap_or_default()
    );
    if let Ok(Some(gadget)) = gadgets.get(0) {
        println!("now at 0: {} (value: {})", gadget.name, gadget.value);
    }

    println!("\n=== deep copy ===");
    let copied = faults.clone();
    print_slots(&copied);

    println!("\ndone — both arrays drop their contents automatically");
}
