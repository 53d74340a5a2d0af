//! Reusable test fixtures.

use holdall_faults::Fault;

/// One fault of every variant, in declaration order.
pub fn sample_faults() -> Vec<Fault> {
    vec![
        Fault::generic("unspecified failure"),
        Fault::Memory,
        Fault::Io,
        Fault::FileRead,
        Fault::FileWrite,
    ]
}

/// Record text in the on-disk demo format: whitespace-separated
/// brand/model token pairs.
pub fn sample_record_text() -> &'static str {
    "Toyota Corolla\nHonda Civic\nLada Niva\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_faults_covers_every_variant() {
        let faults = sample_faults();
        assert_eq!(faults.len(), 5);
        assert!(faults.contains(&Fault::Memory));
        assert!(faults.contains(&Fault::Io));
        assert!(faults.contains(&Fault::FileRead));
        assert!(faults.contains(&Fault::FileWrite));
    }
}
