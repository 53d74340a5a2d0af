//! Record reading from any [`Read`] source.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::RecordError;
use crate::record::Record;

/// Parse whitespace-separated brand/model token pairs from `reader`.
///
/// Tokens are consumed two at a time in input order. A trailing token
/// with no partner is discarded, matching pair-extraction loops over
/// the same format. Empty input yields an empty list.
///
/// Generic over `R: Read` so tests can use `&[u8]` and production code
/// can use `BufReader<File>`.
pub fn read_records<R: Read>(mut reader: R) -> Result<Vec<Record>, RecordError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut tokens = text.split_whitespace();
    let mut records = Vec::new();
    while let Some(brand) = tokens.next() {
        let Some(model) = tokens.next() else {
            break;
        };
        records.push(Record::new(brand, model));
    }
    Ok(records)
}

/// Read records from a file at `path`.
///
/// A missing file surfaces as [`RecordError::Io`]; callers decide
/// whether that is fatal.
pub fn read_records_path<P: AsRef<Path>>(path: P) -> Result<Vec<Record>, RecordError> {
    let file = File::open(path)?;
    read_records(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn pairs_parse_in_input_order() {
        let input = b"Toyota Corolla\nHonda Civic\n" as &[u8];
        let records = read_records(input).unwrap();
        assert_eq!(
            records,
            vec![
                Record::new("Toyota", "Corolla"),
                Record::new("Honda", "Civic"),
            ]
        );
    }

    #[test]
    fn any_whitespace_separates_tokens() {
        let input = b"  Lada\t\tNiva \n\n Moskvich   412 " as &[u8];
        let records = read_records(input).unwrap();
        assert_eq!(
            records,
            vec![Record::new("Lada", "Niva"), Record::new("Moskvich", "412")]
        );
    }

    #[test]
    fn empty_input_yields_no_records() {
        let records = read_records(b"" as &[u8]).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn trailing_unpaired_token_is_discarded() {
        let input = b"Toyota Corolla Honda" as &[u8];
        let records = read_records(input).unwrap();
        assert_eq!(records, vec![Record::new("Toyota", "Corolla")]);
    }

    #[test]
    fn missing_file_surfaces_as_io_error() {
        let err = read_records_path("definitely/not/here/car.txt").unwrap_err();
        match err {
            RecordError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
        }
    }

    #[test]
    fn invalid_utf8_surfaces_as_io_error() {
        let input = b"\xff\xfe" as &[u8];
        assert!(matches!(read_records(input), Err(RecordError::Io(_))));
    }
}
