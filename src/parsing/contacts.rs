use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::contact::{fields, ContactRecord};
use crate::utils::validation::{check_contact_limit, is_gzipped, is_stdio, MAX_CONTACTS};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid contacts file: {0}")]
    InvalidFormat(String),

    #[error("Too many contacts: {0} exceeds maximum allowed ({max})", max = MAX_CONTACTS)]
    TooManyContacts(usize),
}

/// Open a contacts file for reading. `-` is stdin; `.gz` files are decompressed.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened.
pub fn open_input(path: &Path) -> Result<Box<dyn Read>, ParseError> {
    if is_stdio(path) {
        return Ok(Box::new(std::io::stdin().lock()));
    }

    let file = File::open(path)?;
    if is_gzipped(path) {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Read contact records from a delimited file with a header row
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn read_contacts_file(path: &Path, delimiter: u8) -> Result<Vec<ContactRecord>, ParseError> {
    read_contacts(open_input(path)?, delimiter)
}

/// Read contact records from delimited text with a header row.
///
/// Each row becomes a map from header name to cell value, in file order.
/// Rows shorter than the header only carry the columns they have, so a
/// missing value surfaces later as a missing field rather than here.
///
/// # Errors
///
/// Returns `ParseError::Csv` for malformed CSV, `ParseError::InvalidFormat`
/// if there is no header row, or `ParseError::TooManyContacts` if the
/// limit is exceeded.
pub fn read_contacts<R: Read>(reader: R, delimiter: u8) -> Result<Vec<ContactRecord>, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.iter().all(String::is_empty) {
        return Err(ParseError::InvalidFormat("missing header row".to_string()));
    }

    for required in fields::REQUIRED {
        if !headers.iter().any(|h| h == required) {
            warn!("Input has no '{required}' column; affected pairs will score Low or be skipped");
        }
    }

    let mut contacts = Vec::new();
    for row in reader.records() {
        let row = row?;

        // Check contact limit for DOS protection
        if check_contact_limit(contacts.len()).is_some() {
            return Err(ParseError::TooManyContacts(contacts.len() + 1));
        }

        let record: ContactRecord = headers
            .iter()
            .zip(row.iter())
            .map(|(h, v)| (h.clone(), v.to_string()))
            .collect();
        contacts.push(record);
    }

    debug!("Read {} contacts with columns {:?}", contacts.len(), headers);
    Ok(contacts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CONTACTS: &str = "\
contactID,name,name1,email,postalZip,address
1,Diego,Sadrinas,test@example.com,12345,123 Hello World St
2,Diego,Sadrinas,test@example.com,12345,\"123 Hello World St, Apt 4\"
3,Elio,Smith,,67890,456 Elm St
";

    #[test]
    fn test_read_contacts() {
        let contacts = read_contacts(CONTACTS.as_bytes(), b',').unwrap();
        assert_eq!(contacts.len(), 3);
        assert_eq!(contacts[0]["contactID"], "1");
        assert_eq!(contacts[0]["name1"], "Sadrinas");
        assert_eq!(contacts[1]["address"], "123 Hello World St, Apt 4");
        assert_eq!(contacts[2]["email"], "");
    }

    #[test]
    fn test_read_contacts_tab_delimited() {
        let tsv = "contactID\temail\n7\ta@b.c\n";
        let contacts = read_contacts(tsv.as_bytes(), b'\t').unwrap();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0]["email"], "a@b.c");
    }

    #[test]
    fn test_short_row_omits_missing_columns() {
        let csv = "contactID,email,name\n1,a@b.c\n";
        let contacts = read_contacts(csv.as_bytes(), b',').unwrap();
        assert_eq!(contacts.len(), 1);
        assert!(!contacts[0].contains_key("name"));
    }

    #[test]
    fn test_header_only() {
        let contacts = read_contacts("contactID,email\n".as_bytes(), b',').unwrap();
        assert!(contacts.is_empty());
    }

    #[test]
    fn test_empty_input_is_error() {
        let result = read_contacts("".as_bytes(), b',');
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_contact_limit() {
        let mut csv = String::from("contactID\n");
        for i in 0..MAX_CONTACTS {
            csv.push_str(&format!("{i}\n"));
        }
        assert_eq!(read_contacts(csv.as_bytes(), b',').unwrap().len(), MAX_CONTACTS);

        csv.push_str("one-too-many\n");
        let err = read_contacts(csv.as_bytes(), b',').unwrap_err();
        assert!(matches!(err, ParseError::TooManyContacts(n) if n == MAX_CONTACTS + 1));
        assert_eq!(
            err.to_string(),
            format!("Too many contacts: {} exceeds maximum allowed ({MAX_CONTACTS})", MAX_CONTACTS + 1)
        );
    }

    #[test]
    fn test_read_gzipped_file() {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.csv.gz");
        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        encoder.write_all(CONTACTS.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let contacts = read_contacts_file(&path, b',').unwrap();
        assert_eq!(contacts.len(), 3);
        assert_eq!(contacts[2]["name"], "Elio");
    }

    #[test]
    fn test_missing_file() {
        let result = read_contacts_file(Path::new("/nonexistent/contacts.csv"), b',');
        assert!(matches!(result, Err(ParseError::Io(_))));
    }
}
