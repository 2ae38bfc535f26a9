use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::matching::engine::MatchResult;
use crate::parsing::contacts::ParseError;
use crate::utils::validation::is_stdio;

/// Column headers of the results file, in output order
pub const RESULT_HEADERS: [&str; 3] = ["ContactID Source", "ContactID Match", "Accuracy"];

/// Write match results as delimited text with a header row
///
/// # Errors
///
/// Returns `ParseError::Csv` or `ParseError::Io` if writing fails.
pub fn write_results<W: Write>(
    writer: W,
    results: &[MatchResult],
    delimiter: u8,
) -> Result<(), ParseError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    writer.write_record(RESULT_HEADERS)?;
    for result in results {
        writer.write_record([
            result.source.as_str(),
            result.matched.as_str(),
            result.accuracy.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write match results to a file, or stdout when the path is `-`
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be created, or any error
/// from [`write_results`].
pub fn write_results_file(
    path: &Path,
    results: &[MatchResult],
    delimiter: u8,
) -> Result<(), ParseError> {
    if is_stdio(path) {
        return write_results(std::io::stdout().lock(), results, delimiter);
    }
    write_results(BufWriter::new(File::create(path)?), results, delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Accuracy, ContactId};

    fn result(a: &str, b: &str, accuracy: Accuracy) -> MatchResult {
        MatchResult::new(ContactId::new(a), ContactId::new(b), accuracy)
    }

    #[test]
    fn test_write_results() {
        let results = vec![
            result("1", "2", Accuracy::High),
            result("1", "3", Accuracy::Low),
            result("2", "3", Accuracy::Medium),
        ];
        let mut out = Vec::new();
        write_results(&mut out, &results, b',').unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "ContactID Source,ContactID Match,Accuracy\n1,2,High\n1,3,Low\n2,3,Medium\n"
        );
    }

    #[test]
    fn test_write_empty_results_has_header() {
        let mut out = Vec::new();
        write_results(&mut out, &[], b',').unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "ContactID Source,ContactID Match,Accuracy\n"
        );
    }

    #[test]
    fn test_write_quotes_ids_with_delimiter() {
        let mut out = Vec::new();
        write_results(&mut out, &[result("a,1", "b", Accuracy::Low)], b',').unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with("\"a,1\",b,Low\n"));
    }

    #[test]
    fn test_write_results_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.tsv");
        write_results_file(&path, &[result("1", "2", Accuracy::High)], b'\t').unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "ContactID Source\tContactID Match\tAccuracy\n1\t2\tHigh\n");
    }
}
