//! Word table loading
//!
//! Reads comma-separated `WORD[,WEIGHT,...]` rows. A first row whose word
//! column is `word` is treated as a header. Extra columns are ignored and a
//! missing weight counts as zero.

use crate::config::WordLength;
use crate::core::{EngineError, Rejected};
use crate::table::CandidateSet;
use std::fs;
use std::io;
use std::path::Path;

const HEADER: &str = "word";

/// Parse table rows from text
///
/// Bad rows are returned as rejections; the rest form the table in input
/// order.
///
/// # Examples
/// ```
/// use wordler::config::WordLength;
/// use wordler::wordlists::loader::parse_table;
///
/// let (table, rejected) = parse_table("word,weight\ncrane,3.5\nslate\nsl4te,1\n", WordLength::DEFAULT);
/// assert_eq!(table.len(), 2);
/// assert_eq!(rejected.len(), 1);
/// ```
#[must_use]
pub fn parse_table(content: &str, length: WordLength) -> (CandidateSet, Vec<Rejected>) {
    let mut rows = Vec::new();
    let mut rejected = Vec::new();

    let lines = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty());

    for (index, line) in lines.enumerate() {
        let mut fields = line.split(',').map(str::trim);
        let word = fields.next().unwrap_or_default();
        if index == 0 && word.eq_ignore_ascii_case(HEADER) {
            continue;
        }

        match parse_weight(fields.next()) {
            Ok(weight) => rows.push((word, weight)),
            Err(error) => rejected.push(Rejected {
                input: line.to_string(),
                error,
            }),
        }
    }

    let (table, mut table_rejected) = CandidateSet::from_rows(length, rows);
    rejected.append(&mut table_rejected);
    (table, rejected)
}

fn parse_weight(field: Option<&str>) -> Result<f64, EngineError> {
    match field {
        None | Some("") => Ok(0.0),
        Some(text) => text
            .parse()
            .map_err(|_| EngineError::InvalidWeight(text.to_string())),
    }
}

/// Load a table from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordler::config::WordLength;
/// use wordler::wordlists::loader::load_from_file;
///
/// let (table, rejected) = load_from_file("data/words.csv", WordLength::DEFAULT).unwrap();
/// println!("Loaded {} words, rejected {}", table.len(), rejected.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    length: WordLength,
) -> io::Result<(CandidateSet, Vec<Rejected>)> {
    let content = fs::read_to_string(path)?;
    Ok(parse_table(&content, length))
}
