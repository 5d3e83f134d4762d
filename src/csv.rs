//! Naive CSV reading: one record per line, split on a separator.
//!
//! No RFC 4180 quoting. A leading `"` on the first field and trailing
//! `"`/CR/LF on the last field are stripped, nothing else.

use std::collections::HashMap;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{MailbitsError, Result};

/// A CSV file read as rows.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct CsvRows {
    /// Header text → column index.
    pub headers: HashMap<String, usize>,
    /// Data rows, header line excluded.
    pub rows: Vec<Vec<String>>,
}

impl CsvRows {
    /// Value of column `header` in row `row`.
    pub fn get(&self, row: usize, header: &str) -> Option<&str> {
        let col = *self.headers.get(header)?;
        self.rows.get(row)?.get(col).map(String::as_str)
    }
}

/// A CSV file read as columns.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct CsvColumns {
    /// Header texts, in file order.
    pub headers: Vec<String>,
    /// Header text → values of that column, in row order.
    pub columns: HashMap<String, Vec<String>>,
}

impl CsvColumns {
    /// Values of the column named `header`.
    pub fn column(&self, header: &str) -> Option<&[String]> {
        self.columns.get(header).map(Vec::as_slice)
    }
}

/// Split one CSV line into its items.
pub fn split_line(line: &str, sep: &str) -> Vec<String> {
    let mut items: Vec<String> = line.split(sep).map(str::to_string).collect();
    if let Some(first) = items.first_mut() {
        if let Some(rest) = first.strip_prefix('"') {
            *first = rest.to_string();
        }
    }
    if let Some(last) = items.last_mut() {
        let trimmed_len = last.trim_end_matches(['"', '\n', '\r']).len();
        last.truncate(trimmed_len);
    }
    items
}

/// Read a CSV file into a header map and data rows.
pub fn parse_rows(path: &Path, sep: &str) -> Result<CsvRows> {
    let mut parsed = CsvRows::default();
    for (idx, line) in read_lines(path)?.enumerate() {
        let items = split_line(&line.map_err(|e| MailbitsError::io(path, e))?, sep);
        if idx == 0 {
            parsed.headers = items
                .into_iter()
                .enumerate()
                .map(|(i, header)| (header, i))
                .collect();
        } else {
            parsed.rows.push(items);
        }
    }
    tracing::debug!(path = %path.display(), rows = parsed.rows.len(), "Parsed CSV rows");
    Ok(parsed)
}

/// Read a CSV file into one value list per header.
///
/// Items beyond the last header are ignored.
pub fn parse_columns(path: &Path, sep: &str) -> Result<CsvColumns> {
    let mut parsed = CsvColumns::default();
    for (idx, line) in read_lines(path)?.enumerate() {
        let items = split_line(&line.map_err(|e| MailbitsError::io(path, e))?, sep);
        if idx == 0 {
            for header in &items {
                parsed.columns.insert(header.clone(), Vec::new());
            }
            parsed.headers = items;
            continue;
        }
        for (header, item) in parsed.headers.iter().zip(items) {
            if let Some(values) = parsed.columns.get_mut(header) {
                values.push(item);
            }
        }
    }
    tracing::debug!(path = %path.display(), columns = parsed.headers.len(), "Parsed CSV columns");
    Ok(parsed)
}

fn read_lines(path: &Path) -> Result<std::io::Lines<BufReader<std::fs::File>>> {
    let file = std::fs::File::open(path).map_err(|e| MailbitsError::io(path, e))?;
    Ok(BufReader::new(file).lines())
}
