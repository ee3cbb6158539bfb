//! Headerless CSV parsing for decision tables.
//!
//! Records are read with the `csv` crate, so quoted fields may hold commas.
//! Surrounding whitespace is trimmed, a leading byte-order mark is ignored
//! and blank lines are skipped. Positions in errors are one-based.

use std::str::FromStr;

use ::csv::{ReaderBuilder, StringRecord, Trim};

use crate::domain::foundation::{Matrix, ValidationError};
use crate::domain::sorting::{CriterionKind, Weights};
use crate::ports::DataSourceError;

/// A trimmed cell with its one-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Cell {
    line: usize,
    column: usize,
    text: String,
}

fn cells(record: &StringRecord) -> Vec<Cell> {
    let line = record.position().map_or(0, |p| p.line() as usize);
    record
        .iter()
        .enumerate()
        .map(|(index, text)| Cell {
            line,
            column: index + 1,
            text: text.to_string(),
        })
        .collect()
}

/// Non-blank records split into cells.
fn records(path: &str, content: &str) -> Result<Vec<Vec<Cell>>, DataSourceError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| read_error(path, &e))?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        rows.push(cells(&record));
    }
    Ok(rows)
}

fn read_error(path: &str, error: &::csv::Error) -> DataSourceError {
    DataSourceError::Parse {
        path: path.to_string(),
        line: error.position().map_or(0, |p| p.line() as usize),
        column: 1,
        reason: error.to_string(),
    }
}

fn parse_error(path: &str, cell: &Cell, reason: impl Into<String>) -> DataSourceError {
    DataSourceError::Parse {
        path: path.to_string(),
        line: cell.line,
        column: cell.column,
        reason: reason.into(),
    }
}

fn parse_number(path: &str, cell: &Cell) -> Result<f64, DataSourceError> {
    let value = cell
        .text
        .parse::<f64>()
        .map_err(|_| parse_error(path, cell, format!("'{}' is not a number", cell.text)))?;

    if !value.is_finite() {
        return Err(parse_error(path, cell, format!("'{}' is not finite", cell.text)));
    }
    Ok(value)
}

/// Parses a numeric table, one row per non-blank line.
///
/// # Edge Cases
/// - Empty content: no rows
/// - A row whose width differs from the first row: `Parse` error on that line
pub fn parse_table(path: &str, content: &str) -> Result<Vec<Vec<f64>>, DataSourceError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();

    for cells in records(path, content)? {
        if let (Some(first), Some(last)) = (rows.first(), cells.last()) {
            if cells.len() != first.len() {
                return Err(parse_error(
                    path,
                    last,
                    format!("expected {} columns, found {}", first.len(), cells.len()),
                ));
            }
        }

        let row = cells
            .iter()
            .map(|cell| parse_number(path, cell))
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }

    Ok(rows)
}

/// Parses a numeric table into a [`Matrix`].
pub fn parse_matrix(path: &str, content: &str) -> Result<Matrix, DataSourceError> {
    let rows = parse_table(path, content)?;
    Matrix::from_rows(rows).map_err(|e| DataSourceError::invalid(path, e))
}

/// Parses weights written as a single row or a single column.
pub fn parse_weights(path: &str, content: &str) -> Result<Weights, DataSourceError> {
    let rows = parse_table(path, content)?;

    let values = match rows.as_slice() {
        [] => {
            return Err(DataSourceError::invalid(
                path,
                ValidationError::empty_field("weights"),
            ))
        }
        [single] => single.clone(),
        many if many.iter().all(|row| row.len() == 1) => many.iter().map(|row| row[0]).collect(),
        _ => {
            return Err(DataSourceError::invalid(
                path,
                ValidationError::invalid_format("weights", "expected a single row or a single column"),
            ))
        }
    };

    Ok(Weights::new(values))
}

/// Parses free-text tokens separated by commas or newlines.
pub fn parse_labels(path: &str, content: &str) -> Result<Vec<String>, DataSourceError> {
    Ok(records(path, content)?
        .into_iter()
        .flatten()
        .filter(|cell| !cell.text.is_empty())
        .map(|cell| cell.text)
        .collect())
}

/// Parses criterion kinds (`benefit`, `cost`, `max`, `min`, `+`, `-`).
pub fn parse_criteria(path: &str, content: &str) -> Result<Vec<CriterionKind>, DataSourceError> {
    records(path, content)?
        .into_iter()
        .flatten()
        .filter(|cell| !cell.text.is_empty())
        .map(|cell| {
            CriterionKind::from_str(&cell.text).map_err(|e| parse_error(path, &cell, e.to_string()))
        })
        .collect()
}
