//! External reference corpus
//!
//! A collection of text records used to calibrate term weights. Records come
//! from memory, from a CSV file with a header row, or from a JSON file holding
//! either an array of objects or one object per line (JSON Lines). A
//! designated column or field carries the text.

use crate::errors::{Result, TldrError};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Field read from each record when none is specified
pub const DEFAULT_TEXT_FIELD: &str = "content";

/// Text records that establish vocabulary and IDF statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternalCorpus {
    records: Vec<String>,
}

impl ExternalCorpus {
    /// Build a corpus from in-memory records
    pub fn from_records<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            records: records.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse JSON (array of objects, or JSON Lines) and read `field` from each record
    pub fn from_json_str(source: &str, field: &str) -> Result<Self> {
        let trimmed = source.trim_start();
        let values: Vec<Value> = if trimmed.starts_with('[') {
            match serde_json::from_str::<Value>(trimmed)? {
                Value::Array(items) => items,
                _ => return Err(TldrError::invalid_config("expected a JSON array of records")),
            }
        } else {
            trimmed
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(serde_json::from_str::<Value>)
                .collect::<std::result::Result<Vec<_>, _>>()?
        };

        let records = values
            .iter()
            .enumerate()
            .map(|(i, value)| extract_field(i, value, field))
            .collect::<Result<Vec<_>>>()?;

        #[cfg(feature = "tracing")]
        tracing::debug!(records = records.len(), field, "loaded external corpus");
        Ok(Self { records })
    }

    /// Parse CSV with a header row and read the `field` column of each row
    pub fn from_csv_str(source: &str, field: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(source.as_bytes());

        let column = reader
            .headers()?
            .iter()
            .position(|name| name.trim() == field)
            .ok_or_else(|| {
                TldrError::invalid_config(format!("CSV header has no column `{field}`"))
            })?;

        let records = reader
            .records()
            .map(|row| row.map(|row| row.get(column).unwrap_or_default().to_string()))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        #[cfg(feature = "tracing")]
        tracing::debug!(records = records.len(), field, "loaded external CSV corpus");
        Ok(Self { records })
    }

    /// Read and parse a corpus file
    ///
    /// A `.csv` extension selects CSV; anything else is parsed as JSON.
    pub fn from_path(path: impl AsRef<Path>, field: &str) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| TldrError::io(path, e))?;
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv {
            Self::from_csv_str(&source, field)
        } else {
            Self::from_json_str(&source, field)
        }
    }

    /// The records, in input order
    pub fn records(&self) -> &[String] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn extract_field(index: usize, value: &Value, field: &str) -> Result<String> {
    let object = value.as_object().ok_or_else(|| {
        TldrError::invalid_config(format!("record {index} is not a JSON object"))
    })?;
    match object.get(field) {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(Value::Null) => Ok(String::new()),
        Some(_) => Err(TldrError::invalid_config(format!(
            "record {index}: field `{field}` is not a string"
        ))),
        None => Err(TldrError::invalid_config(format!(
            "record {index} is missing field `{field}`"
        ))),
    }
}
