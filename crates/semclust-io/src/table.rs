//! Header-checked CSV table.

use std::path::Path;
use std::str::FromStr;

use csv::StringRecord;
use semclust_core::errors::IoError;
use tracing::debug;

/// A whole CSV file read into memory with its header row.
#[derive(Debug, Clone)]
pub struct CsvTable {
    path: String,
    headers: StringRecord,
    records: Vec<StringRecord>,
}

impl CsvTable {
    pub fn open(path: &Path) -> Result<Self, IoError> {
        let shown = path.display().to_string();
        let mut reader = csv::Reader::from_path(path).map_err(|e| IoError::Open {
            path: shown.clone(),
            reason: e.to_string(),
        })?;
        let headers = reader
            .headers()
            .map_err(|e| IoError::MalformedRow {
                path: shown.clone(),
                row: 0,
                reason: e.to_string(),
            })?
            .clone();

        let mut records = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result.map_err(|e| IoError::MalformedRow {
                path: shown.clone(),
                row: idx + 1,
                reason: e.to_string(),
            })?;
            records.push(record);
        }
        debug!(path = %shown, rows = records.len(), columns = headers.len(), "csv loaded");
        Ok(Self {
            path: shown,
            headers,
            records,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h.trim() == name)
    }

    /// Position of a required column.
    pub fn column(&self, name: &str) -> Result<usize, IoError> {
        self.headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| IoError::MissingColumn {
                path: self.path.clone(),
                column: name.to_string(),
                found: self.headers.iter().collect::<Vec<_>>().join(", "),
            })
    }

    /// Fail on the first of `names` that is missing.
    pub fn require(&self, names: &[&str]) -> Result<(), IoError> {
        for name in names {
            self.column(name)?;
        }
        Ok(())
    }

    /// All values of a column as strings. Short rows are malformed.
    pub fn strings(&self, name: &str) -> Result<Vec<String>, IoError> {
        let idx = self.column(name)?;
        self.records
            .iter()
            .enumerate()
            .map(|(row, r)| {
                r.get(idx).map(str::to_string).ok_or_else(|| IoError::MalformedRow {
                    path: self.path.clone(),
                    row: row + 1,
                    reason: format!("no value for `{name}`"),
                })
            })
            .collect()
    }

    /// All values of a column parsed as `T`.
    pub fn parse<T>(&self, name: &str) -> Result<Vec<T>, IoError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.strings(name)?
            .iter()
            .enumerate()
            .map(|(row, v)| {
                v.trim().parse::<T>().map_err(|e| IoError::MalformedRow {
                    path: self.path.clone(),
                    row: row + 1,
                    reason: format!("`{name}` value `{v}`: {e}"),
                })
            })
            .collect()
    }

    /// Deserialize every row into `T` by header name.
    pub fn deserialize<T>(&self) -> Result<Vec<T>, IoError>
    where
        T: serde::de::DeserializeOwned,
    {
        self.records
            .iter()
            .enumerate()
            .map(|(row, r)| {
                r.deserialize(Some(&self.headers)).map_err(|e| IoError::MalformedRow {
                    path: self.path.clone(),
                    row: row + 1,
                    reason: e.to_string(),
                })
            })
            .collect()
    }
}
