//! The columnar write batch.
//!
//! This module provides the [`Tablet`], the staging buffer that collects a
//! fixed number of time-indexed rows for one device before they are encoded
//! into the backend's wire payload (see [`crate::wire`]).
//!
//! A tablet is created once with its device id, schema set, and row
//! capacity, all immutable afterwards; cells are then mutated in place
//! through the typed accessors. [`Tablet::sort_by_timestamp`] may shrink the
//! row set when duplicate timestamps collapse. A tablet is not safe for
//! concurrent mutation; use one instance per in-flight write batch.
//!
//! # Example
//!
//! ```rust,ignore
//! use tablet::{CellValue, Compressor, DataType, Encoding, MeasurementSchema, Tablet};
//!
//! let schemas = vec![
//!     MeasurementSchema::new("temperature", DataType::Double, Encoding::Gorilla, Compressor::Snappy),
//! ];
//! let mut tablet = Tablet::new("root.sg.device1", schemas, 1024);
//!
//! tablet.set_timestamp(1_723_000_000_000, 0)?;
//! tablet.set_value(CellValue::Double(21.5), 0, 0)?;
//!
//! tablet.sort_by_timestamp();
//! let payload = tablet.encode_values();
//! ```

use crate::error::{Result, TabletError};
use crate::schema::MeasurementSchema;
use crate::value::{CellValue, ColumnValues};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Columnar staging buffer for one device's write batch.
///
/// Row index `i` refers to the same logical row across the timestamp
/// sequence and every column. Each column's storage variant matches its
/// schema's declared type, fixed at construction.
#[derive(Debug, Clone)]
pub struct Tablet {
    device_id: String,
    schemas: Vec<MeasurementSchema>,
    timestamps: Vec<i64>,
    columns: Vec<ColumnValues>,
    row_count: usize,
}

impl Tablet {
    /// Creates a tablet for `device_id` holding `row_capacity` zero-filled
    /// rows across the given schemas.
    pub fn new(
        device_id: impl Into<String>,
        schemas: Vec<MeasurementSchema>,
        row_capacity: usize,
    ) -> Self {
        let columns = schemas
            .iter()
            .map(|schema| ColumnValues::zeroed(schema.data_type(), row_capacity))
            .collect();
        Self {
            device_id: device_id.into(),
            schemas,
            timestamps: vec![0; row_capacity],
            columns,
            row_count: row_capacity,
        }
    }

    /// Returns the device this tablet stages rows for.
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// Returns the column schemas, in column order.
    pub fn schemas(&self) -> &[MeasurementSchema] {
        &self.schemas
    }

    /// Returns the number of columns.
    pub fn column_count(&self) -> usize {
        self.schemas.len()
    }

    /// Returns the current number of rows.
    ///
    /// This is the construction-time capacity until a deduplicating sort
    /// shrinks it; it always equals the length of the timestamp sequence
    /// and of every column.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Returns the timestamp sequence, in current row order.
    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    pub(crate) fn columns(&self) -> &[ColumnValues] {
        &self.columns
    }

    /// Writes `timestamp` at `row`.
    ///
    /// # Errors
    ///
    /// Returns `TabletError::IndexOutOfRange` if `row >= row_count()`.
    pub fn set_timestamp(&mut self, timestamp: i64, row: usize) -> Result<()> {
        self.check_row(row)?;
        self.timestamps[row] = timestamp;
        Ok(())
    }

    /// Writes `value` into the cell at (`column`, `row`).
    ///
    /// Text columns also accept [`CellValue::Binary`], decoded as UTF-8
    /// with invalid sequences replaced.
    ///
    /// # Errors
    ///
    /// - `TabletError::NullValue` if `value` is [`CellValue::Null`]
    /// - `TabletError::IndexOutOfRange` if `column` or `row` is outside its
    ///   valid range
    /// - `TabletError::TypeMismatch` if the value's kind disagrees with the
    ///   column's declared type
    ///
    /// The tablet is unchanged on error.
    pub fn set_value(&mut self, value: CellValue, column: usize, row: usize) -> Result<()> {
        if value.is_null() {
            return Err(TabletError::NullValue);
        }
        self.check_column(column)?;
        self.check_row(row)?;
        self.columns[column].set(row, value)
    }

    /// Reads the cell at (`column`, `row`).
    ///
    /// Never returns [`CellValue::Null`]; unwritten cells read as the
    /// column type's zero value.
    ///
    /// # Errors
    ///
    /// Returns `TabletError::IndexOutOfRange` if `column` or `row` is
    /// outside its valid range.
    pub fn value_at(&self, column: usize, row: usize) -> Result<CellValue> {
        self.check_column(column)?;
        self.check_row(row)?;
        Ok(self.columns[column].get(row))
    }

    /// Rebuilds the row order so timestamps are strictly ascending.
    ///
    /// Rows sharing a timestamp collapse into a single row and the value
    /// of the last occurrence in the original order wins; [`Self::row_count`]
    /// shrinks accordingly.
    pub fn sort_by_timestamp(&mut self) {
        // Later rows overwrite earlier ones, so on duplicate timestamps the
        // last occurrence wins.
        let mut index: BTreeMap<i64, usize> = BTreeMap::new();
        for (row, &timestamp) in self.timestamps.iter().enumerate() {
            index.insert(timestamp, row);
        }

        let before = self.row_count;
        let order: Vec<usize> = index.values().copied().collect();
        self.timestamps = index.keys().copied().collect();
        for column in &mut self.columns {
            *column = column.reorder(&order);
        }
        self.row_count = order.len();

        if self.row_count < before {
            warn!(
                device = %self.device_id,
                dropped = before - self.row_count,
                "duplicate timestamps collapsed during sort"
            );
        } else {
            debug!(device = %self.device_id, rows = self.row_count, "rows sorted by timestamp");
        }
    }

    fn check_column(&self, column: usize) -> Result<()> {
        if column >= self.schemas.len() {
            return Err(TabletError::IndexOutOfRange {
                axis: "column",
                index: column,
                len: self.schemas.len(),
            });
        }
        Ok(())
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.row_count {
            return Err(TabletError::IndexOutOfRange {
                axis: "row",
                index: row,
                len: self.row_count,
            });
        }
        Ok(())
    }
}
