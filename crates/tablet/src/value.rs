//! Cell values and typed column storage.
//!
//! [`CellValue`] is the accessor layer's input/output variant: one owned
//! value per primitive kind, plus a raw-bytes form accepted for text
//! columns. [`ColumnValues`] is the closed storage union behind a tablet
//! column: one `Vec` variant per kind, chosen from the schema's declared
//! [`DataType`] at construction and fixed for the column's lifetime.

use crate::error::{Result, TabletError};
use crate::schema::DataType;
use std::fmt;

/// A single cell value crossing the accessor boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// An absent value; rejected by every write path.
    Null,
    /// A boolean value.
    Boolean(bool),
    /// A 32-bit integer value.
    Int32(i32),
    /// A 64-bit integer value.
    Int64(i64),
    /// A 32-bit float value.
    Float(f32),
    /// A 64-bit float value.
    Double(f64),
    /// An owned string value.
    Text(String),
    /// Raw bytes accepted by text columns and decoded without validation.
    Binary(Vec<u8>),
}

impl CellValue {
    /// Names the kind of this value, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Null => "null",
            CellValue::Boolean(_) => "boolean",
            CellValue::Int32(_) => "int32",
            CellValue::Int64(_) => "int64",
            CellValue::Float(_) => "float",
            CellValue::Double(_) => "double",
            CellValue::Text(_) => "text",
            CellValue::Binary(_) => "binary",
        }
    }

    /// Returns true if this value is the absent value.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => write!(f, "null"),
            CellValue::Boolean(v) => write!(f, "{v}"),
            CellValue::Int32(v) => write!(f, "{v}"),
            CellValue::Int64(v) => write!(f, "{v}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Double(v) => write!(f, "{v}"),
            CellValue::Text(v) => write!(f, "{v:?}"),
            CellValue::Binary(v) => write!(f, "{} bytes", v.len()),
        }
    }
}

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Boolean(v)
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        CellValue::Int32(v)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int64(v)
    }
}

impl From<f32> for CellValue {
    fn from(v: f32) -> Self {
        CellValue::Float(v)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Double(v)
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<Vec<u8>> for CellValue {
    fn from(v: Vec<u8>) -> Self {
        CellValue::Binary(v)
    }
}

/// Typed storage for one tablet column.
///
/// The variant always matches the owning schema's declared data type.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValues {
    /// Boolean column storage.
    Boolean(Vec<bool>),
    /// Int32 column storage.
    Int32(Vec<i32>),
    /// Int64 column storage.
    Int64(Vec<i64>),
    /// Float column storage.
    Float(Vec<f32>),
    /// Double column storage.
    Double(Vec<f64>),
    /// Text column storage.
    Text(Vec<String>),
}

impl ColumnValues {
    /// Allocates zero-valued (or empty-string) storage of the given kind.
    pub(crate) fn zeroed(data_type: DataType, len: usize) -> Self {
        match data_type {
            DataType::Boolean => Self::Boolean(vec![false; len]),
            DataType::Int32 => Self::Int32(vec![0; len]),
            DataType::Int64 => Self::Int64(vec![0; len]),
            DataType::Float => Self::Float(vec![0.0; len]),
            DataType::Double => Self::Double(vec![0.0; len]),
            DataType::Text => Self::Text(vec![String::new(); len]),
        }
    }

    /// Returns the declared data type this storage corresponds to.
    pub fn data_type(&self) -> DataType {
        match self {
            ColumnValues::Boolean(_) => DataType::Boolean,
            ColumnValues::Int32(_) => DataType::Int32,
            ColumnValues::Int64(_) => DataType::Int64,
            ColumnValues::Float(_) => DataType::Float,
            ColumnValues::Double(_) => DataType::Double,
            ColumnValues::Text(_) => DataType::Text,
        }
    }

    /// Returns the number of rows this column holds.
    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Boolean(cells) => cells.len(),
            ColumnValues::Int32(cells) => cells.len(),
            ColumnValues::Int64(cells) => cells.len(),
            ColumnValues::Float(cells) => cells.len(),
            ColumnValues::Double(cells) => cells.len(),
            ColumnValues::Text(cells) => cells.len(),
        }
    }

    /// Returns true if the column holds no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Writes `value` at `row`, enforcing the column's declared type.
    ///
    /// Bytes written to a text column are decoded as UTF-8 with invalid
    /// sequences replaced; nothing else is coerced.
    ///
    /// # Errors
    ///
    /// Returns `TabletError::TypeMismatch` (carrying the rejected value)
    /// when the value's kind disagrees with the column's type. The column
    /// is unchanged on error.
    pub(crate) fn set(&mut self, row: usize, value: CellValue) -> Result<()> {
        match (self, value) {
            (ColumnValues::Boolean(cells), CellValue::Boolean(v)) => cells[row] = v,
            (ColumnValues::Int32(cells), CellValue::Int32(v)) => cells[row] = v,
            (ColumnValues::Int64(cells), CellValue::Int64(v)) => cells[row] = v,
            (ColumnValues::Float(cells), CellValue::Float(v)) => cells[row] = v,
            (ColumnValues::Double(cells), CellValue::Double(v)) => cells[row] = v,
            (ColumnValues::Text(cells), CellValue::Text(v)) => cells[row] = v,
            (ColumnValues::Text(cells), CellValue::Binary(v)) => {
                cells[row] = String::from_utf8_lossy(&v).into_owned();
            }
            (column, value) => {
                return Err(TabletError::TypeMismatch {
                    expected: column.data_type(),
                    value,
                })
            }
        }
        Ok(())
    }

    /// Reads the value at `row`. The caller has already checked bounds.
    pub(crate) fn get(&self, row: usize) -> CellValue {
        match self {
            ColumnValues::Boolean(cells) => CellValue::Boolean(cells[row]),
            ColumnValues::Int32(cells) => CellValue::Int32(cells[row]),
            ColumnValues::Int64(cells) => CellValue::Int64(cells[row]),
            ColumnValues::Float(cells) => CellValue::Float(cells[row]),
            ColumnValues::Double(cells) => CellValue::Double(cells[row]),
            ColumnValues::Text(cells) => CellValue::Text(cells[row].clone()),
        }
    }

    /// Rebuilds the column with rows picked from `order`.
    pub(crate) fn reorder(&self, order: &[usize]) -> Self {
        fn pick<T: Clone>(cells: &[T], order: &[usize]) -> Vec<T> {
            order.iter().map(|&row| cells[row].clone()).collect()
        }
        match self {
            ColumnValues::Boolean(cells) => ColumnValues::Boolean(pick(cells, order)),
            ColumnValues::Int32(cells) => ColumnValues::Int32(pick(cells, order)),
            ColumnValues::Int64(cells) => ColumnValues::Int64(pick(cells, order)),
            ColumnValues::Float(cells) => ColumnValues::Float(pick(cells, order)),
            ColumnValues::Double(cells) => ColumnValues::Double(pick(cells, order)),
            ColumnValues::Text(cells) => ColumnValues::Text(pick(cells, order)),
        }
    }
}
