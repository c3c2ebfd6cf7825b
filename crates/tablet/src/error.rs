//! Error and Result types for tablet operations.

use crate::schema::DataType;
use crate::value::CellValue;
use thiserror::Error;

/// A convenience `Result` type for tablet operations.
pub type Result<T> = std::result::Result<T, TabletError>;

/// The error type for tablet operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TabletError {
    /// A mutation was given an absent value.
    #[error("value must not be null")]
    NullValue,

    /// A column or row index fell outside its valid range.
    #[error("{axis} index {index} out of range, valid range is 0..{len}")]
    IndexOutOfRange {
        /// Which index was out of range ("column" or "row").
        axis: &'static str,
        /// The offending index.
        index: usize,
        /// The exclusive upper bound of the valid range.
        len: usize,
    },

    /// A supplied value's kind disagrees with the column's declared type.
    #[error("type mismatch: column declared {expected:?}, got {} value {value}", .value.type_name())]
    TypeMismatch {
        /// The column's declared data type.
        expected: DataType,
        /// The rejected value.
        value: CellValue,
    },

    /// A raw data type code outside the six recognized variants.
    #[error("unsupported data type code {0}")]
    UnsupportedType(i32),
}
