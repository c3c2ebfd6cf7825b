//! Measurement schema declarations.
//!
//! A [`MeasurementSchema`] declares one column of a device: its measurement
//! name, primitive [`DataType`], and the [`Encoding`] and [`Compressor`] the
//! backend should apply when it persists the column. The descriptor is pure
//! data; raw type codes coming off the wire are validated only at the
//! [`DataType::from_code`] boundary, after which an invalid type cannot be
//! represented.

use crate::error::{Result, TabletError};
use std::collections::HashMap;

/// Primitive column data types and their wire codes.
///
/// The numbering is a wire contract shared with the backend and must not
/// change: `Boolean=0, Int32=1, Int64=2, Float=3, Double=4, Text=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum DataType {
    /// Single-byte boolean.
    Boolean = 0,
    /// 32-bit signed integer.
    Int32 = 1,
    /// 64-bit signed integer.
    Int64 = 2,
    /// 32-bit IEEE 754 float.
    Float = 3,
    /// 64-bit IEEE 754 float.
    Double = 4,
    /// Length-prefixed UTF-8 string.
    Text = 5,
}

impl DataType {
    /// Creates a DataType from its wire code.
    ///
    /// This is the single boundary where raw type codes are checked; every
    /// downstream component works with the closed enum.
    ///
    /// # Errors
    ///
    /// Returns `TabletError::UnsupportedType` for codes outside `0..=5`.
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(Self::Boolean),
            1 => Ok(Self::Int32),
            2 => Ok(Self::Int64),
            3 => Ok(Self::Float),
            4 => Ok(Self::Double),
            5 => Ok(Self::Text),
            other => Err(TabletError::UnsupportedType(other)),
        }
    }

    /// Returns the wire code for this data type.
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Column encoding applied by the backend.
///
/// Pass-through registration metadata; the tablet core never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Encoding {
    /// No encoding.
    #[default]
    Plain = 0,
    /// Dictionary encoding over plain values.
    PlainDictionary = 1,
    /// Run-length encoding.
    Rle = 2,
    /// Delta encoding.
    Diff = 3,
    /// Second-order delta encoding for timestamps.
    Ts2Diff = 4,
    /// Bitmap encoding.
    Bitmap = 5,
    /// Legacy Gorilla encoding.
    GorillaV1 = 6,
    /// Regular-interval timestamp encoding.
    Regular = 7,
    /// Gorilla XOR encoding.
    Gorilla = 8,
}

impl Encoding {
    /// Creates an Encoding from a u8 value.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Plain),
            1 => Some(Self::PlainDictionary),
            2 => Some(Self::Rle),
            3 => Some(Self::Diff),
            4 => Some(Self::Ts2Diff),
            5 => Some(Self::Bitmap),
            6 => Some(Self::GorillaV1),
            7 => Some(Self::Regular),
            8 => Some(Self::Gorilla),
            _ => None,
        }
    }
}

/// Column compressor applied by the backend.
///
/// Pass-through registration metadata; the tablet core never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Compressor {
    /// No compression.
    #[default]
    Uncompressed = 0,
    /// Snappy compression.
    Snappy = 1,
    /// Gzip compression.
    Gzip = 2,
    /// LZO compression.
    Lzo = 3,
    /// Swinging Door Trending lossy compression.
    Sdt = 4,
    /// Piecewise Aggregate Approximation lossy compression.
    Paa = 5,
    /// Piecewise Linear Approximation lossy compression.
    Pla = 6,
    /// LZ4 compression.
    Lz4 = 7,
}

impl Compressor {
    /// Creates a Compressor from a u8 value.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Uncompressed),
            1 => Some(Self::Snappy),
            2 => Some(Self::Gzip),
            3 => Some(Self::Lzo),
            4 => Some(Self::Sdt),
            5 => Some(Self::Paa),
            6 => Some(Self::Pla),
            7 => Some(Self::Lz4),
            _ => None,
        }
    }
}

/// Declares one column of a device.
///
/// Immutable once attached to a tablet.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementSchema {
    measurement: String,
    data_type: DataType,
    encoding: Encoding,
    compressor: Compressor,
    properties: HashMap<String, String>,
}

impl MeasurementSchema {
    /// Creates a schema with no extra properties.
    pub fn new(
        measurement: impl Into<String>,
        data_type: DataType,
        encoding: Encoding,
        compressor: Compressor,
    ) -> Self {
        Self {
            measurement: measurement.into(),
            data_type,
            encoding,
            compressor,
            properties: HashMap::new(),
        }
    }

    /// Creates a schema carrying backend-specific key/value properties.
    pub fn with_properties(
        measurement: impl Into<String>,
        data_type: DataType,
        encoding: Encoding,
        compressor: Compressor,
        properties: HashMap<String, String>,
    ) -> Self {
        Self {
            measurement: measurement.into(),
            data_type,
            encoding,
            compressor,
            properties,
        }
    }

    /// Returns the measurement name.
    pub fn measurement(&self) -> &str {
        &self.measurement
    }

    /// Returns the declared data type.
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Returns the declared encoding.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Returns the declared compressor.
    pub fn compressor(&self) -> Compressor {
        self.compressor
    }

    /// Returns the backend-specific properties.
    pub fn properties(&self) -> &HashMap<String, String> {
        &self.properties
    }
}
