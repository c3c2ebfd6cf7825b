//! Tablet - Columnar write-batch buffer for a time series database client.
//!
//! This crate provides the client-side staging buffer that collects a fixed
//! number of time-indexed rows for one device before they are encoded into
//! the backend's binary wire payload. The surrounding transport, session,
//! and schema-registration machinery live elsewhere and consume the byte
//! payloads this crate produces.
//!
//! # Components
//!
//! - [`MeasurementSchema`]: per-column declaration (name, type, encoding,
//!   compressor)
//! - [`Tablet`]: the columnar store with typed, bounds-checked cell access
//!   and chronological sorting
//! - [`Tablet::encode_timestamps`] / [`Tablet::encode_values`]: the wire
//!   codec (see [`wire`] for the payload layout)
//!
//! # Example
//!
//! ```rust,ignore
//! use tablet::{CellValue, Compressor, DataType, Encoding, MeasurementSchema, Tablet};
//!
//! let schemas = vec![
//!     MeasurementSchema::new("temperature", DataType::Double, Encoding::Gorilla, Compressor::Snappy),
//!     MeasurementSchema::new("status", DataType::Text, Encoding::Plain, Compressor::Uncompressed),
//! ];
//! let mut tablet = Tablet::new("root.sg.device1", schemas, 1024);
//!
//! for row in 0..tablet.row_count() {
//!     tablet.set_timestamp(base_ts + row as i64, row)?;
//!     tablet.set_value(CellValue::Double(read_temperature()), 0, row)?;
//!     tablet.set_value(CellValue::from("ok"), 1, row)?;
//! }
//!
//! tablet.sort_by_timestamp();
//! session.insert_tablet(
//!     tablet.device_id(),
//!     tablet.measurements(),
//!     tablet.data_type_codes(),
//!     tablet.encode_timestamps(),
//!     tablet.encode_values(),
//! )?;
//! ```

#![deny(missing_docs)]

pub mod batch;
pub mod error;
pub mod schema;
pub mod value;
pub mod wire;

pub use batch::Tablet;
pub use error::{Result, TabletError};
pub use schema::{Compressor, DataType, Encoding, MeasurementSchema};
pub use value::{CellValue, ColumnValues};
