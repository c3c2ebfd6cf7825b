//! Wire payload encoding.
//!
//! Converts a [`Tablet`]'s columnar data into the binary representation the
//! backend ingests. All multi-byte values are big-endian two's-complement.
//!
//! ## Payload layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Timestamp block                                             │
//! │  - row_count × i64, 8 bytes each, current row order          │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Value block (columns concatenated in schema order)          │
//! │  - Boolean: 1 byte per row (0x00 / 0x01)                     │
//! │  - Int32 / Float: 4 bytes per row                            │
//! │  - Int64 / Double: 8 bytes per row                           │
//! │  - Text: per row, i32 byte-length prefix + raw UTF-8 bytes,  │
//! │    no terminator or padding                                  │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Type tags: i32 wire code per column, schema order           │
//! │  (carried beside the payload, see Tablet::data_type_codes)   │
//! └──────────────────────────────────────────────────────────────┘
//! ```

use crate::batch::Tablet;
use crate::value::ColumnValues;

impl Tablet {
    /// Encodes the timestamp block: one 8-byte big-endian `i64` per row, in
    /// the store's current row order. The output is exactly
    /// `8 * row_count()` bytes.
    pub fn encode_timestamps(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.row_count() * 8);
        for timestamp in self.timestamps() {
            buf.extend_from_slice(&timestamp.to_be_bytes());
        }
        buf
    }

    /// Encodes the value block: per-column encodings concatenated in schema
    /// order, fixed-width for numeric and boolean columns, length-prefixed
    /// for text columns.
    pub fn encode_values(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        for column in self.columns() {
            match column {
                ColumnValues::Boolean(cells) => {
                    for v in cells {
                        buf.push(u8::from(*v));
                    }
                }
                ColumnValues::Int32(cells) => {
                    for v in cells {
                        buf.extend_from_slice(&v.to_be_bytes());
                    }
                }
                ColumnValues::Int64(cells) => {
                    for v in cells {
                        buf.extend_from_slice(&v.to_be_bytes());
                    }
                }
                ColumnValues::Float(cells) => {
                    for v in cells {
                        buf.extend_from_slice(&v.to_be_bytes());
                    }
                }
                ColumnValues::Double(cells) => {
                    for v in cells {
                        buf.extend_from_slice(&v.to_be_bytes());
                    }
                }
                ColumnValues::Text(cells) => {
                    for v in cells {
                        buf.extend_from_slice(&(v.len() as i32).to_be_bytes());
                        buf.extend_from_slice(v.as_bytes());
                    }
                }
            }
        }
        buf
    }

    /// Returns the wire type code of each column, in schema order.
    pub fn data_type_codes(&self) -> Vec<i32> {
        self.schemas()
            .iter()
            .map(|schema| schema.data_type().code())
            .collect()
    }

    /// Returns the measurement names, in schema order.
    pub fn measurements(&self) -> Vec<String> {
        self.schemas()
            .iter()
            .map(|schema| schema.measurement().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::batch::Tablet;
    use crate::schema::{Compressor, DataType, Encoding, MeasurementSchema};
    use crate::value::CellValue;

    fn schema(name: &str, data_type: DataType) -> MeasurementSchema {
        MeasurementSchema::new(name, data_type, Encoding::Plain, Compressor::Uncompressed)
    }

    #[test]
    fn test_encode_timestamps_preserves_stored_order() {
        let mut tablet = Tablet::new("root.sg.d1", vec![schema("s1", DataType::Int32)], 3);
        for (row, ts) in [100i64, 50, 75].into_iter().enumerate() {
            tablet.set_timestamp(ts, row).unwrap();
        }

        let buf = tablet.encode_timestamps();
        assert_eq!(buf.len(), 24);

        let mut expected = Vec::new();
        expected.extend_from_slice(&100i64.to_be_bytes());
        expected.extend_from_slice(&50i64.to_be_bytes());
        expected.extend_from_slice(&75i64.to_be_bytes());
        assert_eq!(buf, expected);
    }

    #[test]
    fn test_encode_values_int32() {
        let mut tablet = Tablet::new("root.sg.d1", vec![schema("s1", DataType::Int32)], 2);
        tablet.set_value(CellValue::Int32(1), 0, 0).unwrap();
        tablet.set_value(CellValue::Int32(-1), 0, 1).unwrap();

        assert_eq!(
            tablet.encode_values(),
            vec![0x00, 0x00, 0x00, 0x01, 0xFF, 0xFF, 0xFF, 0xFF]
        );
    }

    #[test]
    fn test_encode_values_boolean() {
        let mut tablet = Tablet::new("root.sg.d1", vec![schema("s1", DataType::Boolean)], 3);
        tablet.set_value(CellValue::Boolean(true), 0, 1).unwrap();

        assert_eq!(tablet.encode_values(), vec![0x00, 0x01, 0x00]);
    }

    #[test]
    fn test_encode_values_text_length_prefixed() {
        let mut tablet = Tablet::new("root.sg.d1", vec![schema("s1", DataType::Text)], 2);
        tablet.set_value(CellValue::from("ab"), 0, 0).unwrap();
        tablet.set_value(CellValue::from(""), 0, 1).unwrap();

        let mut expected = Vec::new();
        expected.extend_from_slice(&2i32.to_be_bytes());
        expected.extend_from_slice(b"ab");
        expected.extend_from_slice(&0i32.to_be_bytes());
        assert_eq!(tablet.encode_values(), expected);
    }

    #[test]
    fn test_encode_values_text_length_is_byte_length() {
        let mut tablet = Tablet::new("root.sg.d1", vec![schema("s1", DataType::Text)], 1);
        // "é" is one char but two UTF-8 bytes.
        tablet.set_value(CellValue::from("é"), 0, 0).unwrap();

        let buf = tablet.encode_values();
        assert_eq!(&buf[..4], &2i32.to_be_bytes());
        assert_eq!(&buf[4..], "é".as_bytes());
    }

    #[test]
    fn test_encode_values_columns_in_schema_order() {
        let schemas = vec![
            schema("s_f64", DataType::Double),
            schema("s_i64", DataType::Int64),
        ];
        let mut tablet = Tablet::new("root.sg.d1", schemas, 1);
        tablet.set_value(CellValue::Double(1.5), 0, 0).unwrap();
        tablet.set_value(CellValue::Int64(-2), 1, 0).unwrap();

        let mut expected = Vec::new();
        expected.extend_from_slice(&1.5f64.to_be_bytes());
        expected.extend_from_slice(&(-2i64).to_be_bytes());
        assert_eq!(tablet.encode_values(), expected);
    }

    #[test]
    fn test_encode_values_fixed_widths() {
        let schemas = vec![
            schema("s_bool", DataType::Boolean),
            schema("s_i32", DataType::Int32),
            schema("s_i64", DataType::Int64),
            schema("s_f32", DataType::Float),
            schema("s_f64", DataType::Double),
        ];
        let tablet = Tablet::new("root.sg.d1", schemas, 4);
        // 4 rows × (1 + 4 + 8 + 4 + 8) bytes.
        assert_eq!(tablet.encode_values().len(), 4 * 25);
    }

    #[test]
    fn test_encode_empty_tablet() {
        let tablet = Tablet::new("root.sg.d1", vec![schema("s1", DataType::Int32)], 0);
        assert!(tablet.encode_timestamps().is_empty());
        assert!(tablet.encode_values().is_empty());
    }

    #[test]
    fn test_data_type_codes_wire_mapping() {
        let schemas = vec![
            schema("s_bool", DataType::Boolean),
            schema("s_i32", DataType::Int32),
            schema("s_i64", DataType::Int64),
            schema("s_f32", DataType::Float),
            schema("s_f64", DataType::Double),
            schema("s_text", DataType::Text),
        ];
        let tablet = Tablet::new("root.sg.d1", schemas, 1);
        assert_eq!(tablet.data_type_codes(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_measurements_in_schema_order() {
        let schemas = vec![
            schema("temperature", DataType::Double),
            schema("status", DataType::Text),
        ];
        let tablet = Tablet::new("root.sg.d1", schemas, 1);
        assert_eq!(tablet.measurements(), vec!["temperature", "status"]);
    }

    #[test]
    fn test_encode_after_sort_uses_new_order() {
        let mut tablet = Tablet::new("root.sg.d1", vec![schema("s1", DataType::Int32)], 2);
        tablet.set_timestamp(200, 0).unwrap();
        tablet.set_timestamp(100, 1).unwrap();
        tablet.set_value(CellValue::Int32(20), 0, 0).unwrap();
        tablet.set_value(CellValue::Int32(10), 0, 1).unwrap();

        tablet.sort_by_timestamp();

        let mut expected_ts = Vec::new();
        expected_ts.extend_from_slice(&100i64.to_be_bytes());
        expected_ts.extend_from_slice(&200i64.to_be_bytes());
        assert_eq!(tablet.encode_timestamps(), expected_ts);

        let mut expected_values = Vec::new();
        expected_values.extend_from_slice(&10i32.to_be_bytes());
        expected_values.extend_from_slice(&20i32.to_be_bytes());
        assert_eq!(tablet.encode_values(), expected_values);
    }
}
