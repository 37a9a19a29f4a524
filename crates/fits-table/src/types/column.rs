//! Column definitions.

use crate::endian::{BigEndianWord, WORD_LEN, encode_big_endian};

/// Element type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// 32-bit signed integer (`TFORM = 'J'`).
    Int32,
    /// 32-bit IEEE-754 float (`TFORM = 'E'`).
    Float32,
}

impl ColumnType {
    /// Single letter FITS type code.
    #[must_use]
    pub const fn tform_code(self) -> &'static str {
        match self {
            Self::Int32 => "J",
            Self::Float32 => "E",
        }
    }

    /// Bytes per element.
    #[must_use]
    pub const fn width(self) -> usize {
        WORD_LEN
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int32 => write!(f, "int32"),
            Self::Float32 => write!(f, "float32"),
        }
    }
}

/// A registered column, stored big-endian.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name (rendered as `TTYPEn`).
    pub name: String,
    /// Element type.
    pub data_type: ColumnType,
    data: Vec<u8>,
}

impl Column {
    /// Create a 32-bit integer column.
    pub fn int32(name: impl Into<String>, values: &[i32]) -> Self {
        Self::encode(name, ColumnType::Int32, values)
    }

    /// Create a 32-bit float column.
    pub fn float32(name: impl Into<String>, values: &[f32]) -> Self {
        Self::encode(name, ColumnType::Float32, values)
    }

    fn encode<T: BigEndianWord>(
        name: impl Into<String>,
        data_type: ColumnType,
        values: &[T],
    ) -> Self {
        Self {
            name: name.into(),
            data_type,
            data: encode_big_endian(values),
        }
    }

    /// Number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len() / WORD_LEN
    }

    /// Whether the column holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Big-endian bytes of the value at `row`.
    #[must_use]
    pub fn word(&self, row: usize) -> Option<&[u8]> {
        let start = row * WORD_LEN;
        self.data.get(start..start + WORD_LEN)
    }

    /// All values as big-endian bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_column() {
        let col = Column::int32("EVIL", &[666, 1]);
        assert_eq!(col.len(), 2);
        assert_eq!(col.data_type, ColumnType::Int32);
        assert_eq!(col.word(0), Some(&[0, 0, 0x02, 0x9a][..]));
        assert_eq!(col.word(1), Some(&[0, 0, 0, 1][..]));
        assert_eq!(col.word(2), None);
    }

    #[test]
    fn test_float_column() {
        let col = Column::float32("HALF", &[333.0]);
        assert_eq!(col.as_bytes(), &[0x43, 0xa6, 0x80, 0x00]);
        assert_eq!(col.data_type.tform_code(), "E");
    }

    #[test]
    fn test_empty_column() {
        let col = Column::int32("NONE", &[]);
        assert!(col.is_empty());
        assert_eq!(col.len(), 0);
    }
}
