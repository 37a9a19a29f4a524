//! Writer options.

use chrono::NaiveDateTime;

use crate::endian::WORD_LEN;
use crate::header::utc_now;

/// Default size of the data buffer (256 KiB).
pub const DEFAULT_BUFFER_CAPACITY: usize = 262_144;

/// Options for writing FITS tables.
#[derive(Debug, Clone)]
pub struct WriterOptions {
    /// UTC time recorded in the header (default: time of the write).
    pub timestamp: Option<NaiveDateTime>,
    /// Data buffer size in bytes (default: 256 KiB, minimum: 4).
    pub buffer_capacity: usize,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            timestamp: None,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

impl WriterOptions {
    /// Create writer options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the header timestamp, making output reproducible.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Set the data buffer size.
    #[must_use]
    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }

    /// Timestamp to record (current UTC time if not set).
    #[must_use]
    pub fn get_timestamp(&self) -> NaiveDateTime {
        self.timestamp.unwrap_or_else(utc_now)
    }

    /// Buffer capacity, raised to hold at least one value.
    #[must_use]
    pub fn effective_buffer_capacity(&self) -> usize {
        self.buffer_capacity.max(WORD_LEN)
    }
}
