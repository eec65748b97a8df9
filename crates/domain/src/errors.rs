use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum InspectError {
    #[error("Record '{type_tag}' has no field '{field}'")]
    MissingField { type_tag: String, field: String },

    #[error("Field '{field}' is {actual}, expected {expected}")]
    FieldType {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Unknown age sentinel: {0}")]
    UnknownAgeSentinel(i32),

    #[error("Invalid hardware address: {0}")]
    InvalidHwAddr(String),

    #[error("Invalid printer pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Failed to read snapshot {path}: {reason}")]
    SnapshotRead { path: String, reason: String },

    #[error("Snapshot truncated: {len} bytes at offset {offset} exceed {image_len}-byte image")]
    SnapshotTruncated {
        offset: usize,
        len: usize,
        image_len: usize,
    },

    #[error("Failed to read ARP table {path}: {reason}")]
    TableRead { path: String, reason: String },
}
