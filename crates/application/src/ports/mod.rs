mod record_source;

pub use record_source::RecordSource;

// Re-export for convenience
pub use arpscope_domain::Record;
