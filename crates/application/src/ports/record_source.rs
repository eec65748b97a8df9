use arpscope_domain::{InspectError, Record};

/// Port for host layers that materialize target records.
///
/// One call corresponds to one walk over the inspected cache. Returned
/// records are transient copies; they stay valid after the source is gone.
pub trait RecordSource: Send + Sync {
    fn read_records(&self) -> Result<Vec<Record>, InspectError>;
}
