use super::ValuePrinter;
use arpscope_domain::{InspectError, Record};

/// Fallback renderer for records no registered printer claims: a flat
/// `tag {field = value, ...}` dump in host field order.
pub struct StructDumpPrinter;

impl ValuePrinter for StructDumpPrinter {
    fn print(&self, value: Option<&Record>) -> Result<String, InspectError> {
        let record = match value {
            None => return Ok("NULL".to_string()),
            Some(record) => record,
        };

        let mut out = format!("{} {{", record.type_tag());
        for (i, (name, value)) in record.fields().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&format!("{} = {}", name, value));
        }
        out.push('}');
        Ok(out)
    }
}
