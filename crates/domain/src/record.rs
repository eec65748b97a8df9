use crate::errors::InspectError;
use crate::hwaddr::HwAddr;
use std::fmt;
use std::sync::Arc;

/// One field value materialized by a host inspection layer.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    U32(u32),
    I32(i32),
    HwAddr(HwAddr),
    Text(String),
}

impl FieldValue {
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::U32(_) => "u32",
            FieldValue::I32(_) => "i32",
            FieldValue::HwAddr(_) => "hwaddr",
            FieldValue::Text(_) => "text",
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::U32(value) => write!(f, "{}", value),
            FieldValue::I32(value) => write!(f, "{}", value),
            FieldValue::HwAddr(addr) => write!(f, "{}", addr),
            FieldValue::Text(text) => write!(f, "\"{}\"", text),
        }
    }
}

/// One struct instance materialized from the inspected target.
///
/// Records are transient views: a host builds them for a single pass and
/// drops them afterwards. Fields keep the order the host inserted them in,
/// which is the order the fallback dump prints.
#[derive(Debug, Clone)]
pub struct Record {
    type_tag: Arc<str>,
    fields: Vec<(Arc<str>, FieldValue)>,
}

impl Record {
    pub fn new(type_tag: impl Into<Arc<str>>) -> Self {
        Self {
            type_tag: type_tag.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<Arc<str>>, value: FieldValue) -> Self {
        self.fields.push((name.into(), value));
        self
    }

    /// Struct type name as the target declares it, e.g. `arp_cache_entry`.
    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_ref(), value))
    }

    pub fn field(&self, name: &str) -> Result<&FieldValue, InspectError> {
        self.fields
            .iter()
            .find(|(field, _)| field.as_ref() == name)
            .map(|(_, value)| value)
            .ok_or_else(|| InspectError::MissingField {
                type_tag: self.type_tag.to_string(),
                field: name.to_string(),
            })
    }

    pub fn u32_field(&self, name: &str) -> Result<u32, InspectError> {
        match self.field(name)? {
            FieldValue::U32(value) => Ok(*value),
            other => Err(InspectError::FieldType {
                field: name.to_string(),
                expected: "u32",
                actual: other.kind(),
            }),
        }
    }

    pub fn i32_field(&self, name: &str) -> Result<i32, InspectError> {
        match self.field(name)? {
            FieldValue::I32(value) => Ok(*value),
            other => Err(InspectError::FieldType {
                field: name.to_string(),
                expected: "i32",
                actual: other.kind(),
            }),
        }
    }
}
