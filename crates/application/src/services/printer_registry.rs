use crate::printers::{ArpEntryPrinter, ValuePrinter, ARP_ENTRY_PATTERN};
use arpscope_domain::InspectError;
use fancy_regex::Regex;
use rustc_hash::FxHashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Pattern-to-printer bindings, resolved per record type tag.
///
/// Registration order is significant: the first pattern matching a tag wins.
/// Resolutions are memoized because a cache pass resolves the same tag once
/// per slot.
pub struct PrinterRegistry {
    printers: Vec<(Regex, Arc<dyn ValuePrinter>)>,
    resolved: RwLock<FxHashMap<String, Option<usize>>>,
}

impl PrinterRegistry {
    pub fn new() -> Self {
        Self {
            printers: Vec::new(),
            resolved: RwLock::new(FxHashMap::default()),
        }
    }

    /// Binds a type-tag pattern to a printer. The pattern must be a valid
    /// regex; anchor it explicitly for exact-name matches.
    pub fn register(
        &mut self,
        pattern: &str,
        printer: Arc<dyn ValuePrinter>,
    ) -> Result<(), InspectError> {
        let regex = Regex::new(pattern).map_err(|e| InspectError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        debug!(pattern, "Printer registered");
        self.printers.push((regex, printer));
        self.resolved.write().unwrap().clear();
        Ok(())
    }

    /// Finds the printer for a type tag, if any pattern matches.
    pub fn resolve(&self, type_tag: &str) -> Option<Arc<dyn ValuePrinter>> {
        if let Some(slot) = self.resolved.read().unwrap().get(type_tag) {
            return slot.map(|i| self.printers[i].1.clone());
        }

        let slot = self
            .printers
            .iter()
            .position(|(regex, _)| regex.is_match(type_tag).unwrap_or(false));

        self.resolved
            .write()
            .unwrap()
            .insert(type_tag.to_string(), slot);
        slot.map(|i| self.printers[i].1.clone())
    }

    pub fn len(&self) -> usize {
        self.printers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.printers.is_empty()
    }
}

impl Default for PrinterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry preloaded with the stock binding: `^arp_cache_entry$` mapped to
/// [`ArpEntryPrinter`].
pub fn arp_registry() -> Result<PrinterRegistry, InspectError> {
    let mut registry = PrinterRegistry::new();
    registry.register(ARP_ENTRY_PATTERN, Arc::new(ArpEntryPrinter))?;
    Ok(registry)
}
