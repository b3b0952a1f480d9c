use sbom_formatter::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// DocumentEncoder that delegates to the real selector and counts calls
#[derive(Default)]
pub struct CountingEncoder {
    calls: AtomicUsize,
}

impl CountingEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DocumentEncoder for CountingEncoder {
    fn encode(
        &self,
        inventory: &ComponentInventory,
        format: &FormatId,
    ) -> std::result::Result<Vec<u8>, FormatError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        FormatterFactory.encode(inventory, format)
    }
}
