//! Identifier generation for sprite documents
//!
//! Every export generates fresh identifiers for the document and its nested
//! records. Generation is a capability injected into the exporter so tests
//! and reproducible pipelines can substitute a deterministic sequence.

use uuid::Uuid;

/// Source of unique identifiers for one or more exports
pub trait IdGenerator {
    /// Produce the next identifier; never repeats within a generator
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs, the toolchain's native identifier format
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic prefixed sequence, for tests and reproducible output
#[derive(Debug, Clone)]
pub struct SequenceIdGenerator {
    prefix: String,
    counter: u64,
}

impl SequenceIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: 0,
        }
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{:04}", self.prefix, self.counter);
        self.counter += 1;
        id
    }
}
