//! Engine provider interface.

use std::collections::BTreeMap;

use crate::error::{Result, TunerError};

use super::{EngineDescriptor, EngineProfile};

/// Source of engine profiles, keyed by identifier.
pub trait EngineProvider {
    /// All known identifiers, in a stable order.
    fn list(&self) -> Vec<String>;

    /// Profile for the given identifier, or `None` if unknown.
    fn resolve(&self, id: &str) -> Option<EngineProfile>;

    /// Profile for the given identifier, or an error if unknown.
    fn require(&self, id: &str) -> Result<EngineProfile> {
        self.resolve(id)
            .ok_or_else(|| TunerError::UnknownEngine { id: id.to_string() })
    }

    /// Human-readable name for the identifier, if it has one.
    fn display_name(&self, id: &str) -> Option<String> {
        self.list().into_iter().find(|k| k == id)
    }
}

/// In-memory engine table.
///
/// Empty by default, in which case every lookup falls back to the default
/// profile in the simulator.
#[derive(Debug, Clone, Default)]
pub struct BuiltinProvider {
    engines: BTreeMap<String, EngineDescriptor>,
}

impl BuiltinProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an engine, replacing any engine with the same key.
    pub fn with_engine(mut self, descriptor: EngineDescriptor) -> Self {
        self.insert(descriptor);
        self
    }

    /// Add an engine, replacing any engine with the same key.
    pub fn insert(&mut self, descriptor: EngineDescriptor) {
        self.engines.insert(descriptor.key.clone(), descriptor);
    }

    /// Descriptor for the given identifier.
    pub fn descriptor(&self, id: &str) -> Option<&EngineDescriptor> {
        self.engines.get(id)
    }
}

impl EngineProvider for BuiltinProvider {
    fn list(&self) -> Vec<String> {
        self.engines.keys().cloned().collect()
    }

    fn resolve(&self, id: &str) -> Option<EngineProfile> {
        self.engines.get(id).map(EngineDescriptor::to_profile)
    }

    fn display_name(&self, id: &str) -> Option<String> {
        self.engines.get(id).map(|d| d.display.clone())
    }
}
