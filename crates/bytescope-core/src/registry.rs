//! Source registry — id-keyed dispatch over the registered byte sources.
//!
//! The registry owns one instance of each source, so stateful generators
//! (the LCG) keep one continuing sequence for the registry's lifetime. A
//! server wraps the registry in a mutex and all clients share that stream;
//! per-session isolation would mean one registry per session.

use log::{debug, warn};

use crate::error::SourceError;
use crate::source::{ByteSource, SourceInfo};
use crate::sources::{DeviceSource, LcgSource, MathSource};

/// Hard cap on bytes per request. Requests above this are clamped, not
/// rejected — a deliberate saturating bound on request cost.
pub const MAX_REQUEST_BYTES: usize = 100_000;

/// Bytes produced when the caller supplies no count.
pub const DEFAULT_REQUEST_BYTES: usize = 5000;

/// Registry of byte sources, dispatched by identifier string.
pub struct SourceRegistry {
    sources: Vec<Box<dyn ByteSource>>,
}

impl SourceRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Registry with the standard three sources: `urandom`, `lcg`, `math`.
    /// The LCG is clock-seeded once here and persists.
    pub fn standard() -> Self {
        Self::with_device_path(crate::sources::DEFAULT_DEVICE_PATH)
    }

    /// Standard registry reading an alternate random device.
    pub fn with_device_path(device_path: impl Into<std::path::PathBuf>) -> Self {
        let mut reg = Self::new();
        reg.add_source(Box::new(DeviceSource::with_path(device_path)));
        reg.add_source(Box::new(LcgSource::from_clock()));
        reg.add_source(Box::new(MathSource::new()));
        reg
    }

    /// Register a source. Later registrations with a duplicate id shadow
    /// nothing; lookup takes the first match.
    pub fn add_source(&mut self, source: Box<dyn ByteSource>) {
        self.sources.push(source);
    }

    /// Number of registered sources.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Registered source identifiers, in registration order.
    pub fn source_ids(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.id()).collect()
    }

    /// Metadata for every registered source.
    pub fn source_infos(&self) -> Vec<SourceInfo> {
        self.sources.iter().map(|s| s.info().clone()).collect()
    }

    /// Produce `count` bytes (clamped to [`MAX_REQUEST_BYTES`]) from the
    /// source named by `source_id`.
    ///
    /// Unrecognized ids fail with [`SourceError::UnknownSource`]; there is
    /// no silent default.
    pub fn produce(&mut self, source_id: &str, count: usize) -> Result<Vec<u8>, SourceError> {
        let clamped = count.min(MAX_REQUEST_BYTES);
        if clamped < count {
            warn!("request for {count} bytes clamped to {MAX_REQUEST_BYTES}");
        }
        let source = self
            .sources
            .iter_mut()
            .find(|s| s.id() == source_id)
            .ok_or_else(|| SourceError::UnknownSource(source_id.to_string()))?;
        let bytes = source.produce(clamped)?;
        debug!("produced {} bytes from '{source_id}'", bytes.len());
        Ok(bytes)
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_ids() {
        let reg = SourceRegistry::standard();
        assert_eq!(reg.source_ids(), vec!["urandom", "lcg", "math"]);
        assert_eq!(reg.source_count(), 3);
    }

    #[test]
    fn test_produce_from_each_source() {
        let mut reg = SourceRegistry::standard();
        for id in ["urandom", "lcg", "math"] {
            let bytes = reg.produce(id, 512).unwrap();
            assert_eq!(bytes.len(), 512, "source {id}");
        }
    }

    #[test]
    fn test_unknown_source_is_invalid_argument() {
        let mut reg = SourceRegistry::standard();
        let err = reg.produce("qrandom", 16).unwrap_err();
        assert!(matches!(err, SourceError::UnknownSource(ref id) if id == "qrandom"));
        assert_eq!(err.code(), "invalid_argument");
    }

    #[test]
    fn test_count_clamped_not_rejected() {
        let mut reg = SourceRegistry::standard();
        let bytes = reg.produce("lcg", MAX_REQUEST_BYTES + 1).unwrap();
        assert_eq!(bytes.len(), MAX_REQUEST_BYTES);
    }

    #[test]
    fn test_lcg_stream_continues_across_requests() {
        // Same registry, so the LCG state persists: two requests are two
        // different slices of one sequence.
        let mut reg = SourceRegistry::standard();
        let a = reg.produce("lcg", 5000).unwrap();
        let b = reg.produce("lcg", 5000).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_registry_knows_nothing() {
        let mut reg = SourceRegistry::new();
        assert!(matches!(
            reg.produce("lcg", 1),
            Err(SourceError::UnknownSource(_))
        ));
    }
}
