//! Abstract byte source trait.
//!
//! Every byte generator implements [`ByteSource`], which provides metadata
//! via [`SourceInfo`] and on-demand byte production. Generator state (the
//! LCG seed in particular) lives inside the source instance — there is no
//! hidden module-level state, and whoever owns the instance owns the stream.

use crate::error::SourceError;

/// Statistical character of a source, for display purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// OS/hardware random-bit device.
    Device,
    /// Deterministic pseudo-random recurrence with visible structure.
    Pseudo,
    /// Standard-library-grade uniform generator.
    Library,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Device => write!(f, "device"),
            Self::Pseudo => write!(f, "pseudo"),
            Self::Library => write!(f, "library"),
        }
    }
}

/// Metadata about a byte source.
#[derive(Debug, Clone)]
pub struct SourceInfo {
    /// Unique identifier used in API requests (e.g. `"lcg"`).
    pub id: &'static str,
    /// One-line human-readable description.
    pub description: &'static str,
    /// Source kind for classification.
    pub kind: SourceKind,
}

/// Trait that every byte source must implement.
///
/// `produce` takes `&mut self` because stateful generators advance their
/// internal state on every byte; the sequence is continuous across calls
/// for as long as the instance lives.
pub trait ByteSource: Send {
    /// Source metadata.
    fn info(&self) -> &SourceInfo;

    /// Produce exactly `count` bytes, each in `0..=255`.
    fn produce(&mut self, count: usize) -> Result<Vec<u8>, SourceError>;

    /// Convenience: id from info.
    fn id(&self) -> &'static str {
        self.info().id
    }
}
