//! Error taxonomy for byte production.

use thiserror::Error;

/// Failure while producing bytes from a source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The underlying random device could not be opened or read in full.
    ///
    /// Short reads are treated as hard errors: silently returning truncated
    /// data would corrupt downstream statistics.
    #[error("source '{source_id}' device i/o failed: {source}")]
    Io {
        source_id: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// The requested source identifier is not registered. Never silently
    /// falls back to a default source.
    #[error("unknown source '{0}'")]
    UnknownSource(String),
}

impl SourceError {
    /// Stable machine-readable code used in HTTP error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "io_error",
            Self::UnknownSource(_) => "invalid_argument",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let e = SourceError::UnknownSource("bogus".to_string());
        assert_eq!(e.code(), "invalid_argument");
        let e = SourceError::Io {
            source_id: "urandom",
            source: std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "short read"),
        };
        assert_eq!(e.code(), "io_error");
    }

    #[test]
    fn test_display_names_source() {
        let e = SourceError::UnknownSource("foo".to_string());
        assert_eq!(e.to_string(), "unknown source 'foo'");
    }
}
