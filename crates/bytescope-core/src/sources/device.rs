//! DeviceSource — OS random-bit device.
//!
//! Reads exactly `count` bytes from a named device file (`/dev/urandom` by
//! default). Open failures and short reads are hard [`SourceError::Io`]
//! errors rather than partial results.

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use crate::error::SourceError;
use crate::source::{ByteSource, SourceInfo, SourceKind};

/// Default random device path.
pub const DEFAULT_DEVICE_PATH: &str = "/dev/urandom";

static DEVICE_INFO: SourceInfo = SourceInfo {
    id: "urandom",
    description: "OS random-bit device, read per request",
    kind: SourceKind::Device,
};

/// Byte source that reads a random device file per request.
pub struct DeviceSource {
    info: &'static SourceInfo,
    path: PathBuf,
}

impl DeviceSource {
    /// Source reading the default device.
    pub fn new() -> Self {
        Self::with_path(DEFAULT_DEVICE_PATH)
    }

    /// Source reading an alternate device path (hardware RNG char devices,
    /// or a fixture file in tests).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            info: &DEVICE_INFO,
            path: path.into(),
        }
    }

    /// Device path this source reads from.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Default for DeviceSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteSource for DeviceSource {
    fn info(&self) -> &SourceInfo {
        self.info
    }

    fn produce(&mut self, count: usize) -> Result<Vec<u8>, SourceError> {
        let wrap = |e: std::io::Error| SourceError::Io {
            source_id: DEVICE_INFO.id,
            source: e,
        };
        let mut file = File::open(&self.path).map_err(wrap)?;
        let mut buf = vec![0u8; count];
        // read_exact turns a short read into UnexpectedEof.
        file.read_exact(&mut buf).map_err(wrap)?;
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tempfile::NamedTempFile;

    #[test]
    fn test_produce_exact_count() {
        let mut src = DeviceSource::new();
        let bytes = src.produce(4096).unwrap();
        assert_eq!(bytes.len(), 4096);
    }

    #[test]
    fn test_missing_device_is_io_error() {
        let mut src = DeviceSource::with_path("/nonexistent/device");
        let err = src.produce(16).unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
        assert_eq!(err.code(), "io_error");
    }

    #[test]
    fn test_short_read_is_io_error() {
        // A regular file shorter than the request must fail loudly, not
        // return truncated data.
        let mut fixture = NamedTempFile::new().unwrap();
        fixture.write_all(&[0xAB; 8]).unwrap();
        fixture.flush().unwrap();

        let mut src = DeviceSource::with_path(fixture.path());
        let err = src.produce(64).unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }

    #[test]
    fn test_zero_count_reads_nothing() {
        let mut src = DeviceSource::new();
        assert!(src.produce(0).unwrap().is_empty());
    }
}
