//! # bytescope-core
//!
//! **Watch randomness happen.**
//!
//! `bytescope-core` is the generator-and-statistics library behind bytescope:
//! a handful of interchangeable byte sources with very different statistical
//! personalities, and a sliding-window accumulator that summarizes whatever
//! they emit (mean, population standard deviation, Shannon entropy).
//!
//! ## Quick Start
//!
//! ```
//! use bytescope_core::{SampleWindow, SourceRegistry};
//!
//! let mut registry = SourceRegistry::standard();
//! let bytes = registry.produce("lcg", 5000).unwrap();
//! assert_eq!(bytes.len(), 5000);
//!
//! let mut window = SampleWindow::new();
//! window.append(&bytes);
//! let stats = window.summarize();
//! assert!(stats.entropy <= 8.0);
//! ```
//!
//! ## Architecture
//!
//! Sources → Registry (id dispatch) → bytes → Window → Statistics
//!
//! Three sources:
//! - **urandom**: the OS random-bit device, read fresh per request.
//! - **lcg**: a Park–Miller LCG whose low-byte periodicity is visible in
//!   the renderings — the patterned reference point.
//! - **math**: `floor(uniform[0,1) * 256)` per byte via the `rand` crate.
//!
//! Generator state is owned, not global: the LCG lives inside its registry
//! and its sequence continues for as long as the registry does.

pub mod error;
pub mod registry;
pub mod render;
pub mod source;
pub mod sources;
pub mod window;

pub use error::SourceError;
pub use registry::{DEFAULT_REQUEST_BYTES, MAX_REQUEST_BYTES, SourceRegistry};
pub use render::{RenderMode, WINDOW_PREFERENCE_THRESHOLD, plot_input};
pub use source::{ByteSource, SourceInfo, SourceKind};
pub use sources::{DeviceSource, LcgSource, MathSource};
pub use window::{MAX_ACCUMULATED_SAMPLES, SampleWindow, SummaryStatistics};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
