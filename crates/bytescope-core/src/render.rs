//! Visualization mode dispatch contract.
//!
//! Drawing itself is presentation and lives with the terminal client; this
//! module fixes the parts renderers must agree on: the mode set, and which
//! data each mode plots. `distribution` and `scatter` switch to the
//! accumulated window once it holds enough samples for stable shapes, while
//! `bits` and `color` always show the freshest frame.

use crate::window::SampleWindow;

/// Window size above which distribution and scatter plots prefer the
/// accumulated window over the current frame.
pub const WINDOW_PREFERENCE_THRESHOLD: usize = 1000;

/// Visualization mode. Modes are mutually exclusive; every draw starts from
/// a blank surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Individual bits of the current frame as a cell grid, MSB first.
    #[default]
    Bits,
    /// 256-bin byte-value histogram.
    Distribution,
    /// Consecutive byte pairs as (x, y) points.
    Scatter,
    /// Frame bytes as a colored cell grid.
    Color,
}

impl RenderMode {
    pub const ALL: [Self; 4] = [Self::Bits, Self::Distribution, Self::Scatter, Self::Color];

    /// Cycle to the next mode.
    pub fn next(self) -> Self {
        match self {
            Self::Bits => Self::Distribution,
            Self::Distribution => Self::Scatter,
            Self::Scatter => Self::Color,
            Self::Color => Self::Bits,
        }
    }

    /// Whether this mode plots accumulated history when enough is available.
    pub fn prefers_window(self) -> bool {
        matches!(self, Self::Distribution | Self::Scatter)
    }
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bits => write!(f, "bits"),
            Self::Distribution => write!(f, "distribution"),
            Self::Scatter => write!(f, "scatter"),
            Self::Color => write!(f, "color"),
        }
    }
}

impl std::str::FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bits" => Ok(Self::Bits),
            "distribution" => Ok(Self::Distribution),
            "scatter" => Ok(Self::Scatter),
            "color" => Ok(Self::Color),
            other => Err(format!("unknown render mode '{other}'")),
        }
    }
}

/// Select the byte sequence a renderer should plot for `mode`.
///
/// History-preferring modes use the accumulated window once it holds more
/// than [`WINDOW_PREFERENCE_THRESHOLD`] samples; otherwise the current frame
/// is plotted. This threshold is part of the rendering contract, not a
/// tuning knob.
pub fn plot_input(mode: RenderMode, frame: &[u8], window: &SampleWindow) -> Vec<u8> {
    if mode.prefers_window() && window.len() > WINDOW_PREFERENCE_THRESHOLD {
        window.to_vec()
    } else {
        frame.to_vec()
    }
}
