//! MathSource — standard-library-grade uniform generator.
//!
//! Matches the classic `floor(random() * 256)` idiom: one uniform draw in
//! `[0, 1)` per byte. Whatever state the underlying generator keeps is its
//! own; nothing persists at this layer between calls.

use rand::Rng;

use crate::error::SourceError;
use crate::source::{ByteSource, SourceInfo, SourceKind};

static MATH_INFO: SourceInfo = SourceInfo {
    id: "math",
    description: "uniform [0,1) draws floored to bytes",
    kind: SourceKind::Library,
};

/// Byte source backed by the `rand` thread RNG.
pub struct MathSource {
    info: &'static SourceInfo,
}

impl MathSource {
    pub fn new() -> Self {
        Self { info: &MATH_INFO }
    }
}

impl Default for MathSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteSource for MathSource {
    fn info(&self) -> &SourceInfo {
        self.info
    }

    fn produce(&mut self, count: usize) -> Result<Vec<u8>, SourceError> {
        let mut rng = rand::rng();
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            let v: f64 = rng.random();
            // v < 1.0, so the floor is at most 255.
            out.push((v * 256.0) as u8);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_produce_exact_count() {
        let mut src = MathSource::new();
        for count in [0, 1, 255, 5000] {
            assert_eq!(src.produce(count).unwrap().len(), count);
        }
    }

    #[test]
    fn test_values_cover_range_roughly() {
        let mut src = MathSource::new();
        let bytes = src.produce(50_000).unwrap();
        let min = *bytes.iter().min().unwrap();
        let max = *bytes.iter().max().unwrap();
        // 50k uniform draws essentially always touch both tails.
        assert!(min < 8, "min {min} suspiciously high");
        assert!(max > 247, "max {max} suspiciously low");
    }
}
