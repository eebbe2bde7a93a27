//! Sliding sample window and summary statistics.
//!
//! [`SampleWindow`] is a bounded FIFO over the most recent observed bytes,
//! ring-buffer backed so trimming the front never reallocates. Statistics
//! are always recomputed from the current window contents — they are never
//! cached, so `summarize` is a pure function of the window.

use std::collections::VecDeque;

/// Default window capacity.
pub const MAX_ACCUMULATED_SAMPLES: usize = 100_000;

/// Descriptive statistics over a sample window.
///
/// The empty window is the defined no-data result: every field 0.0 and
/// `samples == 0`. Callers that need to distinguish "no data" from a
/// degenerate all-zero stream check `samples`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStatistics {
    /// Arithmetic mean of the byte values.
    pub mean: f64,
    /// Population standard deviation (divide by N, not N-1).
    pub std_dev: f64,
    /// Shannon entropy in bits over the 256-bin byte histogram. 8.0 is a
    /// perfectly uniform window; values well below that signal a patterned
    /// source, which is the whole diagnostic point.
    pub entropy: f64,
    /// Number of samples the statistics were computed from.
    pub samples: usize,
}

impl SummaryStatistics {
    /// The no-data result for an empty window.
    pub const EMPTY: Self = Self {
        mean: 0.0,
        std_dev: 0.0,
        entropy: 0.0,
        samples: 0,
    };
}

/// Bounded FIFO sliding window of observed bytes.
pub struct SampleWindow {
    samples: VecDeque<u8>,
    capacity: usize,
}

impl SampleWindow {
    /// Window with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(MAX_ACCUMULATED_SAMPLES)
    }

    /// Window with an explicit capacity. A zero capacity window stays empty.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity.min(MAX_ACCUMULATED_SAMPLES)),
            capacity,
        }
    }

    /// Append observed bytes, dropping the oldest excess so at most
    /// `capacity` most-recent values remain, in original order.
    pub fn append(&mut self, bytes: &[u8]) {
        if bytes.len() >= self.capacity {
            // The new batch alone fills the window; only its tail survives.
            self.samples.clear();
            self.samples
                .extend(&bytes[bytes.len() - self.capacity..]);
            return;
        }
        let overflow = (self.samples.len() + bytes.len()).saturating_sub(self.capacity);
        self.samples.drain(..overflow);
        self.samples.extend(bytes);
    }

    /// Clear the window. Called whenever the upstream source changes, so
    /// statistics never blend incompatible distributions.
    pub fn reset(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate the window oldest-first.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.samples.iter().copied()
    }

    /// Snapshot of the window contents, oldest-first.
    pub fn to_vec(&self) -> Vec<u8> {
        self.samples.iter().copied().collect()
    }

    /// 256-bin frequency histogram of the window.
    pub fn histogram(&self) -> [u64; 256] {
        let mut hist = [0u64; 256];
        for &b in &self.samples {
            hist[b as usize] += 1;
        }
        hist
    }

    /// Recompute summary statistics from the current window.
    pub fn summarize(&self) -> SummaryStatistics {
        let n = self.samples.len();
        if n == 0 {
            return SummaryStatistics::EMPTY;
        }
        let nf = n as f64;

        let mean = self.samples.iter().map(|&b| b as f64).sum::<f64>() / nf;
        let variance = self
            .samples
            .iter()
            .map(|&b| {
                let d = b as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / nf;

        let mut entropy = 0.0;
        for &count in self.histogram().iter() {
            if count > 0 {
                let p = count as f64 / nf;
                entropy -= p * p.log2();
            }
        }

        SummaryStatistics {
            mean,
            std_dev: variance.sqrt(),
            entropy,
            samples: n,
        }
    }
}

impl Default for SampleWindow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_window_no_data_result() {
        let mut w = SampleWindow::new();
        assert_eq!(w.summarize(), SummaryStatistics::EMPTY);
        w.append(&[1, 2, 3]);
        w.reset();
        assert!(w.is_empty());
        assert_eq!(w.summarize(), SummaryStatistics::EMPTY);
    }

    #[test]
    fn test_append_grows_in_order() {
        let mut w = SampleWindow::with_capacity(10);
        w.append(&[1, 2]);
        w.append(&[3]);
        assert_eq!(w.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_overflow_drops_oldest() {
        let mut w = SampleWindow::with_capacity(5);
        w.append(&[1, 2, 3, 4]);
        w.append(&[5, 6, 7]);
        assert_eq!(w.len(), 5);
        assert_eq!(w.to_vec(), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let mut w = SampleWindow::with_capacity(100);
        for chunk in 0..50 {
            w.append(&vec![chunk as u8; 17]);
            assert!(w.len() <= 100);
        }
        assert_eq!(w.len(), 100);
    }

    #[test]
    fn test_oversized_batch_keeps_its_tail() {
        let mut w = SampleWindow::with_capacity(4);
        let batch: Vec<u8> = (0..10).collect();
        w.append(&batch);
        assert_eq!(w.to_vec(), vec![6, 7, 8, 9]);
    }

    #[test]
    fn test_last_capacity_values_survive() {
        // After capacity + k appends the window is exactly the last
        // `capacity` values in original order.
        let cap = 64;
        let mut w = SampleWindow::with_capacity(cap);
        let stream: Vec<u8> = (0..(cap + 37)).map(|i| (i % 251) as u8).collect();
        for b in &stream {
            w.append(&[*b]);
        }
        assert_eq!(w.to_vec(), stream[stream.len() - cap..]);
    }

    #[test]
    fn test_mean_and_std_dev_population() {
        let mut w = SampleWindow::new();
        w.append(&[10, 10, 10, 10]);
        let s = w.summarize();
        assert!((s.mean - 10.0).abs() < 1e-12);
        assert_eq!(s.std_dev, 0.0);

        w.reset();
        w.append(&[0, 255]);
        let s = w.summarize();
        assert!((s.mean - 127.5).abs() < 1e-12);
        assert!((s.std_dev - 127.5).abs() < 1e-12);
    }

    #[test]
    fn test_entropy_single_value_is_zero() {
        let mut w = SampleWindow::new();
        w.append(&[42; 1000]);
        assert_eq!(w.summarize().entropy, 0.0);
    }

    #[test]
    fn test_entropy_uniform_is_eight_bits() {
        let mut w = SampleWindow::new();
        for _ in 0..4 {
            let all: Vec<u8> = (0..=255).collect();
            w.append(&all);
        }
        let s = w.summarize();
        assert!((s.entropy - 8.0).abs() < 1e-9, "entropy {}", s.entropy);
    }

    #[test]
    fn test_entropy_two_symbols_is_one_bit() {
        let mut w = SampleWindow::new();
        w.append(&[0, 1].repeat(500));
        assert!((w.summarize().entropy - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_histogram_counts() {
        let mut w = SampleWindow::new();
        w.append(&[5, 5, 5, 200]);
        let hist = w.histogram();
        assert_eq!(hist[5], 3);
        assert_eq!(hist[200], 1);
        assert_eq!(hist.iter().sum::<u64>(), 4);
    }
}
