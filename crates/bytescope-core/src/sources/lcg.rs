//! LcgSource — Lehmer linear congruential generator.
//!
//! `state = (state * 48271) mod 2147483647` (Park–Miller "minimal standard").
//! Statistically weak on purpose: the low byte of successive states carries
//! visible periodicity, which is exactly what makes it useful as the
//! patterned reference against the device source in the visualizations.
//!
//! One instance persists for the life of its owner, so the emitted sequence
//! is continuous and never restarts mid-run.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::SourceError;
use crate::source::{ByteSource, SourceInfo, SourceKind};

/// Lehmer modulus, the Mersenne prime 2^31 - 1.
pub const LCG_MODULUS: u64 = 2_147_483_647;

/// Park–Miller multiplier.
pub const LCG_MULTIPLIER: u64 = 48_271;

static LCG_INFO: SourceInfo = SourceInfo {
    id: "lcg",
    description: "Park-Miller LCG, deliberately patterned low byte",
    kind: SourceKind::Pseudo,
};

/// Byte source backed by a Park–Miller LCG.
///
/// Invariant: `0 < state < LCG_MODULUS` at all times. State 0 is absorbing
/// (every successor would be 0), so seed reduction never lands there.
pub struct LcgSource {
    info: &'static SourceInfo,
    state: u64,
}

impl LcgSource {
    /// Seed from the system clock.
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .subsec_nanos() as i64;
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64;
        Self::with_seed(millis ^ nanos)
    }

    /// Seed from an arbitrary raw value, reduced into `(0, LCG_MODULUS)`.
    ///
    /// `rem_euclid` folds the raw value into `[0, m)`; a residue of zero is
    /// replaced with `m - 1`, which keeps the generator away from the
    /// absorbing state for every raw input.
    pub fn with_seed(raw: i64) -> Self {
        let m = LCG_MODULUS as i64;
        let mut s = raw.rem_euclid(m);
        if s == 0 {
            s = m - 1;
        }
        Self {
            info: &LCG_INFO,
            state: s as u64,
        }
    }

    /// Replace the state with a freshly reduced seed, restarting the sequence.
    pub fn reseed(&mut self, raw: i64) {
        *self = Self::with_seed(raw);
    }

    /// Current internal state. Exposed for diagnostics and tests.
    pub fn state(&self) -> u64 {
        self.state
    }

    fn next_byte(&mut self) -> u8 {
        self.state = (self.state * LCG_MULTIPLIER) % LCG_MODULUS;
        (self.state & 0xFF) as u8
    }
}

impl ByteSource for LcgSource {
    fn info(&self) -> &SourceInfo {
        self.info
    }

    fn produce(&mut self, count: usize) -> Result<Vec<u8>, SourceError> {
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            out.push(self.next_byte());
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_produce_exact_count() {
        let mut lcg = LcgSource::with_seed(1);
        for count in [0, 1, 7, 256, 5000] {
            let bytes = lcg.produce(count).unwrap();
            assert_eq!(bytes.len(), count);
        }
    }

    #[test]
    fn test_deterministic_given_seed() {
        let mut a = LcgSource::with_seed(12345);
        let mut b = LcgSource::with_seed(12345);
        assert_eq!(a.produce(1000).unwrap(), b.produce(1000).unwrap());
    }

    #[test]
    fn test_reseed_restarts_sequence() {
        let mut lcg = LcgSource::with_seed(42);
        let first = lcg.produce(64).unwrap();
        lcg.reseed(42);
        let again = lcg.produce(64).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn test_sequence_continues_across_calls() {
        let mut split = LcgSource::with_seed(7);
        let mut whole = LcgSource::with_seed(7);
        let mut joined = split.produce(100).unwrap();
        joined.extend(split.produce(100).unwrap());
        assert_eq!(joined, whole.produce(200).unwrap());
    }

    #[test]
    fn test_consecutive_requests_differ() {
        // State persists, so back-to-back requests are different slices of
        // one continuing sequence.
        let mut lcg = LcgSource::with_seed(99);
        let a = lcg.produce(5000).unwrap();
        let b = lcg.produce(5000).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_seed_reduction_stays_in_open_interval() {
        let m = LCG_MODULUS as i64;
        for raw in [
            0,
            -1,
            -12345,
            m,
            2 * m,
            m - 1,
            m + 1,
            -(m - 1),
            -m,
            i64::MIN,
            i64::MAX,
        ] {
            let lcg = LcgSource::with_seed(raw);
            assert!(lcg.state() > 0, "raw seed {raw} reduced to 0");
            assert!(lcg.state() < LCG_MODULUS, "raw seed {raw} out of range");
        }
    }

    #[test]
    fn test_zero_residue_seeds_stay_live() {
        // Raw seeds congruent to 0 or -(m-1) mod m must not land on the
        // absorbing state; the generator keeps emitting nonzero states.
        let m = LCG_MODULUS as i64;
        for raw in [0, m, -m, -(m - 1)] {
            let mut lcg = LcgSource::with_seed(raw);
            assert!(lcg.state() > 0, "raw seed {raw} absorbed");
            let _ = lcg.produce(16).unwrap();
            assert!(lcg.state() > 0, "raw seed {raw} died after producing");
        }
    }

    #[test]
    fn test_state_never_leaves_range() {
        let mut lcg = LcgSource::with_seed(1);
        for _ in 0..10_000 {
            let _ = lcg.next_byte();
            assert!(lcg.state() > 0 && lcg.state() < LCG_MODULUS);
        }
    }

    #[test]
    fn test_known_lehmer_sequence() {
        // First states from seed 1 under the minimal-standard parameters.
        let mut lcg = LcgSource::with_seed(1);
        let _ = lcg.next_byte();
        assert_eq!(lcg.state(), 48271);
        let _ = lcg.next_byte();
        assert_eq!(lcg.state(), (48271u64 * 48271) % LCG_MODULUS);
    }
}
