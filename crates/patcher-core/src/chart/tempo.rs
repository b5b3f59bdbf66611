use std::collections::HashMap;

use crate::chart::{Difficulty, PATCH_PRIORITY};
use crate::config::BPM_TOLERANCE;

/// Whether two tempos agree within `BPM_TOLERANCE` (strictly less than).
pub fn close_enough(a: f64, b: f64) -> bool {
    (a - b).abs() < BPM_TOLERANCE
}

/// Track tempos of one song, keyed by difficulty.
#[derive(Debug, Clone, Default)]
pub struct TrackTempos {
    tempos: HashMap<Difficulty, f64>,
}

impl TrackTempos {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a track tempo. A repeated difficulty replaces the earlier value.
    pub fn record(&mut self, difficulty: Difficulty, bpm: f64) {
        self.tempos.insert(difficulty, bpm);
    }

    pub fn get(&self, difficulty: Difficulty) -> Option<f64> {
        self.tempos.get(&difficulty).copied()
    }

    /// Tempo to write into the manifest: the last difficulty in
    /// `PATCH_PRIORITY` with a nonzero tempo, or `0.0` if there is none.
    ///
    /// A recorded tempo of exactly zero counts as absent.
    pub fn patch_bpm(&self) -> f64 {
        PATCH_PRIORITY
            .iter()
            .rev()
            .filter_map(|d| self.get(*d))
            .find(|bpm| *bpm != 0.0)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_enough_within_tolerance() {
        assert!(close_enough(120.0, 120.0));
        assert!(close_enough(120.0, 120.00005));
        assert!(close_enough(120.00005, 120.0));
    }

    #[test]
    fn test_close_enough_mismatch() {
        assert!(!close_enough(120.0, 128.0));
        assert!(!close_enough(120.0, 120.001));
    }

    #[test]
    fn test_close_enough_boundary_is_mismatch() {
        // 0.0 and 1e-4 differ by exactly the tolerance
        assert!(!close_enough(0.0, BPM_TOLERANCE));
        assert!(!close_enough(BPM_TOLERANCE, 0.0));
    }

    #[test]
    fn test_patch_bpm_hardest_wins() {
        let mut tempos = TrackTempos::new();
        tempos.record(Difficulty::Easy, 100.0);
        tempos.record(Difficulty::Hard, 110.0);
        tempos.record(Difficulty::Expert, 125.0);
        assert_eq!(tempos.patch_bpm(), 125.0);
    }

    #[test]
    fn test_patch_bpm_ignores_insertion_order() {
        let mut tempos = TrackTempos::new();
        tempos.record(Difficulty::ExpertPlus, 140.0);
        tempos.record(Difficulty::Normal, 90.0);
        assert_eq!(tempos.patch_bpm(), 140.0);
    }

    #[test]
    fn test_patch_bpm_skips_zero() {
        let mut tempos = TrackTempos::new();
        tempos.record(Difficulty::Hard, 110.0);
        tempos.record(Difficulty::ExpertPlus, 0.0);
        assert_eq!(tempos.patch_bpm(), 110.0);
    }

    #[test]
    fn test_patch_bpm_empty_is_zero() {
        let tempos = TrackTempos::new();
        assert_eq!(tempos.patch_bpm(), 0.0);
    }

    #[test]
    fn test_record_duplicate_overwrites() {
        let mut tempos = TrackTempos::new();
        tempos.record(Difficulty::Expert, 120.0);
        tempos.record(Difficulty::Expert, 130.0);
        assert_eq!(tempos.get(Difficulty::Expert), Some(130.0));
        assert_eq!(tempos.patch_bpm(), 130.0);
    }
}
