//! Progress computation for the upload bars.
//!
//! File uploads report real byte counts. URL and YouTube uploads get no
//! feedback from the server until the reply arrives, so their bar is
//! advanced by a fixed step on a timer and held below a ceiling.

use crate::config::{
    URL_PROGRESS_CEILING, URL_PROGRESS_INTERVAL_MS, URL_PROGRESS_STEP, YOUTUBE_PROGRESS_CEILING,
    YOUTUBE_PROGRESS_INTERVAL_MS, YOUTUBE_PROGRESS_STEP,
};
use crate::types::UploadKind;

/// Percentage of `loaded` over `total`, rounded and clamped to 0..=100.
///
/// Returns `None` when the total is unknown.
pub fn byte_percent(loaded: f64, total: f64) -> Option<u8> {
    if !(total > 0.0) {
        return None;
    }
    let percent = (loaded / total * 100.0).round();
    Some(percent.clamp(0.0, 100.0) as u8)
}

/// Timer-driven approximation of progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulatedProgress {
    percent: u8,
    step: u8,
    ceiling: u8,
    interval_ms: u32,
}

impl SimulatedProgress {
    pub fn new(step: u8, ceiling: u8, interval_ms: u32) -> Self {
        Self {
            percent: 0,
            step,
            ceiling: ceiling.min(100),
            interval_ms,
        }
    }

    /// Simulation parameters for a kind; file uploads have real progress.
    pub fn for_kind(kind: UploadKind) -> Option<Self> {
        match kind {
            UploadKind::File => None,
            UploadKind::Url => Some(Self::new(
                URL_PROGRESS_STEP,
                URL_PROGRESS_CEILING,
                URL_PROGRESS_INTERVAL_MS,
            )),
            UploadKind::Youtube => Some(Self::new(
                YOUTUBE_PROGRESS_STEP,
                YOUTUBE_PROGRESS_CEILING,
                YOUTUBE_PROGRESS_INTERVAL_MS,
            )),
        }
    }

    /// Advance one step. `None` once the ceiling has been reached,
    /// which is the caller's cue to stop its timer.
    pub fn tick(&mut self) -> Option<u8> {
        if self.percent >= self.ceiling {
            return None;
        }
        self.percent = self.percent.saturating_add(self.step).min(self.ceiling);
        Some(self.percent)
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn ceiling(&self) -> u8 {
        self.ceiling
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_percent() {
        assert_eq!(byte_percent(0.0, 200.0), Some(0));
        assert_eq!(byte_percent(1.0, 3.0), Some(33));
        assert_eq!(byte_percent(2.0, 3.0), Some(67));
        assert_eq!(byte_percent(200.0, 200.0), Some(100));
        assert_eq!(byte_percent(10.0, 0.0), None);
    }

    #[test]
    fn test_url_simulation_never_passes_ceiling() {
        let mut sim = SimulatedProgress::for_kind(UploadKind::Url).unwrap();
        let mut seen = Vec::new();
        while let Some(p) = sim.tick() {
            seen.push(p);
        }
        assert_eq!(seen.first(), Some(&5));
        assert_eq!(seen.last(), Some(&90));
        assert!(seen.iter().all(|p| *p <= 90));
        assert_eq!(seen.len(), 18);
        // further ticks stay put
        assert_eq!(sim.tick(), None);
        assert_eq!(sim.percent(), 90);
    }

    #[test]
    fn test_youtube_simulation_stops_at_95() {
        let mut sim = SimulatedProgress::for_kind(UploadKind::Youtube).unwrap();
        assert_eq!(sim.interval_ms(), 1000);
        assert_eq!(sim.ceiling(), 95);
        let mut last = 0;
        while let Some(p) = sim.tick() {
            assert!(p > last);
            last = p;
        }
        assert_eq!(last, 95);
    }

    #[test]
    fn test_step_not_dividing_ceiling() {
        let mut sim = SimulatedProgress::new(7, 20, 100);
        assert_eq!(sim.tick(), Some(7));
        assert_eq!(sim.tick(), Some(14));
        assert_eq!(sim.tick(), Some(20));
        assert_eq!(sim.tick(), None);
    }

    #[test]
    fn test_file_has_no_simulation() {
        assert!(SimulatedProgress::for_kind(UploadKind::File).is_none());
    }
}
