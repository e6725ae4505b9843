use std::f32::consts::TAU;

/// Circular progress gauge of a focus area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressRing {
    pub radius: f32,
    progress: u8,
}

impl ProgressRing {
    pub const RADIUS: f32 = 40.0;
    pub const STROKE_WIDTH: f32 = 6.0;
    /// Side of the square SVG box.
    pub const SIZE: f32 = 100.0;

    #[must_use]
    pub fn new(progress: u8) -> Self {
        Self { radius: Self::RADIUS, progress: progress.min(100) }
    }

    #[must_use]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    #[must_use]
    pub fn circumference(&self) -> f32 {
        TAU * self.radius
    }

    /// Dash offset once the ring is revealed.
    #[must_use]
    pub fn dash_offset(&self) -> f32 {
        let c = self.circumference();
        c - f32::from(self.progress) / 100.0 * c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_offset_tracks_progress() {
        let c = ProgressRing::new(0).circumference();
        assert!((c - 251.327_41).abs() < 1e-3);

        assert_eq!(ProgressRing::new(0).dash_offset(), c);
        assert!(ProgressRing::new(100).dash_offset().abs() < 1e-4);
        assert!((ProgressRing::new(75).dash_offset() - c * 0.25).abs() < 1e-3);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(ProgressRing::new(250).progress(), 100);
    }
}
