/// Hover-triggered chromatic glitch of a heading.
///
/// Two offset copies of the text (pink on the top half, cyan on the bottom
/// half) jitter horizontally for [`GlitchState::DURATION_MS`]. Hovering again
/// while a glitch is running does not restart it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlitchState {
    started_at: Option<f64>,
}

/// Horizontal offsets and opacity of the two glitch layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlitchLayers {
    pub upper_x: f32,
    pub lower_x: f32,
    pub opacity: f32,
}

const TIMES: [f32; 5] = [0.0, 0.2, 0.4, 0.6, 1.0];
const UPPER_X: [f32; 5] = [-2.0, 2.0, -1.0, 1.0, 0.0];
const LOWER_X: [f32; 5] = [2.0, -2.0, 1.0, -1.0, 0.0];
const OPACITY: [f32; 5] = [0.0, 0.8, 0.8, 0.8, 0.0];

impl GlitchState {
    pub const DURATION_MS: f64 = 500.0;

    /// Starts a glitch at `now` unless one is running. Returns whether it started.
    pub fn hover(&mut self, now: f64) -> bool {
        if self.is_glitching(now) {
            return false;
        }
        self.started_at = Some(now);
        true
    }

    #[must_use]
    pub fn is_glitching(&self, now: f64) -> bool {
        self.started_at.is_some_and(|t| now - t < Self::DURATION_MS)
    }

    /// Layer state at `now`, or `None` when idle.
    #[must_use]
    pub fn layers(&self, now: f64) -> Option<GlitchLayers> {
        let started = self.started_at.filter(|_| self.is_glitching(now))?;
        let progress = ((now - started) / Self::DURATION_MS).clamp(0.0, 1.0) as f32;

        Some(GlitchLayers {
            upper_x: keyframe(&UPPER_X, progress),
            lower_x: keyframe(&LOWER_X, progress),
            opacity: keyframe(&OPACITY, progress),
        })
    }
}

/// Linear interpolation between keyframes placed at [`TIMES`].
fn keyframe(values: &[f32; 5], progress: f32) -> f32 {
    let i = TIMES.iter().rposition(|&t| t <= progress).unwrap_or(0).min(TIMES.len() - 2);
    let span = TIMES[i + 1] - TIMES[i];
    let local = ((progress - TIMES[i]) / span).clamp(0.0, 1.0);
    values[i] + (values[i + 1] - values[i]) * local
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_does_not_restart_running_glitch() {
        let mut glitch = GlitchState::default();
        assert!(glitch.hover(0.0));
        assert!(!glitch.hover(200.0));
        assert!(!glitch.is_glitching(500.0));
        assert!(glitch.hover(600.0));
    }

    #[test]
    fn layers_hit_keyframes() {
        let mut glitch = GlitchState::default();
        glitch.hover(1000.0);

        let at = |ms: f64| glitch.layers(1000.0 + ms).unwrap();
        assert_eq!(at(0.0).upper_x, -2.0);
        assert_eq!(at(0.0).opacity, 0.0);
        assert_eq!(at(100.0).upper_x, 2.0);
        assert_eq!(at(100.0).lower_x, -2.0);
        // halfway between the -1 and +1 keyframes
        assert!(at(250.0).upper_x.abs() < 1e-5);
        assert!((at(375.0).upper_x - 0.625).abs() < 1e-5);
        assert!((at(375.0).lower_x + 0.625).abs() < 1e-5);
        assert!(glitch.layers(1500.0).is_none());
    }

    #[test]
    fn idle_has_no_layers() {
        assert!(GlitchState::default().layers(0.0).is_none());
    }
}
