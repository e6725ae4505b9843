/// One-shot "scrolled into view" trigger.
///
/// The viewport is shrunk by `margin` pixels on the top and bottom edges; the
/// tracker fires the first time an element overlaps what remains and never
/// again afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTracker {
    margin: f32,
    revealed: bool,
}

impl RevealTracker {
    /// Margin used by section content.
    pub const SECTION_MARGIN: f32 = 100.0;
    /// Margin used by small widgets such as counters and the radar chart.
    pub const WIDGET_MARGIN: f32 = 50.0;

    #[must_use]
    pub fn new(margin: f32) -> Self {
        Self { margin, revealed: false }
    }

    #[must_use]
    pub fn section() -> Self {
        Self::new(Self::SECTION_MARGIN)
    }

    #[must_use]
    pub fn widget() -> Self {
        Self::new(Self::WIDGET_MARGIN)
    }

    /// Checks an element's viewport-relative box.
    ///
    /// Returns `true` only on the call that reveals the element.
    pub fn observe(&mut self, top: f32, bottom: f32, viewport_height: f32) -> bool {
        if self.revealed {
            return false;
        }

        let visible_top = self.margin;
        let visible_bottom = viewport_height - self.margin;
        if top < visible_bottom && bottom > visible_top {
            self.revealed = true;
            return true;
        }

        false
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_inside_margin() {
        let mut tracker = RevealTracker::section();

        // just below the fold, still within the margin
        assert!(!tracker.observe(750.0, 1200.0, 800.0));
        assert!(tracker.observe(650.0, 1100.0, 800.0));
        assert!(!tracker.observe(0.0, 400.0, 800.0));
        assert!(tracker.is_revealed());
    }

    #[test]
    fn element_above_viewport_is_not_revealed() {
        let mut tracker = RevealTracker::widget();
        assert!(!tracker.observe(-400.0, 20.0, 800.0));
    }
}
