//! Navigation state: which section is active and whether the mobile menu is open.

/// Viewport-relative vertical extent of a page section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionRect {
    pub top: f32,
    pub bottom: f32,
}

/// Finds which navigation entry to highlight for the current scroll offset.
#[derive(Debug, Clone)]
pub struct ActiveSectionTracker {
    reference_line: f32,
    active: Option<usize>,
}

impl Default for ActiveSectionTracker {
    fn default() -> Self {
        Self::new(Self::REFERENCE_LINE)
    }
}

impl ActiveSectionTracker {
    /// Pixels below the viewport top used as the reading line.
    pub const REFERENCE_LINE: f32 = 150.0;

    #[must_use]
    pub fn new(reference_line: f32) -> Self {
        Self { reference_line, active: None }
    }

    /// Re-evaluates the active section.
    ///
    /// `rects` is indexed like the navigation entries; `None` marks a section
    /// that is not in the document. The first section whose box spans the
    /// reference line wins. Returns `true` when the active entry changed.
    pub fn update(&mut self, rects: impl IntoIterator<Item = Option<SectionRect>>) -> bool {
        let line = self.reference_line;
        let next = rects
            .into_iter()
            .position(|rect| rect.is_some_and(|r| r.top <= line && r.bottom >= line));

        let changed = next != self.active;
        self.active = next;
        changed
    }

    /// Index of the highlighted navigation entry, if any.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }
}

/// Open/closed state of the mobile navigation overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Following a link always closes the overlay.
    pub fn navigate(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(top: f32, bottom: f32) -> Option<SectionRect> {
        Some(SectionRect { top, bottom })
    }

    #[test]
    fn at_most_one_entry_is_highlighted() {
        let mut tracker = ActiveSectionTracker::default();
        let rects = [rect(-900.0, -100.0), rect(-100.0, 600.0), rect(600.0, 1400.0)];

        assert!(tracker.update(rects));
        assert_eq!(tracker.active(), Some(1));
        assert_eq!((0..3).filter(|&i| tracker.is_active(i)).count(), 1);
    }

    #[test]
    fn first_spanning_section_wins_on_overlap() {
        let mut tracker = ActiveSectionTracker::default();
        tracker.update([rect(0.0, 200.0), rect(100.0, 300.0)]);
        assert_eq!(tracker.active(), Some(0));
    }

    #[test]
    fn nothing_highlighted_above_first_section() {
        let mut tracker = ActiveSectionTracker::default();
        tracker.update([rect(800.0, 1500.0), None, rect(1500.0, 2000.0)]);
        assert_eq!(tracker.active(), None);
        assert!(!tracker.update([None, None]));
    }

    #[test]
    fn boundaries_are_inclusive() {
        let mut tracker = ActiveSectionTracker::default();
        tracker.update([rect(150.0, 400.0)]);
        assert_eq!(tracker.active(), Some(0));
        tracker.update([rect(-50.0, 150.0)]);
        assert_eq!(tracker.active(), Some(0));
    }

    #[test]
    fn navigating_closes_menu() {
        let mut menu = MenuState::default();
        assert!(menu.toggle());
        menu.navigate();
        assert!(!menu.is_open());
    }
}
