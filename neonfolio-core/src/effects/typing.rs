use unicode_segmentation::UnicodeSegmentation;

/// Notification produced by [`TypingEffect::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingEvent {
    /// More of the text became visible.
    Progress,
    /// The full text is visible; the check mark appears.
    Typed,
    /// The cursor has lingered and is now hidden. Emitted exactly once.
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Typing,
    Lingering { typed_at: f64 },
    Done,
}

/// Reveals a text one grapheme at a time.
#[derive(Debug, Clone)]
pub struct TypingEffect {
    text: String,
    /// Byte offset after each grapheme.
    boundaries: Vec<usize>,
    per_char_ms: f64,
    cursor_linger_ms: f64,
    started_at: f64,
    visible: usize,
    phase: Phase,
}

impl TypingEffect {
    /// Reveal rate of inline terminal text.
    pub const TERMINAL_CHAR_MS: f64 = 50.0;
    /// Reveal rate of the about-section source listing.
    pub const SOURCE_CHAR_MS: f64 = 15.0;
    /// How long the cursor stays after the last character.
    pub const CURSOR_LINGER_MS: f64 = 500.0;

    /// Starts typing `text` at clock time `started_at` (ms).
    #[must_use]
    pub fn new(text: impl Into<String>, per_char_ms: f64, started_at: f64) -> Self {
        let text = text.into();
        let boundaries = text
            .grapheme_indices(true)
            .map(|(i, g)| i + g.len())
            .collect();

        Self {
            text,
            boundaries,
            per_char_ms: per_char_ms.max(1.0),
            cursor_linger_ms: Self::CURSOR_LINGER_MS,
            started_at,
            visible: 0,
            phase: Phase::Typing,
        }
    }

    #[must_use]
    pub fn with_cursor_linger(mut self, linger_ms: f64) -> Self {
        self.cursor_linger_ms = linger_ms;
        self
    }

    /// Advances to clock time `now` (ms).
    pub fn tick(&mut self, now: f64) -> Option<TypingEvent> {
        match self.phase {
            Phase::Typing => {
                let elapsed = (now - self.started_at).max(0.0);
                let target = ((elapsed / self.per_char_ms) as usize).min(self.len());

                if target == self.len() {
                    self.visible = target;
                    self.phase = Phase::Lingering { typed_at: now };
                    Some(TypingEvent::Typed)
                } else if target > self.visible {
                    self.visible = target;
                    Some(TypingEvent::Progress)
                } else {
                    None
                }
            },
            Phase::Lingering { typed_at } if now - typed_at >= self.cursor_linger_ms => {
                self.phase = Phase::Done;
                Some(TypingEvent::Completed)
            },
            Phase::Lingering { .. } | Phase::Done => None,
        }
    }

    /// Number of graphemes in the full text.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// The currently visible prefix.
    #[must_use]
    pub fn visible(&self) -> &str {
        match self.visible {
            0 => "",
            n => &self.text[..self.boundaries[n - 1]],
        }
    }

    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.visible
    }

    /// Whether the whole text is visible.
    #[must_use]
    pub fn is_typed(&self) -> bool {
        !matches!(self.phase, Phase::Typing)
    }

    /// Whether the completion event has fired.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Done
    }

    #[must_use]
    pub fn cursor_visible(&self) -> bool {
        !self.is_complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(effect: &mut TypingEffect, until: f64, step: f64) -> Vec<(f64, TypingEvent)> {
        let mut events = Vec::new();
        let mut now = 0.0;
        while now <= until {
            if let Some(e) = effect.tick(now) {
                events.push((now, e));
            }
            now += step;
        }
        events
    }

    #[test]
    fn fully_typed_within_n_times_delay() {
        let text = "Open to internships";
        let mut effect = TypingEffect::new(text, TypingEffect::TERMINAL_CHAR_MS, 0.0);
        let n = text.chars().count() as f64;

        let events = run(&mut effect, n * TypingEffect::TERMINAL_CHAR_MS, 50.0);
        let typed_at = events.iter().find(|(_, e)| *e == TypingEvent::Typed).map(|(t, _)| *t);

        assert_eq!(typed_at, Some(n * TypingEffect::TERMINAL_CHAR_MS));
        assert_eq!(effect.visible(), text);
        assert!(!effect.is_complete());
    }

    #[test]
    fn completion_fires_exactly_once() {
        let mut effect = TypingEffect::new("ls -la", 15.0, 100.0);
        let events = run(&mut effect, 5_000.0, 5.0);

        let completions = events.iter().filter(|(_, e)| *e == TypingEvent::Completed).count();
        assert_eq!(completions, 1);
        assert!(effect.is_complete());
        assert!(!effect.cursor_visible());

        let (typed, _) = events.iter().find(|(_, e)| *e == TypingEvent::Typed).copied().unwrap();
        let (done, _) = events.iter().find(|(_, e)| *e == TypingEvent::Completed).copied().unwrap();
        assert!(done - typed >= TypingEffect::CURSOR_LINGER_MS);
    }

    #[test]
    fn graphemes_are_never_split() {
        let mut effect = TypingEffect::new("Nişantaşı 🇹🇷", 10.0, 0.0);
        for now in 0..30 {
            effect.tick(now as f64 * 10.0);
            // slicing would panic on a broken boundary
            let _ = effect.visible().len();
        }
        assert_eq!(effect.len(), 11);
        assert_eq!(effect.visible(), "Nişantaşı 🇹🇷");
    }

    #[test]
    fn empty_text_completes() {
        let mut effect = TypingEffect::new("", 50.0, 0.0);
        assert_eq!(effect.tick(0.0), Some(TypingEvent::Typed));
        assert_eq!(effect.tick(499.0), None);
        assert_eq!(effect.tick(500.0), Some(TypingEvent::Completed));
        assert_eq!(effect.tick(10_000.0), None);
    }
}
