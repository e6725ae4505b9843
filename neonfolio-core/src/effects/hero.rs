use neonfolio_data::{HeroLine, HeroLineKind};
use unicode_segmentation::UnicodeSegmentation;

/// Reveal rate of typed shell commands.
pub const COMMAND_CHAR_MS: u32 = 60;
/// Pause between the last script line and the link listing.
pub const LINKS_DELAY_MS: u32 = 400;
/// Half-period of the prompt cursor blink.
pub const CURSOR_BLINK_MS: u32 = 530;

/// What the hero terminal shows at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroFrame {
    /// Number of script lines fully printed.
    pub committed: usize,
    /// A command being typed: its line index and visible byte length.
    pub typing: Option<(usize, usize)>,
    pub show_links: bool,
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    start: u32,
    commit: u32,
}

/// Timeline of the scripted hero terminal.
///
/// Each line waits for its delay; commands are then typed out one character
/// per [`COMMAND_CHAR_MS`] (showing an empty prompt first, and holding the
/// full command for one more step), other lines appear at once. The file
/// listing shows [`LINKS_DELAY_MS`] after the last line.
#[derive(Debug, Clone)]
pub struct HeroTerminal {
    script: &'static [HeroLine],
    slots: Vec<Slot>,
    links_at: u32,
}

impl HeroTerminal {
    #[must_use]
    pub fn new(script: &'static [HeroLine]) -> Self {
        let mut clock = 0;
        let slots = script
            .iter()
            .map(|line| {
                let start = clock + line.delay_ms;
                let commit = match line.kind {
                    HeroLineKind::Input => {
                        let chars = line.content.graphemes(true).count() as u32;
                        start + (chars + 2) * COMMAND_CHAR_MS
                    },
                    _ => start,
                };
                clock = commit;
                Slot { start, commit }
            })
            .collect();

        Self { script, slots, links_at: clock + LINKS_DELAY_MS }
    }

    #[must_use]
    pub fn script(&self) -> &'static [HeroLine] {
        self.script
    }

    /// Milliseconds until the link listing appears.
    #[must_use]
    pub fn duration_ms(&self) -> u32 {
        self.links_at
    }

    /// State of the terminal `elapsed` ms after mount.
    #[must_use]
    pub fn frame(&self, elapsed: u32) -> HeroFrame {
        let committed = self.slots.iter().take_while(|s| s.commit <= elapsed).count();

        let typing = self.slots.get(committed).and_then(|slot| {
            let line = &self.script[committed];
            if line.kind != HeroLineKind::Input || elapsed < slot.start + COMMAND_CHAR_MS {
                return None;
            }

            let shown = ((elapsed - slot.start) / COMMAND_CHAR_MS - 1) as usize;
            let bytes = line
                .content
                .grapheme_indices(true)
                .nth(shown)
                .map_or(line.content.len(), |(i, _)| i);
            Some((committed, bytes))
        });

        HeroFrame { committed, typing, show_links: elapsed >= self.links_at }
    }

    /// Whether the prompt cursor is lit.
    #[must_use]
    pub fn cursor_visible(elapsed: u32) -> bool {
        (elapsed / CURSOR_BLINK_MS) % 2 == 0
    }
}

#[cfg(test)]
mod tests {
    use neonfolio_data::HERO_SCRIPT;

    use super::*;

    static SCRIPT: [HeroLine; 2] = [
        HeroLine { kind: HeroLineKind::Input, content: "ls", delay_ms: 100 },
        HeroLine { kind: HeroLineKind::Output, content: "a b", delay_ms: 50 },
    ];

    #[test]
    fn commands_type_then_commit() {
        let hero = HeroTerminal::new(&SCRIPT);

        assert_eq!(hero.frame(0), HeroFrame { committed: 0, typing: None, show_links: false });
        assert_eq!(hero.frame(160).typing, Some((0, 0)));
        assert_eq!(hero.frame(220).typing, Some((0, 1)));
        assert_eq!(hero.frame(280).typing, Some((0, 2)));
        // commit at 100 + 4 * 60
        assert_eq!(hero.frame(340).committed, 1);
        assert_eq!(hero.frame(389).committed, 1);
        assert_eq!(hero.frame(390).committed, 2);
        assert!(!hero.frame(789).show_links);
        assert!(hero.frame(790).show_links);
        assert_eq!(hero.duration_ms(), 790);
    }

    #[test]
    fn full_script_eventually_prints_everything() {
        let hero = HeroTerminal::new(HERO_SCRIPT);
        let end = hero.frame(hero.duration_ms());
        assert_eq!(end.committed, HERO_SCRIPT.len());
        assert_eq!(end.typing, None);
        assert!(end.show_links);
    }

    #[test]
    fn cursor_blinks() {
        assert!(HeroTerminal::cursor_visible(0));
        assert!(!HeroTerminal::cursor_visible(530));
        assert!(HeroTerminal::cursor_visible(1060));
    }
}
