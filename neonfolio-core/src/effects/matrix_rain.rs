use crate::random::RandomSource;

/// Glyphs a rain column draws from.
pub const GLYPHS: &[char] = &[
    'ア', 'イ', 'ウ', 'エ', 'オ', 'カ', 'キ', 'ク', 'ケ', 'コ', 'サ', 'シ', 'ス', 'セ', 'ソ', 'タ',
    'チ', 'ツ', 'テ', 'ト', 'ナ', 'ニ', 'ヌ', 'ネ', 'ノ', 'ハ', 'ヒ', 'フ', 'ヘ', 'ホ', 'マ', 'ミ',
    'ム', 'メ', 'モ', 'ヤ', 'ユ', 'ヨ', 'ラ', 'リ', 'ル', 'レ', 'ロ', 'ワ', 'ヲ', 'ン', '0', '1',
    '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', '<', '>', '{', '}', '[',
    ']',
];

/// A glyph to paint this step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainGlyph {
    pub glyph: char,
    pub x: f32,
    pub y: f32,
    pub hue: f32,
    pub alpha: f32,
    /// Overpaint in bright cyan.
    pub highlight: bool,
}

/// Falling glyph columns painted onto a fading 2D canvas.
#[derive(Debug, Clone)]
pub struct MatrixRain {
    drops: Vec<u32>,
    height: f32,
}

impl MatrixRain {
    pub const FONT_PX: f32 = 14.0;
    pub const STEP_MS: i32 = 50;
    /// Alpha of the backdrop wash painted before each step.
    pub const FADE_ALPHA: f32 = 0.05;
    const HIGHLIGHT_CHANCE: f32 = 0.02;
    const RESET_CHANCE: f32 = 0.025;

    /// Sets up columns for a canvas of `width` x `height` px.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        let columns = (width / Self::FONT_PX).floor().max(0.0) as usize;
        Self { drops: vec![1; columns], height }
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    /// Resizing only changes the reset height; the column count stays.
    pub fn resize(&mut self, height: f32) {
        self.height = height;
    }

    /// Advances every column one row and returns what to paint.
    pub fn step(&mut self, rng: &mut impl RandomSource) -> Vec<RainGlyph> {
        let columns = self.drops.len() as f32;

        self.drops
            .iter_mut()
            .enumerate()
            .map(|(i, drop)| {
                let glyph = GLYPHS[rng.below(GLYPHS.len())];
                let x = i as f32 * Self::FONT_PX;
                let y = *drop as f32 * Self::FONT_PX;

                let painted = RainGlyph {
                    glyph,
                    x,
                    y,
                    hue: 180.0 + i as f32 / columns * 100.0,
                    alpha: 0.3 + rng.next_f32() * 0.4,
                    highlight: rng.chance(Self::HIGHLIGHT_CHANCE),
                };

                if y > self.height && rng.chance(Self::RESET_CHANCE) {
                    *drop = 0;
                }
                *drop += 1;

                painted
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::SmallRng};

    #[test]
    fn one_column_per_glyph_width() {
        assert_eq!(MatrixRain::new(140.0, 100.0).columns(), 10);
        assert_eq!(MatrixRain::new(13.0, 100.0).columns(), 0);
    }

    #[test]
    fn glyphs_stay_in_style_bounds() {
        let mut rain = MatrixRain::new(280.0, 70.0);
        let mut rng = SmallRng::seed_from_u64(3);

        for _ in 0..200 {
            for g in rain.step(&mut rng) {
                assert!((0.3..=0.7).contains(&g.alpha));
                assert!((180.0..280.0).contains(&g.hue));
                assert!(GLYPHS.contains(&g.glyph));
            }
        }
    }

    #[test]
    fn columns_fall_then_restart() {
        let mut rain = MatrixRain::new(14.0, 28.0);
        let mut rng = SmallRng::seed_from_u64(8);

        let first = rain.step(&mut rng);
        assert_eq!(first[0].y, 14.0);
        let second = rain.step(&mut rng);
        assert_eq!(second[0].y, 28.0);

        let restarted = (0..2_000).any(|_| rain.step(&mut rng)[0].y == 14.0);
        assert!(restarted);
    }
}
