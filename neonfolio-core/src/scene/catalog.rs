use glam::Vec3;
use neonfolio_data::{Rgb, palette};

use crate::{
    random::RandomSource,
    scene::{
        element::{Bracket, Digit, ElementConfig, ElementKind},
        float_motion::FloatMotion,
    },
};

/// Number of binary particles scattered behind the other elements.
pub const PARTICLE_COUNT: usize = 25;

const BRACKET_FLOAT: FloatMotion = FloatMotion::new(0.3, 0.1, 0.3);
const DATABASE_FLOAT: FloatMotion = FloatMotion::new(0.2, 0.05, 0.2);
const NEURAL_FLOAT: FloatMotion = FloatMotion::new(0.5, 0.1, 0.2);
const DIAMOND_FLOAT: FloatMotion = FloatMotion::new(0.4, 0.2, 0.3);
const WINDOW_FLOAT: FloatMotion = FloatMotion::new(0.25, 0.08, 0.2);

// (glyph, position, color, scroll factor, rotation speed)
#[rustfmt::skip]
const BRACKETS: [(Bracket, [f32; 3], Rgb, f32, f32); 8] = [
    (Bracket::OpenBrace,   [-7.0,  3.0, -3.0], palette::SCENE_CYAN,    -2.0, 1.0),
    (Bracket::CloseBrace,  [-5.0,  3.5, -4.0], palette::SCENE_CYAN,    -1.5, 0.8),
    (Bracket::LessThan,    [ 7.0, -2.0, -3.0], palette::SCENE_MAGENTA,  2.0, 1.2),
    (Bracket::GreaterThan, [ 8.5, -1.5, -4.0], palette::SCENE_MAGENTA,  1.8, 1.0),
    (Bracket::OpenSquare,  [-6.0, -4.0, -4.0], palette::SCENE_VIOLET,  -1.8, 0.9),
    (Bracket::CloseSquare, [-4.5, -3.5, -5.0], palette::SCENE_VIOLET,  -2.2, 1.1),
    (Bracket::OpenBrace,   [ 3.0,  5.0, -5.0], palette::SCENE_GREEN,    3.0, 0.7),
    (Bracket::CloseBrace,  [ 5.0,  4.5, -4.0], palette::SCENE_GREEN,    2.5, 0.9),
];

const DATABASES: [([f32; 3], f32); 2] = [([-9.0, -1.0, -5.0], 1.5), ([9.0, 3.0, -6.0], -2.0)];

const NEURAL_NODES: [[f32; 3]; 6] = [
    [4.0, 2.0, -4.0],
    [5.0, 1.0, -5.0],
    [4.5, 0.0, -4.5],
    [5.5, -1.0, -5.0],
    [4.0, -2.0, -4.0],
    [6.0, 0.0, -6.0],
];

const DIAMONDS: [([f32; 3], f32); 2] = [([-8.0, 5.0, -5.0], -2.5), ([6.0, -5.0, -4.0], 2.0)];

const GIT_BRANCH: [f32; 3] = [0.0, -6.0, -5.0];

const WINDOWS: [([f32; 3], f32); 2] = [([-4.0, 0.0, -6.0], 1.0), ([2.0, 4.0, -7.0], -1.5)];

fn phased(float: FloatMotion, rng: &mut impl RandomSource) -> FloatMotion {
    float.with_phase(rng.next_f32() * FloatMotion::MAX_PHASE)
}

/// Builds the fixed decorative catalog.
///
/// Positions of the named elements are fixed; particle placement, digits,
/// drift speeds and float phases come from `rng`.
pub fn build(rng: &mut impl RandomSource) -> Vec<ElementConfig> {
    let mut elements = Vec::with_capacity(21 + PARTICLE_COUNT);

    for (bracket, base, color, factor, speed) in BRACKETS {
        elements.push(
            ElementConfig::new(ElementKind::CodeBracket(bracket), Vec3::from_array(base), color)
                .scroll_factor(factor)
                .rotation_speed(speed)
                .floating(phased(BRACKET_FLOAT, rng)),
        );
    }

    for (base, factor) in DATABASES {
        elements.push(
            ElementConfig::new(ElementKind::DatabaseStack, Vec3::from_array(base), palette::SCENE_GREEN)
                .scroll_factor(factor)
                .floating(phased(DATABASE_FLOAT, rng)),
        );
    }

    for base in NEURAL_NODES {
        elements.push(
            ElementConfig::new(ElementKind::NeuralNode, Vec3::from_array(base), palette::SCENE_VIOLET)
                .floating(phased(NEURAL_FLOAT, rng)),
        );
    }

    for (base, factor) in DIAMONDS {
        elements.push(
            ElementConfig::new(ElementKind::FlutterDiamond, Vec3::from_array(base), palette::FLUTTER_BLUE)
                .scroll_factor(factor)
                .floating(phased(DIAMOND_FLOAT, rng)),
        );
    }

    elements.push(ElementConfig::new(
        ElementKind::GitBranch,
        Vec3::from_array(GIT_BRANCH),
        palette::SCENE_GREEN,
    ));

    for (base, factor) in WINDOWS {
        elements.push(
            ElementConfig::new(ElementKind::TerminalWindow, Vec3::from_array(base), palette::SCENE_CYAN)
                .scroll_factor(factor)
                .floating(phased(WINDOW_FLOAT, rng)),
        );
    }

    for _ in 0..PARTICLE_COUNT {
        let base = Vec3::new(
            (rng.next_f32() - 0.5) * 20.0,
            (rng.next_f32() - 0.5) * 15.0 - 5.0,
            -8.0 - rng.next_f32() * 5.0,
        );
        let digit = if rng.next_f32() > 0.5 { Digit::One } else { Digit::Zero };
        let speed = 0.1 + rng.next_f32() * 0.2;

        elements.push(
            ElementConfig::new(ElementKind::BinaryParticle(digit), base, palette::SCENE_CYAN)
                .drifting(speed),
        );
    }

    elements
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::SmallRng};

    fn count(elements: &[ElementConfig], pred: impl Fn(&ElementKind) -> bool) -> usize {
        elements.iter().filter(|e| pred(&e.kind)).count()
    }

    #[test]
    fn catalog_composition() {
        let elements = build(&mut SmallRng::seed_from_u64(1));

        assert_eq!(count(&elements, |k| matches!(k, ElementKind::CodeBracket(_))), 8);
        assert_eq!(count(&elements, |k| *k == ElementKind::DatabaseStack), 2);
        assert_eq!(count(&elements, |k| *k == ElementKind::NeuralNode), 6);
        assert_eq!(count(&elements, |k| *k == ElementKind::FlutterDiamond), 2);
        assert_eq!(count(&elements, |k| *k == ElementKind::GitBranch), 1);
        assert_eq!(count(&elements, |k| *k == ElementKind::TerminalWindow), 2);
        assert_eq!(
            count(&elements, |k| matches!(k, ElementKind::BinaryParticle(_))),
            PARTICLE_COUNT
        );
    }

    #[test]
    fn particles_fill_their_volume() {
        let elements = build(&mut SmallRng::seed_from_u64(99));
        for p in elements.iter().filter(|e| matches!(e.kind, ElementKind::BinaryParticle(_))) {
            assert!((-10.0..10.0).contains(&p.base.x));
            assert!((-12.5..2.5).contains(&p.base.y));
            assert!((-13.0..=-8.0).contains(&p.base.z));
            assert!((0.1..0.3).contains(&p.drift_speed));
            assert!(p.float.is_none());
        }
    }

    #[test]
    fn same_seed_same_layout() {
        assert_eq!(build(&mut SmallRng::seed_from_u64(5)), build(&mut SmallRng::seed_from_u64(5)));
    }
}
