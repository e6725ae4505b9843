use std::f32::consts::FRAC_PI_4;

use glam::{EulerRot, Mat4, Quat, Vec3};
use neonfolio_data::Rgb;

use crate::{
    random::RandomSource,
    scene::float_motion::{FloatMotion, FloatPose},
};

/// Scroll offsets are in CSS pixels; this maps them to world units.
const SCROLL_TO_WORLD: f32 = 1e-4;
/// Per-frame increments of the original animation loop are expressed per second.
const FRAMES_PER_SECOND: f32 = 60.0;

/// Glyph drawn by a code bracket element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    OpenBrace,
    CloseBrace,
    LessThan,
    GreaterThan,
    OpenSquare,
    CloseSquare,
}

impl Bracket {
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Bracket::OpenBrace => '{',
            Bracket::CloseBrace => '}',
            Bracket::LessThan => '<',
            Bracket::GreaterThan => '>',
            Bracket::OpenSquare => '[',
            Bracket::CloseSquare => ']',
        }
    }
}

/// Shape of a binary particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Digit {
    Zero,
    One,
}

/// The kinds of decorative element in the background scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    CodeBracket(Bracket),
    DatabaseStack,
    NeuralNode,
    FlutterDiamond,
    BinaryParticle(Digit),
    GitBranch,
    TerminalWindow,
}

/// Static configuration of one element, fixed when the catalog is built.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementConfig {
    pub kind: ElementKind,
    /// Rest position in scene-group space.
    pub base: Vec3,
    /// Tint used by elements that come in several colors.
    pub color: Rgb,
    /// World units moved per 10 000 px scrolled.
    pub scroll_factor: f32,
    /// Multiplier of the continuous spin around Y.
    pub rotation_speed: f32,
    pub float: Option<FloatMotion>,
    /// Upward drift in world units per second.
    pub drift_speed: f32,
    /// Clock time at which the current drift cycle began.
    pub drift_origin: f32,
    /// Per-frame probability of restarting the drift once past the ceiling.
    pub recycle_chance: f32,
}

/// Where an element is drawn at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementTransform {
    pub position: Vec3,
    /// Euler angles, applied in XYZ order.
    pub rotation: Vec3,
    pub scale: f32,
    pub float: FloatPose,
    /// The float wobble is applied inside the element's own transform
    /// instead of around the scene origin.
    pub float_inside: bool,
    /// Replaces the emissive intensity of every part when set.
    pub emissive_intensity: Option<f32>,
    /// Replaces the opacity of every part when set.
    pub opacity: Option<f32>,
}

impl ElementTransform {
    /// Model matrix relative to the scene group.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        let own = Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            euler(self.rotation),
            self.position,
        );
        let float = Mat4::from_rotation_translation(
            euler(self.float.rotation),
            Vec3::new(0.0, self.float.lift, 0.0),
        );

        if self.float_inside { own * float } else { float * own }
    }
}

pub(crate) fn euler(rotation: Vec3) -> Quat {
    Quat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z)
}

impl ElementConfig {
    /// Height after which a drifting particle wraps back to its base.
    pub const DRIFT_CEILING: f32 = 15.0;
    /// Default recycle probability for drifting particles.
    pub const PARTICLE_RECYCLE_CHANCE: f32 = 0.02;

    /// An element at `base` with no scroll response, spin, float or drift.
    #[must_use]
    pub fn new(kind: ElementKind, base: Vec3, color: Rgb) -> Self {
        Self {
            kind,
            base,
            color,
            scroll_factor: 0.0,
            rotation_speed: 0.0,
            float: None,
            drift_speed: 0.0,
            drift_origin: 0.0,
            recycle_chance: 0.0,
        }
    }

    #[must_use]
    pub fn scroll_factor(mut self, factor: f32) -> Self {
        self.scroll_factor = factor;
        self
    }

    #[must_use]
    pub fn rotation_speed(mut self, speed: f32) -> Self {
        self.rotation_speed = speed;
        self
    }

    #[must_use]
    pub fn floating(mut self, float: FloatMotion) -> Self {
        self.float = Some(float);
        self
    }

    #[must_use]
    pub fn drifting(mut self, speed: f32) -> Self {
        self.drift_speed = speed;
        self.recycle_chance = Self::PARTICLE_RECYCLE_CHANCE;
        self
    }

    /// Computes the element's transform.
    ///
    /// Depends only on the configuration, the scroll offset in pixels and the
    /// elapsed clock time in seconds.
    #[must_use]
    pub fn transform(&self, scroll: f32, time: f32) -> ElementTransform {
        let scroll_lift = scroll * self.scroll_factor * SCROLL_TO_WORLD;

        let mut t = ElementTransform {
            position: self.base,
            rotation: Vec3::ZERO,
            scale: 1.0,
            float: self.float.map(|f| f.pose(time)).unwrap_or_default(),
            float_inside: false,
            emissive_intensity: None,
            opacity: None,
        };

        match self.kind {
            ElementKind::CodeBracket(_) => {
                t.position.y += scroll_lift;
                t.rotation.x = (time * 0.2).sin() * 0.1;
                t.rotation.y = self.rotation_speed * 0.002 * FRAMES_PER_SECOND * time;
                t.scale = 1.5;
            },
            ElementKind::DatabaseStack => {
                t.position.y += scroll_lift;
                t.rotation.y = (time * 0.3).sin() * 0.2;
                t.scale = 1.0 + (time * 0.5).sin() * 0.05;
            },
            ElementKind::NeuralNode => {
                t.position.y -= scroll * 0.00005;
                t.float_inside = true;
                t.emissive_intensity = Some(0.3 + (time * 2.0 + self.base.x).sin() * 0.2);
            },
            ElementKind::FlutterDiamond => {
                t.position.y += scroll_lift;
                t.rotation.y = 0.005 * FRAMES_PER_SECOND * time;
                t.rotation.z = FRAC_PI_4;
            },
            ElementKind::BinaryParticle(_) => {
                t.position.y += self.drift(time).rem_euclid(Self::DRIFT_CEILING);
                t.opacity = Some(0.1 + (time * 0.5 + self.base.x).sin() * 0.1);
            },
            ElementKind::GitBranch => {
                t.position.y -= scroll * 0.00003;
                t.emissive_intensity = Some(0.2 + (time * 0.8).sin() * 0.1);
            },
            ElementKind::TerminalWindow => {
                t.position.y += scroll_lift;
                t.rotation.y = (time * 0.2).sin() * 0.1;
                t.rotation.x = (time * 0.15).sin() * 0.05;
            },
        }

        t
    }

    fn drift(&self, time: f32) -> f32 {
        (time - self.drift_origin).max(0.0) * self.drift_speed
    }

    /// Randomly restarts the drift cycle of an element that passed the ceiling.
    ///
    /// Returns `true` if the element was recycled. Elements without drift are
    /// never touched.
    pub fn recycle(&mut self, time: f32, rng: &mut impl RandomSource) -> bool {
        if self.drift_speed <= 0.0 || self.drift(time) < Self::DRIFT_CEILING {
            return false;
        }

        if rng.chance(self.recycle_chance) {
            self.drift_origin = time;
            return true;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use neonfolio_data::palette;

    use super::*;
    use rand::{SeedableRng, rngs::SmallRng};

    fn bracket() -> ElementConfig {
        ElementConfig::new(
            ElementKind::CodeBracket(Bracket::OpenBrace),
            Vec3::new(-7.0, 3.0, -3.0),
            palette::SCENE_CYAN,
        )
        .scroll_factor(-2.0)
        .rotation_speed(1.0)
        .floating(FloatMotion::new(0.3, 0.1, 0.3).with_phase(42.0))
    }

    #[test]
    fn bracket_follows_scroll_and_spins() {
        let t = bracket().transform(1000.0, 2.0);
        assert!((t.position.y - (3.0 - 0.2)).abs() < 1e-5);
        assert!((t.rotation.y - 0.24).abs() < 1e-5);
        assert_eq!(t.scale, 1.5);
        assert!(!t.float_inside);
    }

    #[test]
    fn particle_wraps_below_ceiling() {
        let particle = ElementConfig::new(
            ElementKind::BinaryParticle(Digit::One),
            Vec3::new(1.0, -5.0, -9.0),
            palette::SCENE_CYAN,
        )
        .drifting(0.2);

        let t = particle.transform(0.0, 80.0);
        // 16 units of drift wraps to 1
        assert!((t.position.y - (-4.0)).abs() < 1e-4);
        let opacity = t.opacity.unwrap();
        assert!((0.0..=0.2).contains(&opacity));
    }

    #[test]
    fn recycle_only_past_ceiling() {
        let mut particle = ElementConfig::new(
            ElementKind::BinaryParticle(Digit::Zero),
            Vec3::ZERO,
            palette::SCENE_CYAN,
        )
        .drifting(0.1);
        particle.recycle_chance = 1.0;
        let mut rng = SmallRng::seed_from_u64(1);

        assert!(!particle.recycle(100.0, &mut rng));
        assert!(particle.recycle(151.0, &mut rng));
        assert_eq!(particle.drift_origin, 151.0);
        assert_eq!(particle.transform(0.0, 151.0).position.y, 0.0);
    }

    #[test]
    fn static_elements_never_recycle() {
        let mut node = ElementConfig::new(ElementKind::NeuralNode, Vec3::ONE, palette::SCENE_VIOLET);
        node.recycle_chance = 1.0;
        assert!(!node.recycle(1e6, &mut SmallRng::seed_from_u64(9)));
    }

    #[test]
    fn neural_node_pulses_within_range() {
        let node = ElementConfig::new(ElementKind::NeuralNode, Vec3::new(4.0, 2.0, -4.0), palette::SCENE_VIOLET);
        for step in 0..100 {
            let glow = node.transform(0.0, step as f32 * 0.1).emissive_intensity.unwrap();
            assert!((0.1 - 1e-6..=0.5 + 1e-6).contains(&glow));
        }
        assert!(node.transform(0.0, 0.0).float_inside);
    }

    #[test]
    fn diamond_keeps_its_orientation() {
        let diamond = ElementConfig::new(ElementKind::FlutterDiamond, Vec3::ZERO, palette::FLUTTER_BLUE);
        assert_eq!(diamond.transform(500.0, 10.0).rotation.z, FRAC_PI_4);
    }
}
