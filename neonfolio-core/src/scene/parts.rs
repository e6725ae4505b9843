use std::f32::consts::PI;

use glam::Vec3;
use neonfolio_data::{Rgb, palette};

use crate::scene::{
    element::{Bracket, Digit, ElementConfig, ElementKind},
    mesh::Primitive,
};

/// Surface appearance of a part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Rgb,
    pub emissive: Rgb,
    pub emissive_intensity: f32,
    /// `1.0` is opaque.
    pub opacity: f32,
    /// Drawn as triangle edges instead of filled faces.
    pub wireframe: bool,
}

impl Material {
    /// Wireframe material glowing in its own color.
    #[must_use]
    pub const fn neon(color: Rgb, emissive_intensity: f32) -> Self {
        Self { color, emissive: color, emissive_intensity, opacity: 1.0, wireframe: true }
    }

    #[must_use]
    pub const fn solid(mut self) -> Self {
        self.wireframe = false;
        self
    }

    #[must_use]
    pub const fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    #[must_use]
    pub const fn emissive(mut self, emissive: Rgb) -> Self {
        self.emissive = emissive;
        self
    }

    #[must_use]
    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

/// One mesh of an element, placed relative to the element origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Part {
    pub primitive: Primitive,
    pub position: Vec3,
    pub rotation: Vec3,
    pub material: Material,
}

impl Part {
    fn new(primitive: Primitive, material: Material) -> Self {
        Self { primitive, position: Vec3::ZERO, rotation: Vec3::ZERO, material }
    }

    fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.position = Vec3::new(x, y, z);
        self
    }

    fn roll(mut self, z: f32) -> Self {
        self.rotation = Vec3::new(0.0, 0.0, z);
        self
    }
}

fn cuboid(width: f32, height: f32, depth: f32) -> Primitive {
    Primitive::Box { width, height, depth }
}

fn rod(radius: f32, height: f32, radial_segments: u16) -> Primitive {
    Primitive::Cylinder { radius_top: radius, radius_bottom: radius, height, radial_segments }
}

fn ball(radius: f32, segments: u16) -> Primitive {
    Primitive::Sphere { radius, width_segments: segments, height_segments: segments }
}

impl ElementConfig {
    /// The meshes this element is assembled from.
    #[must_use]
    pub fn parts(&self) -> Vec<Part> {
        match self.kind {
            ElementKind::CodeBracket(bracket) => bracket_parts(bracket, self.color),
            ElementKind::DatabaseStack => database_parts(),
            ElementKind::NeuralNode => {
                let material = Material::neon(palette::SCENE_VIOLET, 0.3).opacity(0.5);
                vec![Part::new(ball(0.3, 16), material)]
            },
            ElementKind::FlutterDiamond => {
                let material = Material::neon(palette::FLUTTER_BLUE, 0.25)
                    .emissive(palette::FLUTTER_TEAL)
                    .opacity(0.4);
                vec![Part::new(cuboid(1.2, 1.2, 0.3), material)]
            },
            ElementKind::BinaryParticle(digit) => {
                let primitive = match digit {
                    Digit::Zero => Primitive::Torus {
                        radius: 0.15,
                        tube: 0.05,
                        radial_segments: 8,
                        tubular_segments: 16,
                    },
                    Digit::One => cuboid(0.08, 0.4, 0.08),
                };
                let material = Material::neon(palette::SCENE_CYAN, 0.2).solid().opacity(0.15);
                vec![Part::new(primitive, material)]
            },
            ElementKind::GitBranch => git_branch_parts(),
            ElementKind::TerminalWindow => terminal_window_parts(),
        }
    }
}

fn bracket_parts(bracket: Bracket, color: Rgb) -> Vec<Part> {
    let m = Material::neon(color, 0.3);
    let bar = || Part::new(cuboid(0.3, 0.1, 0.1), m);
    let slant = || Part::new(cuboid(0.1, 0.6, 0.1), m);
    let chevron = || Part::new(cuboid(0.1, 0.8, 0.1), m);
    let spine = || Part::new(cuboid(0.1, 1.2, 0.1), m);

    match bracket {
        Bracket::OpenBrace => vec![
            bar().at(0.0, 0.5, 0.0),
            slant().at(-0.1, 0.25, 0.0).roll(0.3),
            slant().at(-0.1, -0.25, 0.0).roll(-0.3),
            bar().at(0.0, -0.5, 0.0),
        ],
        Bracket::CloseBrace => vec![
            bar().at(0.0, 0.5, 0.0),
            slant().at(0.1, 0.25, 0.0).roll(-0.3),
            slant().at(0.1, -0.25, 0.0).roll(0.3),
            bar().at(0.0, -0.5, 0.0),
        ],
        Bracket::LessThan => vec![
            chevron().at(0.15, 0.3, 0.0).roll(0.5),
            chevron().at(0.15, -0.3, 0.0).roll(-0.5),
        ],
        Bracket::GreaterThan => vec![
            chevron().at(-0.15, 0.3, 0.0).roll(-0.5),
            chevron().at(-0.15, -0.3, 0.0).roll(0.5),
        ],
        Bracket::OpenSquare => vec![
            spine().at(0.1, 0.0, 0.0),
            bar().at(0.0, 0.55, 0.0),
            bar().at(0.0, -0.55, 0.0),
        ],
        Bracket::CloseSquare => vec![
            spine().at(-0.1, 0.0, 0.0),
            bar().at(0.0, 0.55, 0.0),
            bar().at(0.0, -0.55, 0.0),
        ],
    }
}

fn database_parts() -> Vec<Part> {
    let disk = Primitive::Cylinder {
        radius_top: 0.8,
        radius_bottom: 0.8,
        height: 0.5,
        radial_segments: 16,
    };

    let mut parts: Vec<Part> = [0.0, 0.6, 1.2]
        .into_iter()
        .enumerate()
        .map(|(i, y)| {
            let m = Material::neon(palette::SCENE_GREEN, 0.2 + i as f32 * 0.1).opacity(0.4);
            Part::new(disk, m).at(0.0, y, 0.0)
        })
        .collect();

    let connector = Material::neon(palette::SCENE_CYAN, 0.3).opacity(0.3);
    parts.push(Part::new(rod(0.1, 1.2, 8), connector).at(0.0, 0.6, 0.0));
    parts
}

fn git_branch_parts() -> Vec<Part> {
    let trunk = Material::neon(palette::SCENE_GREEN, 0.2).solid().opacity(0.3);
    let split = trunk.opacity(0.25);
    let commit = Material::neon(palette::SCENE_GREEN, 0.3);

    let mut parts = vec![
        Part::new(rod(0.05, 4.0, 8), trunk).roll(PI / 2.0),
        Part::new(rod(0.04, 1.5, 8), split).at(0.8, 0.5, 0.0).roll(PI / 4.0),
        Part::new(rod(0.04, 1.2, 8), split).at(-0.5, -0.4, 0.0).roll(-PI / 5.0),
    ];

    let commits = [(-1.5, 0.0), (-0.5, 0.0), (0.5, 0.0), (1.5, 0.0), (1.3, 0.8)];
    parts.extend(commits.map(|(x, y)| Part::new(ball(0.1, 8), commit).at(x, y, 0.0)));
    parts
}

fn terminal_window_parts() -> Vec<Part> {
    let frame = Material::neon(palette::WINDOW_FRAME, 0.1)
        .emissive(palette::SCENE_CYAN)
        .opacity(0.4);
    let title = Material::neon(palette::SCENE_MAGENTA, 0.2).solid().opacity(0.3);
    let code = Material::neon(palette::SCENE_CYAN, 0.15).solid().opacity(0.25);

    let mut parts = vec![
        Part::new(cuboid(2.5, 1.8, 0.1), frame),
        Part::new(cuboid(2.4, 0.2, 0.02), title).at(0.0, 0.75, 0.06),
    ];

    parts.extend([-0.4, -0.1, 0.2, 0.5].into_iter().enumerate().map(|(i, y)| {
        let i = i as f32;
        Part::new(cuboid(1.5 - i * 0.2, 0.08, 0.02), code).at(-0.3 + i * 0.1, y, 0.06)
    }));
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(kind: ElementKind) -> ElementConfig {
        ElementConfig::new(kind, Vec3::ZERO, palette::SCENE_CYAN)
    }

    #[test]
    fn part_counts_per_kind() {
        let count = |kind| element(kind).parts().len();
        assert_eq!(count(ElementKind::CodeBracket(Bracket::OpenBrace)), 4);
        assert_eq!(count(ElementKind::CodeBracket(Bracket::LessThan)), 2);
        assert_eq!(count(ElementKind::CodeBracket(Bracket::CloseSquare)), 3);
        assert_eq!(count(ElementKind::DatabaseStack), 4);
        assert_eq!(count(ElementKind::GitBranch), 8);
        assert_eq!(count(ElementKind::TerminalWindow), 6);
    }

    #[test]
    fn database_disks_glow_brighter_upward() {
        let parts = element(ElementKind::DatabaseStack).parts();
        let glow: Vec<f32> = parts[..3].iter().map(|p| p.material.emissive_intensity).collect();
        assert!(glow.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn braces_mirror_each_other() {
        let open = element(ElementKind::CodeBracket(Bracket::OpenBrace)).parts();
        let close = element(ElementKind::CodeBracket(Bracket::CloseBrace)).parts();
        for (a, b) in open.iter().zip(&close) {
            assert_eq!(a.position.x, -b.position.x);
            assert_eq!(a.rotation.z, -b.rotation.z);
        }
    }

    #[test]
    fn particles_are_solid_and_faint() {
        let part = element(ElementKind::BinaryParticle(Digit::Zero)).parts()[0];
        assert!(!part.material.wireframe);
        assert!(part.material.is_transparent());
        assert!(matches!(part.primitive, Primitive::Torus { .. }));
    }
}
