//! The decorative 3D scene behind the page.
//!
//! A [`Scene`] owns the element catalog, lighting and camera. Every animation
//! frame it is evaluated into a [`Frame`]: a flat, back-to-front list of
//! meshes with their world matrices and resolved materials, ready for
//! [`SceneRenderer`](crate::gl::SceneRenderer).

pub mod catalog;
mod element;
mod float_motion;
mod mesh;
mod parts;

use glam::{Mat4, Vec3};
pub use element::{Bracket, Digit, ElementConfig, ElementKind, ElementTransform};
pub use float_motion::{FloatMotion, FloatPose};
pub use mesh::{MeshData, Primitive, Vertex};
use neonfolio_data::{Rgb, palette};
pub use parts::{Material, Part};

use crate::random::RandomSource;

/// Perspective camera looking down -Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 8.0),
            fov_y_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    #[must_use]
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        let projection = Mat4::perspective_rh_gl(
            self.fov_y_degrees.to_radians(),
            aspect.max(f32::EPSILON),
            self.near,
            self.far,
        );
        projection * Mat4::look_to_rh(self.position, Vec3::NEG_Z, Vec3::Y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Rgb,
    pub intensity: f32,
}

/// White ambient term plus colored point lights.
#[derive(Debug, Clone, PartialEq)]
pub struct Lighting {
    pub ambient: f32,
    pub points: [PointLight; Lighting::POINT_LIGHTS],
}

impl Lighting {
    pub const POINT_LIGHTS: usize = 5;
}

impl Default for Lighting {
    fn default() -> Self {
        let light = |position: [f32; 3], intensity: f32, color: Rgb| PointLight {
            position: Vec3::from_array(position),
            color,
            intensity,
        };

        Self {
            ambient: 0.12,
            points: [
                light([10.0, 10.0, 10.0], 0.4, palette::SCENE_CYAN),
                light([-10.0, -10.0, -10.0], 0.3, palette::SCENE_MAGENTA),
                light([0.0, 5.0, 5.0], 0.25, palette::SCENE_VIOLET),
                light([0.0, -5.0, 5.0], 0.15, palette::SCENE_GREEN),
                light([-5.0, 0.0, 5.0], 0.2, palette::FLUTTER_BLUE),
            ],
        }
    }
}

/// One mesh to draw this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub primitive: Primitive,
    pub model: Mat4,
    pub material: Material,
}

/// Everything the renderer needs for one animation frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub items: Vec<DrawItem>,
    /// Point lights moved into world space by the scene group.
    pub lights: Vec<PointLight>,
    pub ambient: f32,
}

/// The scroll-reactive decorative scene.
#[derive(Debug, Clone)]
pub struct Scene {
    elements: Vec<ElementConfig>,
    parts: Vec<Vec<Part>>,
    lighting: Lighting,
    camera: Camera,
}

impl Scene {
    /// Builds the catalog, drawing random placement from `rng`.
    pub fn new(rng: &mut impl RandomSource) -> Self {
        let elements = catalog::build(rng);
        let parts = elements.iter().map(ElementConfig::parts).collect();

        tracing::debug!(elements = elements.len(), "scene catalog built");

        Self {
            elements,
            parts,
            lighting: Lighting::default(),
            camera: Camera::default(),
        }
    }

    #[must_use]
    pub fn elements(&self) -> &[ElementConfig] {
        &self.elements
    }

    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[must_use]
    pub fn lighting(&self) -> &Lighting {
        &self.lighting
    }

    /// Every distinct primitive used by the catalog.
    #[must_use]
    pub fn primitives(&self) -> Vec<Primitive> {
        let mut unique: Vec<Primitive> = Vec::new();
        for part in self.parts.iter().flatten() {
            if !unique.contains(&part.primitive) {
                unique.push(part.primitive);
            }
        }
        unique
    }

    /// Transform of the group holding every element and light.
    #[must_use]
    pub fn group_matrix(scroll: f32) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, -scroll * 0.0002, 0.0))
            * Mat4::from_rotation_x(scroll * 0.00001)
    }

    /// Evaluates the scene for a scroll offset (px) and clock time (s).
    #[must_use]
    pub fn evaluate(&self, scroll: f32, time: f32) -> Frame {
        let group = Self::group_matrix(scroll);

        let mut items: Vec<DrawItem> = Vec::with_capacity(self.parts.iter().map(Vec::len).sum());
        for (element, parts) in self.elements.iter().zip(&self.parts) {
            let transform = element.transform(scroll, time);
            let element_matrix = group * transform.matrix();

            items.extend(parts.iter().map(|part| {
                let local = Mat4::from_rotation_translation(
                    element::euler(part.rotation),
                    part.position,
                );

                let mut material = part.material;
                if let Some(intensity) = transform.emissive_intensity {
                    material.emissive_intensity = intensity;
                }
                if let Some(opacity) = transform.opacity {
                    material.opacity = opacity;
                }

                DrawItem { primitive: part.primitive, model: element_matrix * local, material }
            }));
        }

        // farthest first so translucent parts blend over what is behind them
        items.sort_by(|a, b| a.model.w_axis.z.total_cmp(&b.model.w_axis.z));

        let lights = self
            .lighting
            .points
            .iter()
            .map(|light| PointLight { position: group.transform_point3(light.position), ..*light })
            .collect();

        Frame { items, lights, ambient: self.lighting.ambient }
    }

    /// Applies the random drift recycling rule to every element.
    ///
    /// Returns the number of elements recycled.
    pub fn recycle(&mut self, time: f32, rng: &mut impl RandomSource) -> usize {
        let mut recycled = 0;
        for element in &mut self.elements {
            if element.recycle(time, &mut *rng) {
                recycled += 1;
            }
        }
        recycled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::SmallRng};

    fn scene() -> Scene {
        Scene::new(&mut SmallRng::seed_from_u64(2024))
    }

    #[test]
    fn every_element_transform_is_deterministic() {
        let scene = scene();
        for (scroll, time) in [(0.0, 0.0), (420.0, 3.5), (2500.0, 61.25), (9000.0, 600.0)] {
            for element in scene.elements() {
                assert_eq!(element.transform(scroll, time), element.transform(scroll, time));
            }
            assert_eq!(scene.evaluate(scroll, time), scene.evaluate(scroll, time));
        }
    }

    #[test]
    fn frame_contains_every_part() {
        let scene = scene();
        let frame = scene.evaluate(0.0, 1.0);
        let expected: usize = scene.elements().iter().map(|e| e.parts().len()).sum();
        assert_eq!(frame.items.len(), expected);
        assert_eq!(frame.lights.len(), Lighting::POINT_LIGHTS);
        assert_eq!(frame.ambient, 0.12);
    }

    #[test]
    fn items_are_sorted_back_to_front() {
        let frame = scene().evaluate(1200.0, 7.0);
        assert!(frame.items.windows(2).all(|w| w[0].model.w_axis.z <= w[1].model.w_axis.z));
    }

    #[test]
    fn scrolling_moves_the_group_down() {
        let group = Scene::group_matrix(5000.0);
        let origin = group.transform_point3(Vec3::ZERO);
        assert!((origin.y - -1.0).abs() < 1e-6);
    }

    #[test]
    fn primitives_are_deduplicated() {
        let scene = scene();
        let primitives = scene.primitives();
        for (i, p) in primitives.iter().enumerate() {
            assert!(!primitives[i + 1..].contains(p));
        }
        assert!(primitives.len() >= 19);
    }

    #[test]
    fn camera_sees_the_origin() {
        let clip = Camera::default().view_projection(16.0 / 9.0) * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip / clip.w;
        assert!(ndc.x.abs() < 1e-6 && ndc.y.abs() < 1e-6);
        assert!((-1.0..1.0).contains(&ndc.z));
    }

    #[test]
    fn recycling_only_touches_particles() {
        let mut scene = scene();
        let before: Vec<_> = scene.elements().to_vec();
        let mut rng = SmallRng::seed_from_u64(11);
        for frame in 0..10_000 {
            scene.recycle(200.0 + frame as f32 / 60.0, &mut rng);
        }
        for (old, new) in before.iter().zip(scene.elements()) {
            if !matches!(old.kind, ElementKind::BinaryParticle(_)) {
                assert_eq!(old, new);
            }
        }
    }
}
