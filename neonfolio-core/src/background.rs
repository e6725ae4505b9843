//! Background mode selection and the layers each mode mounts.

use neonfolio_data::{Accent, Rgb, palette};

/// Which background the page renders, decided once at mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundMode {
    /// The WebGL scene with glow orbs and grid overlay.
    ScenePresent,
    /// A single flat, tinted panel with no 3D primitives.
    FallbackFlat,
}

impl BackgroundMode {
    /// Decides the mode from the capability probe.
    ///
    /// `forced_fallback` lets the visitor opt out of the scene even when the
    /// browser supports it. The decision is never revisited at runtime.
    #[must_use]
    pub fn decide(probe_available: bool, forced_fallback: bool) -> Self {
        if probe_available && !forced_fallback {
            Self::ScenePresent
        } else {
            Self::FallbackFlat
        }
    }
}

/// A layer stacked inside the background container, back to front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Layer {
    /// Opaque tinted panel behind everything else.
    Backdrop(Rgb),
    /// Blurred, scroll-parallaxed color blob.
    Orb(GlowOrb),
    /// The 3D canvas, wrapped in its own error boundary.
    SceneCanvas,
    /// Faint cyber grid on top of the scene.
    GridOverlay,
}

/// The layers mounted for a [`BackgroundMode`].
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundPlan {
    mode: BackgroundMode,
    layers: Vec<Layer>,
}

impl BackgroundPlan {
    /// Builds the layer list for the given mode.
    #[must_use]
    pub fn for_mode(mode: BackgroundMode) -> Self {
        let layers = match mode {
            BackgroundMode::ScenePresent => {
                let mut layers = vec![Layer::Backdrop(palette::BACKGROUND)];
                layers.extend(GlowOrb::ALL.iter().copied().map(Layer::Orb));
                layers.push(Layer::SceneCanvas);
                layers.push(Layer::GridOverlay);
                layers
            },
            BackgroundMode::FallbackFlat => vec![Layer::Backdrop(palette::BACKGROUND)],
        };

        Self { mode, layers }
    }

    #[must_use]
    pub fn mode(&self) -> BackgroundMode {
        self.mode
    }

    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Whether any 3D primitive will be mounted.
    #[must_use]
    pub fn mounts_scene(&self) -> bool {
        self.layers.contains(&Layer::SceneCanvas)
    }

    /// Whether the container subscribes to scroll updates at all.
    #[must_use]
    pub fn tracks_scroll(&self) -> bool {
        self.layers.iter().any(|l| matches!(l, Layer::Orb(_) | Layer::SceneCanvas))
    }
}

/// Edge of the viewport an orb is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbAnchor {
    /// `top: calc(<base>% - <offset>px)`
    Top,
    /// `bottom: calc(<base>% + <offset>px)`
    Bottom,
}

/// A blurred glow orb whose vertical anchor follows the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowOrb {
    pub accent: Accent,
    pub anchor: OrbAnchor,
    /// Base anchor position as a percentage of the viewport height.
    pub base_percent: f32,
    /// Pixels moved per pixel scrolled.
    pub factor: f32,
    pub size_px: u32,
    pub blur_px: u32,
    pub alpha: f32,
    /// Horizontal placement CSS, e.g. `left: 25%`.
    pub horizontal: (&'static str, &'static str),
}

impl GlowOrb {
    pub const ALL: [GlowOrb; 3] = [
        GlowOrb {
            accent: Accent::Cyan,
            anchor: OrbAnchor::Top,
            base_percent: 25.0,
            factor: 0.1,
            size_px: 384,
            blur_px: 120,
            alpha: 0.15,
            horizontal: ("left", "25%"),
        },
        GlowOrb {
            accent: Accent::Pink,
            anchor: OrbAnchor::Bottom,
            base_percent: 25.0,
            factor: 0.05,
            size_px: 320,
            blur_px: 100,
            alpha: 0.15,
            horizontal: ("right", "25%"),
        },
        GlowOrb {
            accent: Accent::Purple,
            anchor: OrbAnchor::Top,
            base_percent: 50.0,
            factor: 0.08,
            size_px: 600,
            blur_px: 150,
            alpha: 0.1,
            horizontal: ("left", "50%"),
        },
    ];

    /// Pixel offset applied to the anchor for a scroll offset.
    #[must_use]
    pub fn offset_px(&self, scroll: f32) -> f32 {
        scroll * self.factor
    }

    /// CSS property name and value for the vertical anchor.
    #[must_use]
    pub fn anchor_css(&self, scroll: f32) -> (&'static str, String) {
        let offset = self.offset_px(scroll);
        match self.anchor {
            OrbAnchor::Top => ("top", format!("calc({}% - {offset}px)", self.base_percent)),
            OrbAnchor::Bottom => {
                ("bottom", format!("calc({}% + {offset}px)", self.base_percent))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_probe_mounts_no_scene() {
        let plan = BackgroundPlan::for_mode(BackgroundMode::decide(false, false));
        assert_eq!(plan.mode(), BackgroundMode::FallbackFlat);
        assert!(!plan.mounts_scene());
        assert!(!plan.tracks_scroll());
        assert_eq!(plan.layers(), &[Layer::Backdrop(palette::BACKGROUND)]);
    }

    #[test]
    fn forced_fallback_overrides_probe() {
        assert_eq!(BackgroundMode::decide(true, true), BackgroundMode::FallbackFlat);
        assert_eq!(BackgroundMode::decide(true, false), BackgroundMode::ScenePresent);
    }

    #[test]
    fn scene_plan_stacks_orbs_under_canvas() {
        let plan = BackgroundPlan::for_mode(BackgroundMode::ScenePresent);
        assert!(plan.mounts_scene());
        let layers = plan.layers();
        assert_eq!(layers.len(), 6);
        assert!(matches!(layers[0], Layer::Backdrop(_)));
        assert_eq!(layers[4], Layer::SceneCanvas);
        assert_eq!(layers[5], Layer::GridOverlay);
    }

    #[test]
    fn orb_anchors_follow_scroll() {
        let [top, bottom, center] = GlowOrb::ALL;
        assert_eq!(top.anchor_css(100.0), ("top", "calc(25% - 10px)".to_string()));
        assert_eq!(bottom.anchor_css(100.0), ("bottom", "calc(25% + 5px)".to_string()));
        assert_eq!(center.anchor_css(0.0), ("top", "calc(50% - 0px)".to_string()));
    }
}
