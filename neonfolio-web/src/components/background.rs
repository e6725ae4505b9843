//! The fixed background: glow orbs, the WebGL scene and a grid overlay, or a
//! flat panel when the scene is unavailable.

use std::{cell::RefCell, rc::Rc};

use neonfolio_core::{
    BackgroundMode, BackgroundPlan, Boundary, Drawable, GlState, GlowOrb, Layer,
    RandomSource, RenderContext, Scene, SceneRenderer, ScrollObservable, Subscription,
};
use web_sys::{Element, HtmlCanvasElement};

use super::{Component, PageContext};
use crate::{
    browser::{AnimationFrameLoop, ContextLossHandler},
    config::Features,
    dom::{self, El},
    error::Error,
    js::{self, PageRng},
    probe,
};

/// Upper bound on the backing store scale; denser screens gain little.
const MAX_PIXEL_RATIO: f32 = 2.0;

pub(crate) struct Background {
    root: Element,
    plan: BackgroundPlan,
    scene: Option<Rc<RefCell<Boundary<SceneLayer>>>>,
    _frame_loop: Option<AnimationFrameLoop>,
    _orbs: Option<Subscription>,
}

impl Background {
    pub(crate) fn mount(ctx: &PageContext) -> Result<Self, Error> {
        let forced = ctx.config.has(Features::FORCE_FALLBACK);
        let mode = BackgroundMode::decide(probe::webgl2_available(), forced);
        let plan = BackgroundPlan::for_mode(mode);
        tracing::info!(?mode, forced, "background mode decided");

        let root = El::new("div")
            .map(|el| match mode {
                BackgroundMode::ScenePresent => el.class("background"),
                BackgroundMode::FallbackFlat => el.class("background background-flat"),
            })?
            .build();

        let mut orbs = Vec::new();
        let mut scene = None;
        for layer in plan.layers() {
            match layer {
                Layer::Backdrop(color) => {
                    El::new("div")?
                        .class("background-backdrop")
                        .style("background-color", &color.to_string())
                        .append_to(&root);
                },
                Layer::Orb(orb) => orbs.push((*orb, orb_element(orb)?.append_to(&root))),
                Layer::SceneCanvas => {
                    let container = El::new("div")?.class("scene-container").append_to(&root);
                    scene = Some(Boundary::mount("scene", || SceneLayer::new(&container, ctx)));
                },
                Layer::GridOverlay => {
                    El::new("div")?.class("cyber-grid background-grid").append_to(&root);
                },
            }
        }

        let scene = scene.map(|boundary| Rc::new(RefCell::new(boundary)));
        let frame_loop = match &scene {
            Some(scene) if scene.borrow().is_live() => {
                Some(start_frame_loop(scene, &ctx.scroll, PageRng::new(ctx.config.seed))?)
            },
            _ => None,
        };

        let orbs = plan.tracks_scroll().then(|| {
            ctx.scroll.subscribe(move |snapshot| {
                for (orb, element) in &orbs {
                    let (property, value) = orb.anchor_css(snapshot.offset);
                    dom::set_style(element, property, &value);
                }
            })
        });

        Ok(Self { root, plan, scene, _frame_loop: frame_loop, _orbs: orbs })
    }

    pub(crate) fn mode(&self) -> BackgroundMode {
        self.plan.mode()
    }

    /// Whether the 3D scene is currently rendering.
    pub(crate) fn scene_live(&self) -> bool {
        self.scene.as_ref().is_some_and(|scene| scene.borrow().is_live())
    }
}

impl Component for Background {
    fn root(&self) -> &Element {
        &self.root
    }
}

fn orb_element(orb: &GlowOrb) -> Result<El, Error> {
    let (anchor, offset) = orb.anchor_css(0.0);
    let (horizontal, position) = orb.horizontal;
    let size = format!("{}px", orb.size_px);

    Ok(El::new("div")?
        .class("glow-orb")
        .style("width", &size)
        .style("height", &size)
        .style("filter", &format!("blur({}px)", orb.blur_px))
        .style("background-color", &orb.accent.rgb().css_alpha(orb.alpha))
        .style(horizontal, position)
        .style(anchor, &offset))
}

/// Drives the scene once per animation frame until its boundary crashes.
fn start_frame_loop(
    scene: &Rc<RefCell<Boundary<SceneLayer>>>,
    scroll: &ScrollObservable,
    mut rng: PageRng,
) -> Result<AnimationFrameLoop, Error> {
    let scene = scene.clone();
    let scroll = scroll.clone();

    AnimationFrameLoop::start(move |timestamp_ms| {
        let mut scene = scene.borrow_mut();
        let offset = scroll.latest().offset;
        scene.update(|layer| layer.render(timestamp_ms, offset, &mut rng));

        // a crashed scene has dropped its canvas; the empty container stays
        scene.is_live()
    })
}

/// The WebGL canvas with everything needed to draw the scene.
struct SceneLayer {
    canvas: HtmlCanvasElement,
    gl: glow::Context,
    state: GlState,
    renderer: SceneRenderer,
    scene: Scene,
    context_loss: ContextLossHandler,
    started_at: Option<f64>,
}

impl SceneLayer {
    fn new(container: &Element, ctx: &PageContext) -> Result<Self, Error> {
        let canvas = js::create_canvas()?;
        canvas.set_class_name("scene-canvas");
        container
            .append_child(&canvas)
            .map_err(|_| Error::element_creation_failed("canvas"))?;

        Self::attach(canvas.clone(), ctx).inspect_err(|_| canvas.remove())
    }

    fn attach(canvas: HtmlCanvasElement, ctx: &PageContext) -> Result<Self, Error> {
        let (gl, _) = js::create_glow_context(&canvas)?;
        let context_loss = ContextLossHandler::new(&canvas)?;

        let mut rng = PageRng::new(ctx.config.seed);
        let scene = Scene::new(&mut rng);
        let renderer = SceneRenderer::new(&gl, &scene.primitives())?;
        let state = GlState::new();

        tracing::debug!(elements = scene.elements().len(), "scene mounted");

        Ok(Self { canvas, gl, state, renderer, scene, context_loss, started_at: None })
    }

    fn render(
        &mut self,
        timestamp_ms: f64,
        scroll: f32,
        rng: &mut impl RandomSource,
    ) -> Result<(), Error> {
        if self.context_loss.is_context_lost() {
            return Err(neonfolio_core::Error::context_lost().into());
        }

        self.fit_canvas();

        let started_at = *self.started_at.get_or_insert(timestamp_ms);
        let time = ((timestamp_ms - started_at) / 1000.0) as f32;

        self.scene.recycle(time, rng);
        let frame = self.scene.evaluate(scroll, time);
        self.renderer.update(&self.gl, frame, self.scene.camera());

        let mut context = RenderContext { gl: &self.gl, state: &mut self.state };
        self.renderer.render(&mut context)?;
        Ok(())
    }

    /// Matches the backing store to the displayed size.
    fn fit_canvas(&mut self) {
        let ratio = js::device_pixel_ratio().min(MAX_PIXEL_RATIO);
        let width = (self.canvas.client_width() as f32 * ratio).round() as i32;
        let height = (self.canvas.client_height() as f32 * ratio).round() as i32;

        if (width, height) != self.renderer.size_px() && width > 0 && height > 0 {
            self.canvas.set_width(width as u32);
            self.canvas.set_height(height as u32);
            self.renderer.resize(width, height);
        }
    }
}

impl Drop for SceneLayer {
    fn drop(&mut self) {
        if !self.context_loss.is_context_lost() {
            self.renderer.delete(&self.gl);
        }
        self.canvas.remove();
    }
}
