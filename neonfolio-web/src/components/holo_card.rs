use neonfolio_core::effects::{CardRect, TiltState};
use neonfolio_data::Accent;
use web_sys::{Element, MouseEvent};

use crate::{
    browser::EventListener,
    dom::{self, El},
    error::Error,
};

/// A card that tilts toward the pointer with a moving glare and a
/// prismatic sheen.
pub(crate) struct HoloCard {
    root: Element,
    content: Element,
    _listeners: [EventListener; 2],
}

#[derive(Clone)]
struct Layers {
    card: Element,
    glare: Element,
    prism: Element,
    glow: Accent,
}

impl HoloCard {
    pub(crate) fn new(glow: Accent) -> Result<Self, Error> {
        let glare = El::new("div")?.class("holo-glare");
        let prism = El::new("div")?.class("holo-prism");
        let content = El::new("div")?.class("holo-content");
        let root = El::new("div")?
            .class("holo-card")
            .child(glare.clone())
            .child(prism.clone())
            .child(El::new("div")?.class("holo-scanlines"))
            .child(content.clone())
            .build();

        let layers = Layers { card: root.clone(), glare: glare.build(), prism: prism.build(), glow };
        layers.apply(TiltState::REST);

        let moving = EventListener::new(&root, "mousemove", {
            let layers = layers.clone();
            move |event: MouseEvent| {
                let rect = layers.card.get_bounding_client_rect();
                let rect = CardRect {
                    left: rect.left() as f32,
                    top: rect.top() as f32,
                    width: rect.width() as f32,
                    height: rect.height() as f32,
                };
                layers.apply(TiltState::track(rect, event.client_x() as f32, event.client_y() as f32));
            }
        })?;
        let leaving = EventListener::new(&root, "mouseleave", move |_: MouseEvent| {
            layers.apply(TiltState::REST);
        })?;

        Ok(Self { root, content: content.build(), _listeners: [moving, leaving] })
    }

    pub(crate) fn root(&self) -> &Element {
        &self.root
    }

    /// Where card content goes.
    pub(crate) fn content(&self) -> &Element {
        &self.content
    }
}

impl Layers {
    fn apply(&self, tilt: TiltState) {
        dom::set_style(&self.card, "transform", &tilt.transform_css());

        let (x, y) = tilt.glare;
        let glare = format!(
            "radial-gradient(circle at {x:.1}% {y:.1}%, {} 0%, transparent 50%)",
            self.glow.rgb().css_alpha(0.3)
        );
        dom::set_style(&self.glare, "background", &glare);

        let prism = format!(
            "linear-gradient({:.1}deg, transparent 0%, rgba(0, 255, 255, 0.1) 25%, \
             rgba(255, 51, 204, 0.1) 50%, rgba(195, 77, 255, 0.1) 75%, transparent 100%)",
            tilt.prism_angle()
        );
        dom::set_style(&self.prism, "background", &prism);
    }
}
