use std::{cell::RefCell, rc::Rc};

use neonfolio_core::effects::{MatrixRain, RainGlyph};
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use super::{Component, PageContext};
use crate::{
    browser::{EventListener, Interval},
    error::Error,
    js::{self, PageRng},
};

const HIGHLIGHT_FILL: &str = "rgba(0, 255, 255, 0.9)";

/// Full-viewport canvas of falling glyphs behind the page content.
pub(crate) struct MatrixRainLayer {
    root: Element,
    _ticker: Interval,
    _resize: EventListener,
}

struct RainCanvas {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    rain: MatrixRain,
    rng: PageRng,
}

impl MatrixRainLayer {
    pub(crate) fn mount(ctx: &PageContext) -> Result<Self, Error> {
        let canvas = js::create_canvas()?;
        canvas.set_class_name("matrix-rain");
        let context = js::get_2d_context(&canvas)?;

        let (width, height) = js::viewport_size();
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let state = Rc::new(RefCell::new(RainCanvas {
            canvas: canvas.clone(),
            context,
            rain: MatrixRain::new(width, height),
            rng: PageRng::new(ctx.config.seed),
        }));
        tracing::debug!(columns = state.borrow().rain.columns(), "matrix rain mounted");

        let window = js::window()?;
        let resize = EventListener::new(&window, "resize", {
            let state = state.clone();
            move |_: web_sys::Event| state.borrow_mut().resize()
        })?;

        let ticker = Interval::new(MatrixRain::STEP_MS, move || {
            state.borrow_mut().step();
            true
        })?;

        Ok(Self { root: canvas.into(), _ticker: ticker, _resize: resize })
    }
}

impl Component for MatrixRainLayer {
    fn root(&self) -> &Element {
        &self.root
    }
}

impl RainCanvas {
    fn step(&mut self) {
        let width = f64::from(self.canvas.width());
        let height = f64::from(self.canvas.height());

        self.context.set_fill_style_str(&format!("rgba(10, 10, 20, {})", MatrixRain::FADE_ALPHA));
        self.context.fill_rect(0.0, 0.0, width, height);
        self.context.set_font(&format!("{}px 'JetBrains Mono', monospace", MatrixRain::FONT_PX));

        for glyph in self.rain.step(&mut self.rng) {
            self.paint(&glyph);
        }
    }

    fn paint(&self, glyph: &RainGlyph) {
        let mut buffer = [0u8; 4];
        let text = glyph.glyph.encode_utf8(&mut buffer);
        let (x, y) = (f64::from(glyph.x), f64::from(glyph.y));

        let fill = format!("hsla({:.0}, 100%, 50%, {:.2})", glyph.hue, glyph.alpha);
        self.context.set_fill_style_str(&fill);
        let _ = self.context.fill_text(text, x, y);

        if glyph.highlight {
            self.context.set_fill_style_str(HIGHLIGHT_FILL);
            let _ = self.context.fill_text(text, x, y);
        }
    }

    /// Column count is fixed at mount; only the canvas and reset height follow.
    fn resize(&mut self) {
        let (width, height) = js::viewport_size();
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.rain.resize(height);
    }
}
