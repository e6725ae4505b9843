//! Mounting and teardown of the whole page.

use std::rc::Rc;

use neonfolio_core::{Boundary, ScrollObservable, ScrollSnapshot};
use web_sys::{Element, Event, HtmlElement};

use crate::{
    browser::EventListener,
    components::{
        About, Background, Component, Contact, Currently, FeaturedProject, Footer, Hero,
        MatrixRainLayer, Navigation, PageContext, Projects, ScrollProgress, Skills, crash_panel,
    },
    config::{Features, PageConfig},
    debug,
    dom::El,
    error::Error,
    js,
};

type MountFn = fn(&PageContext) -> Result<Box<dyn Component>, Error>;

fn boxed<C: Component + 'static>(component: C) -> Box<dyn Component> {
    Box::new(component)
}

/// A section behind its own boundary, and whatever was put in the DOM for it.
struct Section {
    boundary: Boundary<Box<dyn Component>>,
    element: Element,
}

/// Everything mounted into the page container.
///
/// Dropping the page detaches its elements and releases every listener,
/// timer, frame loop and GL resource.
pub(crate) struct Page {
    background: Rc<Boundary<Background>>,
    sections: Vec<Section>,
    decorations: Vec<Element>,
    debug_exposed: bool,
    _scroll_listeners: [EventListener; 2],
}

impl Page {
    pub(crate) fn mount(container: &HtmlElement, config: PageConfig) -> Result<Self, Error> {
        let scroll = ScrollObservable::new();
        let ctx = PageContext { scroll: scroll.clone(), config };

        let background = Rc::new(Boundary::mount("background", || Background::mount(&ctx)));
        let mut decorations = Vec::new();
        if let Some(background) = background.as_live() {
            decorations.push(attach(container, background.root().clone())?);
        }
        decorations.push(El::new("div")?.class("scanlines page-scanlines").append_to(container));

        let chrome: [(&'static str, MountFn); 3] = [
            ("scroll-progress", |ctx| ScrollProgress::mount(ctx).map(boxed)),
            ("navigation", |ctx| Navigation::mount(ctx).map(boxed)),
            ("matrix-rain", |ctx| MatrixRainLayer::mount(ctx).map(boxed)),
        ];
        let content: [(&'static str, MountFn); 7] = [
            ("hero", |ctx| Hero::mount(ctx).map(boxed)),
            ("featured", |ctx| FeaturedProject::mount(ctx).map(boxed)),
            ("projects", |ctx| Projects::mount(ctx).map(boxed)),
            ("about", |ctx| About::mount(ctx).map(boxed)),
            ("skills", |ctx| Skills::mount(ctx).map(boxed)),
            ("currently", |ctx| Currently::mount(ctx).map(boxed)),
            ("contact", |ctx| Contact::mount(ctx).map(boxed)),
        ];

        let mut sections = Vec::with_capacity(chrome.len() + content.len() + 1);
        for (label, mount) in chrome {
            if label == "matrix-rain" && !ctx.config.has(Features::MATRIX_RAIN) {
                continue;
            }
            sections.push(mount_section(label, mount, &ctx, container)?);
        }

        let main = El::new("main")?.class("content").append_to(container);
        decorations.push(main.clone());
        for (label, mount) in content {
            sections.push(mount_section(label, mount, &ctx, &main)?);
        }
        sections.push(mount_section("footer", |ctx| Footer::mount(ctx).map(boxed), &ctx, container)?);

        let scroll_listeners = scroll_listeners(&scroll)?;
        publish_scroll(&scroll);

        let crashed: Vec<_> = sections
            .iter()
            .filter(|s| !s.boundary.is_live())
            .map(|s| s.boundary.label())
            .collect();
        tracing::info!(sections = sections.len(), crashed = ?crashed, "page mounted");

        let debug_exposed = ctx.config.has(Features::DEBUG_API)
            && debug::expose(debug::NeonfolioDebug::new(&background, scroll, crashed))
                .inspect_err(|e| tracing::warn!(error = %e, "debug API not exposed"))
                .is_ok();

        Ok(Self {
            background,
            sections,
            decorations,
            debug_exposed,
            _scroll_listeners: scroll_listeners,
        })
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        if self.debug_exposed {
            debug::withdraw();
        }

        for section in &self.sections {
            section.element.remove();
        }
        for element in &self.decorations {
            element.remove();
        }

        let scene_live = self.background.as_live().is_some_and(Background::scene_live);
        tracing::debug!(scene_live, "page unmounted");
    }
}

/// Mounts one section, showing the crash panel in its place when it fails.
fn mount_section(
    label: &'static str,
    mount: MountFn,
    ctx: &PageContext,
    parent: &Element,
) -> Result<Section, Error> {
    let boundary = Boundary::mount(label, || mount(ctx));
    let element = match boundary.as_live() {
        Some(component) => component.root().clone(),
        None => crash_panel()?.attr("data-section", label).build(),
    };

    attach(parent, element).map(|element| Section { boundary, element })
}

fn attach(parent: &Element, element: Element) -> Result<Element, Error> {
    parent
        .append_child(&element)
        .map_err(|_| Error::element_creation_failed(&element.tag_name().to_lowercase()))?;
    Ok(element)
}

/// Publishes a fresh snapshot on scroll and on resize. Both listeners are passive.
fn scroll_listeners(scroll: &ScrollObservable) -> Result<[EventListener; 2], Error> {
    let window = js::window()?;
    let listen = |event_type: &'static str| {
        let scroll = scroll.clone();
        EventListener::passive(&window, event_type, move |_: Event| publish_scroll(&scroll))
    };

    Ok([listen("scroll")?, listen("resize")?])
}

fn publish_scroll(scroll: &ScrollObservable) {
    let (offset, max_offset) = js::scroll_position();
    scroll.publish(ScrollSnapshot::new(offset, max_offset));
}
