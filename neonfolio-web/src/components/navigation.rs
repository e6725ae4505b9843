//! Fixed top bar on wide screens, toggle button with a fullscreen overlay on
//! narrow ones.

use std::{cell::RefCell, rc::Rc};

use neonfolio_core::{ActiveSectionTracker, MenuState, SectionRect, Subscription, nav_backdrop_alpha};
use neonfolio_data::{NAV_ITEMS, PROFILE};
use web_sys::{Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use super::{Component, PageContext};
use crate::{
    browser::EventListener,
    dom::{self, El},
    error::Error,
    js,
};

/// Backdrop tint of the desktop bar; alpha follows the scroll offset.
const BACKDROP_RGB: (u8, u8, u8) = (10, 10, 20);

pub(crate) struct Navigation {
    root: Element,
    _listeners: Vec<EventListener>,
    _subscription: Subscription,
}

impl Navigation {
    pub(crate) fn mount(ctx: &PageContext) -> Result<Self, Error> {
        let root = El::new("div")?.class("navigation").build();
        let mut listeners = Vec::new();

        let bar = El::new("nav")?.class("nav-desktop").append_to(&root);
        let inner = El::new("div")?.class("nav-inner").append_to(&bar);

        let logo = El::link("#hero")?
            .class("nav-logo")
            .child(El::new("span")?.text(PROFILE.initials))
            .append_to(&inner);
        listeners.push(EventListener::new(&logo, "click", |event: MouseEvent| {
            event.prevent_default();
            scroll_to_top();
        })?);

        let links = El::new("div")?.class("nav-links").append_to(&inner);
        let menu = Rc::new(RefCell::new(MenuState::default()));

        let mut desktop_items = Vec::with_capacity(NAV_ITEMS.len());
        for (index, item) in NAV_ITEMS.iter().enumerate() {
            let link = nav_link(index, item.label, item.section)?
                .class("nav-link")
                .style("animation-delay", &format!("{}ms", index * 100))
                .append_to(&links);
            listeners.push(navigate_on_click(&link, item.section, &menu)?);
            desktop_items.push(link);
        }
        resume_button()?.class("nav-resume").append_to(&links);

        // mobile
        let toggle = El::new("button")?
            .class("nav-toggle")
            .attr("type", "button")
            .attr("aria-label", "Toggle menu")
            .text("☰")
            .append_to(&root);
        let overlay = El::new("div")?.class("nav-overlay").append_to(&root);
        let overlay_links = El::new("nav")?.class("nav-overlay-links").append_to(&overlay);
        for (index, item) in NAV_ITEMS.iter().enumerate() {
            let link = nav_link(index, item.label, item.section)?
                .class("nav-overlay-link")
                .style("transition-delay", &format!("{}ms", 200 + index * 100))
                .append_to(&overlay_links);
            listeners.push(navigate_on_click(&link, item.section, &menu)?);
        }
        resume_button()?.class("nav-overlay-resume").append_to(&overlay_links);

        {
            let menu = menu.clone();
            let overlay = overlay.clone();
            let button = toggle.clone();
            listeners.push(EventListener::new(&toggle, "click", move |_: MouseEvent| {
                let open = menu.borrow_mut().toggle();
                render_menu(&overlay, &button, open);
            })?);
        }

        // link clicks bubble up here after closing the menu state
        {
            let menu = menu.clone();
            let overlay = overlay.clone();
            let button = toggle.clone();
            listeners.push(EventListener::new(&overlay_links, "click", move |_: MouseEvent| {
                render_menu(&overlay, &button, menu.borrow().is_open());
            })?);
        }

        let mut tracker = ActiveSectionTracker::default();
        let subscription = ctx.scroll.subscribe(move |snapshot| {
            let alpha = nav_backdrop_alpha(snapshot.offset);
            let (r, g, b) = BACKDROP_RGB;
            dom::set_style(&bar, "background-color", &format!("rgba({r}, {g}, {b}, {alpha})"));

            let rects = NAV_ITEMS.iter().map(|item| section_rect(item.section));
            if tracker.update(rects) {
                for (index, link) in desktop_items.iter().enumerate() {
                    dom::toggle_class(link, "active", tracker.is_active(index));
                }
            }
        });

        Ok(Self { root, _listeners: listeners, _subscription: subscription })
    }
}

impl Component for Navigation {
    fn root(&self) -> &Element {
        &self.root
    }
}

fn nav_link(index: usize, label: &str, section: &str) -> Result<El, Error> {
    Ok(El::link(&format!("#{section}"))?
        .child(El::new("span")?.class("nav-index").text(&format!("0{}.", index + 1)))
        .child(El::new("span")?.text(label)))
}

fn resume_button() -> Result<El, Error> {
    Ok(El::link("#")?.class("button-outline").text("Resume"))
}

fn navigate_on_click(
    link: &Element,
    section: &'static str,
    menu: &Rc<RefCell<MenuState>>,
) -> Result<EventListener, Error> {
    let menu = menu.clone();
    EventListener::new(link, "click", move |event: MouseEvent| {
        event.prevent_default();
        scroll_to_section(section);
        menu.borrow_mut().navigate();
    })
}

fn render_menu(overlay: &Element, toggle: &Element, open: bool) {
    dom::toggle_class(overlay, "open", open);
    dom::toggle_class(toggle, "open", open);
    dom::set_text(toggle, if open { "✕" } else { "☰" });
}

fn section_rect(id: &str) -> Option<SectionRect> {
    let element = js::document().ok()?.get_element_by_id(id)?;
    let (top, bottom) = dom::vertical_bounds(&element);
    Some(SectionRect { top, bottom })
}

/// Smoothly scrolls a section into view; unknown ids are ignored.
pub(crate) fn scroll_to_section(id: &str) {
    let Some(element) = js::document().ok().and_then(|d| d.get_element_by_id(id)) else {
        tracing::debug!(id, "scroll target not found");
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

fn scroll_to_top() {
    if let Ok(window) = js::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
