//! DOM components of the page, in mount order.

mod about;
mod avatar;
mod background;
mod contact;
mod counter;
mod currently;
mod featured;
mod footer;
mod glitch_text;
mod hero;
mod holo_card;
mod matrix_rain;
mod navigation;
mod projects;
mod radar;
mod reveal;
mod scroll_progress;
mod skills;
mod typing_text;

pub(crate) use about::About;
pub(crate) use background::Background;
pub(crate) use contact::Contact;
pub(crate) use currently::Currently;
pub(crate) use featured::FeaturedProject;
pub(crate) use footer::Footer;
pub(crate) use hero::Hero;
pub(crate) use matrix_rain::MatrixRainLayer;
pub(crate) use navigation::Navigation;
pub(crate) use projects::Projects;
pub(crate) use scroll_progress::ScrollProgress;
pub(crate) use skills::Skills;
use web_sys::Element;

use crate::{config::PageConfig, dom::El, error::Error};

/// A mounted piece of the page.
///
/// Dropping a component releases every listener, timer and subscription it
/// registered; its root element is detached by the page.
pub(crate) trait Component {
    fn root(&self) -> &Element;
}

/// Shared inputs handed to every component at mount time.
#[derive(Debug, Clone)]
pub(crate) struct PageContext {
    pub scroll: neonfolio_core::ScrollObservable,
    pub config: PageConfig,
}

/// Numbered section heading followed by a fading rule.
pub(crate) fn section_heading(number: u8, title: &str) -> Result<El, Error> {
    Ok(El::new("div")?
        .class("section-heading")
        .child(El::new("span")?.class("section-number").text(&format!("0{number}.")))
        .child(El::new("h2")?.text(title))
        .child(El::new("div")?.class("section-rule")))
}

/// Shown in place of a section that failed to mount.
pub(crate) fn crash_panel() -> Result<El, Error> {
    Ok(El::new("div")?
        .class("crash-panel")
        .child(El::new("h2")?.text("Something crashed"))
        .child(El::new("p")?.text(
            "A section failed to render. Try refreshing; if it persists, add ?no3d to the address.",
        )))
}

/// A rounded tag such as a technology badge.
pub(crate) fn badge(text: &str, class: &str) -> Result<El, Error> {
    Ok(El::new("span")?.class("badge").class(class).text(text))
}
