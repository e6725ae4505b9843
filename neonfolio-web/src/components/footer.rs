use neonfolio_core::{RevealTracker, Subscription};
use neonfolio_data::{FOOTER_SOCIALS, PROFILE};
use web_sys::Element;

use super::{Component, PageContext, reveal::on_scroll_into_view};
use crate::{dom::El, error::Error};

pub(crate) struct Footer {
    root: Element,
    _reveal: Subscription,
}

impl Footer {
    pub(crate) fn mount(ctx: &PageContext) -> Result<Self, Error> {
        let links = FOOTER_SOCIALS
            .iter()
            .map(|social| {
                Ok(El::link(social.href)?
                    .class("footer-social")
                    .attr("aria-label", social.name)
                    .text(social.glyph))
            })
            .collect::<Result<Vec<_>, Error>>()?;

        let year = js_sys::Date::new_0().get_full_year();

        let root = El::new("footer")?
            .class("footer reveal")
            .child(
                El::new("div")?
                    .class("container footer-row")
                    .child(
                        El::new("p")?
                            .class("muted")
                            .child(El::new("span")?.text("Built with "))
                            .child(El::new("span")?.class("text-secondary").text("♥"))
                            .child(El::new("span")?.text(" and "))
                            .child(El::new("span")?.class("text-primary").text("</>"))
                            .child(El::new("span")?.text(" by "))
                            .child(El::new("span")?.class("text-primary").text(PROFILE.name)),
                    )
                    .child(El::new("div")?.class("footer-socials").children(links))
                    .child(El::new("p")?.class("muted").text(&format!("© {year} {}", PROFILE.name))),
            )
            .build();

        let reveal = on_scroll_into_view(&ctx.scroll, &root, RevealTracker::widget(), || {});

        Ok(Self { root, _reveal: reveal })
    }
}

impl Component for Footer {
    fn root(&self) -> &Element {
        &self.root
    }
}
