use neonfolio_core::Subscription;
use neonfolio_data::FEATURED_PROJECT;
use web_sys::Element;

use super::{Component, PageContext, badge, reveal::reveal};
use crate::{dom::El, error::Error};

/// Large showcase card for the flagship project.
pub(crate) struct FeaturedProject {
    root: Element,
    _reveal: Subscription,
}

impl FeaturedProject {
    pub(crate) fn mount(ctx: &PageContext) -> Result<Self, Error> {
        let project = &FEATURED_PROJECT;

        let visual = El::new("div")?
            .class("featured-visual")
            .child(El::new("div")?.class("cyber-grid"))
            .child(El::new("div")?.class("featured-shape featured-square"))
            .child(El::new("div")?.class("featured-shape featured-circle"))
            .child(El::new("div")?.class("featured-shape featured-diamond"))
            .child(
                El::new("div")?
                    .class("featured-core")
                    .child(El::new("div")?.class("featured-core-glow"))
                    .child(El::new("span")?.class("featured-core-icon text-primary").text("✦")),
            )
            .child(El::new("div")?.class("featured-scan"))
            .child(El::new("div")?.class("featured-fade"));

        let mut header = El::new("div")?
            .class("featured-header")
            .child(El::new("h3")?.class("featured-title text-primary").text(project.title));
        if project.is_private {
            header = header.child(badge("🔒 Private Repository", "badge-amber")?);
        }

        let mut body = El::new("div")?
            .class("featured-body")
            .child(header)
            .child(El::new("p")?.class("featured-description").text(project.description));
        if let Some(long) = project.long_description {
            body = body.child(El::new("p")?.class("featured-long").text(long));
        }

        let tech = project
            .tech
            .iter()
            .map(|tech| badge(tech, "badge-primary"))
            .collect::<Result<Vec<_>, _>>()?;
        body = body.child(El::new("div")?.class("tech-list").children(tech));

        let actions = if let Some(repository) = project.repository {
            El::new("div")?
                .class("featured-actions")
                .child(El::link(repository)?.class("button-muted").text("⌥ Source"))
        } else {
            El::new("div")?
                .class("featured-actions")
                .child(El::new("span")?.class("button-muted disabled").text("⌥ Private Repo"))
                .child(El::new("span")?.class("button-outline secondary disabled").text("↗ Demo Coming Soon"))
        };
        body = body.child(actions);

        let root = El::new("section")?
            .id("featured")
            .class("section featured reveal")
            .child(
                El::new("div")?
                    .class("container")
                    .child(
                        El::new("div")?
                            .class("featured-label")
                            .child(El::new("span")?.class("featured-pill").text("✦ Featured Project")),
                    )
                    .child(El::new("div")?.class("featured-card glass").child(visual).child(body)),
            )
            .build();

        let reveal = reveal(&ctx.scroll, &root);
        Ok(Self { root, _reveal: reveal })
    }
}

impl Component for FeaturedProject {
    fn root(&self) -> &Element {
        &self.root
    }
}
