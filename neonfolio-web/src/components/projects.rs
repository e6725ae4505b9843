use neonfolio_core::Subscription;
use neonfolio_data::{PROFILE, PROJECTS, Project};
use web_sys::Element;

use super::{
    Component, PageContext, badge, glitch_text::GlitchText, holo_card::HoloCard, reveal::reveal,
    section_heading,
};
use crate::{dom::El, error::Error};

/// Grid of project cards with tilt and glitching titles.
pub(crate) struct Projects {
    root: Element,
    _cards: Vec<ProjectCard>,
    _reveal: Subscription,
}

struct ProjectCard {
    card: HoloCard,
    _title: GlitchText,
}

impl Projects {
    pub(crate) fn mount(ctx: &PageContext) -> Result<Self, Error> {
        let grid = El::new("div")?.class("projects-grid").build();

        let cards = PROJECTS
            .iter()
            .enumerate()
            .map(|(index, project)| {
                let card = ProjectCard::new(project, index)?;
                grid.append_child(card.root())
                    .map_err(|_| Error::element_creation_failed("project card"))?;
                Ok(card)
            })
            .collect::<Result<Vec<_>, Error>>()?;

        let root = El::new("section")?
            .id("projects")
            .class("section reveal")
            .child(
                El::new("div")?
                    .class("container")
                    .child(section_heading(1, "More Projects")?)
                    .child(El::wrap(grid))
                    .child(
                        El::new("div")?.class("projects-more").child(
                            El::link(PROFILE.github)?
                                .class("link-muted")
                                .text("View All Projects on GitHub ↗"),
                        ),
                    ),
            )
            .build();

        let reveal = reveal(&ctx.scroll, &root);
        Ok(Self { root, _cards: cards, _reveal: reveal })
    }
}

impl Component for Projects {
    fn root(&self) -> &Element {
        &self.root
    }
}

impl ProjectCard {
    fn new(project: &Project, index: usize) -> Result<Self, Error> {
        let accent = project.accent.class();
        let card = HoloCard::new(project.accent)?;
        let title = GlitchText::new(project.title)?;

        El::wrap(card.root().clone())
            .class("project-card glass")
            .class(&format!("accent-{accent}"))
            .style("transition-delay", &format!("{}ms", index * 100));

        let link = match project.repository {
            Some(url) => El::link(url)?.class(&format!("project-link text-{accent}")).text("⌥ Code"),
            None => El::new("span")?.class("project-link muted").text("⌥ Private"),
        };

        let tech = project
            .tech
            .iter()
            .map(|tech| badge(tech, &format!("badge-{accent}")))
            .collect::<Result<Vec<_>, _>>()?;

        El::wrap(card.content().clone())
            .child(
                El::new("div")?
                    .class("project-visual")
                    .child(El::new("span")?.class(&format!("project-icon text-{accent}")).text("</>"))
                    .child(El::new("div")?.class("cyber-grid"))
                    .child(El::new("div")?.class("project-scan"))
                    .child(
                        El::new("span")?
                            .class(&format!("project-number text-{accent}"))
                            .text(&format!("0{}", project.id)),
                    ),
            )
            .child(
                El::new("div")?
                    .class("project-body")
                    .child(
                        El::new("h3")?
                            .class(&format!("project-title text-{accent}"))
                            .child(El::wrap(title.root().clone())),
                    )
                    .child(El::new("p")?.class("project-description").text(project.description))
                    .child(El::new("div")?.class("tech-list").children(tech))
                    .child(El::new("div")?.class("project-links").child(link)),
            )
            .child(El::new("div")?.class("project-corner"));

        Ok(Self { card, _title: title })
    }

    fn root(&self) -> &Element {
        self.card.root()
    }
}
