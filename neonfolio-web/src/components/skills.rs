use std::{cell::Cell, rc::Rc};

use neonfolio_core::{RevealTracker, Subscription};
use neonfolio_data::{EDUCATION, EXPLORING, SKILLS, Skill, TECH_STACK};
use web_sys::{Element, MouseEvent};

use super::{
    Component, PageContext, badge, radar::Radar, reveal::on_scroll_into_view, section_heading,
};
use crate::{
    browser::EventListener,
    dom::{self, El},
    error::Error,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkillView {
    Chart,
    List,
}

/// Skill chart or bars, the education card and the tech stack.
pub(crate) struct Skills {
    root: Element,
    _radar: Radar,
    _listeners: [EventListener; 2],
    _reveal: Subscription,
}

impl Skills {
    pub(crate) fn mount(ctx: &PageContext) -> Result<Self, Error> {
        let radar = Radar::new(&ctx.scroll)?;

        let chart_button = toggle_button("Chart")?.class("active").build();
        let list_button = toggle_button("List")?.build();

        let mut fills = Vec::with_capacity(SKILLS.len());
        let bars = SKILLS
            .iter()
            .enumerate()
            .map(|(index, skill)| {
                let (bar, fill) = skill_bar(skill, index)?;
                fills.push((fill, skill.level));
                Ok(bar)
            })
            .collect::<Result<Vec<_>, Error>>()?;

        let chart_panel = El::new("div")?.class("skills-chart").child(El::wrap(radar.root().clone())).build();
        let list_panel = El::new("div")?.class("skills-list hidden").children(bars).build();

        let view = Rc::new(Cell::new(SkillView::Chart));
        let show = |target: SkillView| {
            let view = view.clone();
            let buttons = [chart_button.clone(), list_button.clone()];
            let panels = [chart_panel.clone(), list_panel.clone()];
            move |_: MouseEvent| {
                if view.replace(target) == target {
                    return;
                }
                let chart = target == SkillView::Chart;
                dom::toggle_class(&buttons[0], "active", chart);
                dom::toggle_class(&buttons[1], "active", !chart);
                dom::toggle_class(&panels[0], "hidden", !chart);
                dom::toggle_class(&panels[1], "hidden", chart);
            }
        };
        let listeners = [
            EventListener::new(&chart_button, "click", show(SkillView::Chart))?,
            EventListener::new(&list_button, "click", show(SkillView::List))?,
        ];

        let technical = El::new("div")?
            .class("skills-technical")
            .child(
                El::new("div")?
                    .class("skills-toolbar")
                    .child(El::new("h3")?.class("text-primary").text("Technical Skills"))
                    .child(
                        El::new("div")?
                            .class("skills-toggle")
                            .child(El::wrap(chart_button))
                            .child(El::wrap(list_button)),
                    ),
            )
            .child(El::wrap(chart_panel))
            .child(El::wrap(list_panel));

        let tech_stack = TECH_STACK
            .iter()
            .enumerate()
            .map(|(index, tech)| {
                Ok(El::new("div")?
                    .class("tech-card")
                    .style("transition-delay", &format!("{}ms", index * 50))
                    .child(El::new("span")?.class("text-primary").text(tech)))
            })
            .collect::<Result<Vec<_>, Error>>()?;

        let root = El::new("section")?
            .id("skills")
            .class("section reveal")
            .child(
                El::new("div")?
                    .class("container")
                    .child(section_heading(3, "Skills & Education")?)
                    .child(El::new("div")?.class("skills-grid").child(technical).child(education()?))
                    .child(
                        El::new("div")?
                            .class("tech-stack")
                            .child(El::new("h3")?.class("muted").text("< Tech Stack />"))
                            .child(El::new("div")?.class("tech-stack-cards").children(tech_stack)),
                    ),
            )
            .build();

        let reveal = on_scroll_into_view(&ctx.scroll, &root, RevealTracker::section(), move || {
            for (fill, level) in &fills {
                dom::set_style(fill, "width", &format!("{level}%"));
            }
        });

        Ok(Self { root, _radar: radar, _listeners: listeners, _reveal: reveal })
    }
}

impl Component for Skills {
    fn root(&self) -> &Element {
        &self.root
    }
}

fn toggle_button(label: &str) -> Result<El, Error> {
    Ok(El::new("button")?.class("toggle-button").attr("type", "button").text(label))
}

/// A labelled bar; the fill starts empty and grows once revealed.
fn skill_bar(skill: &Skill, index: usize) -> Result<(El, Element), Error> {
    let fill = El::new("div")?
        .class("skill-fill")
        .style("transition-delay", &format!("{}ms", 300 + index * 100));

    let bar = El::new("div")?
        .class("skill-bar")
        .child(
            El::new("div")?
                .class("skill-bar-label")
                .child(El::new("span")?.text(skill.name))
                .child(El::new("span")?.class("text-primary").text(&format!("{}%", skill.level))),
        )
        .child(El::new("div")?.class("skill-track").child(fill.clone()));

    Ok((bar, fill.build()))
}

fn education() -> Result<El, Error> {
    let focus = EDUCATION
        .focus
        .iter()
        .map(|item| badge(item, "badge-outline"))
        .collect::<Result<Vec<_>, _>>()?;
    let exploring = EXPLORING
        .iter()
        .map(|item| badge(item, "badge-neon-green"))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(El::new("div")?
        .class("education")
        .child(El::new("h3")?.class("text-secondary").text("Education"))
        .child(
            El::new("div")?
                .class("education-card glass")
                .child(
                    El::new("div")?
                        .class("education-header")
                        .child(
                            El::new("div")?
                                .child(El::new("h4")?.text(EDUCATION.degree))
                                .child(El::new("p")?.class("muted").text(EDUCATION.institution)),
                        )
                        .child(badge(EDUCATION.duration, "badge-secondary")?),
                )
                .child(El::new("div")?.class("tech-list").children(focus)),
        )
        .child(
            El::new("div")?
                .class("certification")
                .text(&format!("🏆 {}", EDUCATION.certification)),
        )
        .child(
            El::new("div")?
                .class("exploring")
                .child(
                    El::new("h4")?
                        .class("muted")
                        .child(El::new("span")?.class("text-neon-green").text("● "))
                        .child(El::new("span")?.text("Currently Exploring")),
                )
                .child(El::new("div")?.class("tech-list").children(exploring)),
        ))
}
