use neonfolio_core::{RevealTracker, Subscription, effects::ProgressRing};
use neonfolio_data::{ACTIVITIES, Activity, CONTRIBUTION_DAYS, CONTRIBUTIONS, FOCUS_AREAS, FocusArea};
use web_sys::Element;

use super::{Component, PageContext, reveal::on_scroll_into_view, section_heading};
use crate::{
    dom::{self, El},
    error::Error,
};

/// Current activities, focus rings and the contribution graph.
pub(crate) struct Currently {
    root: Element,
    _reveal: Subscription,
}

impl Currently {
    pub(crate) fn mount(ctx: &PageContext) -> Result<Self, Error> {
        let activities = ACTIVITIES
            .iter()
            .enumerate()
            .map(|(index, activity)| activity_card(activity, index))
            .collect::<Result<Vec<_>, _>>()?;

        let mut arcs = Vec::with_capacity(FOCUS_AREAS.len());
        let rings = FOCUS_AREAS
            .iter()
            .map(|area| {
                let (ring, arc, offset) = focus_ring(area)?;
                arcs.push((arc, offset));
                Ok(ring)
            })
            .collect::<Result<Vec<_>, Error>>()?;

        let cells = CONTRIBUTIONS
            .iter()
            .enumerate()
            .map(|(index, level)| {
                Ok(El::new("div")?
                    .class("contribution")
                    .class(&format!("level-{}", (*level).min(4)))
                    .style("transition-delay", &format!("{}ms", index * 10)))
            })
            .collect::<Result<Vec<_>, Error>>()?;

        let legend = (0..=4)
            .map(|level| Ok(El::new("div")?.class(&format!("contribution level-{level}"))))
            .collect::<Result<Vec<_>, Error>>()?;

        let root = El::new("section")?
            .id("currently")
            .class("section reveal")
            .child(
                El::new("div")?
                    .class("container")
                    .child(section_heading(4, "What I'm Up To")?)
                    .child(
                        El::new("div")?.class("status-pill").child(
                            El::new("span")?
                                .class("text-neon-green")
                                .child(El::new("span")?.class("pulse-dot green"))
                                .child(El::new("span")?.text("Currently Active")),
                        ),
                    )
                    .child(El::new("div")?.class("activities-grid").children(activities))
                    .child(
                        El::new("div")?
                            .class("focus-areas glass")
                            .child(El::new("h3")?.class("muted").text("Current Focus Areas"))
                            .child(El::new("div")?.class("focus-rings").children(rings)),
                    )
                    .child(
                        El::new("div")?
                            .class("activity-overview glass")
                            .child(El::new("h3")?.class("muted").text("Activity Overview"))
                            .child(
                                El::new("div")?
                                    .class("contribution-graph")
                                    .style("grid-template-rows", &format!("repeat({CONTRIBUTION_DAYS}, 12px)"))
                                    .children(cells),
                            )
                            .child(
                                El::new("div")?
                                    .class("contribution-legend")
                                    .child(El::new("span")?.text("Less"))
                                    .children(legend)
                                    .child(El::new("span")?.text("More")),
                            ),
                    ),
            )
            .build();

        let reveal = on_scroll_into_view(&ctx.scroll, &root, RevealTracker::section(), move || {
            for (arc, offset) in &arcs {
                dom::set_style(arc, "stroke-dashoffset", &format!("{offset:.2}"));
            }
        });

        Ok(Self { root, _reveal: reveal })
    }
}

impl Component for Currently {
    fn root(&self) -> &Element {
        &self.root
    }
}

fn activity_card(activity: &Activity, index: usize) -> Result<El, Error> {
    let accent = activity.accent.class();
    Ok(El::new("div")?
        .class("activity-card glass")
        .class(&format!("accent-{accent}"))
        .style("transition-delay", &format!("{}ms", index * 100))
        .child(El::new("span")?.class(&format!("activity-icon text-{accent}")).text(activity.icon))
        .child(El::new("h3")?.class(&format!("text-{accent}")).text(activity.title))
        .child(El::new("p")?.class("muted").text(activity.description)))
}

/// A ring whose arc starts empty; returns the arc and its revealed offset.
fn focus_ring(area: &FocusArea) -> Result<(El, Element, f32), Error> {
    let ring = ProgressRing::new(area.progress);
    let size = ProgressRing::SIZE.to_string();
    let center = (ProgressRing::SIZE / 2.0).to_string();
    let radius = ring.radius.to_string();
    let stroke = ProgressRing::STROKE_WIDTH.to_string();
    let color = area.accent.rgb().to_string();

    let circle = |class: &str| -> Result<El, Error> {
        Ok(El::svg("circle")?
            .class(class)
            .attr("cx", &center)
            .attr("cy", &center)
            .attr("r", &radius)
            .attr("fill", "none")
            .attr("stroke-width", &stroke))
    };

    let circumference = format!("{:.2}", ring.circumference());
    let arc = circle("ring-arc")?
        .attr("stroke", &color)
        .attr("stroke-linecap", "round")
        .attr("stroke-dasharray", &circumference)
        .style("stroke-dashoffset", &circumference)
        .style("filter", &format!("drop-shadow(0 0 6px {color})"));

    let element = El::new("div")?
        .class("focus-ring")
        .child(
            El::new("div")?
                .class("ring")
                .child(
                    El::svg("svg")?
                        .attr("width", &size)
                        .attr("height", &size)
                        .child(circle("ring-track")?)
                        .child(arc.clone()),
                )
                .child(
                    El::new("span")?
                        .class(&format!("ring-value text-{}", area.accent.class()))
                        .text(&format!("{}%", ring.progress())),
                ),
        )
        .child(El::new("span")?.class("ring-label muted").text(area.label));

    Ok((element, arc.build(), ring.dash_offset()))
}
