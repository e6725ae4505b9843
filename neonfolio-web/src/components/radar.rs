use glam::Vec2;
use neonfolio_core::{RevealTracker, ScrollObservable, Subscription, effects::RadarChart};
use neonfolio_data::RADAR_AXES;
use web_sys::Element;

use super::reveal::on_scroll_into_view;
use crate::{dom::El, error::Error};

/// SVG radar chart of the skill axes; the value polygon grows in on reveal.
pub(crate) struct Radar {
    root: Element,
    _reveal: Subscription,
}

impl Radar {
    pub(crate) fn new(scroll: &ScrollObservable) -> Result<Self, Error> {
        let chart = RadarChart::new(RADAR_AXES);
        let size = RadarChart::VIEW_BOX.to_string();
        let center = RadarChart::CENTER;

        let mut svg = El::svg("svg")?
            .class("radar-chart")
            .attr("viewBox", &format!("0 0 {size} {size}"))
            .attr("width", &size)
            .attr("height", &size);

        for radius in chart.level_radii() {
            svg = svg.child(
                El::svg("circle")?
                    .class("radar-level")
                    .attr("cx", &center.x.to_string())
                    .attr("cy", &center.y.to_string())
                    .attr("r", &radius.to_string()),
            );
        }

        for end in chart.axis_ends() {
            svg = svg.child(line(center, end)?.class("radar-axis"));
        }

        // the polygon grows from the chart center
        svg = svg.child(
            El::svg("path")?
                .class("radar-area")
                .attr("d", &chart.value_path())
                .style("transform-origin", &format!("{}px {}px", center.x, center.y)),
        );

        for (axis, point) in chart.axes().iter().zip(chart.value_points()) {
            svg = svg.child(
                El::svg("circle")?
                    .class("radar-point")
                    .attr("cx", &format!("{:.2}", point.x))
                    .attr("cy", &format!("{:.2}", point.y))
                    .attr("r", "5")
                    .attr("fill", &axis.color.to_string()),
            );
        }

        for (axis, anchor) in chart.axes().iter().zip(chart.label_anchors()) {
            svg = svg.child(
                El::svg("text")?
                    .class("radar-label")
                    .attr("x", &format!("{:.2}", anchor.x))
                    .attr("y", &format!("{:.2}", anchor.y))
                    .attr("text-anchor", "middle")
                    .attr("dominant-baseline", "middle")
                    .text(axis.name),
            );
        }

        let root = El::new("div")?.class("radar").child(svg).build();
        let reveal = on_scroll_into_view(scroll, &root, RevealTracker::widget(), || {});

        Ok(Self { root, _reveal: reveal })
    }

    pub(crate) fn root(&self) -> &Element {
        &self.root
    }
}

fn line(from: Vec2, to: Vec2) -> Result<El, Error> {
    Ok(El::svg("line")?
        .attr("x1", &format!("{:.2}", from.x))
        .attr("y1", &format!("{:.2}", from.y))
        .attr("x2", &format!("{:.2}", to.x))
        .attr("y2", &format!("{:.2}", to.y)))
}
