use glam::Vec2;
use neonfolio_data::RadarAxis;

/// Geometry of the skill radar chart in SVG view-box units.
#[derive(Debug, Clone, Copy)]
pub struct RadarChart<'a> {
    axes: &'a [RadarAxis],
}

impl<'a> RadarChart<'a> {
    pub const VIEW_BOX: f32 = 300.0;
    pub const CENTER: Vec2 = Vec2::new(150.0, 150.0);
    pub const RADIUS: f32 = 120.0;
    pub const LEVELS: usize = 5;
    /// Distance of the labels beyond the outer ring.
    pub const LABEL_OFFSET: f32 = 25.0;

    #[must_use]
    pub fn new(axes: &'a [RadarAxis]) -> Self {
        Self { axes }
    }

    #[must_use]
    pub fn axes(&self) -> &'a [RadarAxis] {
        self.axes
    }

    /// Point at `radius` on axis `index`; the first axis points straight up.
    #[must_use]
    pub fn point(&self, index: usize, radius: f32) -> Vec2 {
        let step = 360.0 / self.axes.len().max(1) as f32;
        let angle = (index as f32 * step - 90.0).to_radians();
        Self::CENTER + Vec2::new(angle.cos(), angle.sin()) * radius
    }

    /// Radii of the concentric level rings.
    pub fn level_radii(&self) -> impl Iterator<Item = f32> {
        (1..=Self::LEVELS).map(|i| i as f32 / Self::LEVELS as f32 * Self::RADIUS)
    }

    /// Outer end of each axis line.
    pub fn axis_ends(&self) -> impl Iterator<Item = Vec2> + '_ {
        (0..self.axes.len()).map(|i| self.point(i, Self::RADIUS))
    }

    /// Data point of each axis, scaled by its percentage value.
    pub fn value_points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.axes
            .iter()
            .enumerate()
            .map(|(i, axis)| self.point(i, f32::from(axis.value.min(100)) / 100.0 * Self::RADIUS))
    }

    /// Anchor of each axis label.
    pub fn label_anchors(&self) -> impl Iterator<Item = Vec2> + '_ {
        (0..self.axes.len()).map(|i| self.point(i, Self::RADIUS + Self::LABEL_OFFSET))
    }

    /// Closed SVG path through the value points.
    #[must_use]
    pub fn value_path(&self) -> String {
        let mut path = String::new();
        for (i, p) in self.value_points().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            path.push_str(&format!("{cmd} {:.2} {:.2} ", p.x, p.y));
        }
        path.push('Z');
        path
    }
}

#[cfg(test)]
mod tests {
    use neonfolio_data::{RADAR_AXES, palette};

    use super::*;

    #[test]
    fn first_axis_points_up() {
        let chart = RadarChart::new(RADAR_AXES);
        let top = chart.point(0, RadarChart::RADIUS);
        assert!((top.x - 150.0).abs() < 1e-4);
        assert!((top.y - 30.0).abs() < 1e-4);
    }

    #[test]
    fn levels_are_even() {
        let radii: Vec<f32> = RadarChart::new(RADAR_AXES).level_radii().collect();
        assert_eq!(radii, vec![24.0, 48.0, 72.0, 96.0, 120.0]);
    }

    #[test]
    fn value_path_is_closed() {
        let axes = [
            RadarAxis { name: "a", value: 100, color: palette::CYAN },
            RadarAxis { name: "b", value: 50, color: palette::PINK },
            RadarAxis { name: "c", value: 0, color: palette::GREEN },
            RadarAxis { name: "d", value: 50, color: palette::PURPLE },
        ];
        let chart = RadarChart::new(&axes);
        assert_eq!(chart.value_path(), "M 150.00 30.00 L 210.00 150.00 L 150.00 150.00 L 90.00 150.00 Z");
        assert_eq!(chart.label_anchors().count(), 4);
    }
}
