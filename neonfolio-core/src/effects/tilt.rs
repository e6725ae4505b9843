/// Pointer-driven 3D tilt of a holographic card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltState {
    /// Degrees around the horizontal axis.
    pub rotate_x: f32,
    /// Degrees around the vertical axis.
    pub rotate_y: f32,
    /// Glare center as a percentage of the card box.
    pub glare: (f32, f32),
}

/// Card box in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for TiltState {
    fn default() -> Self {
        Self::REST
    }
}

impl TiltState {
    /// Largest tilt, reached at the card edge.
    pub const MAX_DEGREES: f32 = 10.0;

    pub const REST: Self = Self { rotate_x: 0.0, rotate_y: 0.0, glare: (50.0, 50.0) };

    /// Tilt for a pointer at client position (`x`, `y`) over `rect`.
    #[must_use]
    pub fn track(rect: CardRect, x: f32, y: f32) -> Self {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return Self::REST;
        }

        let dx = x - (rect.left + rect.width / 2.0);
        let dy = y - (rect.top + rect.height / 2.0);

        Self {
            rotate_x: dy / (rect.height / 2.0) * -Self::MAX_DEGREES,
            rotate_y: dx / (rect.width / 2.0) * Self::MAX_DEGREES,
            glare: (
                (x - rect.left) / rect.width * 100.0,
                (y - rect.top) / rect.height * 100.0,
            ),
        }
    }

    /// Angle of the prismatic gradient overlay.
    #[must_use]
    pub fn prism_angle(&self) -> f32 {
        45.0 + self.rotate_y * 2.0
    }

    #[must_use]
    pub fn transform_css(&self) -> String {
        format!(
            "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg)",
            self.rotate_x, self.rotate_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: CardRect = CardRect { left: 100.0, top: 50.0, width: 200.0, height: 100.0 };

    #[test]
    fn center_is_flat() {
        let tilt = TiltState::track(RECT, 200.0, 100.0);
        assert_eq!(tilt.rotate_x, 0.0);
        assert_eq!(tilt.rotate_y, 0.0);
        assert_eq!(tilt.glare, (50.0, 50.0));
    }

    #[test]
    fn corners_tilt_fully() {
        let top_right = TiltState::track(RECT, 300.0, 50.0);
        assert_eq!(top_right.rotate_x, 10.0);
        assert_eq!(top_right.rotate_y, 10.0);
        assert_eq!(top_right.glare, (100.0, 0.0));
        assert_eq!(top_right.prism_angle(), 65.0);

        let bottom_left = TiltState::track(RECT, 100.0, 150.0);
        assert_eq!(bottom_left.rotate_x, -10.0);
        assert_eq!(bottom_left.rotate_y, -10.0);
    }

    #[test]
    fn degenerate_rect_rests() {
        let rect = CardRect { width: 0.0, ..RECT };
        assert_eq!(TiltState::track(rect, 10.0, 10.0), TiltState::REST);
    }
}
