use glam::Vec3;

/// Idle bobbing applied around an element.
///
/// `phase` offsets the clock so elements sharing parameters do not move in
/// lockstep. It is picked once when the catalog is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatMotion {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
    pub phase: f32,
}

/// Rotation and vertical lift produced by [`FloatMotion`] at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FloatPose {
    pub rotation: Vec3,
    pub lift: f32,
}

impl FloatMotion {
    /// Upper bound for randomly chosen phases, in seconds.
    pub const MAX_PHASE: f32 = 10_000.0;

    #[must_use]
    pub const fn new(speed: f32, rotation_intensity: f32, float_intensity: f32) -> Self {
        Self { speed, rotation_intensity, float_intensity, phase: 0.0 }
    }

    #[must_use]
    pub const fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }

    /// Pose at `time` seconds since the scene started.
    #[must_use]
    pub fn pose(&self, time: f32) -> FloatPose {
        let angle = (self.phase + time) / 4.0 * self.speed;
        let (sin, cos) = angle.sin_cos();

        FloatPose {
            rotation: Vec3::new(
                cos / 8.0 * self.rotation_intensity,
                sin / 8.0 * self.rotation_intensity,
                sin / 20.0 * self.rotation_intensity,
            ),
            lift: sin / 10.0 * self.float_intensity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amplitude_scales_with_intensity() {
        let float = FloatMotion::new(1.0, 0.8, 2.0);
        for step in 0..200 {
            let pose = float.pose(step as f32 * 0.37);
            assert!(pose.lift.abs() <= 0.2 + 1e-6);
            assert!(pose.rotation.x.abs() <= 0.1 + 1e-6);
            assert!(pose.rotation.z.abs() <= 0.04 + 1e-6);
        }
    }

    #[test]
    fn phase_shifts_the_clock() {
        let a = FloatMotion::new(0.3, 0.1, 0.3).with_phase(12.0);
        let b = FloatMotion::new(0.3, 0.1, 0.3);
        assert_eq!(a.pose(0.0), b.pose(12.0));
    }
}
