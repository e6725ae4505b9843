/// Count-up of a numeric stat once it scrolls into view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    target: u32,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl CounterAnimation {
    pub const DURATION_MS: f64 = 2000.0;

    #[must_use]
    pub fn new(target: u32) -> Self {
        Self { target, duration_ms: Self::DURATION_MS, started_at: None }
    }

    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Starts counting at the first animation frame after reveal. Later calls are ignored.
    pub fn start(&mut self, now: f64) {
        self.started_at.get_or_insert(now);
    }

    #[must_use]
    pub fn progress(&self, now: f64) -> f64 {
        match self.started_at {
            None => 0.0,
            Some(_) if self.duration_ms <= 0.0 => 1.0,
            Some(t) => ((now - t) / self.duration_ms).clamp(0.0, 1.0),
        }
    }

    /// Displayed value: floor of progress times target.
    #[must_use]
    pub fn value(&self, now: f64) -> u32 {
        (self.progress(now) * f64::from(self.target)).floor() as u32
    }

    /// Whether another animation frame is needed.
    #[must_use]
    pub fn is_running(&self, now: f64) -> bool {
        self.started_at.is_some() && self.progress(now) < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_linearly_and_floors() {
        let mut counter = CounterAnimation::new(6);
        assert_eq!(counter.value(500.0), 0);

        counter.start(1000.0);
        assert_eq!(counter.value(1000.0), 0);
        assert_eq!(counter.value(1333.0), 0);
        assert_eq!(counter.value(1334.0), 1);
        assert_eq!(counter.value(2000.0), 3);
        assert!(counter.is_running(2999.0));
        assert_eq!(counter.value(3000.0), 6);
        assert!(!counter.is_running(3000.0));
        assert_eq!(counter.value(9000.0), 6);
    }

    #[test]
    fn restart_is_ignored() {
        let mut counter = CounterAnimation::new(10);
        counter.start(0.0);
        counter.start(1000.0);
        assert_eq!(counter.value(2000.0), 10);
    }
}
