/// Count-up animation for the stats cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    pub from: u32,
    pub to: u32,
    pub duration_ms: f64,
    pub delay_ms: f64,
}

impl CountUp {
    pub fn new(to: u32) -> Self {
        Self {
            from: 0,
            to,
            duration_ms: 2000.0,
            delay_ms: 0.0,
        }
    }

    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }

    /// Displayed value `elapsed_ms` after the counter became visible.
    pub fn value_at(&self, elapsed_ms: f64) -> u32 {
        let progress = self.progress(elapsed_ms);
        let eased = 1.0 - (1.0 - progress).powi(3);
        let span = self.to as f64 - self.from as f64;
        (self.from as f64 + span * eased).round() as u32
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }

    fn progress(&self, elapsed_ms: f64) -> f64 {
        let running = elapsed_ms - self.delay_ms;
        if running <= 0.0 {
            0.0
        } else if self.duration_ms <= 0.0 {
            1.0
        } else {
            (running / self.duration_ms).min(1.0)
        }
    }
}
