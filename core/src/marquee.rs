/// Continuous horizontal scroll of the client logo strip.
///
/// The strip is rendered twice back to back, so resetting the offset after one
/// full cycle is invisible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marquee {
    offset: f64,
    speed: f64,
    cycle_width: f64,
    hovered: bool,
    reduced_motion: bool,
}

impl Marquee {
    pub const DEFAULT_SPEED: f64 = 0.5;
    pub const ITEM_WIDTH: f64 = 200.0;

    pub fn new(item_count: usize) -> Self {
        Self {
            offset: 0.0,
            speed: Self::DEFAULT_SPEED,
            cycle_width: Self::ITEM_WIDTH * item_count as f64,
            hovered: false,
            reduced_motion: false,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn set_reduced_motion(&mut self, reduced_motion: bool) {
        self.reduced_motion = reduced_motion;
    }

    pub fn is_running(&self) -> bool {
        !(self.hovered || self.reduced_motion) && self.cycle_width > 0.0
    }

    /// Advances one animation frame.
    pub fn step(&mut self) {
        if !self.is_running() {
            return;
        }
        self.offset -= self.speed;
        if self.offset <= -self.cycle_width {
            self.offset = 0.0;
        }
    }

    pub fn transform(&self) -> String {
        format!("transform: translateX({:.1}px);", self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_left_and_wraps_after_a_cycle() {
        let mut marquee = Marquee::new(2);
        marquee.step();
        assert_eq!(marquee.offset(), -0.5);
        for _ in 0..799 {
            marquee.step();
        }
        assert_eq!(marquee.offset(), 0.0);
    }

    #[test]
    fn hover_pauses() {
        let mut marquee = Marquee::new(12);
        marquee.set_hovered(true);
        marquee.step();
        assert_eq!(marquee.offset(), 0.0);
        marquee.set_hovered(false);
        marquee.step();
        assert_eq!(marquee.offset(), -0.5);
    }

    #[test]
    fn empty_strip_never_moves() {
        let mut marquee = Marquee::new(0);
        marquee.step();
        assert_eq!(marquee.offset(), 0.0);
        assert_eq!(marquee.transform(), "transform: translateX(0.0px);");
    }
}
