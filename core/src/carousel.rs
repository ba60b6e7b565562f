//! Index state for the review and recent-work carousels, plus touch swipes.

/// Number of distinct scroll positions for a carousel that shows
/// `per_view` items at once.
pub fn positions(items: usize, per_view: usize) -> usize {
    items.saturating_sub(per_view.max(1)) + 1
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    hovered: bool,
    focused: bool,
    reduced_motion: bool,
}

impl Carousel {
    /// `len` is clamped to at least one position.
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
            hovered: false,
            focused: false,
            reduced_motion: false,
        }
    }

    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    pub fn go_to(&mut self, index: usize) {
        self.index = index.min(self.len - 1);
    }

    /// Timer-driven advance. Returns whether the index moved.
    pub fn tick(&mut self) -> bool {
        if !self.autoplay_active() || self.len < 2 {
            return false;
        }
        self.next();
        true
    }

    pub fn autoplay_active(&self) -> bool {
        !(self.hovered || self.focused || self.reduced_motion)
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn set_reduced_motion(&mut self, reduced_motion: bool) {
        self.reduced_motion = reduced_motion;
    }

    /// Changes the number of positions (e.g. per-view count changed),
    /// keeping the index in range.
    pub fn resize(&mut self, len: usize) {
        self.len = len.max(1);
        self.index = self.index.min(self.len - 1);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left: show the next item.
    Left,
    /// Finger moved right: show the previous item.
    Right,
}

impl SwipeDirection {
    pub fn apply(self, carousel: &mut Carousel) {
        match self {
            SwipeDirection::Left => carousel.next(),
            SwipeDirection::Right => carousel.prev(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    threshold: f64,
    start: Option<f64>,
    end: Option<f64>,
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start: None,
            end: None,
        }
    }

    pub fn start(&mut self, x: f64) {
        self.start = Some(x);
        self.end = None;
    }

    pub fn move_to(&mut self, x: f64) {
        if self.start.is_some() {
            self.end = Some(x);
        }
    }

    /// Ends the gesture. Distances must exceed the threshold strictly.
    pub fn finish(&mut self) -> Option<SwipeDirection> {
        let (start, end) = (self.start.take()?, self.end.take()?);
        let distance = start - end;
        if distance > self.threshold {
            Some(SwipeDirection::Left)
        } else if distance < -self.threshold {
            Some(SwipeDirection::Right)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn autoplay_wraps_from_last_to_first() {
        let mut carousel = Carousel::new(4);
        carousel.go_to(3);
        assert!(carousel.tick());
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn prev_wraps_from_first_to_last() {
        let mut carousel = Carousel::new(4);
        carousel.prev();
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn go_to_clamps() {
        let mut carousel = Carousel::new(3);
        carousel.go_to(10);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn hover_and_focus_suspend_autoplay() {
        let mut carousel = Carousel::new(3);
        carousel.set_hovered(true);
        assert!(!carousel.tick());
        carousel.set_focused(true);
        carousel.set_hovered(false);
        assert!(!carousel.tick());
        assert_eq!(carousel.index(), 0);
        carousel.set_focused(false);
        assert!(carousel.tick());
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn reduced_motion_disables_autoplay_but_not_manual_input() {
        let mut carousel = Carousel::new(3).with_reduced_motion(true);
        assert!(!carousel.tick());
        carousel.next();
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn positions_account_for_items_per_view() {
        assert_eq!(positions(8, 3), 6);
        assert_eq!(positions(2, 3), 1);
        assert_eq!(positions(5, 1), 5);
        assert_eq!(positions(0, 1), 1);
    }

    #[test]
    fn single_position_never_moves() {
        let mut carousel = Carousel::new(positions(2, 3));
        assert!(!carousel.tick());
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn resize_keeps_index_in_range() {
        let mut carousel = Carousel::new(6);
        carousel.go_to(5);
        carousel.resize(2);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn short_swipes_are_ignored() {
        let mut swipe = SwipeTracker::new(50.0);
        swipe.start(200.0);
        swipe.move_to(150.0);
        assert_eq!(swipe.finish(), None);
        swipe.start(200.0);
        swipe.move_to(249.0);
        assert_eq!(swipe.finish(), None);
    }

    #[test]
    fn long_swipes_pick_a_direction() {
        let mut carousel = Carousel::new(4);
        let mut swipe = SwipeTracker::new(50.0);
        swipe.start(300.0);
        swipe.move_to(200.0);
        let direction = swipe.finish().unwrap();
        assert_eq!(direction, SwipeDirection::Left);
        direction.apply(&mut carousel);
        assert_eq!(carousel.index(), 1);

        swipe.start(0.0);
        swipe.move_to(80.0);
        let direction = swipe.finish().unwrap();
        assert_eq!(direction, SwipeDirection::Right);
        direction.apply(&mut carousel);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn tap_without_move_is_not_a_swipe() {
        let mut swipe = SwipeTracker::new(50.0);
        swipe.start(120.0);
        assert_eq!(swipe.finish(), None);
        // A stale move from the previous gesture must not leak.
        swipe.move_to(0.0);
        assert_eq!(swipe.finish(), None);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Next,
        Prev,
        GoTo(usize),
        Tick,
        Hover(bool),
        Focus(bool),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Next),
            Just(Op::Prev),
            (0usize..20).prop_map(Op::GoTo),
            Just(Op::Tick),
            any::<bool>().prop_map(Op::Hover),
            any::<bool>().prop_map(Op::Focus),
        ]
    }

    proptest! {
        #[test]
        fn index_stays_in_range(len in 1usize..12, ops in prop::collection::vec(op(), 0..64)) {
            let mut carousel = Carousel::new(len);
            for op in ops {
                let before = carousel.index();
                match op {
                    Op::Next => carousel.next(),
                    Op::Prev => carousel.prev(),
                    Op::GoTo(i) => carousel.go_to(i),
                    Op::Tick => {
                        let paused = !carousel.autoplay_active();
                        let moved = carousel.tick();
                        if paused {
                            prop_assert!(!moved);
                            prop_assert_eq!(carousel.index(), before);
                        }
                    }
                    Op::Hover(h) => carousel.set_hovered(h),
                    Op::Focus(f) => carousel.set_focused(f),
                }
                prop_assert!(carousel.index() < carousel.len());
            }
        }

        #[test]
        fn next_then_prev_is_identity(len in 1usize..12, start in 0usize..12) {
            let mut carousel = Carousel::new(len);
            carousel.go_to(start);
            let before = carousel.index();
            carousel.next();
            carousel.prev();
            prop_assert_eq!(carousel.index(), before);
        }
    }
}
