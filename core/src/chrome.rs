//! Page chrome: navbar metrics, menu, back-to-top, FAQ accordion and the
//! loading gate.

/// Navbar appearance for a given scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavbarMetrics {
    pub height: f64,
    pub background_opacity: f64,
    pub blur: f64,
    pub logo_scale: f64,
}

impl NavbarMetrics {
    const SHRINK_DISTANCE: f64 = 100.0;

    pub fn at(scroll_y: f64) -> Self {
        let t = (scroll_y / Self::SHRINK_DISTANCE).clamp(0.0, 1.0);
        Self {
            height: lerp(88.0, 72.0, t),
            background_opacity: lerp(0.1, 0.8, t),
            blur: lerp(4.0, 10.0, t),
            logo_scale: lerp(1.0, 0.9, t),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "height: {:.1}px; background: rgba(0, 0, 0, {:.2}); backdrop-filter: blur({:.1}px);",
            self.height, self.background_opacity, self.blur
        )
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

pub fn back_to_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Returns true if the key closed the menu.
    pub fn on_key(&mut self, key: &str) -> bool {
        if self.open && key == "Escape" {
            self.open = false;
            true
        } else {
            false
        }
    }
}

/// Single-open accordion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }
}

const MOBILE_AGENTS: [&str; 7] = [
    "Android",
    "iPhone",
    "iPad",
    "iPod",
    "BlackBerry",
    "IEMobile",
    "Opera Mini",
];

pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let lowered = user_agent.to_ascii_lowercase();
    MOBILE_AGENTS
        .iter()
        .any(|agent| lowered.contains(&agent.to_ascii_lowercase()))
}

/// Content counts as loaded once `document.readyState` reports `complete`
/// and the first section is in the page.
pub fn content_loaded(ready_state: &str, first_section_rendered: bool) -> bool {
    ready_state == "complete" && first_section_rendered
}

/// Decides when the loading screen may go away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadingGate {
    min_display_ms: f64,
    deadline_ms: f64,
    done: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingOutcome {
    Waiting,
    Ready,
    TimedOut,
}

impl LoadingGate {
    pub const POLL_INTERVAL_MS: u32 = 100;

    pub fn for_device(mobile: bool) -> Self {
        if mobile {
            Self::new(800.0, 2000.0)
        } else {
            Self::new(1500.0, 3000.0)
        }
    }

    pub fn new(min_display_ms: f64, deadline_ms: f64) -> Self {
        Self {
            min_display_ms,
            deadline_ms: deadline_ms.max(min_display_ms),
            done: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Polled every [`Self::POLL_INTERVAL_MS`]. Reports completion once.
    pub fn poll(&mut self, elapsed_ms: f64, content_ready: bool) -> LoadingOutcome {
        if self.done {
            return LoadingOutcome::Waiting;
        }
        if content_ready && elapsed_ms >= self.min_display_ms {
            self.done = true;
            LoadingOutcome::Ready
        } else if elapsed_ms >= self.deadline_ms {
            self.done = true;
            LoadingOutcome::TimedOut
        } else {
            LoadingOutcome::Waiting
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_shrinks_over_first_hundred_pixels() {
        assert_eq!(NavbarMetrics::at(0.0).height, 88.0);
        assert_eq!(NavbarMetrics::at(50.0).height, 80.0);
        assert_eq!(NavbarMetrics::at(100.0).height, 72.0);
        assert_eq!(NavbarMetrics::at(5000.0).height, 72.0);
        assert_eq!(NavbarMetrics::at(-20.0).height, 88.0);
        assert!((NavbarMetrics::at(100.0).background_opacity - 0.8).abs() < 1e-9);
    }

    #[test]
    fn back_to_top_needs_strictly_more_than_threshold() {
        assert!(!back_to_top_visible(300.0, 300.0));
        assert!(back_to_top_visible(301.0, 300.0));
    }

    #[test]
    fn escape_closes_open_menu_only() {
        let mut menu = MenuState::default();
        assert!(!menu.on_key("Escape"));
        menu.toggle();
        assert!(!menu.on_key("Enter"));
        assert!(menu.is_open());
        assert!(menu.on_key("Escape"));
        assert!(!menu.is_open());
    }

    #[test]
    fn accordion_keeps_one_entry_open() {
        let mut faq = Accordion::default();
        faq.toggle(2);
        assert!(faq.is_open(2));
        faq.toggle(4);
        assert!(!faq.is_open(2));
        assert_eq!(faq.open_index(), Some(4));
        faq.toggle(4);
        assert_eq!(faq.open_index(), None);
    }

    #[test]
    fn detects_mobile_agents() {
        assert!(is_mobile_user_agent(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)"
        ));
        assert!(is_mobile_user_agent("Mozilla/5.0 (Linux; android 14)"));
        assert!(!is_mobile_user_agent(
            "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0"
        ));
    }

    #[test]
    fn loading_waits_for_minimum_time() {
        let mut gate = LoadingGate::for_device(false);
        assert_eq!(gate.poll(100.0, true), LoadingOutcome::Waiting);
        assert_eq!(gate.poll(1500.0, true), LoadingOutcome::Ready);
        assert!(gate.is_done());
        assert_eq!(gate.poll(1600.0, true), LoadingOutcome::Waiting);
    }

    #[test]
    fn content_needs_a_complete_document_and_the_first_section() {
        assert!(content_loaded("complete", true));
        assert!(!content_loaded("complete", false));
        assert!(!content_loaded("interactive", true));
        assert!(!content_loaded("loading", true));
    }

    #[test]
    fn timed_out_gate_reports_once() {
        let mut gate = LoadingGate::for_device(false);
        assert_eq!(gate.poll(3000.0, false), LoadingOutcome::TimedOut);
        assert!(gate.is_done());
        assert_eq!(gate.poll(3100.0, true), LoadingOutcome::Waiting);
        assert_eq!(gate.poll(9000.0, false), LoadingOutcome::Waiting);
    }

    #[test]
    fn loading_times_out_without_content() {
        let mut gate = LoadingGate::for_device(true);
        assert_eq!(gate.poll(1999.0, false), LoadingOutcome::Waiting);
        assert_eq!(gate.poll(2000.0, false), LoadingOutcome::TimedOut);
    }
}
