//! Scroll-synchronised section tracking.
//!
//! [`Navigator`] owns the active section and decides, for every explicit
//! navigation and every throttled scroll evaluation, what the page should do.
//! It never touches the DOM: callers apply the returned [`ScrollRequest`] and
//! [`Fragment`] updates themselves.

use thiserror::Error;

use crate::config::SiteConfig;
use crate::section::{SectionId, SectionLayout, SectionRegistry};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("no section registered as `{0}`")]
    UnknownSection(String),
    #[error("section `{0}` has no anchor on the page")]
    MissingAnchor(SectionId),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationSettings {
    /// Height of the fixed header, subtracted from scroll targets.
    pub header_offset: f64,
    /// Distance below the viewport top used as the reference line.
    pub reference_offset: f64,
    /// How long passive reconciliation stays suppressed after a navigation.
    pub cooldown_ms: f64,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            header_offset: 88.0,
            reference_offset: 88.0,
            cooldown_ms: 1000.0,
        }
    }
}

impl From<&SiteConfig> for NavigationSettings {
    fn from(config: &SiteConfig) -> Self {
        Self {
            header_offset: config.header_offset,
            reference_offset: config.reference_offset,
            cooldown_ms: config.navigation_cooldown_ms as f64,
        }
    }
}

/// Short-lived permission for a programmatic scroll to own the active section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuppressionToken {
    expires_at: f64,
}

impl SuppressionToken {
    pub fn issue(now: f64, cooldown_ms: f64) -> Self {
        Self {
            expires_at: now + cooldown_ms.max(0.0),
        }
    }

    pub fn expires_at(&self) -> f64 {
        self.expires_at
    }

    pub fn is_active(&self, now: f64) -> bool {
        now < self.expires_at
    }
}

/// How the URL fragment should change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Section(SectionId),
    /// No fragment at all (page top).
    Empty,
    /// The browser already shows the right fragment.
    Unchanged,
}

impl Fragment {
    fn for_active(active: Option<&SectionId>) -> Self {
        match active {
            Some(id) => Fragment::Section(id.clone()),
            None => Fragment::Empty,
        }
    }
}

/// Work for the caller after an explicit navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollRequest {
    pub target_y: f64,
    pub fragment: Fragment,
    /// Section that should receive focus and `aria-current`; `None` clears both.
    pub focus: Option<SectionId>,
}

/// Result of a reconciliation that changed the active section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    pub active: Option<SectionId>,
    pub fragment: Fragment,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationState {
    pub active: Option<SectionId>,
    pub suppression: Option<SuppressionToken>,
}

#[derive(Debug, Clone)]
pub struct Navigator {
    registry: SectionRegistry,
    settings: NavigationSettings,
    state: NavigationState,
    /// Scroll target of the last explicit navigation, until it settles.
    pending_target: Option<f64>,
}

/// Slack when deciding the page is scrolled all the way down.
const BOTTOM_TOLERANCE: f64 = 1.0;

impl Navigator {
    pub fn new(registry: SectionRegistry, settings: NavigationSettings) -> Self {
        Self {
            registry,
            settings,
            state: NavigationState::default(),
            pending_target: None,
        }
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn settings(&self) -> NavigationSettings {
        self.settings
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn active(&self) -> Option<&SectionId> {
        self.state.active.as_ref()
    }

    pub fn is_suppressed(&self, now: f64) -> bool {
        self.state
            .suppression
            .map(|token| token.is_active(now))
            .unwrap_or(false)
    }

    /// Drops an expired suppression token. Returns true if one was dropped.
    pub fn release_expired(&mut self, now: f64) -> bool {
        match self.state.suppression {
            Some(token) if !token.is_active(now) => {
                self.state.suppression = None;
                true
            }
            _ => false,
        }
    }

    /// Explicit navigation to a section (navbar, menu, buttons).
    pub fn navigate_to(
        &mut self,
        raw_id: &str,
        layout: &impl SectionLayout,
        now: f64,
    ) -> Result<ScrollRequest, NavigationError> {
        let (id, target_y) = self.plan_scroll(raw_id, layout)?;
        log::debug!("navigating to #{id} (y = {target_y})");
        self.state.active = Some(id.clone());
        self.state.suppression = Some(SuppressionToken::issue(now, self.settings.cooldown_ms));
        self.pending_target = Some(target_y);
        Ok(ScrollRequest {
            target_y,
            fragment: Fragment::Section(id.clone()),
            focus: Some(id),
        })
    }

    pub fn navigate_to_top(&mut self, now: f64) -> ScrollRequest {
        self.state.active = None;
        self.state.suppression = Some(SuppressionToken::issue(now, self.settings.cooldown_ms));
        self.pending_target = Some(0.0);
        ScrollRequest {
            target_y: 0.0,
            fragment: Fragment::Empty,
            focus: None,
        }
    }

    /// Handles a fragment that changed outside of the navigator
    /// (initial load, back/forward buttons, plain anchor links).
    pub fn on_hash_change(
        &mut self,
        hash: &str,
        layout: &impl SectionLayout,
        now: f64,
    ) -> Option<ScrollRequest> {
        if SectionId::parse(hash).is_none() {
            let mut request = self.navigate_to_top(now);
            request.fragment = Fragment::Unchanged;
            return Some(request);
        }
        match self.navigate_to(hash, layout, now) {
            Ok(mut request) => {
                request.fragment = Fragment::Unchanged;
                Some(request)
            }
            Err(err) => {
                log::debug!("ignoring fragment {hash:?}: {err}");
                None
            }
        }
    }

    /// Runs once the cooldown of an explicit navigation has passed.
    ///
    /// A jump that stopped short of its target because the page ends first
    /// keeps the section it chose; otherwise this is a plain reconcile.
    pub fn settle(
        &mut self,
        scroll_y: f64,
        max_scroll_y: f64,
        layout: &impl SectionLayout,
        now: f64,
    ) -> Option<Reconciled> {
        if self.is_suppressed(now) {
            return None;
        }
        self.release_expired(now);
        if let Some(target_y) = self.pending_target.take() {
            let at_bottom = scroll_y >= max_scroll_y - BOTTOM_TOLERANCE;
            if at_bottom && scroll_y < target_y {
                log::debug!("target y = {target_y} unreachable, keeping the navigated section");
                return None;
            }
        }
        self.reconcile(scroll_y, layout, now)
    }

    /// Passive reconciliation against the current scroll position.
    pub fn reconcile(
        &mut self,
        scroll_y: f64,
        layout: &impl SectionLayout,
        now: f64,
    ) -> Option<Reconciled> {
        if self.is_suppressed(now) {
            return None;
        }
        self.release_expired(now);

        let probe = scroll_y + self.settings.reference_offset;
        let first_top = self
            .registry
            .ids()
            .iter()
            .find_map(|id| layout.span(id))
            .map(|span| span.top);

        let next = match first_top {
            None => return None,
            Some(top) if probe < top => None,
            Some(_) => {
                let containing = self
                    .registry
                    .ids()
                    .iter()
                    .find(|id| layout.span(id).map(|span| span.contains(probe)).unwrap_or(false));
                match containing {
                    Some(id) => Some(id.clone()),
                    // Reference line in a gap: keep what we had.
                    None => return None,
                }
            }
        };

        if next == self.state.active {
            return None;
        }
        self.state.active = next;
        Some(Reconciled {
            active: self.state.active.clone(),
            fragment: Fragment::for_active(self.state.active.as_ref()),
        })
    }

    fn plan_scroll(
        &self,
        raw_id: &str,
        layout: &impl SectionLayout,
    ) -> Result<(SectionId, f64), NavigationError> {
        let id = self
            .registry
            .resolve(raw_id)
            .cloned()
            .ok_or_else(|| NavigationError::UnknownSection(raw_id.to_string()))?;
        let span = layout
            .span(&id)
            .ok_or_else(|| NavigationError::MissingAnchor(id.clone()))?;
        let target_y = (span.top - self.settings.header_offset).max(0.0);
        Ok((id, target_y))
    }
}

/// Coalesces scroll events into at most one evaluation per animation frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameThrottle {
    pending: bool,
}

impl FrameThrottle {
    /// Returns true when the caller should schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            false
        } else {
            self.pending = true;
            true
        }
    }

    pub fn frame_fired(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SectionSpan;
    use proptest::prelude::*;

    fn layout() -> Vec<(SectionId, SectionSpan)> {
        vec![
            (SectionId::from("home"), SectionSpan::new(0.0, 800.0)),
            (SectionId::from("projects"), SectionSpan::new(800.0, 600.0)),
            (SectionId::from("about"), SectionSpan::new(1400.0, 700.0)),
        ]
    }

    fn navigator() -> Navigator {
        let registry = SectionRegistry::new(["home", "projects", "about"]).unwrap();
        Navigator::new(registry, NavigationSettings::default())
    }

    #[test]
    fn clicking_about_targets_header_adjusted_offset() {
        let mut nav = navigator();
        let request = nav.navigate_to("about", &layout(), 0.0).unwrap();
        assert_eq!(request.target_y, 1400.0 - 88.0);
        assert_eq!(request.fragment, Fragment::Section(SectionId::from("about")));
        assert_eq!(request.focus, Some(SectionId::from("about")));
        assert_eq!(nav.active().unwrap().as_str(), "about");
    }

    #[test]
    fn navigation_accepts_hash_prefixed_ids() {
        let mut nav = navigator();
        let request = nav.navigate_to("#projects", &layout(), 0.0).unwrap();
        assert_eq!(request.target_y, 800.0 - 88.0);
    }

    #[test]
    fn target_never_goes_above_the_page() {
        let mut nav = navigator();
        let request = nav.navigate_to("home", &layout(), 0.0).unwrap();
        assert_eq!(request.target_y, 0.0);
    }

    #[test]
    fn unknown_section_is_a_noop() {
        let mut nav = navigator();
        nav.navigate_to("projects", &layout(), 0.0).unwrap();
        let before = nav.state().clone();
        let err = nav.navigate_to("pricing", &layout(), 5000.0).unwrap_err();
        assert_eq!(err, NavigationError::UnknownSection("pricing".into()));
        assert_eq!(nav.state(), &before);
    }

    #[test]
    fn missing_anchor_is_a_noop() {
        let mut nav = navigator();
        let partial = vec![(SectionId::from("home"), SectionSpan::new(0.0, 800.0))];
        let err = nav.navigate_to("about", &partial, 0.0).unwrap_err();
        assert_eq!(err, NavigationError::MissingAnchor(SectionId::from("about")));
        assert!(nav.active().is_none());
        assert!(!nav.is_suppressed(0.0));
    }

    #[test]
    fn reconciliation_waits_for_the_cooldown() {
        let mut nav = navigator();
        nav.navigate_to("about", &layout(), 1000.0).unwrap();
        // Smooth scroll still passing through "projects".
        assert_eq!(nav.reconcile(900.0, &layout(), 1500.0), None);
        assert_eq!(nav.active().unwrap().as_str(), "about");
        assert!(nav.is_suppressed(1999.0));
        assert!(!nav.is_suppressed(2000.0));
    }

    #[test]
    fn navigation_survives_reconciliation_after_cooldown() {
        let mut nav = navigator();
        let request = nav.navigate_to("about", &layout(), 0.0).unwrap();
        assert_eq!(nav.reconcile(request.target_y, &layout(), 1000.0), None);
        assert_eq!(nav.active().unwrap().as_str(), "about");
        assert!(nav.state().suppression.is_none());
    }

    #[test]
    fn new_navigation_replaces_the_token() {
        let mut nav = navigator();
        nav.navigate_to("projects", &layout(), 0.0).unwrap();
        nav.navigate_to("about", &layout(), 800.0).unwrap();
        assert_eq!(nav.state().suppression.unwrap().expires_at(), 1800.0);
        assert!(nav.is_suppressed(1500.0));
    }

    #[test]
    fn reconciliation_follows_the_reference_line() {
        let mut nav = navigator();
        let change = nav.reconcile(800.0, &layout(), 0.0).unwrap();
        assert_eq!(change.active, Some(SectionId::from("projects")));
        assert_eq!(change.fragment, Fragment::Section(SectionId::from("projects")));
        // Same section again: nothing to do.
        assert_eq!(nav.reconcile(850.0, &layout(), 0.0), None);
        // Reference line at 1312 + 88 = 1400 crosses into "about".
        let change = nav.reconcile(1312.0, &layout(), 0.0).unwrap();
        assert_eq!(change.active, Some(SectionId::from("about")));
    }

    #[test]
    fn reconciliation_clears_above_the_first_section() {
        let registry = SectionRegistry::new(["projects", "about"]).unwrap();
        let mut nav = Navigator::new(registry, NavigationSettings::default());
        let layout = vec![
            (SectionId::from("projects"), SectionSpan::new(900.0, 500.0)),
            (SectionId::from("about"), SectionSpan::new(1400.0, 500.0)),
        ];
        nav.reconcile(900.0, &layout, 0.0).unwrap();
        let change = nav.reconcile(0.0, &layout, 0.0).unwrap();
        assert_eq!(change.active, None);
        assert_eq!(change.fragment, Fragment::Empty);
    }

    #[test]
    fn gaps_keep_the_previous_section() {
        let mut nav = navigator();
        let gapped = vec![
            (SectionId::from("home"), SectionSpan::new(0.0, 700.0)),
            (SectionId::from("projects"), SectionSpan::new(800.0, 600.0)),
            (SectionId::from("about"), SectionSpan::new(1400.0, 700.0)),
        ];
        nav.reconcile(0.0, &gapped, 0.0).unwrap();
        assert_eq!(nav.reconcile(650.0, &gapped, 0.0), None);
        assert_eq!(nav.active().unwrap().as_str(), "home");
    }

    #[test]
    fn navigate_to_top_clears_everything() {
        let mut nav = navigator();
        nav.navigate_to("about", &layout(), 0.0).unwrap();
        let request = nav.navigate_to_top(10.0);
        assert_eq!(request.target_y, 0.0);
        assert_eq!(request.fragment, Fragment::Empty);
        assert!(request.focus.is_none());
        assert!(nav.active().is_none());
        assert!(nav.is_suppressed(500.0));
    }

    #[test]
    fn hash_change_does_not_rewrite_the_fragment() {
        let mut nav = navigator();
        let request = nav.on_hash_change("#about", &layout(), 0.0).unwrap();
        assert_eq!(request.fragment, Fragment::Unchanged);
        assert_eq!(request.target_y, 1312.0);
        assert!(nav.on_hash_change("#nowhere", &layout(), 0.0).is_none());
        let top = nav.on_hash_change("", &layout(), 0.0).unwrap();
        assert_eq!(top.target_y, 0.0);
        assert_eq!(top.fragment, Fragment::Unchanged);
    }

    #[test]
    fn settling_keeps_a_target_past_the_page_end() {
        // 2200 px document in a 1000 px viewport: scrolling stops at 1200.
        let short_page = vec![
            (SectionId::from("home"), SectionSpan::new(0.0, 800.0)),
            (SectionId::from("projects"), SectionSpan::new(800.0, 800.0)),
            (SectionId::from("about"), SectionSpan::new(1600.0, 600.0)),
        ];
        let mut nav = navigator();
        let request = nav.navigate_to("about", &short_page, 0.0).unwrap();
        assert_eq!(request.target_y, 1512.0);

        assert_eq!(nav.settle(1200.0, 1200.0, &short_page, 1000.0), None);
        assert_eq!(nav.active().unwrap().as_str(), "about");
        assert_eq!(nav.state().suppression, None);
    }

    #[test]
    fn settling_corrects_a_jump_that_landed_short() {
        let mut nav = navigator();
        nav.navigate_to("about", &layout(), 0.0).unwrap();
        assert_eq!(nav.settle(900.0, 1400.0, &layout(), 500.0), None);
        let change = nav.settle(900.0, 1400.0, &layout(), 1000.0).unwrap();
        assert_eq!(change.active.unwrap().as_str(), "projects");
    }

    #[test]
    fn frame_throttle_coalesces_requests() {
        let mut throttle = FrameThrottle::default();
        assert!(throttle.request());
        assert!(!throttle.request());
        assert!(throttle.is_pending());
        throttle.frame_fired();
        assert!(throttle.request());
    }

    proptest! {
        #[test]
        fn any_position_inside_a_section_selects_it(
            heights in prop::collection::vec(100.0f64..2000.0, 1..8),
            pick in any::<prop::sample::Index>(),
            fraction in 0.0f64..1.0,
        ) {
            let names: Vec<String> = (0..heights.len()).map(|i| format!("s{i}")).collect();
            let registry = SectionRegistry::new(&names).unwrap();
            let mut top = 0.0;
            let mut spans = Vec::new();
            for (name, height) in names.iter().zip(&heights) {
                spans.push((SectionId::from(name.as_str()), SectionSpan::new(top, *height)));
                top += height;
            }
            let index = pick.index(spans.len());
            let (expected, span) = spans[index].clone();
            let settings = NavigationSettings::default();
            let scroll_y = span.top + span.height * fraction - settings.reference_offset;
            prop_assume!(span.contains(scroll_y + settings.reference_offset));

            let mut nav = Navigator::new(registry, settings);
            nav.reconcile(scroll_y, &spans, 0.0);
            prop_assert_eq!(nav.active(), Some(&expected));
        }

        #[test]
        fn navigating_then_settling_keeps_the_target(
            heights in prop::collection::vec(200.0f64..2000.0, 1..8),
            pick in any::<prop::sample::Index>(),
        ) {
            let names: Vec<String> = (0..heights.len()).map(|i| format!("s{i}")).collect();
            let registry = SectionRegistry::new(&names).unwrap();
            let mut top = 0.0;
            let mut spans = Vec::new();
            for (name, height) in names.iter().zip(&heights) {
                spans.push((SectionId::from(name.as_str()), SectionSpan::new(top, *height)));
                top += height;
            }
            let (expected, _) = spans[pick.index(spans.len())].clone();

            let mut nav = Navigator::new(registry, NavigationSettings::default());
            let request = nav.navigate_to(expected.as_str(), &spans, 0.0).unwrap();
            prop_assert_eq!(&request.fragment, &Fragment::Section(expected.clone()));
            nav.reconcile(request.target_y, &spans, 1000.0);
            prop_assert_eq!(nav.active(), Some(&expected));
        }
    }
}
