//! Browser side of section navigation.
//!
//! [`NavigationProvider`] owns the [`Navigator`], turns scroll and
//! `hashchange` events into reconcile calls and applies the resulting scroll
//! requests. Components reach it through [`use_navigation`].

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use site_core::analytics::AnalyticsEvent;
use site_core::content;
use site_core::navigation::{FrameThrottle, NavigationSettings, Reconciled};
use site_core::{Navigator, SectionId, SiteConfig};
use yew::prelude::*;

use crate::utils::analytics::track;
use crate::utils::dom::{self, AnimationFrame, DomLayout, Listener};

/// Delay before honouring the fragment present at load, so layout settles first.
const INITIAL_HASH_DELAY_MS: u32 = 200;

#[derive(Clone, PartialEq)]
pub struct NavigationHandle {
    active: Option<SectionId>,
    navigate: Callback<String>,
    to_top: Callback<()>,
}

impl NavigationHandle {
    /// Menu highlight: the active section, or the first one above it all.
    pub fn is_highlighted(&self, id: &str) -> bool {
        match &self.active {
            Some(active) => active.as_str() == id,
            None => content::SECTIONS.first() == Some(&id),
        }
    }

    pub fn navigate(&self, id: &str) {
        self.navigate.emit(id.to_string());
    }

    pub fn navigate_callback<E: 'static>(&self, id: &'static str) -> Callback<E> {
        let navigate = self.navigate.clone();
        Callback::from(move |_| navigate.emit(id.to_string()))
    }

    pub fn to_top(&self) {
        self.to_top.emit(());
    }
}

#[hook]
pub fn use_navigation() -> NavigationHandle {
    use_context::<NavigationHandle>().unwrap_or_else(|| {
        log::warn!("NavigationProvider missing, navigation disabled");
        NavigationHandle {
            active: None,
            navigate: Callback::noop(),
            to_top: Callback::noop(),
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct NavigationProviderProps {
    /// False while the loading screen is up; the fragment present at load
    /// is honoured once this turns true.
    pub ready: bool,
    pub children: Children,
}

type SharedNavigator = Rc<RefCell<Navigator>>;

fn reconcile_now(navigator: &SharedNavigator, active: &UseStateHandle<Option<SectionId>>) {
    let change = navigator
        .borrow_mut()
        .reconcile(dom::scroll_y(), &DomLayout, dom::now());
    apply_change(change, active);
}

fn apply_change(change: Option<Reconciled>, active: &UseStateHandle<Option<SectionId>>) {
    if let Some(change) = change {
        dom::replace_fragment(&change.fragment);
        dom::mark_current_section(change.active.as_ref());
        active.set(change.active);
    }
}

/// Re-reads the page once the suppression window has passed, so a jump that
/// landed short of its target still settles on the right section. A target
/// past the end of the page keeps the navigated section.
fn schedule_settle(
    navigator: &SharedNavigator,
    active: &UseStateHandle<Option<SectionId>>,
    timer: &Rc<RefCell<Option<Timeout>>>,
) {
    let cooldown = navigator.borrow().settings().cooldown_ms;
    let navigator = navigator.clone();
    let active = active.clone();
    let timeout = Timeout::new(cooldown.ceil() as u32, move || {
        let change = navigator.borrow_mut().settle(
            dom::scroll_y(),
            dom::max_scroll_y(),
            &DomLayout,
            dom::now(),
        );
        apply_change(change, &active);
    });
    // Replacing the previous timer cancels it.
    *timer.borrow_mut() = Some(timeout);
}

#[function_component(NavigationProvider)]
pub fn navigation_provider(props: &NavigationProviderProps) -> Html {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let navigator = use_mut_ref(|| {
        let registry = content::section_registry().unwrap_or_else(|err| {
            log::error!("section registry rejected: {err}");
            Default::default()
        });
        Navigator::new(registry, NavigationSettings::from(&*config))
    });
    let active = use_state(|| Option::<SectionId>::None);
    let settle_timer = use_mut_ref(|| Option::<Timeout>::None);

    // Scroll-driven reconcile, at most once per animation frame.
    {
        let navigator = navigator.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let throttle = Rc::new(RefCell::new(FrameThrottle::default()));
                let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::default();
                let pending_frame = frame.clone();
                let listener = Listener::on_window_passive("scroll", move |_| {
                    if !throttle.borrow_mut().request() {
                        return;
                    }
                    let scheduled = AnimationFrame::request({
                        let throttle = throttle.clone();
                        let navigator = navigator.clone();
                        let active = active.clone();
                        move |_| {
                            throttle.borrow_mut().frame_fired();
                            reconcile_now(&navigator, &active);
                        }
                    });
                    if scheduled.is_none() {
                        throttle.borrow_mut().frame_fired();
                    }
                    *frame.borrow_mut() = scheduled;
                });
                move || {
                    drop(listener);
                    pending_frame.borrow_mut().take();
                }
            },
            (),
        );
    }

    // Back/forward and manual fragment edits.
    {
        let navigator = navigator.clone();
        let active = active.clone();
        let settle_timer = settle_timer.clone();
        use_effect_with_deps(
            move |_| {
                let listener = Listener::on_window("hashchange", move |_| {
                    let request = navigator.borrow_mut().on_hash_change(
                        &dom::current_hash(),
                        &DomLayout,
                        dom::now(),
                    );
                    if let Some(request) = request {
                        dom::apply_scroll(&request);
                        active.set(request.focus.clone());
                        schedule_settle(&navigator, &active, &settle_timer);
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }

    // Fragment present at load.
    {
        let navigator = navigator.clone();
        let active = active.clone();
        let settle_timer = settle_timer.clone();
        use_effect_with_deps(
            move |ready: &bool| {
                let timeout = ready.then(|| {
                    Timeout::new(INITIAL_HASH_DELAY_MS, move || {
                        let hash = dom::current_hash();
                        if hash.trim_start_matches('#').is_empty() {
                            reconcile_now(&navigator, &active);
                            return;
                        }
                        let request =
                            navigator
                                .borrow_mut()
                                .on_hash_change(&hash, &DomLayout, dom::now());
                        match request {
                            Some(request) => {
                                dom::apply_scroll(&request);
                                active.set(request.focus.clone());
                                schedule_settle(&navigator, &active, &settle_timer);
                            }
                            None => reconcile_now(&navigator, &active),
                        }
                    })
                });
                move || drop(timeout)
            },
            props.ready,
        );
    }

    let navigate = {
        let navigator = navigator.clone();
        let active = active.clone();
        let settle_timer = settle_timer.clone();
        Callback::from(move |id: String| {
            let result = navigator
                .borrow_mut()
                .navigate_to(&id, &DomLayout, dom::now());
            match result {
                Ok(request) => {
                    dom::apply_scroll(&request);
                    active.set(request.focus.clone());
                    schedule_settle(&navigator, &active, &settle_timer);
                    track(AnalyticsEvent::Navigation { section: id });
                }
                Err(err) => log::warn!("navigation ignored: {err}"),
            }
        })
    };

    let to_top = {
        let navigator = navigator.clone();
        let active = active.clone();
        let settle_timer = settle_timer.clone();
        Callback::from(move |_| {
            let request = navigator.borrow_mut().navigate_to_top(dom::now());
            dom::apply_scroll(&request);
            active.set(request.focus.clone());
            schedule_settle(&navigator, &active, &settle_timer);
        })
    };

    let context = NavigationHandle {
        active: (*active).clone(),
        navigate,
        to_top,
    };

    html! {
        <ContextProvider<NavigationHandle> context={context}>
            { for props.children.iter() }
        </ContextProvider<NavigationHandle>>
    }
}
