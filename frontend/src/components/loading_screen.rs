use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use site_core::chrome::{content_loaded, is_mobile_user_agent, LoadingGate, LoadingOutcome};
use yew::prelude::*;

use crate::i18n::use_i18n;
use crate::utils::dom;

/// Length of the fade-out before the page takes over.
const FADE_OUT_MS: u32 = 500;

fn content_ready() -> bool {
    let Some(document) = dom::window().and_then(|win| win.document()) else {
        return false;
    };
    content_loaded(
        &document.ready_state(),
        document.get_element_by_id("home").is_some(),
    )
}

#[derive(Properties, PartialEq)]
pub struct LoadingScreenProps {
    pub on_complete: Callback<()>,
}

#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    let i18n = use_i18n();
    let leaving = use_state_eq(|| false);

    // Polls until the gate completes; flipping `leaving` drops the interval.
    {
        let deps = *leaving;
        let leaving = leaving.clone();
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |done: &bool| {
                let interval = (!*done).then(|| {
                    let gate = Rc::new(RefCell::new(LoadingGate::for_device(is_mobile_user_agent(
                        &dom::user_agent(),
                    ))));
                    let started = dom::now();
                    Interval::new(LoadingGate::POLL_INTERVAL_MS, move || {
                        let outcome = gate.borrow_mut().poll(dom::now() - started, content_ready());
                        match outcome {
                            LoadingOutcome::Waiting => {}
                            LoadingOutcome::Ready | LoadingOutcome::TimedOut => {
                                if outcome == LoadingOutcome::TimedOut {
                                    log::warn!("content not ready in time, showing the page anyway");
                                }
                                leaving.set(true);
                                let on_complete = on_complete.clone();
                                Timeout::new(FADE_OUT_MS, move || on_complete.emit(())).forget();
                            }
                        }
                    })
                });
                move || drop(interval)
            },
            deps,
        );
    }

    html! {
        <div class={classes!("loading-screen", leaving.then_some("leaving"))} role="status" aria-live="polite">
            <div class="loading-mark">{"AZ"}</div>
            <div class="loading-bar"><span></span></div>
            <p class="loading-text">{ i18n.t("loading.text") }</p>
        </div>
    }
}
