use std::rc::Rc;

use site_core::chrome::back_to_top_visible;
use site_core::SiteConfig;
use yew::prelude::*;

use crate::i18n::use_i18n;
use crate::navigation::use_navigation;
use crate::utils::dom::{self, Listener};

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let i18n = use_i18n();
    let nav = use_navigation();
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let threshold = config.back_to_top_threshold;
    let visible = use_state_eq(|| back_to_top_visible(dom::scroll_y(), threshold));

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |threshold: &f64| {
                let threshold = *threshold;
                let listener = Listener::on_window_passive("scroll", move |_| {
                    visible.set(back_to_top_visible(dom::scroll_y(), threshold));
                });
                move || drop(listener)
            },
            threshold,
        );
    }

    let onclick = Callback::from(move |_: MouseEvent| nav.to_top());

    html! {
        <button
            type="button"
            class={classes!("back-to-top", visible.then_some("visible"))}
            aria-label={i18n.t("common.backToTop")}
            tabindex={if *visible { "0" } else { "-1" }}
            {onclick}
        >
            {"↑"}
        </button>
    }
}
