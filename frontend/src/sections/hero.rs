use site_core::analytics::AnalyticsEvent;
use yew::prelude::*;

use crate::i18n::use_i18n;
use crate::navigation::use_navigation;
use crate::utils::analytics::track;

#[function_component(Hero)]
pub fn hero() -> Html {
    let i18n = use_i18n();
    let nav = use_navigation();

    let get_started = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| {
            track(AnalyticsEvent::ButtonClick {
                button: "get_started".to_string(),
                location: "hero".to_string(),
            });
            nav.navigate("contact");
        })
    };
    let see_projects = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| {
            track(AnalyticsEvent::ButtonClick {
                button: "see_projects".to_string(),
                location: "hero".to_string(),
            });
            nav.navigate("recent-work");
        })
    };

    html! {
        <section id="home" data-section="home" tabindex="-1" class="section hero">
            <div class="hero-content">
                <p class="hero-status"><span class="status-dot"></span>{ i18n.t("hero.status") }</p>
                <h1 class="hero-title">{ i18n.t("hero.title") }</h1>
                <p class="hero-subtitle">{ i18n.t("hero.subtitle") }</p>
                <div class="hero-actions">
                    <button type="button" class="button primary" onclick={get_started}>
                        { i18n.t("hero.getStarted") }
                    </button>
                    <button type="button" class="button secondary" onclick={see_projects}>
                        { i18n.t("hero.seeProjects") }
                    </button>
                </div>
            </div>
            <button
                type="button"
                class="scroll-cue"
                aria-label={i18n.t("hero.scrollDown")}
                onclick={nav.navigate_callback::<MouseEvent>("projects")}
            >
                {"↓"}
            </button>
        </section>
    }
}
