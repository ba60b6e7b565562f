use site_core::analytics::AnalyticsEvent;
use yew::prelude::*;

use crate::i18n::use_i18n;
use crate::utils::analytics::track;

#[function_component(LanguageToggle)]
pub fn language_toggle() -> Html {
    let i18n = use_i18n();
    let next = i18n.language().toggled();
    let onclick = {
        let i18n = i18n.clone();
        Callback::from(move |_: MouseEvent| {
            track(AnalyticsEvent::ButtonClick {
                button: format!("language-{}", next.code()),
                location: "navbar".to_string(),
            });
            i18n.set_language(next);
        })
    };
    html! {
        <button
            type="button"
            class="language-toggle"
            aria-label={i18n.t("common.switchLanguage")}
            {onclick}
        >
            { next.code().to_uppercase() }
        </button>
    }
}
