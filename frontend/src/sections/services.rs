use site_core::content::SERVICE_KEYS;
use yew::prelude::*;

use crate::components::logo_slider::LogoSlider;
use crate::i18n::use_i18n;
use crate::navigation::use_navigation;

#[function_component(Services)]
pub fn services() -> Html {
    let i18n = use_i18n();
    let nav = use_navigation();

    html! {
        <section id="services" data-section="services" tabindex="-1" class="section services">
            <h2 class="section-title">{ i18n.t("services.title") }</h2>
            <p class="section-subtitle">{ i18n.t("services.subtitle") }</p>
            <ul class="service-list">
                { for SERVICE_KEYS.iter().map(|key| html! {
                    <li key={*key} class="service-pill">{ i18n.t(key) }</li>
                }) }
            </ul>
            <LogoSlider />
            <button type="button" class="button primary" onclick={nav.navigate_callback::<MouseEvent>("contact")}>
                { i18n.t("services.discussProject") }
            </button>
        </section>
    }
}
