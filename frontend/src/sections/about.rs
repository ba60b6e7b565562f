use std::rc::Rc;

use site_core::analytics::AnalyticsEvent;
use site_core::contact::ContactMethod;
use site_core::content::{EXPERIENCE_KEYS, PORTRAIT, SKILL_KEYS};
use site_core::SiteConfig;
use yew::prelude::*;

use crate::i18n::use_i18n;
use crate::utils::analytics::track;
use crate::utils::dom;

#[function_component(About)]
pub fn about() -> Html {
    let i18n = use_i18n();
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();

    let book_call = {
        let url = config.whatsapp_url.clone();
        Callback::from(move |_: MouseEvent| {
            track(AnalyticsEvent::ContactMethod(ContactMethod::Whatsapp));
            dom::open_external(&url);
        })
    };

    html! {
        <section id="about" data-section="about" tabindex="-1" class="section about">
            <div class="about-portrait">
                <img src={PORTRAIT} alt="Adam Zebilah" loading="lazy" />
            </div>
            <div class="about-body">
                <h2 class="section-title">{ i18n.t("about.title") }</h2>
                <p class="section-subtitle">{ i18n.t("about.subtitle") }</p>
                <p class="about-bio">{ i18n.t("about.bio") }</p>

                <h3>{ i18n.t("about.skillsTitle") }</h3>
                <ul class="skill-list">
                    { for SKILL_KEYS.iter().map(|key| html! { <li key={*key}>{ i18n.t(key) }</li> }) }
                </ul>

                <h3>{ i18n.t("about.experience.title") }</h3>
                <ol class="experience-list">
                    { for EXPERIENCE_KEYS.iter().map(|entry| html! {
                        <li key={*entry} class="experience-item">
                            <span class="experience-role">{ i18n.t(&format!("{entry}.role")) }</span>
                            <span class="experience-company">{ i18n.t(&format!("{entry}.company")) }</span>
                            <span class="experience-period">{ i18n.t(&format!("{entry}.period")) }</span>
                        </li>
                    }) }
                </ol>

                <button type="button" class="button primary" onclick={book_call}>
                    { i18n.t("about.bookCall") }
                </button>
            </div>
        </section>
    }
}
