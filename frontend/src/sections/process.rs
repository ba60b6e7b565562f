use std::rc::Rc;

use site_core::analytics::AnalyticsEvent;
use site_core::contact::ContactMethod;
use site_core::content::PROCESS_STEPS;
use site_core::SiteConfig;
use yew::prelude::*;

use crate::i18n::use_i18n;
use crate::utils::analytics::track;
use crate::utils::dom;

#[function_component(Process)]
pub fn process() -> Html {
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
        <section id="process" data-section="process" tabindex="-1" class="section process">
            <h2 class="section-title">{ i18n.t("process.title") }</h2>
            <p class="section-subtitle">{ i18n.t("process.subtitle") }</p>
            <ol class="process-steps">
                { for PROCESS_STEPS.iter().enumerate().map(|(index, step)| html! {
                    <li key={*step} class="process-step">
                        <span class="process-number">{ format!("{:02}", index + 1) }</span>
                        <h3>{ i18n.t(&format!("{step}.title")) }</h3>
                        <p>{ i18n.t(&format!("{step}.description")) }</p>
                    </li>
                }) }
            </ol>
            <button type="button" class="button primary" onclick={book_call}>
                { i18n.t("process.bookCall") }
            </button>
        </section>
    }
}
