use std::rc::Rc;

use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use site_core::analytics::AnalyticsEvent;
use site_core::contact::{
    clear_field_errors, ContactForm, ContactMethod, Field, FormError, SubmitStatus,
};
use site_core::SiteConfig;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::i18n::{use_i18n, I18n};
use crate::utils::analytics::track;
use crate::utils::clipboard::{copy_email, CopyOutcome};
use crate::utils::dom;

const COPIED_BADGE_MS: u32 = 2000;

/// Stands in for a mail backend: waits, then reports the configured outcome.
async fn deliver(form: ContactForm, delay_ms: u32, fail: bool) -> bool {
    log::debug!("submitting contact form: {}", serde_json::to_string(&form).unwrap_or_default());
    TimeoutFuture::new(delay_ms).await;
    !fail
}

fn error_text(i18n: &I18n, error: &FormError) -> String {
    match error {
        FormError::Required(Field::Privacy) => i18n.t("contact.errors.privacy"),
        FormError::Required(_) => i18n.t("contact.errors.required"),
        FormError::InvalidEmail(_) => i18n.t("contact.errors.invalidEmail"),
        FormError::AlreadySending => i18n.t("contact.form.sending"),
    }
}

fn field_error(i18n: &I18n, errors: &[FormError], field: Field) -> Html {
    match errors.iter().find(|error| error.field() == Some(field)) {
        Some(error) => html! {
            <span class="field-error" id={format!("{}-error", field.as_str())} role="alert">
                { error_text(i18n, error) }
            </span>
        },
        None => html! {},
    }
}

fn input_value(event: &InputEvent) -> Option<String> {
    let target = event.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    target.dyn_ref::<HtmlTextAreaElement>().map(HtmlTextAreaElement::value)
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let i18n = use_i18n();
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let form = use_state(ContactForm::default);
    let errors = use_state(Vec::<FormError>::new);
    let copied = use_state_eq(|| false);

    let on_text = |field: Field| {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |event: InputEvent| {
            let Some(value) = input_value(&event) else {
                return;
            };
            let mut next = (*form).clone();
            next.set_text(field, value);
            form.set(next);
            if let Some(remaining) = clear_field_errors(&errors, field) {
                errors.set(remaining);
            }
        })
    };

    let on_privacy = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |event: Event| {
            let checked = event
                .target_dyn_into::<HtmlInputElement>()
                .map(|input| input.checked())
                .unwrap_or(false);
            let mut next = (*form).clone();
            next.set_privacy(checked);
            form.set(next);
            if let Some(remaining) = clear_field_errors(&errors, Field::Privacy) {
                errors.set(remaining);
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let delay_ms = config.simulated_submit_delay_ms;
        let fail = config.simulate_submit_failure;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let mut sending = (*form).clone();
            if let Err(problems) = sending.begin_submit() {
                log::debug!("contact form rejected: {} problem(s)", problems.len());
                errors.set(problems);
                return;
            }
            errors.set(Vec::new());
            form.set(sending.clone());
            let form = form.clone();
            spawn_local(async move {
                let succeeded = deliver(sending.clone(), delay_ms, fail).await;
                let mut done = sending;
                done.finish_submit(succeeded);
                track(AnalyticsEvent::FormSubmit {
                    form: "contact".to_string(),
                    success: succeeded,
                });
                form.set(done);
            });
        })
    };

    let open_whatsapp = {
        let url = config.whatsapp_url.clone();
        Callback::from(move |_: MouseEvent| {
            track(AnalyticsEvent::ContactMethod(ContactMethod::Whatsapp));
            dom::open_external(&url);
        })
    };
    let open_behance = {
        let url = config.behance_url.clone();
        Callback::from(move |_: MouseEvent| {
            track(AnalyticsEvent::ContactMethod(ContactMethod::Behance));
            dom::open_external(&url);
        })
    };
    let copy_address = {
        let address = config.contact_email.clone();
        let copied = copied.clone();
        Callback::from(move |_: MouseEvent| {
            track(AnalyticsEvent::ContactMethod(ContactMethod::Email));
            let address = address.clone();
            let copied = copied.clone();
            spawn_local(async move {
                if copy_email(&address).await == CopyOutcome::Copied {
                    copied.set(true);
                    let copied = copied.clone();
                    Timeout::new(COPIED_BADGE_MS, move || copied.set(false)).forget();
                }
            });
        })
    };

    let sending = form.is_sending();
    let invalid = |field: Field| errors.iter().any(|error| error.field() == Some(field)).to_string();
    let status = match form.status() {
        SubmitStatus::Success => html! {
            <p class="form-status success" role="status">{ i18n.t("contact.form.success") }</p>
        },
        SubmitStatus::Error => html! {
            <p class="form-status error" role="alert">{ i18n.t("contact.form.error") }</p>
        },
        SubmitStatus::Idle | SubmitStatus::Sending => html! {},
    };

    html! {
        <section id="contact" data-section="contact" tabindex="-1" class="section contact">
            <h2 class="section-title">{ i18n.t("contact.title") }</h2>
            <p class="section-subtitle">{ i18n.t("contact.subtitle") }</p>

            <div class="contact-methods">
                <button type="button" class="contact-method" onclick={open_whatsapp}>
                    <strong>{ i18n.t("contact.buttons.whatsapp") }</strong>
                    <span>{ i18n.t("contact.buttons.whatsappDesc") }</span>
                </button>
                <button type="button" class="contact-method" onclick={open_behance}>
                    <strong>{ i18n.t("contact.buttons.behance") }</strong>
                    <span>{ i18n.t("contact.buttons.behanceDesc") }</span>
                </button>
                <button type="button" class="contact-method" onclick={copy_address}>
                    <strong>{ i18n.t("contact.buttons.email") }</strong>
                    <span>{ config.contact_email.clone() }</span>
                    if *copied {
                        <span class="copied-badge" role="status">{ i18n.t("contact.buttons.emailCopied") }</span>
                    }
                </button>
            </div>

            <form class="contact-form" novalidate={true} {onsubmit}>
                <h3>{ i18n.t("contact.sendMessage") }</h3>
                <label for="contact-name">{ i18n.t("contact.form.name") }</label>
                <input
                    id="contact-name"
                    type="text"
                    autocomplete="name"
                    value={form.name.clone()}
                    disabled={sending}
                    aria-invalid={invalid(Field::Name)}
                    oninput={on_text(Field::Name)}
                />
                { field_error(&i18n, &errors, Field::Name) }

                <label for="contact-email">{ i18n.t("contact.form.email") }</label>
                <input
                    id="contact-email"
                    type="email"
                    autocomplete="email"
                    value={form.email.clone()}
                    disabled={sending}
                    aria-invalid={invalid(Field::Email)}
                    oninput={on_text(Field::Email)}
                />
                { field_error(&i18n, &errors, Field::Email) }

                <label for="contact-subject">{ i18n.t("contact.form.subject") }</label>
                <input
                    id="contact-subject"
                    type="text"
                    value={form.subject.clone()}
                    disabled={sending}
                    aria-invalid={invalid(Field::Subject)}
                    oninput={on_text(Field::Subject)}
                />
                { field_error(&i18n, &errors, Field::Subject) }

                <label for="contact-message">{ i18n.t("contact.form.message") }</label>
                <textarea
                    id="contact-message"
                    rows="5"
                    value={form.message.clone()}
                    disabled={sending}
                    aria-invalid={invalid(Field::Message)}
                    oninput={on_text(Field::Message)}
                />
                { field_error(&i18n, &errors, Field::Message) }

                <label class="privacy">
                    <input
                        type="checkbox"
                        checked={form.privacy}
                        disabled={sending}
                        onchange={on_privacy}
                    />
                    { i18n.t("contact.privacy") }
                </label>
                { field_error(&i18n, &errors, Field::Privacy) }

                <button type="submit" class="button primary" disabled={sending}>
                    { if sending { i18n.t("contact.form.sending") } else { i18n.t("contact.form.submit") } }
                </button>
                { status }
            </form>

            <aside class="quick-response">
                <h3>{ i18n.t("contact.quickResponse.title") }</h3>
                <p>{ i18n.t("contact.quickResponse.description") }</p>
            </aside>
        </section>
    }
}
