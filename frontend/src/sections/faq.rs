use gloo_timers::callback::Timeout;
use site_core::chrome::Accordion;
use site_core::content::FAQ_KEYS;
use yew::prelude::*;

use crate::i18n::use_i18n;
use crate::utils::dom::{self, Listener};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    id: AttrValue,
    question: AttrValue,
    answer: AttrValue,
    open: bool,
    /// Fired with `true` when the item should open regardless of its state.
    on_toggle: Callback<bool>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    // Open when the URL points straight at this question.
    {
        let id = props.id.clone();
        let on_toggle = props.on_toggle.clone();
        use_effect_with_deps(
            move |_| {
                let check_hash = move || {
                    if dom::current_hash() == format!("#{id}") {
                        on_toggle.emit(true);
                        let id = id.clone();
                        // Let the answer expand before scrolling to it.
                        Timeout::new(100, move || {
                            if let Some(element) = dom::element_by_id(&id) {
                                element.scroll_into_view_with_bool(true);
                            }
                        })
                        .forget();
                    }
                };
                check_hash();
                let listener = Listener::on_window("hashchange", move |_| check_hash());
                move || drop(listener)
            },
            (),
        );
    }

    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(false);
        })
    };
    let answer_id = format!("{}-answer", props.id);

    html! {
        <div id={props.id.clone()} class={classes!("faq-item", props.open.then_some("open"))}>
            <button
                type="button"
                class="faq-question"
                aria-expanded={props.open.to_string()}
                aria-controls={answer_id.clone()}
                onclick={toggle}
            >
                <span class="question-text">{ props.question.clone() }</span>
                <span class="toggle-icon" aria-hidden="true">{ if props.open { "−" } else { "+" } }</span>
            </button>
            <div id={answer_id} class="faq-answer" hidden={!props.open}>
                <p>{ props.answer.clone() }</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let i18n = use_i18n();
    let accordion = use_state(Accordion::default);

    html! {
        <div id="faq" class="faq">
            <h2 class="section-title">{ i18n.t("faq.title") }</h2>
            <p class="section-subtitle">{ i18n.t("faq.subtitle") }</p>
            <div class="faq-list">
                { for FAQ_KEYS.iter().enumerate().map(|(index, key)| {
                    let on_toggle = {
                        let accordion = accordion.clone();
                        Callback::from(move |force_open: bool| {
                            let mut next = *accordion;
                            if !(force_open && next.is_open(index)) {
                                next.toggle(index);
                            }
                            accordion.set(next);
                        })
                    };
                    html! {
                        <FaqItem
                            key={*key}
                            id={key.replace('.', "-")}
                            question={i18n.t(&format!("{key}.question"))}
                            answer={i18n.t(&format!("{key}.answer"))}
                            open={accordion.is_open(index)}
                            {on_toggle}
                        />
                    }
                }) }
            </div>
        </div>
    }
}
