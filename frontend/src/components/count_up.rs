use gloo_timers::callback::Interval;
use site_core::counter::CountUp;
use yew::prelude::*;

use super::FRAME_MS;
use crate::utils::dom;

#[derive(Properties, PartialEq)]
pub struct CountUpProps {
    pub to: u32,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or_default]
    pub delay_ms: f64,
    /// The count starts the first time this is true.
    pub active: bool,
}

#[function_component(CountUpValue)]
pub fn count_up_value(props: &CountUpProps) -> Html {
    let value = use_state_eq(|| 0u32);
    let finished = use_state_eq(|| false);

    {
        let deps = props.active && !*finished;
        let value = value.clone();
        let finished = finished.clone();
        let counter = CountUp::new(props.to).with_delay(props.delay_ms);
        use_effect_with_deps(
            move |running: &bool| {
                let interval = if !*running {
                    None
                } else if dom::prefers_reduced_motion() {
                    value.set(counter.to);
                    finished.set(true);
                    None
                } else {
                    let started = dom::now();
                    Some(Interval::new(FRAME_MS, move || {
                        let elapsed = dom::now() - started;
                        value.set(counter.value_at(elapsed));
                        if counter.is_finished(elapsed) {
                            finished.set(true);
                        }
                    }))
                };
                move || drop(interval)
            },
            deps,
        );
    }

    html! {
        <span class="count-up">{ format!("{}{}", *value, props.suffix) }</span>
    }
}
