use std::rc::Rc;

use gloo_timers::callback::Interval;
use site_core::content::{Logo, LOGOS};
use site_core::marquee::Marquee;
use yew::prelude::*;

use super::FRAME_MS;
use crate::utils::dom;

enum MarqueeAction {
    Step,
    Hover(bool),
}

#[derive(PartialEq)]
struct MarqueeState(Marquee);

impl Reducible for MarqueeState {
    type Action = MarqueeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut marquee = self.0;
        match action {
            MarqueeAction::Step => marquee.step(),
            MarqueeAction::Hover(hovered) => marquee.set_hovered(hovered),
        }
        Rc::new(Self(marquee))
    }
}

fn logo(logo: &Logo, copy: usize) -> Html {
    html! {
        <div class="logo-item" key={format!("{}-{}", logo.name, copy)} aria-hidden={(copy > 0).to_string()}>
            <img src={logo.src} alt={logo.name} loading="lazy" />
        </div>
    }
}

#[function_component(LogoSlider)]
pub fn logo_slider() -> Html {
    let marquee = use_reducer(|| {
        let mut marquee = Marquee::new(LOGOS.len());
        marquee.set_reduced_motion(dom::prefers_reduced_motion());
        MarqueeState(marquee)
    });

    {
        let dispatcher = marquee.dispatcher();
        use_effect_with_deps(
            move |running: &bool| {
                let interval = running
                    .then(|| Interval::new(FRAME_MS, move || dispatcher.dispatch(MarqueeAction::Step)));
                move || drop(interval)
            },
            marquee.0.is_running(),
        );
    }

    let onmouseenter = {
        let marquee = marquee.clone();
        Callback::from(move |_: MouseEvent| marquee.dispatch(MarqueeAction::Hover(true)))
    };
    let onmouseleave = {
        let marquee = marquee.clone();
        Callback::from(move |_: MouseEvent| marquee.dispatch(MarqueeAction::Hover(false)))
    };

    html! {
        <div class="logo-slider" {onmouseenter} {onmouseleave}>
            <div class="logo-track" style={marquee.0.transform()}>
                { for (0..2).flat_map(|copy| LOGOS.iter().map(move |item| logo(item, copy))) }
            </div>
        </div>
    }
}
