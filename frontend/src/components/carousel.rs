use std::rc::Rc;

use gloo_timers::callback::Interval;
use site_core::carousel::{Carousel, SwipeDirection};
use yew::prelude::*;

use crate::utils::dom;

pub enum CarouselAction {
    Next,
    Prev,
    GoTo(usize),
    Tick,
    Hover(bool),
    Focus(bool),
    Swipe(SwipeDirection),
}

#[derive(Clone, PartialEq)]
pub struct CarouselState(pub Carousel);

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut carousel = self.0.clone();
        match action {
            CarouselAction::Next => carousel.next(),
            CarouselAction::Prev => carousel.prev(),
            CarouselAction::GoTo(index) => carousel.go_to(index),
            CarouselAction::Tick => {
                if !carousel.tick() {
                    return self;
                }
            }
            CarouselAction::Hover(hovered) => carousel.set_hovered(hovered),
            CarouselAction::Focus(focused) => carousel.set_focused(focused),
            CarouselAction::Swipe(direction) => direction.apply(&mut carousel),
        }
        if carousel == self.0 {
            self
        } else {
            Rc::new(Self(carousel))
        }
    }
}

/// Carousel state with autoplay. The interval only exists while autoplay is
/// active, so resuming after hover or focus starts a fresh period.
#[hook]
pub fn use_carousel(positions: usize, interval_ms: u32) -> UseReducerHandle<CarouselState> {
    let carousel = use_reducer(|| {
        CarouselState(Carousel::new(positions).with_reduced_motion(dom::prefers_reduced_motion()))
    });

    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |autoplay: &bool| {
                let interval = autoplay.then(|| {
                    Interval::new(interval_ms, move || dispatcher.dispatch(CarouselAction::Tick))
                });
                move || drop(interval)
            },
            carousel.0.autoplay_active(),
        );
    }

    carousel
}

/// Callback that dispatches a fixed action whatever event triggered it.
pub fn on_event<E: 'static>(
    carousel: &UseReducerHandle<CarouselState>,
    action: fn() -> CarouselAction,
) -> Callback<E> {
    let dispatcher = carousel.dispatcher();
    Callback::from(move |_: E| dispatcher.dispatch(action()))
}
