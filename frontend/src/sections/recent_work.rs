use std::rc::Rc;

use site_core::analytics::AnalyticsEvent;
use site_core::carousel::SwipeTracker;
use site_core::content::PROJECTS;
use site_core::SiteConfig;
use yew::prelude::*;

use crate::components::carousel::{on_event, use_carousel, CarouselAction};
use crate::i18n::use_i18n;
use crate::utils::analytics::track;

fn first_touch_x(event: &TouchEvent) -> Option<f64> {
    event.touches().get(0).map(|touch| touch.client_x() as f64)
}

#[function_component(RecentWork)]
pub fn recent_work() -> Html {
    let i18n = use_i18n();
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let carousel = use_carousel(PROJECTS.len(), config.recent_work_interval_ms);
    let swipe = use_mut_ref(|| SwipeTracker::new(config.swipe_threshold));

    let ontouchstart = {
        let swipe = swipe.clone();
        Callback::from(move |event: TouchEvent| {
            if let Some(x) = first_touch_x(&event) {
                swipe.borrow_mut().start(x);
            }
        })
    };
    let ontouchmove = {
        let swipe = swipe.clone();
        Callback::from(move |event: TouchEvent| {
            if let Some(x) = first_touch_x(&event) {
                swipe.borrow_mut().move_to(x);
            }
        })
    };
    let ontouchend = {
        let swipe = swipe.clone();
        let carousel = carousel.clone();
        Callback::from(move |_: TouchEvent| {
            let direction = swipe.borrow_mut().finish();
            if let Some(direction) = direction {
                carousel.dispatch(CarouselAction::Swipe(direction));
            }
        })
    };

    let index = carousel.0.index();
    let track_style = format!("transform: translateX(-{}%);", index * 100);

    html! {
        <section id="recent-work" data-section="recent-work" tabindex="-1" class="section recent-work">
            <h2 class="section-title">{ i18n.t("recentWork.title") }</h2>
            <p class="section-subtitle">{ i18n.t("recentWork.subtitle") }</p>
            <div
                class="carousel"
                aria-roledescription="carousel"
                onmouseenter={on_event(&carousel, || CarouselAction::Hover(true))}
                onmouseleave={on_event(&carousel, || CarouselAction::Hover(false))}
                onfocusin={on_event(&carousel, || CarouselAction::Focus(true))}
                onfocusout={on_event(&carousel, || CarouselAction::Focus(false))}
                {ontouchstart}
                {ontouchmove}
                {ontouchend}
            >
                <div class="carousel-track" style={track_style}>
                    { for PROJECTS.iter().enumerate().map(|(position, project)| {
                        let project = *project;
                        let onclick = Callback::from(move |_: MouseEvent| {
                            track(AnalyticsEvent::ProjectView {
                                project_id: project.id,
                                project_title: project.title.to_string(),
                            });
                        });
                        html! {
                            <article
                                key={project.id}
                                class="carousel-slide"
                                aria-hidden={(position != index).to_string()}
                            >
                                <a href={project.href} target="_blank" rel="noopener noreferrer" {onclick}>
                                    <img src={project.image_color} alt={project.title} loading="lazy" />
                                </a>
                                <h3>{ project.title }</h3>
                                <p>{ project.description }</p>
                            </article>
                        }
                    }) }
                </div>
                <button
                    type="button"
                    class="carousel-arrow prev"
                    aria-label={i18n.t("common.previousProject")}
                    onclick={on_event(&carousel, || CarouselAction::Prev)}
                >
                    {"‹"}
                </button>
                <button
                    type="button"
                    class="carousel-arrow next"
                    aria-label={i18n.t("common.nextProject")}
                    onclick={on_event(&carousel, || CarouselAction::Next)}
                >
                    {"›"}
                </button>
                <div class="carousel-dots">
                    { for (0..carousel.0.len()).map(|dot| {
                        let onclick = {
                            let carousel = carousel.clone();
                            Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::GoTo(dot)))
                        };
                        html! {
                            <button
                                key={dot}
                                type="button"
                                class={classes!("carousel-dot", (dot == index).then_some("active"))}
                                aria-label={format!("{} {}", i18n.t("common.goToSlide"), dot + 1)}
                                aria-current={(dot == index).then_some("true")}
                                {onclick}
                            />
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
