use std::rc::Rc;

use site_core::carousel::positions;
use site_core::content::{Review, REVIEWS, REVIEWS_PER_VIEW};
use site_core::SiteConfig;
use yew::prelude::*;

use super::stats::Stats;
use crate::components::carousel::{on_event, use_carousel, CarouselAction};
use crate::i18n::use_i18n;

fn review_card(review: &Review) -> Html {
    html! {
        <figure key={review.id} class="review-card">
            <div class="review-rating" aria-label={format!("{}/5", review.rating)}>
                { ("★".repeat(review.rating as usize)) }
            </div>
            <blockquote>{ review.quote }</blockquote>
            <figcaption>
                <img src={review.avatar} alt="" aria-hidden="true" loading="lazy" />
                <span class="review-name">{ review.name }</span>
                <span class="review-role">{ review.role }</span>
            </figcaption>
        </figure>
    }
}

#[function_component(Reviews)]
pub fn reviews() -> Html {
    let i18n = use_i18n();
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let carousel = use_carousel(
        positions(REVIEWS.len(), REVIEWS_PER_VIEW),
        config.reviews_interval_ms,
    );

    let index = carousel.0.index();
    let step = 100.0 / REVIEWS_PER_VIEW as f64;
    let track_style = format!("transform: translateX(-{:.4}%);", index as f64 * step);
    let paged = carousel.0.len() > 1;

    html! {
        <section id="testimonials" data-section="testimonials" tabindex="-1" class="section testimonials">
            <h2 class="section-title">{ i18n.t("testimonials.title") }</h2>
            <p class="section-subtitle">{ i18n.t("testimonials.subtitle") }</p>
            <div
                class="review-carousel"
                onmouseenter={on_event(&carousel, || CarouselAction::Hover(true))}
                onmouseleave={on_event(&carousel, || CarouselAction::Hover(false))}
                onfocusin={on_event(&carousel, || CarouselAction::Focus(true))}
                onfocusout={on_event(&carousel, || CarouselAction::Focus(false))}
            >
                <div class="review-track" style={track_style}>
                    { for REVIEWS.iter().map(review_card) }
                </div>
                if paged {
                    <button
                        type="button"
                        class="carousel-arrow prev"
                        aria-label={i18n.t("common.previousReviews")}
                        onclick={on_event(&carousel, || CarouselAction::Prev)}
                    >
                        {"‹"}
                    </button>
                    <button
                        type="button"
                        class="carousel-arrow next"
                        aria-label={i18n.t("common.nextReviews")}
                        onclick={on_event(&carousel, || CarouselAction::Next)}
                    >
                        {"›"}
                    </button>
                }
            </div>
            <Stats />
        </section>
    }
}
