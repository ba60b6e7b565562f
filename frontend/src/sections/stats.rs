use std::rc::Rc;

use site_core::analytics::AnalyticsEvent;
use site_core::content::{STATS, STAT_STAGGER_MS};
use site_core::SiteConfig;
use yew::prelude::*;

use crate::components::count_up::CountUpValue;
use crate::components::in_view::use_in_view;
use crate::i18n::use_i18n;
use crate::utils::analytics::track;
use crate::utils::dom;

#[function_component(Stats)]
pub fn stats() -> Html {
    let i18n = use_i18n();
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let node = use_node_ref();
    let visible = use_in_view(node.clone());

    let open_behance = {
        let url = config.behance_url.clone();
        Callback::from(move |_: MouseEvent| {
            track(AnalyticsEvent::ButtonClick {
                button: "behance".to_string(),
                location: "stats".to_string(),
            });
            dom::open_external(&url);
        })
    };

    html! {
        <div class="stats" ref={node}>
            { for STATS.iter().enumerate().map(|(index, stat)| html! {
                <div key={stat.label_key} class="stat-card">
                    <CountUpValue
                        to={stat.value}
                        suffix={stat.suffix}
                        delay_ms={index as f64 * STAT_STAGGER_MS}
                        active={visible}
                    />
                    <span class="stat-label">{ i18n.t(stat.label_key) }</span>
                </div>
            }) }
            <button type="button" class="button secondary" onclick={open_behance}>
                { i18n.t("stats.behanceButton") }
            </button>
        </div>
    }
}
