use web_sys::Element;
use yew::prelude::*;

use crate::utils::dom::{self, Listener};

fn is_visible(node: &NodeRef) -> bool {
    node.cast::<Element>()
        .map(|element| {
            let rect = element.get_bounding_client_rect();
            rect.top() < dom::viewport_height() * 0.9 && rect.bottom() > 0.0
        })
        .unwrap_or(false)
}

/// Latches to true the first time `node` scrolls into the viewport.
#[hook]
pub fn use_in_view(node: NodeRef) -> bool {
    let seen = use_state_eq(|| false);
    {
        let deps = *seen;
        let seen = seen.clone();
        use_effect_with_deps(
            move |already: &bool| {
                let listener = if *already {
                    None
                } else if is_visible(&node) {
                    seen.set(true);
                    None
                } else {
                    Listener::on_window_passive("scroll", move |_| {
                        if is_visible(&node) {
                            seen.set(true);
                        }
                    })
                };
                move || drop(listener)
            },
            deps,
        );
    }
    *seen
}
