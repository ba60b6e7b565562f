use site_core::chrome::{MenuState, NavbarMetrics};
use site_core::content::NAV_ITEMS;
use web_sys::KeyboardEvent;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::language_toggle::LanguageToggle;
use super::mobile_menu::MobileMenu;
use crate::i18n::use_i18n;
use crate::navigation::use_navigation;
use crate::utils::dom::{self, Listener};

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let i18n = use_i18n();
    let nav = use_navigation();
    // Clamped to the shrink distance so the navbar stops re-rendering once it is compact.
    let scroll_y = use_state_eq(|| dom::scroll_y().min(100.0));
    let menu = use_state(MenuState::default);

    // Shrink on scroll
    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(
            move |_| {
                scroll_y.set(dom::scroll_y().min(100.0));
                let listener = Listener::on_window_passive("scroll", move |_| {
                    scroll_y.set(dom::scroll_y().min(100.0));
                });
                move || drop(listener)
            },
            (),
        );
    }

    // While the menu is open: Escape closes it and the page behind does not scroll.
    {
        let deps = menu.is_open();
        let menu = menu.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let listener = open.then(|| {
                    dom::set_body_scroll_locked(true);
                    let snapshot = *menu;
                    Listener::on_window("keydown", move |event| {
                        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        let mut next = snapshot;
                        if next.on_key(&event.key()) {
                            menu.set(next);
                        }
                    })
                });
                let locked = *open;
                move || {
                    drop(listener);
                    if locked {
                        dom::set_body_scroll_locked(false);
                    }
                }
            },
            deps,
        );
    }

    let metrics = NavbarMetrics::at(*scroll_y);

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *menu;
            next.toggle();
            menu.set(next);
        })
    };
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: ()| {
            let mut next = *menu;
            next.close();
            menu.set(next);
        })
    };

    let to_top = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| nav.to_top())
    };

    let open = menu.is_open();

    html! {
        <>
            <header class="navbar" style={metrics.style()}>
                <button
                    type="button"
                    class="navbar-logo"
                    style={format!("transform: scale({:.2});", metrics.logo_scale)}
                    onclick={to_top}
                >
                    {"Adam Zebilah"}
                </button>
                <nav class="navbar-links" aria-label="Primary">
                    { for NAV_ITEMS.iter().map(|item| {
                        let active = nav.is_highlighted(item.section);
                        let label = match item.label_key {
                            Some(key) => html! { { i18n.t(key) } },
                            None => html! { <span class="home-icon" aria-label={i18n.t("nav.home")}>{"⌂"}</span> },
                        };
                        html! {
                            <button
                                key={item.section}
                                type="button"
                                class={classes!("navbar-link", active.then_some("active"))}
                                aria-current={active.then_some("page")}
                                onclick={nav.navigate_callback::<MouseEvent>(item.section)}
                            >
                                { label }
                            </button>
                        }
                    }) }
                </nav>
                <div class="navbar-actions">
                    <LanguageToggle />
                    <button
                        type="button"
                        class="navbar-cta"
                        onclick={nav.navigate_callback::<MouseEvent>("contact")}
                    >
                        { i18n.t("common.bookCall") }
                    </button>
                    <button
                        type="button"
                        class="menu-toggle"
                        aria-expanded={open.to_string()}
                        aria-controls="mobile-menu"
                        aria-label={if open { i18n.t("common.closeMenu") } else { i18n.t("common.openMenu") }}
                        onclick={toggle_menu}
                    >
                        { if open { "×" } else { "☰" } }
                    </button>
                </div>
            </header>
            <MobileMenu {open} on_close={close_menu} />
        </>
    }
}
