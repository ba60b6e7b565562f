use site_core::content::NAV_ITEMS;
use yew::prelude::*;

use super::language_toggle::LanguageToggle;
use crate::i18n::use_i18n;
use crate::navigation::use_navigation;

#[derive(Properties, PartialEq)]
pub struct MobileMenuProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    let i18n = use_i18n();
    let nav = use_navigation();

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div
            id="mobile-menu"
            class={classes!("mobile-menu", props.open.then_some("open"))}
            aria-hidden={(!props.open).to_string()}
        >
            <div class="mobile-menu-backdrop" onclick={close.clone()}></div>
            <nav class="mobile-menu-panel" aria-label={i18n.t("common.menu")}>
                <button type="button" class="mobile-menu-close" aria-label={i18n.t("common.closeMenu")} onclick={close}>
                    {"×"}
                </button>
                <ul>
                    { for NAV_ITEMS.iter().map(|item| {
                        let onclick = {
                            let nav = nav.clone();
                            let on_close = props.on_close.clone();
                            let section = item.section;
                            Callback::from(move |_: MouseEvent| {
                                on_close.emit(());
                                nav.navigate(section);
                            })
                        };
                        let label = item.label_key.map(|key| i18n.t(key)).unwrap_or_else(|| i18n.t("nav.home"));
                        html! {
                            <li key={item.section}>
                                <button
                                    type="button"
                                    class={classes!("mobile-menu-link", nav.is_highlighted(item.section).then_some("active"))}
                                    {onclick}
                                >
                                    { label }
                                </button>
                            </li>
                        }
                    }) }
                </ul>
                <LanguageToggle />
            </nav>
        </div>
    }
}
