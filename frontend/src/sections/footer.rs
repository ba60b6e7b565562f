use site_core::content::NAV_ITEMS;
use yew::prelude::*;

use crate::i18n::use_i18n;
use crate::navigation::use_navigation;

#[function_component(Footer)]
pub fn footer() -> Html {
    let i18n = use_i18n();
    let nav = use_navigation();
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="footer">
            <div class="footer-intro">
                <p class="footer-greeting">{ i18n.t("footer.greeting") }</p>
                <p>{ i18n.t("footer.intro") }</p>
            </div>
            <nav class="footer-links">
                { for NAV_ITEMS.iter().filter_map(|item| item.label_key.map(|key| (item.section, key))).map(|(section, key)| html! {
                    <button key={section} type="button" class="footer-link" onclick={nav.navigate_callback::<MouseEvent>(section)}>
                        { i18n.t(key) }
                    </button>
                }) }
            </nav>
            <p class="footer-rights">{ format!("© {year} Adam Zebilah. {}", i18n.t("footer.rights")) }</p>
        </footer>
    }
}
