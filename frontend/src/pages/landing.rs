use std::rc::Rc;

use site_core::analytics::AnalyticsEvent;
use site_core::SiteConfig;
use yew::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::loading_screen::LoadingScreen;
use crate::components::navbar::Navbar;
use crate::config;
use crate::i18n::{use_i18n, I18nProvider};
use crate::navigation::NavigationProvider;
use crate::sections::about::About;
use crate::sections::contact::Contact;
use crate::sections::faq::Faq;
use crate::sections::footer::Footer;
use crate::sections::hero::Hero;
use crate::sections::process::Process;
use crate::sections::projects::Projects;
use crate::sections::recent_work::RecentWork;
use crate::sections::reviews::Reviews;
use crate::sections::services::Services;
use crate::utils::analytics::track;

#[function_component(App)]
pub fn app() -> Html {
    let config: Rc<SiteConfig> = use_memo(|_| config::load(), ());
    html! {
        <ContextProvider<Rc<SiteConfig>> context={config}>
            <I18nProvider>
                <Landing />
            </I18nProvider>
        </ContextProvider<Rc<SiteConfig>>>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let i18n = use_i18n();
    let loading = use_state(|| true);

    {
        use_effect_with_deps(
            move |_| {
                track(AnalyticsEvent::PageView {
                    page: "home".to_string(),
                });
                || ()
            },
            (),
        );
    }

    let on_loaded = {
        let loading = loading.clone();
        Callback::from(move |_: ()| loading.set(false))
    };

    html! {
        <NavigationProvider ready={!*loading}>
            <a class="skip-link" href="#main-content">{ i18n.t("common.skipToContent") }</a>
            <Navbar />
            <main id="main-content" tabindex="-1">
                <Hero />
                <Projects />
                <About />
                <RecentWork />
                <Process />
                <Services />
                <Reviews />
                <Faq />
                <Contact />
            </main>
            <Footer />
            <BackToTop />
            if *loading {
                <LoadingScreen on_complete={on_loaded} />
            }
        </NavigationProvider>
    }
}
