use std::rc::Rc;

use site_core::i18n::{Language, Translations, STORAGE_KEY};
use yew::prelude::*;

use crate::utils::dom;

/// Current language plus the tables, shared through context.
#[derive(Clone)]
pub struct I18n {
    language: Language,
    translations: Rc<Translations>,
    set_language: Callback<Language>,
}

impl PartialEq for I18n {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language
            && Rc::ptr_eq(&self.translations, &other.translations)
            && self.set_language == other.set_language
    }
}

impl I18n {
    pub fn t(&self, key: &str) -> String {
        self.translations.translate(self.language, key)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&self, language: Language) {
        self.set_language.emit(language);
    }
}

#[hook]
pub fn use_i18n() -> I18n {
    use_context::<I18n>().unwrap_or_else(|| {
        log::warn!("I18nProvider missing, rendering translation keys");
        I18n {
            language: Language::default(),
            translations: Rc::new(Translations::empty()),
            set_language: Callback::noop(),
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct I18nProviderProps {
    pub children: Children,
}

/// Every visit starts in English; a switch is remembered under
/// [`STORAGE_KEY`] but never restored on load.
#[function_component(I18nProvider)]
pub fn i18n_provider(props: &I18nProviderProps) -> Html {
    let translations = use_memo(
        |_| {
            Translations::embedded().unwrap_or_else(|err| {
                log::error!("{err}");
                Translations::empty()
            })
        },
        (),
    );
    let language = use_state(Language::default);

    // Keep <html lang> in step with the visible copy.
    {
        use_effect_with_deps(
            move |language: &Language| {
                if let Some(root) = dom::window()
                    .and_then(|win| win.document())
                    .and_then(|doc| doc.document_element())
                {
                    let _ = root.set_attribute("lang", language.code());
                }
                || ()
            },
            *language,
        );
    }

    let set_language = {
        let language = language.clone();
        Callback::from(move |next: Language| {
            if let Some(storage) = dom::local_storage() {
                if let Err(err) = storage.set_item(STORAGE_KEY, next.code()) {
                    log::warn!("could not remember language: {err:?}");
                }
            }
            language.set(next);
        })
    };

    let context = I18n {
        language: *language,
        translations,
        set_language,
    };

    html! {
        <ContextProvider<I18n> context={context}>
            { for props.children.iter() }
        </ContextProvider<I18n>>
    }
}
