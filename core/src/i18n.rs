use serde_json::Value;
use thiserror::Error;

/// Key under which the chosen language is remembered in local storage.
pub const STORAGE_KEY: &str = "portfolio-language";

const EN: &str = include_str!("../locales/en.json");
const DE: &str = include_str!("../locales/de.json");

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("translation table for {language} is malformed: {source}")]
    Malformed {
        language: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    English,
    German,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::German => "de",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::English),
            "de" => Some(Language::German),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::English => Language::German,
            Language::German => Language::English,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Translations {
    en: Value,
    de: Value,
}

impl Translations {
    /// Tables compiled into the binary.
    pub fn embedded() -> Result<Self, I18nError> {
        Self::from_json(EN, DE)
    }

    /// Tables without any entry; every lookup falls back to its key.
    pub fn empty() -> Self {
        Self {
            en: Value::Null,
            de: Value::Null,
        }
    }

    pub fn from_json(en: &str, de: &str) -> Result<Self, I18nError> {
        let parse = |language: &'static str, raw: &str| {
            serde_json::from_str(raw).map_err(|source| I18nError::Malformed { language, source })
        };
        Ok(Self {
            en: parse("en", en)?,
            de: parse("de", de)?,
        })
    }

    /// Looks up a dotted key (`contact.form.name`). Missing keys fall back to
    /// the key itself.
    pub fn translate(&self, language: Language, key: &str) -> String {
        match self.lookup(language, key) {
            Some(text) => text.to_string(),
            None => {
                log::debug!("missing {} translation for `{key}`", language.code());
                key.to_string()
            }
        }
    }

    pub fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        let table = match language {
            Language::English => &self.en,
            Language::German => &self.de,
        };
        key.split('.')
            .try_fold(table, |node, part| node.get(part))
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_tables_parse() {
        let translations = Translations::embedded().unwrap();
        assert_eq!(
            translations.translate(Language::English, "nav.contact"),
            "Contact"
        );
        assert_eq!(
            translations.translate(Language::German, "nav.contact"),
            "Kontakt"
        );
    }

    #[test]
    fn missing_keys_fall_back_to_the_key() {
        let translations = Translations::embedded().unwrap();
        assert_eq!(
            translations.translate(Language::German, "nav.nowhere"),
            "nav.nowhere"
        );
        // Non-leaf nodes are not text.
        assert_eq!(translations.translate(Language::English, "nav"), "nav");
    }

    #[test]
    fn both_tables_share_their_keys() {
        fn leaves(prefix: &str, value: &Value, out: &mut Vec<String>) {
            match value {
                Value::Object(map) => {
                    for (key, child) in map {
                        let path = if prefix.is_empty() {
                            key.clone()
                        } else {
                            format!("{prefix}.{key}")
                        };
                        leaves(&path, child, out);
                    }
                }
                _ => out.push(prefix.to_string()),
            }
        }
        let translations = Translations::embedded().unwrap();
        let (mut en, mut de) = (Vec::new(), Vec::new());
        leaves("", &translations.en, &mut en);
        leaves("", &translations.de, &mut de);
        en.sort();
        de.sort();
        assert_eq!(en, de);
    }

    #[test]
    fn empty_tables_echo_keys() {
        let translations = Translations::empty();
        assert_eq!(translations.translate(Language::English, "hero.title"), "hero.title");
    }

    #[test]
    fn malformed_table_names_the_language() {
        let err = Translations::from_json("{}", "{").unwrap_err();
        assert!(err.to_string().contains("de"));
    }

    #[test]
    fn language_codes_round_trip() {
        assert_eq!(Language::from_code("DE"), Some(Language::German));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::English.toggled(), Language::German);
    }
}
