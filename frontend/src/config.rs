use site_core::SiteConfig;

/// Element holding optional JSON overrides, e.g.
/// `<script id="site-config" type="application/json">{"headerOffset": 96}</script>`.
const CONFIG_ELEMENT_ID: &str = "site-config";

/// Reads the page's config overrides. Anything unreadable falls back to the defaults.
pub fn load() -> SiteConfig {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content())
        .unwrap_or_default();
    match SiteConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::error!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
            SiteConfig::default()
        }
    }
}
