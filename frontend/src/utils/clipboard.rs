use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement, Window};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// Copying was impossible, so the mail client was opened instead.
    OpenedMailClient,
}

/// Copies an email address, trying the async Clipboard API, then the
/// `execCommand` textarea trick, then a `mailto:` link.
pub async fn copy_email(address: &str) -> CopyOutcome {
    let Some(win) = web_sys::window() else {
        return CopyOutcome::OpenedMailClient;
    };

    if win.is_secure_context() {
        if let Some(promise) = clipboard_write(&win, address) {
            return match JsFuture::from(promise).await {
                Ok(_) => CopyOutcome::Copied,
                Err(err) => {
                    log::warn!("clipboard write rejected: {err:?}");
                    open_mail_client(&win, address);
                    CopyOutcome::OpenedMailClient
                }
            };
        }
    }

    if legacy_copy(&win, address) {
        CopyOutcome::Copied
    } else {
        open_mail_client(&win, address);
        CopyOutcome::OpenedMailClient
    }
}

fn clipboard_write(win: &Window, text: &str) -> Option<Promise> {
    let navigator: JsValue = win.navigator().into();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard")).ok()?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return None;
    }
    let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .ok()?
        .dyn_into::<Promise>()
        .ok()
}

fn legacy_copy(win: &Window, text: &str) -> bool {
    let Some(document) = win.document() else {
        return false;
    };
    let Some(body) = document.body() else {
        return false;
    };
    let textarea = match document
        .create_element("textarea")
        .map_err(|err| format!("{err:?}"))
        .and_then(|el| {
            el.dyn_into::<HtmlTextAreaElement>()
                .map_err(|_| "created element is not a textarea".to_string())
        }) {
        Ok(textarea) => textarea,
        Err(err) => {
            log::warn!("fallback copy unavailable: {err}");
            return false;
        }
    };
    textarea.set_value(text);
    let style = textarea.style();
    let _ = style.set_property("position", "fixed");
    let _ = style.set_property("left", "-9999px");
    let _ = style.set_property("opacity", "0");
    if body.append_child(&textarea).is_err() {
        return false;
    }
    let _ = textarea.focus();
    textarea.select();
    let copied = document
        .dyn_ref::<HtmlDocument>()
        .map(|html| html.exec_command("copy").unwrap_or(false))
        .unwrap_or(false);
    let _ = body.remove_child(&textarea);
    if !copied {
        log::warn!("execCommand(\"copy\") did not copy");
    }
    copied
}

fn open_mail_client(win: &Window, address: &str) {
    if let Err(err) = win.location().set_href(&format!("mailto:{address}")) {
        log::error!("could not open mail client: {err:?}");
    }
}
