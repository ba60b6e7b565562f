//! Thin wrappers over the browser APIs the page needs.
//!
//! Everything here degrades to a no-op when the window or an element is
//! missing; callers never have to unwrap.

use site_core::{Fragment, ScrollRequest, SectionId, SectionLayout, SectionSpan};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Element, Event, EventTarget, FocusOptions, HtmlElement,
    ScrollBehavior, ScrollToOptions, Storage, Window,
};

pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Monotonic milliseconds, falling back to wall-clock time.
pub fn now() -> f64 {
    window()
        .and_then(|win| win.performance())
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now)
}

pub fn scroll_y() -> f64 {
    window().and_then(|win| win.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|win| win.inner_height().ok())
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0)
}

/// Largest reachable `scroll_y`, from the document height.
pub fn max_scroll_y() -> f64 {
    let height = window()
        .and_then(|win| win.document())
        .and_then(|document| document.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0);
    (height - viewport_height()).max(0.0)
}

pub fn element_by_id(id: &str) -> Option<Element> {
    window()?.document()?.get_element_by_id(id)
}

pub fn current_hash() -> String {
    window()
        .and_then(|win| win.location().hash().ok())
        .unwrap_or_default()
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|win| win.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

pub fn user_agent() -> String {
    window()
        .and_then(|win| win.navigator().user_agent().ok())
        .unwrap_or_default()
}

pub fn scroll_to(y: f64, smooth: bool) {
    let Some(win) = window() else { return };
    let options = ScrollToOptions::new();
    options.set_top(y.max(0.0));
    options.set_behavior(if smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Instant
    });
    win.scroll_to_with_scroll_to_options(&options);
}

/// Rewrites the URL fragment without adding a history entry.
pub fn replace_fragment(fragment: &Fragment) {
    let Some(win) = window() else { return };
    let url = match fragment {
        Fragment::Unchanged => return,
        Fragment::Section(id) => format!("#{id}"),
        Fragment::Empty => {
            let location = win.location();
            format!(
                "{}{}",
                location.pathname().unwrap_or_default(),
                location.search().unwrap_or_default()
            )
        }
    };
    let replaced = win
        .history()
        .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&url)));
    if let Err(err) = replaced {
        log::warn!("could not update location to {url}: {err:?}");
    }
}

/// Moves `aria-current` to the active section's anchor.
pub fn mark_current_section(active: Option<&SectionId>) {
    let Some(document) = window().and_then(|win| win.document()) else {
        return;
    };
    if let Ok(marked) = document.query_selector_all("[data-section][aria-current]") {
        for index in 0..marked.length() {
            if let Some(element) = marked.item(index).and_then(|node| node.dyn_into::<Element>().ok()) {
                let _ = element.remove_attribute("aria-current");
            }
        }
    }
    if let Some(element) = active.and_then(|id| document.get_element_by_id(id.as_str())) {
        let _ = element.set_attribute("aria-current", "true");
    }
}

/// Focuses a section anchor for assistive technology without jumping the viewport.
pub fn focus_section(id: &SectionId) {
    let Some(element) = element_by_id(id.as_str()).and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let options = FocusOptions::new();
    options.set_prevent_scroll(true);
    if let Err(err) = element.focus_with_options(&options) {
        log::debug!("could not focus #{id}: {err:?}");
    }
}

/// Performs a planned navigation scroll.
pub fn apply_scroll(request: &ScrollRequest) {
    scroll_to(request.target_y, !prefers_reduced_motion());
    replace_fragment(&request.fragment);
    mark_current_section(request.focus.as_ref());
    if let Some(id) = &request.focus {
        focus_section(id);
    }
}

pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = window().and_then(|win| win.document()).and_then(|doc| doc.body()) else {
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if let Err(err) = result {
        log::warn!("could not toggle body scrolling: {err:?}");
    }
}

pub fn open_external(url: &str) {
    let Some(win) = window() else { return };
    if let Err(err) = win.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer") {
        log::warn!("could not open {url}: {err:?}");
    }
}

pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// Reads section positions straight from the DOM.
pub struct DomLayout;

impl SectionLayout for DomLayout {
    fn span(&self, id: &SectionId) -> Option<SectionSpan> {
        let rect = element_by_id(id.as_str())?.get_bounding_client_rect();
        Some(SectionSpan::new(rect.top() + scroll_y(), rect.height()))
    }
}

/// An event listener that is removed when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        match target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                callback,
            }),
            Err(err) => {
                log::error!("failed to listen for {event}: {err:?}");
                None
            }
        }
    }

    /// Like [`Listener::new`] but tells the browser the handler never cancels the event.
    pub fn passive<F>(target: &EventTarget, event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        match target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                callback,
            }),
            Err(err) => {
                log::error!("failed to listen for {event}: {err:?}");
                None
            }
        }
    }

    /// Listens on the window.
    pub fn on_window<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let win = window()?;
        Self::new(&win, event, handler)
    }

    pub fn on_window_passive<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let win = window()?;
        Self::passive(&win, event, handler)
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove {} listener: {err:?}", self.event);
        }
    }
}

/// A single pending `requestAnimationFrame` callback, cancelled when dropped.
pub struct AnimationFrame {
    id: i32,
    _callback: Closure<dyn FnMut(f64)>,
}

impl AnimationFrame {
    pub fn request<F>(callback: F) -> Option<Self>
    where
        F: FnOnce(f64) + 'static,
    {
        let callback = Closure::once(callback);
        let id = window()?
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|err| log::error!("requestAnimationFrame failed: {err:?}"))
            .ok()?;
        Some(Self {
            id,
            _callback: callback,
        })
    }
}

impl Drop for AnimationFrame {
    fn drop(&mut self) {
        if let Some(win) = window() {
            let _ = win.cancel_animation_frame(self.id);
        }
    }
}
