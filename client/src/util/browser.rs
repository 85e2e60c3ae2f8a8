//! Window-level browser helpers.
//!
//! Every function is a no-op (or returns an empty/false value) outside the
//! `hydrate` build, so components can call them unconditionally from event
//! handlers that only ever fire in the browser.

/// Open `url` in a new browsing context. `features` is the `window.open`
/// feature string, e.g. a popup size. Returns whether a window was opened.
pub fn open_in_new_context(url: &str, features: Option<&str>) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let opened = match features {
            Some(features) => window.open_with_url_and_target_and_features(url, "_blank", features),
            None => window.open_with_url_and_target(url, "_blank"),
        };
        match opened {
            Ok(Some(_)) => true,
            Ok(None) => {
                log::warn!("window.open blocked for {url}");
                false
            }
            Err(e) => {
                log::warn!("window.open failed for {url}: {e:?}");
                false
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, features);
        false
    }
}

/// Current local time formatted for the `en-MY` locale, as sent with inquiries.
pub fn inquiry_date() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_locale_string("en-MY", &wasm_bindgen::JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Lock or release page scrolling while a fullscreen overlay is showing.
pub fn set_scroll_locked(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let value = if locked { "hidden" } else { "" };
            if let Err(e) = body.style().set_property("overflow", value) {
                log::warn!("could not set body overflow: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}
