//! Display formatting for server timestamps.
//!
//! TRADE-OFFS
//! ==========
//! Locale-aware date rendering only exists in the browser, so SSR passes the
//! raw ISO 8601 string through and hydration replaces it with the locale
//! form. Unparseable input is also passed through untouched rather than
//! rendered as `Invalid Date`.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render an ISO 8601 timestamp in the browser locale.
#[must_use]
pub fn format_timestamp(iso: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let parsed = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(iso));
        if parsed.get_time().is_nan() {
            return iso.to_owned();
        }
        String::from(parsed.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        iso.to_owned()
    }
}
