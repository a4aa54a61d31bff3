//! Collation backed by `Intl.Collator` in the browser.
use deals_core::Collator;
#[cfg(not(target_arch = "wasm32"))]
use deals_core::FoldCollator;
use std::cmp::Ordering;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Compares strings the way `String.prototype.localeCompare` does for the
/// viewer's locale. Host builds fall back to [`FoldCollator`].
pub struct PageCollator {
    #[cfg(target_arch = "wasm32")]
    inner: js_sys::Intl::Collator,
}

impl PageCollator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            #[cfg(target_arch = "wasm32")]
            inner: js_sys::Intl::Collator::new(&js_sys::Array::new(), &js_sys::Object::new()),
        }
    }
}

impl Default for PageCollator {
    fn default() -> Self {
        Self::new()
    }
}

impl Collator for PageCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        #[cfg(target_arch = "wasm32")]
        {
            self.inner
                .compare()
                .call2(
                    &JsValue::UNDEFINED,
                    &JsValue::from_str(a),
                    &JsValue::from_str(b),
                )
                .ok()
                .and_then(|v| v.as_f64())
                .and_then(|n| n.partial_cmp(&0.0))
                .unwrap_or(Ordering::Equal)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            FoldCollator.compare(a, b)
        }
    }
}
