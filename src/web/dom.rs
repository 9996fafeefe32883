//! Small helpers over the host page's DOM

use leptos::document;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::error::SiteError;

pub fn element_by_id(id: &str) -> Option<Element> {
  document().get_element_by_id(id)
}

pub fn html_element_by_id(id: &str) -> Option<HtmlElement> {
  element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

/// Stop (or restore) page scrolling behind the modal.
pub fn set_scroll_locked(locked: bool) -> Result<(), SiteError> {
  let body = document()
    .body()
    .ok_or_else(|| SiteError::Dom("document has no body".to_string()))?;
  let style = body.style();
  let result = if locked {
    style.set_property("overflow", "hidden")
  } else {
    style.remove_property("overflow").map(|_| ())
  };
  result.map_err(|e| SiteError::Dom(format!("{:?}", e)))
}

pub fn alert(message: &str) {
  if let Some(window) = web_sys::window() {
    let _ = window.alert_with_message(message);
  }
}
