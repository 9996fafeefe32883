//! Shared footer, spliced in from a static fragment

use leptos::logging;

use crate::web::{apiclient, dom};

/// Replace the placeholder element with the fetched fragment. Pages without
/// a placeholder skip the request; failures leave the page footer-less.
pub async fn load_footer(anchor: String, url: String) {
  let Some(placeholder) = dom::element_by_id(&anchor) else {
    return;
  };
  match apiclient::fetch_fragment(&url).await {
    Ok(html) => placeholder.set_outer_html(&html),
    Err(e) => logging::error!("Failed to load footer from {}: {}", url, e),
  }
}
