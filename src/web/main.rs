//! Real-estate site scripts - Client-Side Rendered (WASM)

use inmobiliaria::{web, SiteConfig};
use leptos::logging;

fn main() {
  console_error_panic_hook::set_once();

  let config = SiteConfig::embedded().unwrap_or_else(|e| {
    logging::warn!("Using default site config: {}", e);
    SiteConfig::default()
  });
  web::start(config);
}
