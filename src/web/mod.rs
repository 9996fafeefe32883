//! Browser side of the site: mounts each feature on its anchor element

mod apiclient;
pub mod components;
mod dom;
mod footer;
mod state;

pub use state::GalleryState;

use leptos::*;

use crate::config::SiteConfig;
use components::{ContactFormView, PropertyGallery};

/// Wire up every feature whose anchor exists in the current page. The three
/// features share nothing and load independently.
pub fn start(config: SiteConfig) {
  let SiteConfig { endpoints, anchors } = config;

  if let Some(root) = dom::html_element_by_id(&anchors.gallery) {
    let source = endpoints.properties;
    mount_to(root, move || view! { <PropertyGallery source=source/> });
  }

  if let Some(root) = dom::html_element_by_id(&anchors.contact) {
    let endpoint = endpoints.contact;
    mount_to(root, move || view! { <ContactFormView endpoint=endpoint/> });
  }

  spawn_local(footer::load_footer(anchors.footer, endpoints.footer));
}
