use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::SiteError;

/// Default site wiring, compiled into the bundle
const EMBEDDED_CONFIG: &str = include_str!("../config/site.yaml");

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
  #[serde(default)]
  pub endpoints: EndpointsSection,
  #[serde(default)]
  pub anchors: AnchorsSection,
}

/// Resources the page fetches or posts to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointsSection {
  #[serde(default = "default_properties")]
  pub properties: String,
  #[serde(default = "default_footer")]
  pub footer: String,
  #[serde(default = "default_contact")]
  pub contact: String,
}

fn default_properties() -> String {
  "JSON/inmuebles.json".into()
}
fn default_footer() -> String {
  "footer.html".into()
}
fn default_contact() -> String {
  "https://jsonplaceholder.typicode.com/posts".into()
}

impl Default for EndpointsSection {
  fn default() -> Self {
    Self {
      properties: default_properties(),
      footer: default_footer(),
      contact: default_contact(),
    }
  }
}

/// Element ids in the host page. A feature whose anchor is missing stays off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorsSection {
  #[serde(default = "default_gallery_anchor")]
  pub gallery: String,
  #[serde(default = "default_contact_anchor")]
  pub contact: String,
  #[serde(default = "default_footer_anchor")]
  pub footer: String,
}

fn default_gallery_anchor() -> String {
  "propiedades".into()
}
fn default_contact_anchor() -> String {
  "contacto".into()
}
fn default_footer_anchor() -> String {
  "footer-placeholder".into()
}

impl Default for AnchorsSection {
  fn default() -> Self {
    Self {
      gallery: default_gallery_anchor(),
      contact: default_contact_anchor(),
      footer: default_footer_anchor(),
    }
  }
}

impl SiteConfig {
  pub fn from_yaml_str(yaml: &str) -> Result<Self, SiteError> {
    // An empty document deserializes to unit, not to an empty mapping
    if yaml.trim().is_empty() {
      return Ok(Self::default());
    }
    Ok(serde_yaml::from_str(yaml)?)
  }

  pub fn from_file(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
    let content = std::fs::read_to_string(&path)?;
    Ok(Self::from_yaml_str(&content)?)
  }

  /// The configuration shipped with the bundle (`config/site.yaml`).
  pub fn embedded() -> Result<Self, SiteError> {
    Self::from_yaml_str(EMBEDDED_CONFIG)
  }
}
