//! Property records as published in the listing JSON

use serde::{Deserialize, Serialize};

/// One listing. Field names on the wire follow the data file (`titulo`,
/// `direccion`, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Property {
  pub id: i64,
  #[serde(rename = "titulo")]
  pub title: String,
  #[serde(rename = "direccion")]
  pub address: String,
  #[serde(rename = "precio")]
  pub price: f64,
  #[serde(rename = "dormitorios", default)]
  pub bedrooms: Option<u32>,
  #[serde(rename = "banos", default)]
  pub bathrooms: Option<u32>,
  #[serde(rename = "metros", default)]
  pub area: Option<f64>,
  #[serde(rename = "tipo", default)]
  pub kind: String,
  #[serde(rename = "estado", default)]
  pub status: String,
  #[serde(rename = "descripcion", default)]
  pub description: String,
  #[serde(rename = "imagen", default, skip_serializing_if = "Option::is_none")]
  pub image: Option<String>,
  #[serde(rename = "imagenes", default, skip_serializing_if = "Option::is_none")]
  pub images: Option<Vec<String>>,
}

impl Property {
  /// Ordered images for the carousel: the `imagenes` list when it has
  /// entries, else the single `imagen`, else nothing.
  pub fn image_list(&self) -> Vec<String> {
    match &self.images {
      Some(list) if !list.is_empty() => list.clone(),
      _ => self.image.iter().cloned().collect(),
    }
  }

  /// Image shown on the card
  pub fn cover_image(&self) -> Option<&str> {
    match &self.images {
      Some(list) if !list.is_empty() => list.first().map(String::as_str),
      _ => self.image.as_deref(),
    }
  }
}
