//! What the grid and the detail modal display, independent of the DOM

use super::{price_label, Catalog, Property};
use crate::error::SiteError;

/// Shown in place of the grid when the listing cannot be loaded
pub const LOAD_ERROR_TEXT: &str = "No se pudieron cargar las propiedades.";

/// Summary card in the grid
#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
  pub id: i64,
  pub cover: Option<String>,
  pub title: String,
  pub address: String,
  pub price: String,
  pub aria_label: String,
}

impl From<&Property> for CardView {
  fn from(p: &Property) -> Self {
    Self {
      id: p.id,
      cover: p.cover_image().map(str::to_string),
      title: p.title.clone(),
      address: p.address.clone(),
      price: price_label(p.price),
      aria_label: format!("Ver detalle de {}", p.title),
    }
  }
}

/// One labelled line of the detail spec list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Spec {
  pub label: &'static str,
  pub value: String,
}

/// Full record as shown in the modal
#[derive(Clone, Debug, PartialEq)]
pub struct DetailView {
  pub id: i64,
  pub title: String,
  pub address: String,
  pub price: String,
  pub specs: Vec<Spec>,
  pub description: String,
  pub images: Vec<String>,
}

impl DetailView {
  /// Alt text for slide `i` (zero-based)
  pub fn slide_alt(&self, i: usize) -> String {
    format!("{} - imagen {}", self.title, i + 1)
  }
}

impl From<&Property> for DetailView {
  fn from(p: &Property) -> Self {
    let or_dash = |v: Option<String>| v.unwrap_or_else(|| "-".to_string());
    let specs = vec![
      Spec {
        label: "Dormitorios",
        value: or_dash(p.bedrooms.map(|n| n.to_string())),
      },
      Spec {
        label: "Baños",
        value: or_dash(p.bathrooms.map(|n| n.to_string())),
      },
      Spec {
        label: "Metros",
        value: or_dash(p.area.map(|m| format!("{} m²", m))),
      },
      Spec {
        label: "Tipo",
        value: p.kind.clone(),
      },
      Spec {
        label: "Estado",
        value: p.status.clone(),
      },
    ];

    Self {
      id: p.id,
      title: p.title.clone(),
      address: p.address.clone(),
      price: price_label(p.price),
      specs,
      description: p.description.clone(),
      images: p.image_list(),
    }
  }
}

/// Lifecycle of the grid: the listing loads once and never retries.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum GridState {
  #[default]
  Loading,
  Ready(Catalog),
  Failed,
}

impl GridState {
  pub fn from_load(result: Result<Catalog, SiteError>) -> Self {
    match result {
      Ok(catalog) => GridState::Ready(catalog),
      Err(_) => GridState::Failed,
    }
  }

  pub fn catalog(&self) -> Option<&Catalog> {
    match self {
      GridState::Ready(catalog) => Some(catalog),
      _ => None,
    }
  }

  pub fn cards(&self) -> Vec<CardView> {
    self
      .catalog()
      .map(|c| c.properties().iter().map(CardView::from).collect())
      .unwrap_or_default()
  }

  /// Inline message replacing the cards, if any
  pub fn message(&self) -> Option<&'static str> {
    match self {
      GridState::Failed => Some(LOAD_ERROR_TEXT),
      _ => None,
    }
  }
}
