//! Property catalog: listing data, card/detail view models and the detail
//! modal's carousel state

mod carousel;
mod modal;
mod price;
mod property;
mod view;

pub use carousel::Carousel;
pub use modal::{activates_card, ModalKey, ModalRegion, ModalState};
pub use price::{format_es_ar, price_label};
pub use property::Property;
pub use view::{CardView, DetailView, GridState, Spec, LOAD_ERROR_TEXT};

use crate::error::SiteError;
use std::collections::HashSet;

/// The listing as loaded from the data file, in file order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
  properties: Vec<Property>,
}

impl Catalog {
  /// Build a catalog, rejecting lists where two records share an id.
  pub fn new(properties: Vec<Property>) -> Result<Self, SiteError> {
    let mut seen = HashSet::with_capacity(properties.len());
    for p in &properties {
      if !seen.insert(p.id) {
        return Err(SiteError::DuplicateId(p.id));
      }
    }
    Ok(Self { properties })
  }

  /// Decode the JSON array served as the listing data file.
  pub fn from_json(body: &str) -> Result<Self, SiteError> {
    let properties: Vec<Property> = serde_json::from_str(body)?;
    Self::new(properties)
  }

  /// Linear scan; the listing is small and static.
  pub fn find(&self, id: i64) -> Option<&Property> {
    self.properties.iter().find(|p| p.id == id)
  }

  pub fn properties(&self) -> &[Property] {
    &self.properties
  }

  pub fn len(&self) -> usize {
    self.properties.len()
  }

  pub fn is_empty(&self) -> bool {
    self.properties.is_empty()
  }
}
