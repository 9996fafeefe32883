//! Detail modal state and the input that drives it

use super::{Carousel, Catalog, DetailView, Property};

/// State of the open modal. Dropped on close.
#[derive(Clone, Debug, PartialEq)]
pub struct ModalState {
  property: Property,
  pub carousel: Carousel,
}

impl ModalState {
  /// Open the record whose card carries `id`; `None` for an unknown id.
  pub fn open(catalog: &Catalog, id: i64) -> Option<Self> {
    catalog.find(id).map(|p| Self {
      property: p.clone(),
      carousel: Carousel::new(p.image_list()),
    })
  }

  pub fn property(&self) -> &Property {
    &self.property
  }

  pub fn property_id(&self) -> i64 {
    self.property.id
  }

  pub fn detail(&self) -> DetailView {
    DetailView::from(&self.property)
  }

  /// Apply a key command; returns `false` when the modal should close.
  pub fn apply(&mut self, key: ModalKey) -> bool {
    match key {
      ModalKey::Close => return false,
      ModalKey::Previous => self.carousel.prev(),
      ModalKey::Next => self.carousel.next(),
    }
    true
  }
}

/// Keyboard commands understood while the modal is open
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKey {
  Close,
  Previous,
  Next,
}

impl ModalKey {
  /// Map a `KeyboardEvent.key` value. Keys are ignored while the modal is
  /// closed.
  pub fn from_key(key: &str, modal_open: bool) -> Option<Self> {
    if !modal_open {
      return None;
    }
    match key {
      "Escape" => Some(ModalKey::Close),
      "ArrowLeft" => Some(ModalKey::Previous),
      "ArrowRight" => Some(ModalKey::Next),
      _ => None,
    }
  }
}

/// Key that opens a focused card
pub fn activates_card(key: &str) -> bool {
  key == "Enter"
}

/// Parts of the modal a click can land on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalRegion {
  /// Overlay around the dialog
  Backdrop,
  /// The explicit close button
  CloseControl,
  /// Anything inside the dialog
  Content,
}

impl ModalRegion {
  pub fn closes(self) -> bool {
    matches!(self, ModalRegion::Backdrop | ModalRegion::CloseControl)
  }
}
