//! Reactive state for the property gallery

use leptos::*;

use crate::catalog::{GridState, ModalKey, ModalRegion, ModalState};

/// Grid contents plus the open modal, if any. Provided as context to the
/// gallery's components.
#[derive(Clone, Copy)]
pub struct GalleryState {
  pub grid: RwSignal<GridState>,
  pub modal: RwSignal<Option<ModalState>>,
}

impl GalleryState {
  pub fn new() -> Self {
    Self {
      grid: create_rw_signal(GridState::Loading),
      modal: create_rw_signal(None),
    }
  }

  pub fn is_open(&self) -> bool {
    self.modal.with_untracked(Option::is_some)
  }

  /// Open the card with `id`. Unknown ids, or a grid that never loaded, do
  /// nothing.
  pub fn open(&self, id: i64) {
    let opened = self
      .grid
      .with_untracked(|grid| grid.catalog().and_then(|c| ModalState::open(c, id)));
    if let Some(modal) = opened {
      self.modal.set(Some(modal));
    }
  }

  pub fn close(&self) {
    if self.is_open() {
      self.modal.set(None);
    }
  }

  pub fn click(&self, region: ModalRegion) {
    if region.closes() {
      self.close();
    }
  }

  pub fn next(&self) {
    self.modal.update(|m| {
      if let Some(m) = m {
        m.carousel.next();
      }
    });
  }

  pub fn prev(&self) {
    self.modal.update(|m| {
      if let Some(m) = m {
        m.carousel.prev();
      }
    });
  }

  pub fn go_to(&self, index: usize) {
    self.modal.update(|m| {
      if let Some(m) = m {
        m.carousel.go_to(index);
      }
    });
  }

  /// Tracked: whether slide `i` of the open modal is the visible one
  pub fn is_active(&self, i: usize) -> bool {
    self
      .modal
      .with(|m| m.as_ref().is_some_and(|m| m.carousel.is_active(i)))
  }

  /// Global keydown handler
  pub fn handle_key(&self, key: &str) {
    let Some(cmd) = ModalKey::from_key(key, self.is_open()) else {
      return;
    };
    let keep_open = self
      .modal
      .try_update(|m| m.as_mut().is_some_and(|m| m.apply(cmd)))
      .unwrap_or(false);
    if !keep_open {
      self.close();
    }
  }
}

impl Default for GalleryState {
  fn default() -> Self {
    Self::new()
  }
}
