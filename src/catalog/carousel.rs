//! Image carousel state for the property detail modal

/// An ordered image list and the position currently shown.
///
/// The index stays inside `[0, len)`; on an empty list it is 0 and every move
/// is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
  images: Vec<String>,
  index: usize,
}

impl Carousel {
  pub fn new(images: Vec<String>) -> Self {
    Self { images, index: 0 }
  }

  pub fn images(&self) -> &[String] {
    &self.images
  }

  pub fn len(&self) -> usize {
    self.images.len()
  }

  pub fn is_empty(&self) -> bool {
    self.images.is_empty()
  }

  pub fn index(&self) -> usize {
    self.index
  }

  pub fn current(&self) -> Option<&str> {
    self.images.get(self.index).map(String::as_str)
  }

  /// Move by `delta` positions, wrapping at both ends.
  pub fn step(&mut self, delta: isize) {
    if self.images.is_empty() {
      return;
    }
    let len = self.images.len() as isize;
    self.index = (self.index as isize + delta).rem_euclid(len) as usize;
  }

  pub fn next(&mut self) {
    self.step(1);
  }

  pub fn prev(&mut self) {
    self.step(-1);
  }

  /// Jump to `index`. Out-of-range targets leave the carousel where it was;
  /// returns whether the jump happened.
  pub fn go_to(&mut self, index: usize) -> bool {
    if index >= self.images.len() {
      return false;
    }
    self.index = index;
    true
  }

  /// Whether slide `i` is the visible one (also drives the active dot)
  pub fn is_active(&self, i: usize) -> bool {
    !self.images.is_empty() && i == self.index
  }
}
