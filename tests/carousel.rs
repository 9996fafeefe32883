//! Carousel index arithmetic and modal keyboard handling

use inmobiliaria::catalog::{activates_card, Carousel, ModalKey, ModalRegion};

fn images(n: usize) -> Vec<String> {
  (0..n).map(|i| format!("img-{}.jpg", i)).collect()
}

// =============================================================================
// Wrapping
// =============================================================================

#[test]
fn test_next_wraps_from_last_to_first() {
  for n in 1..=8 {
    let mut carousel = Carousel::new(images(n));
    assert!(carousel.go_to(n - 1));
    carousel.next();
    assert_eq!(carousel.index(), 0, "n = {}", n);
  }
}

#[test]
fn test_prev_wraps_from_first_to_last() {
  for n in 1..=8 {
    let mut carousel = Carousel::new(images(n));
    carousel.prev();
    assert_eq!(carousel.index(), n - 1, "n = {}", n);
  }
}

#[test]
fn test_step_larger_than_len_wraps() {
  let mut carousel = Carousel::new(images(3));
  carousel.step(7);
  assert_eq!(carousel.index(), 1);
  carousel.step(-5);
  assert_eq!(carousel.index(), 2);
}

#[test]
fn test_three_image_walkthrough() {
  let mut carousel = Carousel::new(vec!["a.jpg".into(), "b.jpg".into(), "c.jpg".into()]);
  assert_eq!(carousel.current(), Some("a.jpg"));
  carousel.next();
  carousel.next();
  assert_eq!(carousel.current(), Some("c.jpg"));
  carousel.next();
  assert_eq!(carousel.current(), Some("a.jpg"));
}

// =============================================================================
// Jumping
// =============================================================================

#[test]
fn test_go_to_in_range() {
  let mut carousel = Carousel::new(images(4));
  assert!(carousel.go_to(2));
  assert_eq!(carousel.index(), 2);
}

#[test]
fn test_go_to_out_of_range_is_ignored() {
  let mut carousel = Carousel::new(images(4));
  carousel.go_to(1);
  assert!(!carousel.go_to(4));
  assert!(!carousel.go_to(usize::MAX));
  assert_eq!(carousel.index(), 1);
}

#[test]
fn test_exactly_one_slide_active() {
  let mut carousel = Carousel::new(images(5));
  carousel.go_to(3);
  let active: Vec<usize> = (0..5).filter(|&i| carousel.is_active(i)).collect();
  assert_eq!(active, vec![3]);
}

#[test]
fn test_empty_carousel_ignores_moves() {
  let mut carousel = Carousel::new(Vec::new());
  carousel.next();
  carousel.prev();
  assert!(!carousel.go_to(0));
  assert_eq!(carousel.index(), 0);
  assert_eq!(carousel.current(), None);
  assert!(!carousel.is_active(0));
}

// =============================================================================
// Keys and click regions
// =============================================================================

#[test]
fn test_keys_ignored_while_closed() {
  for key in ["Escape", "ArrowLeft", "ArrowRight"] {
    assert_eq!(ModalKey::from_key(key, false), None);
  }
}

#[test]
fn test_keys_while_open() {
  assert_eq!(ModalKey::from_key("Escape", true), Some(ModalKey::Close));
  assert_eq!(ModalKey::from_key("ArrowLeft", true), Some(ModalKey::Previous));
  assert_eq!(ModalKey::from_key("ArrowRight", true), Some(ModalKey::Next));
  assert_eq!(ModalKey::from_key("Enter", true), None);
}

#[test]
fn test_enter_activates_card() {
  assert!(activates_card("Enter"));
  assert!(!activates_card(" "));
}

#[test]
fn test_only_backdrop_and_close_control_dismiss() {
  assert!(ModalRegion::Backdrop.closes());
  assert!(ModalRegion::CloseControl.closes());
  assert!(!ModalRegion::Content.closes());
}
