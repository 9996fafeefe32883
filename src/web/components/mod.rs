//! Page components

mod contact;
mod gallery;
mod modal;

pub use contact::ContactFormView;
pub use gallery::PropertyGallery;
pub use modal::PropertyModal;
