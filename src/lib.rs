// Pure page logic, compiled on every target
pub mod catalog;
pub mod config;
pub mod contact;
pub mod error;

// Leptos components and browser bindings (only compiled with csr feature)
#[cfg(feature = "csr")]
pub mod web;

pub use config::SiteConfig;
pub use error::SiteError;
