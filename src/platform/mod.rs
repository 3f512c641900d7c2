//! Platform abstraction layer
//!
//! Browser bindings for:
//! - Element lookup and text updates (`DomView`)
//! - Storage (`persistence::LocalStorage`)
//!
//! Native builds have no page; the binary drives `metrics` directly.

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::DomView;
