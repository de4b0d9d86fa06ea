//! Canvas - drawing contract, animator and the browser widget
//!
//! `surface` and `scene` are pure and run anywhere; `web`, `driver` and
//! `element` bind them to the page.

pub mod driver;
pub mod element;
pub mod scene;
pub mod surface;
pub mod web;

pub use element::ShapesCanvas;
