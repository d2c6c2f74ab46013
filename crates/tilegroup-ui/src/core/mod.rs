//! DOM-free widget core: catalog, icons, rendering, keys and the controller.
pub mod catalog;
pub mod controller;
pub mod icon;
pub mod keys;
pub mod render;
