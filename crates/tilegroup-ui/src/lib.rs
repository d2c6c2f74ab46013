#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Single-select tile group widget for host-embedded forms.
//!
//! Layout: `core/` (DOM-free catalog, icons, rendering, key handling and the
//! selection controller), `host.rs` (lifecycle contract and context payload),
//! `config.rs` (tile sizing), `web/` (wasm32 browser binding).

pub mod config;
pub mod core;
pub mod error;
pub mod host;

#[cfg(target_arch = "wasm32")]
mod web;

pub use crate::config::{TileGroupConfig, TileSize};
pub use crate::core::catalog::{OptionCatalog, OptionValue, TileOption};
pub use crate::core::controller::{Phase, SelectOutcome, SelectionController, Surface};
pub use crate::core::icon::{IconVariant, resolve_icon};
pub use crate::core::keys::{EventDisposition, KeyIntent};
pub use crate::core::render::{TileGroupView, ViewRenderer, VisualTile};
pub use crate::error::{WidgetError, WidgetResult};
pub use crate::host::{ChangeNotifier, HostContext, StandardControl, TileGroupOutputs};

#[cfg(target_arch = "wasm32")]
pub use web::TileGroupControl;
