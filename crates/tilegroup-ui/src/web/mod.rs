//! Browser binding: exposes the controller to the host through `wasm-bindgen`.
//!
//! # Design
//! - Browser failures never propagate to the host; they are logged and the
//!   widget carries on with whatever data it has.

mod control;
mod surface;

pub use control::TileGroupControl;

use gloo::console;
use wasm_bindgen::JsValue;

use crate::error::WidgetError;

fn dom_error(operation: &'static str, err: &JsValue) -> WidgetError {
    WidgetError::Dom {
        operation,
        detail: format!("{err:?}"),
    }
}

fn report(error: &WidgetError) {
    match error {
        WidgetError::Dom { operation, detail } => {
            console::error!("tile group dom operation failed", *operation, detail.clone());
        }
        other => console::error!("tile group error", other.to_string()),
    }
}
