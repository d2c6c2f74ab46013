//! Host container surface: markup painting, focus restore and listener ownership.

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::{dom_error, report};
use crate::core::catalog::OptionValue;
use crate::core::controller::Surface;
use crate::core::render::{TILE_SELECTOR, TileGroupView};

/// Class applied to the host container while the widget is mounted.
const ROOT_CLASS: &str = "tile-group-root";

/// Paints into the host-owned container element.
pub(crate) struct DomSurface {
    container: HtmlElement,
    listeners: Vec<EventListener>,
}

impl DomSurface {
    pub(crate) const fn new(container: HtmlElement) -> Self {
        Self {
            container,
            listeners: Vec::new(),
        }
    }

    /// Take ownership of the container's input listeners.
    pub(crate) fn bind(&mut self, listeners: Vec<EventListener>) {
        self.listeners = listeners;
    }
}

impl Surface for DomSurface {
    fn mount(&mut self) {
        if let Err(err) = self.container.class_list().add_1(ROOT_CLASS) {
            report(&dom_error("mount container", &err));
        }
    }

    fn paint(&mut self, view: &TileGroupView) {
        self.container.set_inner_html(&view.to_markup());
    }

    fn focus_tile(&mut self, value: OptionValue) {
        let selector = format!(r#"{TILE_SELECTOR}[data-value="{value}"]"#);
        match self.container.query_selector(&selector) {
            Ok(Some(element)) => {
                if let Ok(tile) = element.dyn_into::<HtmlElement>()
                    && let Err(err) = tile.focus()
                {
                    report(&dom_error("focus tile", &err));
                }
            }
            Ok(None) => {}
            Err(err) => report(&dom_error("query tile", &err)),
        }
    }

    fn clear(&mut self) {
        self.container.set_inner_html("");
        if let Err(err) = self.container.class_list().remove_1(ROOT_CLASS) {
            report(&dom_error("unmount container", &err));
        }
    }

    fn release_bindings(&mut self) {
        self.listeners.clear();
    }
}
