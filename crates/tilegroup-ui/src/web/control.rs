//! `wasm-bindgen` export implementing the host's standard control lifecycle.

use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use js_sys::{Function, JSON, Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, KeyboardEvent};

use super::surface::DomSurface;
use super::{dom_error, report};
use crate::core::controller::SelectionController;
use crate::core::render::TILE_SELECTOR;
use crate::error::{WidgetError, WidgetResult};
use crate::host::{ChangeNotifier, HostContext, HostParameters, StandardControl};

type Controller = SelectionController<DomSurface>;

/// Tile group control as seen by the host runtime.
#[wasm_bindgen]
pub struct TileGroupControl {
    controller: Option<Rc<Controller>>,
}

#[wasm_bindgen]
impl TileGroupControl {
    /// Create an unmounted control.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self { controller: None }
    }

    /// Mount into `container`, read the first context snapshot and bind input
    /// listeners. `state` is accepted for lifecycle compatibility and unused.
    pub fn init(&mut self, context: JsValue, notify: Function, state: JsValue, container: HtmlElement) {
        let _ = state;
        if let Some(previous) = self.controller.take() {
            previous.destroy();
        }
        let controller = Rc::new(SelectionController::new(DomSurface::new(container.clone())));
        let listeners = bind_listeners(&container, &controller);
        controller.with_surface(|surface| surface.bind(listeners));
        let context = read_context(&context).unwrap_or_else(|err| {
            report(&err);
            HostContext::default()
        });
        controller.init(&context, host_notifier(notify));
        self.controller = Some(controller);
    }

    /// Re-read the bound field after a host-side change.
    #[wasm_bindgen(js_name = updateView)]
    pub fn update_view(&self, context: JsValue) {
        let Some(controller) = self.controller.as_ref() else {
            return;
        };
        match read_context(&context) {
            Ok(context) => controller.update_view(&context),
            Err(err) => report(&err),
        }
    }

    /// Outputs object `{ value }`, with `value` null when nothing is selected.
    #[wasm_bindgen(js_name = getOutputs)]
    #[must_use]
    pub fn get_outputs(&self) -> JsValue {
        let value = self
            .controller
            .as_ref()
            .and_then(|controller| controller.get_outputs().value);
        #[allow(clippy::cast_precision_loss)]
        let value = value.map_or(JsValue::NULL, |value| JsValue::from_f64(value.get() as f64));
        let outputs = Object::new();
        if let Err(err) = Reflect::set(&outputs, &JsValue::from_str("value"), &value) {
            report(&dom_error("write outputs", &err));
        }
        outputs.into()
    }

    /// Release listeners and clear the container.
    pub fn destroy(&mut self) {
        if let Some(controller) = self.controller.take() {
            controller.destroy();
        }
    }
}

impl Default for TileGroupControl {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TileGroupControl {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn bind_listeners(container: &HtmlElement, controller: &Rc<Controller>) -> Vec<EventListener> {
    let click = {
        let controller = Rc::downgrade(controller);
        EventListener::new(container, "click", move |event| {
            let Some(controller) = controller.upgrade() else {
                return;
            };
            let tile_value = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|element| element.closest(TILE_SELECTOR).ok().flatten())
                .and_then(|tile| tile.get_attribute("data-value"));
            controller.handle_pointer(tile_value.as_deref());
        })
    };
    let keydown = {
        let controller = Rc::downgrade(controller);
        EventListener::new_with_options(
            container,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(controller) = controller.upgrade() else {
                    return;
                };
                let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if controller.handle_key(&key_event.key()).prevents_default() {
                    event.prevent_default();
                }
            },
        )
    };
    vec![click, keydown]
}

fn host_notifier(notify: Function) -> ChangeNotifier {
    Rc::new(move || {
        if let Err(err) = notify.call0(&JsValue::NULL) {
            report(&dom_error("notify host", &err));
        }
    })
}

fn read_context(context: &JsValue) -> WidgetResult<HostContext> {
    let parameters = Reflect::get(context, &JsValue::from_str("parameters"))
        .map_err(|err| dom_error("read parameters", &err))?;
    if parameters.is_undefined() || parameters.is_null() {
        return Ok(HostContext::default());
    }
    let payload: String = JSON::stringify(&parameters)
        .map_err(|err| dom_error("serialize parameters", &err))?
        .into();
    let parameters: HostParameters = serde_json::from_str(&payload)
        .map_err(|source| WidgetError::InvalidContext { source })?;
    Ok(HostContext::with_parameters(parameters))
}
