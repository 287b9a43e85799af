//! Thin glue: subscribes host events and forwards them to the controller.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, MouseEvent, PointerEvent};

use super::host::{DomHost, focus_target, key_input};
use crate::config::{CONFIG_ELEMENT_ID, ZoomConfig};
use crate::model::{PointerPosition, ZoomActivation};
use crate::state::ZoomController;

type SharedController = Rc<RefCell<ZoomController<DomHost>>>;

/// Keeps the listeners alive; dropping it unwires everything.
pub struct ZoomHandle {
    controller: SharedController,
    document: Document,
    toggle: HtmlElement,
    opened_event: String,
    closed_event: String,
    click_cb: Closure<dyn FnMut(MouseEvent)>,
    keydown_cb: Closure<dyn FnMut(KeyboardEvent)>,
    opened_cb: Closure<dyn FnMut(Event)>,
    closed_cb: Closure<dyn FnMut(Event)>,
}

impl Drop for ZoomHandle {
    fn drop(&mut self) {
        let _ = self.toggle.remove_event_listener_with_callback(
            "click",
            self.click_cb.as_ref().unchecked_ref(),
        );
        let _ = self.document.remove_event_listener_with_callback(
            "keydown",
            self.keydown_cb.as_ref().unchecked_ref(),
        );
        let _ = self.document.remove_event_listener_with_callback(
            &self.opened_event,
            self.opened_cb.as_ref().unchecked_ref(),
        );
        let _ = self.document.remove_event_listener_with_callback(
            &self.closed_event,
            self.closed_cb.as_ref().unchecked_ref(),
        );
        if let Ok(mut c) = self.controller.try_borrow_mut() {
            c.shutdown();
        }
        debug!("zoom lens uninstalled");
    }
}

/// Reads a numeric event property as a double. The typed `client_x` getters
/// truncate to whole pixels.
pub fn client_coord(event: &JsValue, name: &str) -> Option<f64> {
    js_sys::Reflect::get(event, &JsValue::from_str(name)).ok().and_then(|v| v.as_f64())
}

fn client_point(e: &MouseEvent) -> PointerPosition {
    let x = client_coord(e.as_ref(), "clientX").unwrap_or(e.client_x() as f64);
    let y = client_coord(e.as_ref(), "clientY").unwrap_or(e.client_y() as f64);
    PointerPosition::new(x, y)
}

/// Reads the optional JSON config block; malformed JSON falls back to defaults.
pub fn load_config(document: &Document) -> ZoomConfig {
    let text = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    let Some(text) = text else {
        return ZoomConfig::default();
    };
    match ZoomConfig::from_json(&text) {
        Ok(cfg) => cfg,
        Err(err) => {
            warn!("zoom-lens: ignoring malformed #{CONFIG_ELEMENT_ID}: {err}");
            ZoomConfig::default()
        }
    }
}

/// Installs on the current window's document using the page's config block.
pub fn install_from_page() -> Result<Option<ZoomHandle>, JsValue> {
    let window =
        web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("window has no document"))?;
    let config = load_config(&document);
    install(document, config)
}

/// Wires the magnifier into `document`. Without a toggle control there is
/// nothing to drive it, so this returns `Ok(None)`.
pub fn install(document: Document, config: ZoomConfig) -> Result<Option<ZoomHandle>, JsValue> {
    let Some(toggle) = document.get_element_by_id(&config.toggle_id) else {
        debug!("zoom-lens: no #{} on page, staying idle", config.toggle_id);
        return Ok(None);
    };
    let toggle = toggle.dyn_into::<HtmlElement>().map_err(JsValue::from)?;
    let host = DomHost::new(document.clone(), toggle.clone(), config.clone())?;
    let initial = ZoomActivation::from_flag(host.body_marked());
    let controller: SharedController =
        Rc::new(RefCell::new(ZoomController::new(host, config.clone())));

    // Pointer moves: registered and removed by the controller itself.
    let pointer_cb = {
        let weak = Rc::downgrade(&controller);
        Closure::wrap(Box::new(move |e: PointerEvent| {
            let Some(ctrl) = weak.upgrade() else { return };
            let hit = e.target().and_then(|t| t.dyn_into::<Element>().ok());
            let pointer = client_point(&e);
            if let Ok(mut c) = ctrl.try_borrow_mut() {
                c.on_pointer_move(pointer, hit.as_ref());
            }
        }) as Box<dyn FnMut(_)>)
    };
    {
        let mut c = controller.borrow_mut();
        c.host_mut().set_pointer_listener(pointer_cb);
        c.start(initial);
    }

    let click_cb = {
        let controller = controller.clone();
        Closure::wrap(Box::new(move |_e: MouseEvent| {
            if let Ok(mut c) = controller.try_borrow_mut() {
                c.toggle();
            }
        }) as Box<dyn FnMut(_)>)
    };
    toggle.add_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref())?;

    let keydown_cb = {
        let controller = controller.clone();
        Closure::wrap(Box::new(move |e: KeyboardEvent| {
            let input = key_input(&e);
            let focus = focus_target(e.target());
            let consumed = match controller.try_borrow_mut() {
                Ok(mut c) => c.on_key(&input, &focus),
                Err(_) => false,
            };
            if consumed {
                e.prevent_default();
            }
        }) as Box<dyn FnMut(_)>)
    };
    document.add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())?;

    let opened_cb = {
        let controller = controller.clone();
        Closure::wrap(Box::new(move |e: Event| {
            let Some(panel) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else { return };
            if let Ok(mut c) = controller.try_borrow_mut() {
                c.on_overlay_opened(&panel);
            }
        }) as Box<dyn FnMut(_)>)
    };
    document.add_event_listener_with_callback(
        &config.panel_opened_event,
        opened_cb.as_ref().unchecked_ref(),
    )?;

    let closed_cb = {
        let controller = controller.clone();
        Closure::wrap(Box::new(move |e: Event| {
            let Some(panel) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else { return };
            if let Ok(mut c) = controller.try_borrow_mut() {
                c.on_overlay_closed(&panel);
            }
        }) as Box<dyn FnMut(_)>)
    };
    document.add_event_listener_with_callback(
        &config.panel_closed_event,
        closed_cb.as_ref().unchecked_ref(),
    )?;

    debug!("zoom lens installed (initially {initial:?})");
    Ok(Some(ZoomHandle {
        controller,
        document,
        toggle,
        opened_event: config.panel_opened_event,
        closed_event: config.panel_closed_event,
        click_cb,
        keydown_cb,
        opened_cb,
        closed_cb,
    }))
}
