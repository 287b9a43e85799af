//! Browser implementation of the zoom host: reads layout and classes from the
//! live DOM and writes the published state back as classes, attributes and
//! custom properties.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, EventTarget, HtmlElement, HtmlInputElement, HtmlTextAreaElement,
    KeyboardEvent, PointerEvent,
};

use crate::config::ZoomConfig;
use crate::model::{KeyInput, Origin, PointerPosition, Rect, TogglePresentation};
use crate::state::{FocusTarget, Host, SurfaceTree};

pub struct DomHost {
    document: Document,
    root: HtmlElement,
    body: HtmlElement,
    toggle: HtmlElement,
    lens: Option<Element>,
    config: ZoomConfig,
    pointer_cb: Option<Closure<dyn FnMut(PointerEvent)>>,
}

impl DomHost {
    pub fn new(
        document: Document,
        toggle: HtmlElement,
        config: ZoomConfig,
    ) -> Result<Self, JsValue> {
        let root = document
            .document_element()
            .ok_or_else(|| JsValue::from_str("document has no root element"))?
            .dyn_into::<HtmlElement>()
            .map_err(JsValue::from)?;
        let body = document.body().ok_or_else(|| JsValue::from_str("document has no body"))?;
        let lens = document.query_selector(&config.lens_selector)?;
        Ok(Self { document, root, body, toggle, lens, config, pointer_cb: None })
    }

    /// Whether the page was served with zoom mode already on.
    pub fn body_marked(&self) -> bool {
        self.body.class_list().contains(&self.config.active_class)
    }

    pub fn set_pointer_listener(&mut self, cb: Closure<dyn FnMut(PointerEvent)>) {
        self.pointer_cb = Some(cb);
    }

    fn pointer_listener(&self) -> Option<&js_sys::Function> {
        self.pointer_cb.as_ref().map(|cb| cb.as_ref().unchecked_ref::<js_sys::Function>())
    }

    fn set_property(&self, name: &str, value: &str) {
        let _ = self.root.style().set_property(name, value);
    }
}

fn closest(node: &Element, selector: &str) -> Option<Element> {
    node.closest(selector).ok().flatten()
}

impl SurfaceTree for DomHost {
    type Node = Element;

    fn panel_ancestors(&self, hit: &Element) -> Vec<Element> {
        let selector = self.config.panel_selector();
        let mut out = Vec::new();
        let mut cursor = closest(hit, &selector);
        while let Some(panel) = cursor {
            cursor = panel.parent_element().and_then(|p| closest(&p, &selector));
            out.push(panel);
        }
        out
    }

    fn is_open(&self, panel: &Element) -> bool {
        panel.class_list().contains(&self.config.panel_open_class)
    }

    fn content_region(&self, panel: &Element) -> Option<Element> {
        panel.query_selector(&self.config.panel_content_selector).ok().flatten()
    }

    fn in_backdrop(&self, hit: &Element) -> bool {
        closest(hit, &self.config.backdrop_selector).is_some()
    }

    fn closest_zoom_region(&self, hit: &Element) -> Option<Element> {
        closest(hit, &self.config.zoom_region_selector)
    }

    fn first_zoom_region(&self) -> Option<Element> {
        self.document.query_selector(&self.config.zoom_region_selector).ok().flatten()
    }

    fn bounds(&self, node: &Element) -> Rect {
        let r = node.get_bounding_client_rect();
        Rect::new(r.left(), r.top(), r.width(), r.height())
    }
}

impl Host for DomHost {
    fn panels(&self) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(&self.config.panel_selector()) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn set_panel_flag(&mut self, panel: &Element, flagged: bool) {
        let _ = panel.class_list().toggle_with_force(&self.config.panel_target_class, flagged);
    }

    fn set_active_marker(&mut self, active: bool) {
        let _ = self.body.class_list().toggle_with_force(&self.config.active_class, active);
    }

    fn publish_pointer(&mut self, pointer: PointerPosition) {
        self.set_property(&self.config.pointer_x_property, &pointer.css_x());
        self.set_property(&self.config.pointer_y_property, &pointer.css_y());
    }

    fn publish_origin(&mut self, origin: Origin) {
        self.set_property(&self.config.origin_x_property, &origin.css_x());
        self.set_property(&self.config.origin_y_property, &origin.css_y());
    }

    fn present_toggle(&mut self, presentation: &TogglePresentation) {
        let pressed = if presentation.pressed { "true" } else { "false" };
        let _ = self.toggle.set_attribute("aria-pressed", pressed);
        let _ = self.toggle.set_attribute("aria-label", &presentation.label);
        let _ = self.toggle.set_attribute("title", &presentation.label);
        let _ = self
            .toggle
            .class_list()
            .toggle_with_force(&self.config.toggle_active_class, presentation.pressed);
    }

    fn has_lens(&self) -> bool {
        self.lens.is_some()
    }

    fn subscribe_pointer(&mut self) {
        if let Some(f) = self.pointer_listener() {
            let _ = self.document.add_event_listener_with_callback("pointermove", f);
        }
    }

    fn unsubscribe_pointer(&mut self) {
        if let Some(f) = self.pointer_listener() {
            let _ = self.document.remove_event_listener_with_callback("pointermove", f);
        }
    }
}

/// Reads the editable-ness attributes of a key event's target.
pub fn focus_target(target: Option<EventTarget>) -> FocusTarget {
    let Some(el) = target.and_then(|t| t.dyn_into::<HtmlElement>().ok()) else {
        return FocusTarget::None;
    };
    if el.is_content_editable() {
        return FocusTarget::ContentEditable;
    }
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return FocusTarget::Input {
            kind: input.type_(),
            read_only: input.read_only(),
            disabled: input.disabled(),
        };
    }
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        return FocusTarget::TextArea { read_only: area.read_only(), disabled: area.disabled() };
    }
    FocusTarget::Other
}

pub fn key_input(e: &KeyboardEvent) -> KeyInput {
    KeyInput {
        key: e.key(),
        code: e.code(),
        shift: e.shift_key(),
        ctrl: e.ctrl_key(),
        alt: e.alt_key(),
        meta: e.meta_key(),
        default_prevented: e.default_prevented(),
    }
}
