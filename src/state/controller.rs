use log::debug;

use super::editable::{FocusTarget, is_editable_surface};
use super::geometry::compute_origin;
use super::host::Host;
use super::panels::PanelStack;
use super::resolver::{Resolution, resolve_target};
use super::shortcut::{KeyIntent, classify_key};
use crate::config::ZoomConfig;
use crate::model::{KeyInput, Origin, PointerPosition, ZoomActivation};

/// Owns zoom mode for one document session. Every mutation goes through
/// these handlers and completes all of its side effects before returning.
pub struct ZoomController<H: Host> {
    host: H,
    config: ZoomConfig,
    activation: ZoomActivation,
    /// Every open overlay panel we know of, in opening order.
    opened: PanelStack<H::Node>,
    tracking: bool,
}

impl<H: Host> ZoomController<H> {
    pub fn new(host: H, config: ZoomConfig) -> Self {
        Self {
            host,
            config,
            activation: ZoomActivation::Inactive,
            opened: PanelStack::default(),
            tracking: false,
        }
    }

    /// Applies the page's initial state so published values match it.
    pub fn start(&mut self, initial: ZoomActivation) {
        match initial {
            ZoomActivation::Active => self.activate(),
            ZoomActivation::Inactive => self.deactivate(),
        }
    }

    pub fn activation(&self) -> ZoomActivation {
        self.activation
    }

    pub fn is_active(&self) -> bool {
        self.activation.is_active()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    pub fn activate(&mut self) {
        if !self.is_active() {
            debug!("zoom mode on");
        }
        self.activation = ZoomActivation::Active;
        self.host.set_active_marker(true);
        let unseen: Vec<_> = self
            .host
            .panels()
            .into_iter()
            .filter(|p| self.host.is_open(p) && !self.opened.contains(p))
            .collect();
        for panel in unseen.into_iter().rev() {
            self.opened.push_oldest(panel);
        }
        let open: Vec<_> = self
            .opened
            .recent_first()
            .filter(|p| self.host.is_open(p))
            .cloned()
            .collect();
        for panel in open {
            self.host.set_panel_flag(&panel, true);
        }
        if !self.tracking && self.host.has_lens() {
            self.host.subscribe_pointer();
            self.tracking = true;
        }
        self.present();
    }

    pub fn deactivate(&mut self) {
        if self.is_active() {
            debug!("zoom mode off");
        }
        self.activation = ZoomActivation::Inactive;
        self.host.set_active_marker(false);
        for panel in self.host.panels() {
            self.host.set_panel_flag(&panel, false);
        }
        self.release_pointer();
        self.host.publish_pointer(PointerPosition::OFFSCREEN);
        self.host.publish_origin(Origin::CENTER);
        self.present();
    }

    pub fn toggle(&mut self) {
        match self.activation.flipped() {
            ZoomActivation::Active => self.activate(),
            ZoomActivation::Inactive => self.deactivate(),
        }
    }

    /// Publishes the lens position and, when a surface resolves with a usable
    /// size, the magnification origin. A zero-size surface keeps the last origin.
    pub fn on_pointer_move(
        &mut self,
        pointer: PointerPosition,
        hit: Option<&H::Node>,
    ) -> Option<Resolution<H::Node>> {
        if !self.is_active() {
            return None;
        }
        self.host.publish_pointer(pointer);
        let resolution = resolve_target(&self.host, &self.opened, hit)?;
        let bounds = self.host.bounds(&resolution.surface);
        if let Some(origin) = compute_origin(bounds, pointer.x, pointer.y) {
            self.host.publish_origin(origin);
        }
        Some(resolution)
    }

    /// Always records the opening; the panel becomes a target only while zoom is on.
    pub fn on_overlay_opened(&mut self, panel: &H::Node) {
        self.opened.push(panel.clone());
        if self.is_active() {
            self.host.set_panel_flag(panel, true);
        }
    }

    /// Unflags regardless of zoom state so a stale marker never survives a close.
    pub fn on_overlay_closed(&mut self, panel: &H::Node) {
        self.host.set_panel_flag(panel, false);
        self.opened.remove(panel);
    }

    /// Escape only ever leaves zoom mode.
    pub fn on_escape(&mut self) {
        if self.is_active() {
            self.deactivate();
        }
    }

    /// Returns whether the key event was consumed.
    pub fn on_shortcut(&mut self, focus: &FocusTarget) -> bool {
        if is_editable_surface(focus) {
            return false;
        }
        self.toggle();
        true
    }

    /// Routes a keydown; `true` means the host should prevent its default action.
    pub fn on_key(&mut self, input: &KeyInput, focus: &FocusTarget) -> bool {
        match classify_key(input, &self.config) {
            KeyIntent::Escape => {
                self.on_escape();
                false
            }
            KeyIntent::Shortcut => self.on_shortcut(focus),
            KeyIntent::Ignore => false,
        }
    }

    /// Drops the pointer subscription without touching the published state.
    pub fn shutdown(&mut self) {
        self.release_pointer();
    }

    fn release_pointer(&mut self) {
        if self.tracking {
            self.host.unsubscribe_pointer();
            self.tracking = false;
        }
    }

    fn present(&mut self) {
        let presentation = self.config.presentation(self.is_active());
        self.host.present_toggle(&presentation);
    }
}
