use serde::Deserialize;

use crate::model::TogglePresentation;

/// Id of the optional `<script type="application/json">` element carrying overrides.
pub const CONFIG_ELEMENT_ID: &str = "zoom-lens-config";

/// Page vocabulary the magnifier reads and writes: selectors, class markers,
/// custom property names, the shortcut letter and the toggle labels.
/// Every field falls back to its default when missing from the JSON.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ZoomConfig {
    pub toggle_id: String,
    pub lens_selector: String,
    /// Marker class on `<body>` while zoom mode is on.
    pub active_class: String,
    pub toggle_active_class: String,
    pub panel_class: String,
    pub panel_open_class: String,
    pub panel_target_class: String,
    pub panel_content_selector: String,
    pub backdrop_selector: String,
    pub zoom_region_selector: String,
    pub panel_opened_event: String,
    pub panel_closed_event: String,
    pub pointer_x_property: String,
    pub pointer_y_property: String,
    pub origin_x_property: String,
    pub origin_y_property: String,
    pub shortcut_key: char,
    pub enable_label: String,
    pub disable_label: String,
    pub shortcut_word: String,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            toggle_id: "zoomToggleButton".into(),
            lens_selector: ".zoom-lens".into(),
            active_class: "zoom-mode-active".into(),
            toggle_active_class: "zoom-toggle-active".into(),
            panel_class: "modal".into(),
            panel_open_class: "show".into(),
            panel_target_class: "zoom-mode-target".into(),
            panel_content_selector: ".modal-dialog".into(),
            backdrop_selector: ".modal-backdrop".into(),
            zoom_region_selector: ".zoom-target".into(),
            panel_opened_event: "show.bs.modal".into(),
            panel_closed_event: "hidden.bs.modal".into(),
            pointer_x_property: "--zoom-pointer-x".into(),
            pointer_y_property: "--zoom-pointer-y".into(),
            origin_x_property: "--zoom-origin-x".into(),
            origin_y_property: "--zoom-origin-y".into(),
            shortcut_key: 'z',
            enable_label: "Enable zoom mode".into(),
            disable_label: "Disable zoom mode".into(),
            shortcut_word: "shortcut".into(),
        }
    }
}

impl ZoomConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn panel_selector(&self) -> String {
        format!(".{}", self.panel_class)
    }

    /// e.g. `Shift+Z`
    pub fn shortcut_hint(&self) -> String {
        format!("Shift+{}", self.shortcut_key.to_ascii_uppercase())
    }

    /// `KeyboardEvent.code` of the shortcut letter, e.g. `KeyZ`.
    pub fn shortcut_code(&self) -> String {
        format!("Key{}", self.shortcut_key.to_ascii_uppercase())
    }

    pub fn presentation(&self, active: bool) -> TogglePresentation {
        let base = if active { &self.disable_label } else { &self.enable_label };
        TogglePresentation {
            pressed: active,
            label: format!("{} ({}: {})", base, self.shortcut_word, self.shortcut_hint()),
        }
    }
}
