use std::rc::Rc;

use log::warn;
use yew::prelude::*;

use super::overlay_panel::OverlayPanel;
use crate::config::ZoomConfig;
use crate::dom::{install_from_page, load_config};

fn page_config() -> ZoomConfig {
    web_sys::window()
        .and_then(|w| w.document())
        .map(|d| load_config(&d))
        .unwrap_or_default()
}

fn set_flag<IN: 'static>(state: &UseStateHandle<bool>, value: bool) -> Callback<IN> {
    let state = state.clone();
    Callback::from(move |_: IN| state.set(value))
}

/// Demo host page: a zoomable article plus two stackable overlay panels.
#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| page_config());
    let details_open = use_state(|| false);
    let settings_open = use_state(|| false);

    // Wire the lens once the toggle button exists; unwire on teardown.
    use_effect_with((), |_| {
        let handle = match install_from_page() {
            Ok(handle) => handle,
            Err(err) => {
                warn!("zoom-lens: install failed: {err:?}");
                None
            }
        };
        move || drop(handle)
    });

    let open_details: Callback<MouseEvent> = set_flag(&details_open, true);
    let open_settings: Callback<MouseEvent> = set_flag(&settings_open, true);
    let close_details: Callback<()> = set_flag(&details_open, false);
    let close_settings: Callback<()> = set_flag(&settings_open, false);

    let cfg: Rc<ZoomConfig> = config.clone();
    let lens_class = cfg.lens_selector.trim_start_matches('.').to_string();
    let region_class = cfg.zoom_region_selector.trim_start_matches('.').to_string();

    html! {
        <>
            <header id="top-bar" style="display:flex; gap:12px; align-items:center; padding:8px 16px; border-bottom:1px solid #30363d;">
                <h1 style="margin:0; font-size:18px; flex:1;">{"Zoom lens"}</h1>
                <button onclick={open_details}>{"Details"}</button>
                <button id={cfg.toggle_id.clone()} type="button" class="zoom-toggle">{"Zoom"}</button>
            </header>
            <div class={lens_class} aria-hidden="true"></div>
            <main class={region_class} style="max-width:720px; margin:24px auto; line-height:1.5;">
                <h2>{"Reading area"}</h2>
                <p>{"Turn the magnifier on with the Zoom button or Shift+Z, then move the pointer over this text. Escape turns it off."}</p>
                <p>{"The magnification origin follows the pointer within whichever surface is under it: this article, or an open panel."}</p>
                <label style="display:flex; flex-direction:column; gap:4px;">
                    <span>{"Notes (Shift+Z types here instead of toggling)"}</span>
                    <textarea rows="3"></textarea>
                </label>
            </main>
            <OverlayPanel title="Details" show={*details_open} on_close={close_details} config={cfg.clone()} layer={50}>
                <p style="margin:0;">{"Panels opened while zoom mode is on become magnification targets right away."}</p>
                <button onclick={open_settings}>{"Open settings on top"}</button>
            </OverlayPanel>
            <OverlayPanel title="Settings" show={*settings_open} on_close={close_settings} config={cfg} layer={60}>
                <label style="display:flex; align-items:center; gap:8px;">
                    <input type="checkbox" />
                    <span>{"Checkbox focus does not block Shift+Z"}</span>
                </label>
                <input type="search" placeholder="Search focus does" />
            </OverlayPanel>
        </>
    }
}
