use std::rc::Rc;

use web_sys::{Element, Event, EventInit};
use yew::prelude::*;

use crate::config::ZoomConfig;

#[derive(Properties, PartialEq, Clone)]
pub struct OverlayPanelProps {
    pub title: AttrValue,
    pub show: bool,
    pub on_close: Callback<()>,
    pub config: Rc<ZoomConfig>,
    /// Stacking layer; later panels sit above earlier ones.
    #[prop_or(50)]
    pub layer: u32,
    #[prop_or_default]
    pub children: Html,
}

/// Fires a bubbling lifecycle event from the panel element, the way a dialog
/// library would, so the lens hears about it through the document.
fn announce(panel: &NodeRef, name: &str) {
    let Some(el) = panel.cast::<Element>() else { return };
    let init = EventInit::new();
    init.set_bubbles(true);
    if let Ok(event) = Event::new_with_event_init_dict(name, &init) {
        let _ = el.dispatch_event(&event);
    }
}

fn class_of(selector: &str) -> String {
    selector.trim_start_matches('.').to_string()
}

#[function_component]
pub fn OverlayPanel(props: &OverlayPanelProps) -> Html {
    let panel_ref = use_node_ref();
    let was_shown = use_mut_ref(|| false);

    {
        let panel_ref = panel_ref.clone();
        let opened = props.config.panel_opened_event.clone();
        let closed = props.config.panel_closed_event.clone();
        use_effect_with(props.show, move |show| {
            let mut prev = was_shown.borrow_mut();
            if *show != *prev {
                announce(&panel_ref, if *show { &opened } else { &closed });
                *prev = *show;
            }
            || ()
        });
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let cfg = &props.config;
    let open_class = props.show.then(|| cfg.panel_open_class.clone());
    let panel_class = classes!(cfg.panel_class.clone(), open_class);
    let backdrop_style = format!(
        "position:fixed; inset:0; background:rgba(0,0,0,0.55); z-index:{};",
        props.layer
    );
    let display = if props.show { "flex" } else { "none" };

    html! {<>
        if props.show {
            <div
                class={class_of(&cfg.backdrop_selector)}
                style={backdrop_style}
            />
        }
        <div
            ref={panel_ref}
            class={panel_class}
            role="dialog"
            aria-modal="true"
            aria-label={props.title.clone()}
            style={format!("display:{display}; position:fixed; inset:0; align-items:center; justify-content:center; pointer-events:none; z-index:{};", props.layer + 1)}
        >
            <div
                class={class_of(&cfg.panel_content_selector)}
                style="pointer-events:auto; background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:340px; max-width:480px; display:flex; flex-direction:column; gap:14px;"
            >
                <div style="display:flex; justify-content:space-between; align-items:center;">
                    <h3 style="margin:0; font-size:18px;">{ props.title.clone() }</h3>
                    <button onclick={close_cb} style="padding:4px 8px;">{"Close"}</button>
                </div>
                { props.children.clone() }
            </div>
        </div>
    </>}
}
