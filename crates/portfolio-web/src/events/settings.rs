//! Settings panel controls, reset and theme pickers.

use crate::constants::*;
use crate::dom::{add_click_listener, listen, query_all};
use crate::overlay::PanelUi;
use crate::theme;
use crate::ui::ControlBinding;
use crate::Store;
use portfolio_core::settings::ValueKind;
use portfolio_core::{PanelSection, SettingValue};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Checkboxes commit on `change`, sliders on every `input`.
pub fn wire_settings_controls(controls: &[ControlBinding], store: &Rc<RefCell<Store>>) {
    for binding in controls {
        let path = binding.path;
        let input = binding.input.clone();
        let store = store.clone();
        let event = match path.kind() {
            ValueKind::Bool => "change",
            ValueKind::Int => "input",
        };
        listen(&binding.input, event, move |_: web::Event| {
            let value = match path.kind() {
                ValueKind::Bool => SettingValue::Bool(input.checked()),
                ValueKind::Int => match input.value().parse::<f64>() {
                    Ok(n) if n.is_finite() => SettingValue::Int(n.round() as i64),
                    _ => {
                        log::debug!("[settings] ignoring non-numeric {}", path);
                        return;
                    }
                },
            };
            if let Err(e) = store.borrow_mut().set_path(path, value) {
                log::warn!("[settings] {}", e);
            }
        });
    }
}

pub fn wire_panel(document: &web::Document, panel: &Rc<RefCell<PanelUi>>) {
    {
        let panel = panel.clone();
        add_click_listener(document, SETTINGS_BUTTON_ID, move |_| panel.borrow_mut().toggle());
    }
    {
        let panel = panel.clone();
        add_click_listener(document, SETTINGS_CLOSE_ID, move |_| panel.borrow_mut().close());
    }
    {
        let panel = panel.clone();
        listen(document, "click", move |ev: web::MouseEvent| {
            let target = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok());
            panel.borrow_mut().dismiss_click(target.as_ref());
        });
    }
    for category in query_all(document, CATEGORY_SELECTOR) {
        let Some(section) = category
            .get_attribute("data-section")
            .and_then(|name| PanelSection::from_name(&name))
        else {
            continue;
        };
        let panel = panel.clone();
        listen(&category, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            panel.borrow_mut().show(section);
        });
    }
    for button in query_all(document, BACK_BUTTON_SELECTOR) {
        let panel = panel.clone();
        listen(&button, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            panel.borrow_mut().back();
        });
    }
}

pub fn wire_reset(document: &web::Document, store: &Rc<RefCell<Store>>) {
    let store = store.clone();
    let doc = document.clone();
    add_click_listener(document, RESET_SETTINGS_ID, move |_| {
        let confirmed = web::window()
            .and_then(|w| w.confirm_with_message(RESET_CONFIRM_TEXT).ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        store.borrow_mut().reset();
        theme::reset(&doc);
    });
}

pub fn wire_theme_controls(document: &web::Document, store: &Rc<RefCell<Store>>) {
    for option in query_all(document, THEME_OPTION_SELECTOR) {
        let store = store.clone();
        let doc = document.clone();
        listen(&option, "click", move |ev: web::MouseEvent| {
            let Some(option) = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
                .and_then(|el| el.closest(THEME_OPTION_SELECTOR).ok().flatten())
            else {
                return;
            };
            ev.prevent_default();
            if let Some(name) = option.get_attribute("data-theme") {
                theme::select(&doc, &mut store.borrow_mut(), &name);
            }
        });
    }
    {
        let store = store.clone();
        let doc = document.clone();
        add_click_listener(document, APPLY_CUSTOM_THEME_ID, move |_| {
            theme::apply_from_pickers(&doc, &mut store.borrow_mut());
        });
    }
    wire_reset(document, store);
}
