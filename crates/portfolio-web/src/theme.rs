//! Named themes and the custom palette maker.

use crate::constants::*;
use crate::dom::{input_element, query_all, set_class};
use crate::Store;
use portfolio_core::theme::PALETTE_VARS;
use portfolio_core::CustomTheme;
use wasm_bindgen::JsCast;
use web_sys as web;

fn root_style(document: &web::Document) -> Option<web::CssStyleDeclaration> {
    document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .map(|el| el.style())
}

fn set_body_theme(document: &web::Document, name: &str) {
    if let Some(body) = document.body() {
        _ = body.set_attribute("data-theme", name);
    }
}

fn clear_palette(document: &web::Document) {
    if let Some(style) = root_style(document) {
        for name in PALETTE_VARS {
            _ = style.remove_property(name);
        }
    }
}

fn mark_active_option(document: &web::Document, name: Option<&str>) {
    for option in query_all(document, THEME_OPTION_SELECTOR) {
        let active = name.is_some() && option.get_attribute("data-theme").as_deref() == name;
        set_class(&option, ACTIVE_CLASS, active);
    }
}

/// Switch to a named theme (no persistence).
pub fn apply_named(document: &web::Document, name: &str) {
    if name != CustomTheme::NAME {
        clear_palette(document);
    }
    set_body_theme(document, name);
    mark_active_option(document, Some(name));
}

/// Write a custom palette onto the root element.
pub fn apply_custom(document: &web::Document, theme: &CustomTheme) {
    if let Some(style) = root_style(document) {
        for (name, value) in theme.palette() {
            _ = style.set_property(name, &value);
        }
    }
    set_body_theme(document, CustomTheme::NAME);
    mark_active_option(document, None);
}

fn fill_pickers(document: &web::Document, theme: &CustomTheme) {
    if let Some(input) = input_element(document, PRIMARY_COLOR_ID) {
        input.set_value(&theme.primary);
    }
    if let Some(input) = input_element(document, ACCENT_COLOR_ID) {
        input.set_value(&theme.accent);
    }
}

/// Restore the saved theme at startup.
pub fn restore(document: &web::Document, store: &Store) {
    let custom = store.custom_theme();
    if let Some(theme) = &custom {
        fill_pickers(document, theme);
    }
    match (store.theme_preference(), custom) {
        (Some(pref), Some(theme)) if pref == CustomTheme::NAME => apply_custom(document, &theme),
        (Some(pref), _) if pref != CustomTheme::NAME => apply_named(document, &pref),
        _ => {}
    }
}

/// Back to the stock theme after a settings reset.
pub fn reset(document: &web::Document) {
    apply_named(document, DEFAULT_THEME);
}

/// Choose a theme from the picker and remember it.
pub fn select(document: &web::Document, store: &mut Store, name: &str) {
    log::info!("[theme] {}", name);
    apply_named(document, name);
    store.save_theme_preference(name);
}

/// Build, apply and persist a palette from the two colour pickers.
pub fn apply_from_pickers(document: &web::Document, store: &mut Store) {
    let (Some(primary), Some(accent)) = (
        input_element(document, PRIMARY_COLOR_ID),
        input_element(document, ACCENT_COLOR_ID),
    ) else {
        return;
    };
    let theme = CustomTheme::new(&primary.value(), &accent.value());
    log::info!("[theme] custom {} / {}", theme.primary, theme.accent);
    apply_custom(document, &theme);
    store.save_custom_theme(&theme);
}
