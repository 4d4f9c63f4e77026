use crate::dom::listen;
use crate::overlay::PanelUi;
use crate::Player;
use portfolio_core::shortcuts::is_text_entry;
use portfolio_core::{shortcut_for_key, Modifiers, Shortcut};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn typing_into_field(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| is_text_entry(&el.tag_name()))
        .unwrap_or(false)
}

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    player: &Rc<RefCell<Player>>,
    panel: &Rc<RefCell<PanelUi>>,
) {
    if typing_into_field(ev) {
        return;
    }
    let mods = Modifiers {
        ctrl: ev.ctrl_key(),
        meta: ev.meta_key(),
    };
    let Some(shortcut) = shortcut_for_key(&ev.code(), mods) else {
        return;
    };
    ev.prevent_default();
    log::debug!("[keys] {:?}", shortcut);
    match shortcut {
        Shortcut::TogglePlay => player.borrow_mut().toggle_play_pause(),
        Shortcut::NextTrack => player.borrow_mut().next_track(),
        Shortcut::PrevTrack => player.borrow_mut().prev_track(),
        Shortcut::CloseSettings => panel.borrow_mut().close(),
        Shortcut::ToggleSettings => panel.borrow_mut().toggle(),
    }
}

pub fn wire_global_keydown(
    document: &web::Document,
    player: Rc<RefCell<Player>>,
    panel: Rc<RefCell<PanelUi>>,
) {
    listen(document, "keydown", move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &player, &panel);
    });
}
