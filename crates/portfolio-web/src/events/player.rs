//! Transport controls, playlist rows and `<audio>` events.

use crate::constants::*;
use crate::dom::{add_click_listener, listen};
use crate::{Player, Store};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_transport(
    document: &web::Document,
    rows: &[web::Element],
    player: &Rc<RefCell<Player>>,
) {
    {
        let player = player.clone();
        add_click_listener(document, PLAY_PAUSE_ID, move |_| {
            player.borrow_mut().toggle_play_pause()
        });
    }
    {
        let player = player.clone();
        add_click_listener(document, NEXT_ID, move |_| player.borrow_mut().next_track());
    }
    {
        let player = player.clone();
        add_click_listener(document, PREV_ID, move |_| player.borrow_mut().prev_track());
    }

    if let Some(bar) = document.get_element_by_id(PROGRESS_BAR_ID) {
        let player = player.clone();
        let bar_for_rect = bar.clone();
        listen(&bar, "click", move |ev: web::MouseEvent| {
            let rect = bar_for_rect.get_bounding_client_rect();
            if rect.width() <= 0.0 {
                return;
            }
            let fraction = (ev.client_x() as f64 - rect.left()) / rect.width();
            player.borrow_mut().seek(fraction);
        });
    }

    if let Some(slider) = document.get_element_by_id(VOLUME_SLIDER_ID) {
        let player = player.clone();
        listen(&slider, "input", move |ev: web::Event| {
            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
            else {
                return;
            };
            if let Ok(percent) = input.value().parse::<f64>() {
                player.borrow_mut().set_volume(percent);
            }
        });
    }

    for (position, row) in rows.iter().enumerate() {
        let index = row
            .get_attribute("data-index")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(position);
        let player = player.clone();
        listen(row, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            player.borrow_mut().select_track(index);
        });
    }
}

pub fn wire_media_events(
    document: &web::Document,
    audio: &web::HtmlAudioElement,
    player: &Rc<RefCell<Player>>,
) {
    {
        let player = player.clone();
        listen(audio, "loadedmetadata", move |_: web::Event| {
            player.borrow_mut().on_metadata_ready()
        });
    }
    {
        let player = player.clone();
        listen(audio, "timeupdate", move |_: web::Event| {
            player.borrow_mut().on_time_update(Instant::now())
        });
    }
    {
        let player = player.clone();
        listen(audio, "ended", move |_: web::Event| player.borrow_mut().on_ended());
    }
    {
        let player = player.clone();
        let audio_for_code = audio.clone();
        listen(audio, "error", move |_: web::Event| {
            let code = audio_for_code.error().map(|e| e.code());
            player.borrow_mut().on_error(code);
        });
    }
    {
        let player = player.clone();
        listen(audio, "canplay", move |_: web::Event| player.borrow_mut().on_can_play());
    }
    // play/pause from outside the page (media keys, OS controls)
    {
        let player = player.clone();
        let el = audio.clone();
        listen(audio, "play", move |_: web::Event| {
            if !el.paused() {
                player.borrow_mut().on_media_playing();
            }
        });
    }
    {
        let player = player.clone();
        let el = audio.clone();
        listen(audio, "pause", move |_: web::Event| {
            // a pause also fires right before `ended`
            if el.paused() && !el.ended() {
                player.borrow_mut().on_media_paused();
            }
        });
    }
    {
        let player = player.clone();
        let doc = document.clone();
        listen(document, "visibilitychange", move |_: web::Event| {
            if doc.hidden() {
                player.borrow_mut().on_visibility_hidden();
            }
        });
    }
}

/// Browsers only allow audio after a gesture, so autoplay waits for the
/// first click, key press or touch.
pub fn wire_autoplay(
    document: &web::Document,
    player: &Rc<RefCell<Player>>,
    store: &Rc<RefCell<Store>>,
) {
    let started = Rc::new(RefCell::new(false));
    for event in ["click", "keydown", "touchstart"] {
        let player = player.clone();
        let store = store.clone();
        let started = started.clone();
        listen(document, event, move |_: web::Event| {
            if started.replace(true) {
                return;
            }
            let enabled = store.borrow().get().misc.autoplay_music;
            player.borrow_mut().autoplay(enabled);
        });
    }
}
