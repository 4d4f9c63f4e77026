//! `<audio>` element behind the playlist controller.

use crate::Player;
use portfolio_core::{MediaHandle, PlayError, PlayTicket};
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub struct WebMedia {
    audio: web::HtmlAudioElement,
    player: Weak<RefCell<Player>>,
}

impl WebMedia {
    /// `player` is the controller that owns this handle; play outcomes are
    /// reported back to it.
    pub fn new(audio: web::HtmlAudioElement, player: Weak<RefCell<Player>>) -> Self {
        Self { audio, player }
    }

    // Always delivered from a fresh task: the controller is mid-borrow
    // while it issues the play command.
    fn report(&self, ticket: PlayTicket, promise: Result<js_sys::Promise, JsValue>) {
        let player = self.player.clone();
        spawn_local(async move {
            let result = match promise {
                Ok(p) => JsFuture::from(p).await.map(|_| ()).map_err(play_error),
                Err(e) => Err(play_error(e)),
            };
            let Some(player) = player.upgrade() else {
                return;
            };
            match player.try_borrow_mut() {
                Ok(mut p) => p.play_settled(ticket, result),
                Err(_) => log::warn!("[player] controller busy; play result #{} lost", ticket.id()),
            };
        });
    }
}

fn play_error(e: JsValue) -> PlayError {
    match e.dyn_ref::<web::DomException>() {
        Some(ex) if ex.name() == "NotAllowedError" => PlayError::NotAllowed(ex.message()),
        Some(ex) => PlayError::Rejected(format!("{}: {}", ex.name(), ex.message())),
        None => PlayError::Rejected(format!("{:?}", e)),
    }
}

impl MediaHandle for WebMedia {
    fn set_source(&mut self, uri: &str) {
        self.audio.set_src(uri);
    }

    fn load(&mut self) {
        self.audio.load();
    }

    fn play(&mut self, ticket: PlayTicket) {
        let promise = self.audio.play();
        self.report(ticket, promise);
    }

    fn pause(&mut self) {
        _ = self.audio.pause();
    }

    fn current_time(&self) -> f64 {
        self.audio.current_time()
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.audio.set_current_time(seconds);
    }

    fn duration(&self) -> f64 {
        self.audio.duration()
    }

    fn set_volume(&mut self, volume: f64) {
        self.audio.set_volume(volume);
    }
}
