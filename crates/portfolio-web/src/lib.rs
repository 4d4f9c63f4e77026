#![cfg(target_arch = "wasm32")]
//! Browser front-end: binds the settings store and the playlist controller
//! to the page.

pub mod constants;
pub mod dom;
pub mod env;
pub mod events;
pub mod media;
pub mod overlay;
pub mod storage;
pub mod theme;
pub mod ui;

use portfolio_core::{
    default_catalog, KeyValueStore, PlaylistController, SettingsStore, StoreConfig,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub type Store = SettingsStore<Box<dyn KeyValueStore>, ui::DomSettingsView>;
pub type Player = PlaylistController<media::WebMedia, ui::DomPlayerView>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).ok();
    // the store narrows this to Info unless debug mode is on
    log::set_max_level(log::LevelFilter::Info);
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let env = env::detect(&window);
    let ui = ui::UiBindings::bind(&document)?;

    let store: Rc<RefCell<Store>> = Rc::new(RefCell::new(SettingsStore::load(
        env,
        StoreConfig::default(),
        storage::open(&window),
        ui.settings_view(),
    )));
    {
        let mut s = store.borrow_mut();
        s.sync_controls();
        s.apply_all();
        theme::restore(&document, &s);
    }

    let player: Rc<RefCell<Player>> = Rc::new_cyclic(|weak| {
        RefCell::new(PlaylistController::new(
            default_catalog(),
            media::WebMedia::new(ui.audio.clone(), weak.clone()),
            ui.player_view(),
        ))
    });
    let panel = Rc::new(RefCell::new(overlay::PanelUi::bind(
        &document,
        env.is_handheld(),
    )));

    events::wire_settings_controls(&ui.controls, &store);
    events::wire_panel(&document, &panel);
    events::wire_theme_controls(&document, &store);
    events::wire_transport(&document, ui.playlist_rows(), &player);
    events::wire_media_events(&document, &ui.audio, &player);
    // shortcuts must see the first key press before autoplay does
    events::wire_global_keydown(&document, player.clone(), panel.clone());
    events::wire_autoplay(&document, &player, &store);
    events::wire_window_events(&window, &store);

    log::info!("[init] ready");
    Ok(())
}
