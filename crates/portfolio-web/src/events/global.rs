use crate::dom::listen;
use crate::Store;
use portfolio_core::constants::RESIZE_DEBOUNCE_MS;
use portfolio_core::Debounce;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Resize and orientation changes re-apply every settings effect once the
/// burst settles; stray errors and rejections are logged and kept out of the
/// console's default report.
pub fn wire_window_events(window: &web::Window, store: &Rc<RefCell<Store>>) {
    let debounce = Rc::new(RefCell::new(Debounce::new(Duration::from_millis(
        RESIZE_DEBOUNCE_MS,
    ))));
    for event in ["resize", "orientationchange"] {
        let store = store.clone();
        let debounce = debounce.clone();
        let win = window.clone();
        listen(window, event, move |_: web::Event| {
            schedule_apply(&win, &store, &debounce);
        });
    }
    listen(window, "error", move |ev: web::ErrorEvent| {
        log::debug!(
            "[global] script error: {} ({}:{})",
            ev.message(),
            ev.filename(),
            ev.lineno()
        );
        ev.prevent_default();
    });
    listen(window, "unhandledrejection", move |ev: web::PromiseRejectionEvent| {
        log::debug!("[global] unhandled rejection: {:?}", ev.reason());
        ev.prevent_default();
    });
}

fn schedule_apply(
    window: &web::Window,
    store: &Rc<RefCell<Store>>,
    debounce: &Rc<RefCell<Debounce>>,
) {
    let (token, delay) = {
        let mut d = debounce.borrow_mut();
        (d.schedule(), d.delay())
    };
    let store = store.clone();
    let debounce = debounce.clone();
    let fire = Closure::once_into_js(move || {
        if debounce.borrow().is_current(token) {
            log::debug!("[global] viewport settled, re-applying settings");
            store.borrow_mut().apply_all();
        }
    });
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        fire.unchecked_ref(),
        delay.as_millis() as i32,
    ) {
        log::warn!("[global] could not arm resize timer: {:?}", e);
    }
}
