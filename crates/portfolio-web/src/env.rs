use portfolio_core::{DeviceClass, EnvCapabilities};
use wasm_bindgen::JsValue;
use web_sys as web;

/// Read the device signals once at startup.
pub fn detect(window: &web::Window) -> EnvCapabilities {
    let navigator = window.navigator();
    let ua = navigator.user_agent().unwrap_or_default();
    let device = DeviceClass::from_user_agent(&ua);

    let touch = js_sys::Reflect::has(window, &JsValue::from_str("ontouchstart")).unwrap_or(false)
        || navigator.max_touch_points() > 0;

    let prefers_reduced_motion = window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false);

    // 0 when the browser hides it
    let cores = navigator.hardware_concurrency();
    let logical_cores = (cores.is_finite() && cores >= 1.0).then_some(cores as u32);

    let env = EnvCapabilities {
        device,
        touch,
        prefers_reduced_motion,
        logical_cores,
    };
    log::info!(
        "[env] device={} touch={} reduced_motion={} cores={:?}",
        device.name(),
        touch,
        prefers_reduced_motion,
        logical_cores
    );
    env
}
