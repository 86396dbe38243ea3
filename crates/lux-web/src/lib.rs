pub mod canvas;
pub mod dom;
pub mod frame_loop;
pub mod host;
#[cfg(feature = "liquid")]
pub mod liquid;
pub mod orbital;
pub mod runner;
pub mod sheet;
pub mod split;

use std::cell::RefCell;

use lux_engine::{SiteConfig, Theme};
use wasm_bindgen::prelude::*;

pub use runner::PageRunner;

/// Element holding optional JSON site configuration.
pub const CONFIG_ELEMENT_ID: &str = "lux-config";

thread_local! {
    static RUNNER: RefCell<Option<PageRunner>> = const { RefCell::new(None) };
}

fn with_runner<R>(f: impl FnOnce(&mut PageRunner) -> R) -> Result<R, JsValue> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .ok_or_else(|| JsValue::from_str("lux not initialized"))?;
        Ok(f(runner))
    })
}

/// Read `<script type="application/json" id="lux-config">` if present.
pub fn read_config(document: &web_sys::Document) -> lux_engine::Result<SiteConfig> {
    match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    {
        Some(json) if !json.trim().is_empty() => SiteConfig::from_json(&json),
        _ => Ok(SiteConfig::default()),
    }
}

fn boot() -> Result<(), JsValue> {
    let document = dom::document()?;
    let (config, config_error) = match read_config(&document) {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };
    let _ = console_log::init_with_level(config.log_level.to_level());
    if let Some(err) = config_error {
        log::error!("{err}; using defaults");
    }

    let mut runner = PageRunner::new(config)?;
    runner.start()?;
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("lux: initialized");
    Ok(())
}

#[wasm_bindgen(start)]
pub fn lux_start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = dom::document()?;
    if document.ready_state() != "loading" {
        return boot();
    }
    let on_ready = Closure::once_into_js(|| {
        if let Err(err) = boot() {
            web_sys::console::error_1(&err);
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
}

#[wasm_bindgen]
pub fn lux_theme() -> Result<String, JsValue> {
    with_runner(|r| r.theme().as_str().to_string())
}

#[wasm_bindgen]
pub fn lux_set_theme(name: &str) -> Result<(), JsValue> {
    let theme: Theme = name.parse().map_err(dom::js_error)?;
    with_runner(|r| r.set_theme(theme))
}

#[wasm_bindgen]
pub fn lux_scroll_to(y: f64, immediate: bool) -> Result<(), JsValue> {
    with_runner(|r| {
        let options = lux_engine::ScrollToOptions {
            immediate,
            ..Default::default()
        };
        r.scroll().borrow_mut().scroll_to(y, options);
    })
}

#[wasm_bindgen]
pub fn lux_dispose() {
    let runner = RUNNER.with(|cell| cell.borrow_mut().take());
    if let Some(mut runner) = runner {
        runner.dispose();
    }
}
