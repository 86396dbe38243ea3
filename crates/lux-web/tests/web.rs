#![cfg(target_arch = "wasm32")]

use lux_engine::{Color, LuxError, MemoryStore, PreferenceStore, Size, Surface, Theme, ThemeBus};
use lux_engine::{OrbitalConfig, OrbitalSystem, StaticStyle};
use lux_web::canvas::CanvasSurface;
use lux_web::frame_loop::FrameLoop;
use lux_web::host::{bind_theme_attribute, LocalStore};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn canvas(width: u32, height: u32) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    let style = canvas.style();
    style.set_property("width", &format!("{width}px")).unwrap();
    style.set_property("height", &format!("{height}px")).unwrap();
    style.set_property("display", "block").unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn canvas_surface_sizes_backing_store() {
    let el = canvas(300, 200);
    let mut surface = CanvasSurface::new(el.clone()).unwrap();
    let size = surface.resize(2.0);
    assert_eq!(size, Size::new(300.0, 200.0));
    assert_eq!(el.width(), 600);
    assert_eq!(el.height(), 400);
    el.remove();
}

#[wasm_bindgen_test]
fn orbital_draws_on_real_canvas() {
    let el = canvas(500, 500);
    let bus = ThemeBus::new(Theme::Dark);
    let style = Rc::new(StaticStyle::new().with("--text-primary", "#ffffff"));
    let surface = CanvasSurface::new(el.clone()).unwrap();
    let mut system = OrbitalSystem::new(surface, style, bus, &OrbitalConfig::default());
    system.start();
    assert!(system.tick().unwrap());
    assert_eq!(system.state().geometry.outer_radius, 215.0);
    el.remove();
}

#[wasm_bindgen_test]
fn local_store_round_trips_theme() {
    let window = web_sys::window().unwrap();
    let mut store = LocalStore::open(&window);
    store.set("lux-test", "dark").unwrap();
    assert_eq!(store.get("lux-test").as_deref(), Some("dark"));
}

#[wasm_bindgen_test]
fn theme_attribute_follows_bus() {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    let icon = document.create_element("svg").unwrap();
    let mut controller =
        lux_engine::ThemeController::load(Box::new(MemoryStore::new().with("theme", "light")));
    bind_theme_attribute(&controller.bus(), root.clone(), Some(icon.clone()));

    controller.toggle_main();
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("dark"));
    assert_eq!(icon.inner_html(), Theme::Dark.toggle_icon().svg());
}

#[wasm_bindgen_test]
fn invalid_color_is_an_error() {
    assert!(matches!("rgb(1,2)".parse::<Color>(), Err(LuxError::InvalidColor(_))));
}

#[wasm_bindgen_test]
fn frame_loop_cancels() {
    let frame = FrameLoop::start(|_| true).unwrap();
    assert!(frame.is_active());
    frame.cancel();
    assert!(!frame.is_active());
}
