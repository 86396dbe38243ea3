use std::cell::RefCell;
use std::rc::Rc;

use lux_engine::{OrbitalConfig, OrbitalSystem, StyleSource, ThemeBus};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlCanvasElement, Window};

use crate::canvas::CanvasSurface;
use crate::dom::Listener;
use crate::frame_loop::FrameLoop;

pub const CANVAS_ID: &str = "hero-blob";

/// The orbital system attached to the hero canvas, with its resize
/// listener and frame loop.
pub struct OrbitalMount {
    system: Rc<RefCell<OrbitalSystem<CanvasSurface>>>,
    frame: Option<FrameLoop>,
    resize: Option<Listener>,
}

impl OrbitalMount {
    /// Returns `Ok(None)` when the page has no hero canvas.
    pub fn mount(
        window: &Window,
        document: &Document,
        bus: ThemeBus,
        style: Rc<dyn StyleSource>,
        config: &OrbitalConfig,
    ) -> Result<Option<Self>, JsValue> {
        let Some(element) = document.get_element_by_id(CANVAS_ID) else {
            log::debug!("orbital: no #{CANVAS_ID}, skipping");
            return Ok(None);
        };
        let canvas = element.dyn_into::<HtmlCanvasElement>()?;
        let surface = CanvasSurface::new(canvas)?;
        let system = Rc::new(RefCell::new(OrbitalSystem::new(surface, style, bus, config)));

        let resize = {
            let system = Rc::clone(&system);
            Listener::new(window.as_ref(), "resize", move |_| system.borrow_mut().resize())?
        };

        Ok(Some(Self {
            system,
            frame: None,
            resize: Some(resize),
        }))
    }

    pub fn start(&mut self) -> Result<(), JsValue> {
        if !self.system.borrow_mut().start() {
            return Ok(());
        }
        let system = Rc::clone(&self.system);
        self.frame = Some(FrameLoop::start(move |_| match system.borrow_mut().tick() {
            Ok(running) => running,
            Err(err) => {
                log::error!("orbital: {err}");
                false
            }
        })?);
        Ok(())
    }

    pub fn stop(&mut self) {
        self.system.borrow_mut().stop();
        if let Some(frame) = self.frame.take() {
            frame.cancel();
        }
    }

    /// Stop the loop, drop the resize listener and release the canvas.
    pub fn dispose(&mut self) {
        self.stop();
        self.resize = None;
        self.system.borrow_mut().dispose();
    }

    pub fn is_running(&self) -> bool {
        self.system.borrow().lifecycle().is_running()
    }
}
