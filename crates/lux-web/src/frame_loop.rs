use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::dom::window;

struct Inner {
    // Holds the frame closure so it can reschedule itself.
    closure: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    handle: Cell<Option<i32>>,
}

impl Inner {
    fn request(&self) -> Result<(), JsValue> {
        let closure = self.closure.borrow();
        let Some(callback) = closure.as_ref() else {
            return Ok(());
        };
        let id = window()?.request_animation_frame(callback.as_ref().unchecked_ref())?;
        self.handle.set(Some(id));
        Ok(())
    }
}

/// A `requestAnimationFrame` chain with an explicit handle.
///
/// The callback receives the frame timestamp in milliseconds and returns
/// `false` to end the chain. Dropping the handle cancels any pending frame.
pub struct FrameLoop {
    inner: Rc<Inner>,
}

impl FrameLoop {
    pub fn start<F>(mut on_frame: F) -> Result<Self, JsValue>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let inner = Rc::new(Inner {
            closure: RefCell::new(None),
            handle: Cell::new(None),
        });
        let weak: Weak<Inner> = Rc::downgrade(&inner);

        *inner.closure.borrow_mut() = Some(Closure::wrap(Box::new(move |time: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.handle.set(None);
            if !on_frame(time) {
                return;
            }
            if let Err(err) = inner.request() {
                log::error!("frame loop: failed to schedule frame: {err:?}");
            }
        }) as Box<dyn FnMut(f64)>));

        inner.request()?;
        Ok(Self { inner })
    }

    /// Whether a frame is scheduled.
    pub fn is_active(&self) -> bool {
        self.inner.handle.get().is_some()
    }

    pub fn cancel(&self) {
        if let Some(id) = self.inner.handle.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
