//! Browser animation-frame loop
//!
//! Calls a closure on every `requestAnimationFrame` tick with the frame
//! timestamp until [`FrameLoop::stop`] is called or the loop is dropped.
//! Stopping cancels the pending frame request synchronously.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub struct FrameLoop {
    handle: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl FrameLoop {
    /// Start requesting frames immediately
    pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Self {
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let handle_for_frame = handle.clone();
        let callback_for_frame = callback.clone();
        *callback.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
            handle_for_frame.set(None);
            on_frame(timestamp);
            handle_for_frame.set(request_frame(&callback_for_frame));
        }));

        handle.set(request_frame(&callback));

        Self { handle, callback }
    }

    pub fn is_running(&self) -> bool {
        self.callback.borrow().is_some()
    }

    /// Cancel the pending frame and release the callback
    pub fn stop(&self) {
        if let Some(id) = self.handle.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        // Breaks the callback -> cell -> callback cycle
        self.callback.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(callback: &FrameCallback) -> Option<i32> {
    let window = web_sys::window()?;
    let callback = callback.borrow();
    let closure = callback.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}
