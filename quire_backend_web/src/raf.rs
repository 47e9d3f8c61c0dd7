// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `requestAnimationFrame` frame source.
//!
//! [`RafLoop`] drives a [`FrameTick`]-based animation loop using the browser's
//! `requestAnimationFrame` API. Each callback receives a
//! [`DOMHighResTimeStamp`][mdn] (milliseconds on the `performance.now()`
//! clock), which is converted to microsecond [`HostTime`].
//!
//! Unlike a free-running render loop, the notebook only needs frames while
//! something animates, so the callback decides after every frame whether the
//! loop keeps going.
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/API/DOMHighResTimeStamp
//! [`FrameTick`]: quire_core::time::FrameTick
//! [`HostTime`]: quire_core::time::HostTime

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};
use core::ops::ControlFlow;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use quire_core::time::FrameTick;

use crate::host_time_from_millis;

// Direct global bindings instead of `web_sys::Window` methods; avoids
// fetching (and unwrapping) the Window/Performance objects on every frame.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    pub(crate) fn performance_now() -> f64;

    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(id: i32);
}

/// A `requestAnimationFrame` loop that emits [`FrameTick`] events.
///
/// Create with [`RafLoop::new`], then call [`start`](Self::start) whenever
/// something begins to animate. The loop re-registers itself each frame
/// until the callback returns [`ControlFlow::Break`], [`stop`](Self::stop)
/// is called, or the `RafLoop` is dropped.
///
/// [`FrameTick`]: quire_core::time::FrameTick
pub struct RafLoop {
    inner: Rc<RafInner>,
}

type RafClosure = Closure<dyn FnMut(f64)>;
type FrameCallback = Box<dyn FnMut(FrameTick) -> ControlFlow<()>>;

struct RafInner {
    /// The JS closure registered with `requestAnimationFrame`.
    ///
    /// Created on the first `start()` and reused by later restarts, so a
    /// restart never drops a closure the browser may still call.
    closure: RefCell<Option<RafClosure>>,

    /// The user-supplied callback that receives [`FrameTick`] events.
    callback: RefCell<FrameCallback>,

    /// Monotonically increasing frame counter (becomes `FrameTick::frame_index`).
    frame_counter: Cell<u64>,

    /// Whether a frame is currently requested.
    running: Cell<bool>,

    /// The ID returned by the most recent `requestAnimationFrame` call,
    /// used by [`cancel_animation_frame`] when stopping.
    raf_id: Cell<i32>,
}

impl RafInner {
    fn request(&self) {
        if let Some(ref closure) = *self.closure.borrow() {
            let id = request_animation_frame(closure.as_ref().unchecked_ref());
            self.raf_id.set(id);
        }
    }
}

impl RafLoop {
    /// Creates a new `RafLoop` that is **not yet running**.
    ///
    /// `callback` receives a [`FrameTick`] on each animation frame once
    /// [`start`](Self::start) is called, and returns whether it needs
    /// another frame.
    ///
    /// [`FrameTick`]: quire_core::time::FrameTick
    pub fn new(callback: impl FnMut(FrameTick) -> ControlFlow<()> + 'static) -> Self {
        Self {
            inner: Rc::new(RafInner {
                closure: RefCell::new(None),
                callback: RefCell::new(Box::new(callback)),
                frame_counter: Cell::new(0),
                running: Cell::new(false),
                raf_id: Cell::new(0),
            }),
        }
    }

    /// Requests frames until the callback breaks.
    ///
    /// If already running, this is a no-op.
    pub fn start(&self) {
        if self.inner.running.get() {
            return;
        }
        self.inner.running.set(true);

        if self.inner.closure.borrow().is_none() {
            // The closure holds a weak handle: the loop owns the closure, so
            // a strong one would keep `RafInner` alive forever.
            let weak = Rc::downgrade(&self.inner);
            let closure = Closure::wrap(Box::new(move |timestamp_ms: f64| {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                if !inner.running.get() {
                    return;
                }

                let frame_index = inner.frame_counter.get();
                inner.frame_counter.set(frame_index + 1);

                let tick = FrameTick {
                    now: host_time_from_millis(timestamp_ms),
                    frame_index,
                };

                // The borrow is scoped so it doesn't overlap with the
                // `closure` RefCell.
                let flow = inner.callback.borrow_mut()(tick);

                if flow.is_break() {
                    inner.running.set(false);
                } else if inner.running.get() {
                    inner.request();
                }
            }) as Box<dyn FnMut(f64)>);
            *self.inner.closure.borrow_mut() = Some(closure);
        }

        self.inner.request();
    }

    /// Stops the loop.
    ///
    /// The pending `requestAnimationFrame` callback is cancelled. Can be
    /// restarted by calling [`start`](Self::start) again.
    pub fn stop(&self) {
        if !self.inner.running.get() {
            return;
        }
        self.inner.running.set(false);
        cancel_animation_frame(self.inner.raf_id.get());
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        self.stop();
        // Drop the JS closure so it doesn't leak.
        self.inner.closure.borrow_mut().take();
    }
}

impl core::fmt::Debug for RafLoop {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RafLoop")
            .field("running", &self.inner.running.get())
            .field("frame_counter", &self.inner.frame_counter.get())
            .finish()
    }
}
