// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-delay timer backed by `setInterval`.

use alloc::boxed::Box;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use quire_core::time::Duration;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "setInterval")]
    fn set_interval(callback: &JsValue, delay_ms: i32) -> i32;

    #[wasm_bindgen(js_name = "clearInterval")]
    fn clear_interval(id: i32);
}

/// Calls a closure every `period` until dropped.
pub struct IntervalTimer {
    id: i32,
    // Kept alive for as long as the browser may call it.
    _closure: Closure<dyn FnMut()>,
}

impl IntervalTimer {
    /// Schedules `callback` every `period`, starting one period from now.
    pub fn new(period: Duration, callback: impl FnMut() + 'static) -> Self {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let delay_ms = i32::try_from(period.as_millis()).unwrap_or(i32::MAX);
        let id = set_interval(closure.as_ref().unchecked_ref(), delay_ms);
        Self {
            id,
            _closure: closure,
        }
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        clear_interval(self.id);
    }
}

impl core::fmt::Debug for IntervalTimer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IntervalTimer")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}
