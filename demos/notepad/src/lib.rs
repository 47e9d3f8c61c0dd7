// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web notepad: a stack of `.page` elements turned with a 3D flip.
//!
//! Mounts onto an existing page (see `index.html`), wiring arrow clicks,
//! arrow keys, touch swipes and screen-half clicks to a [`Notebook`], an
//! analog clock ticking every second, the date label, and the growth graph
//! that counts up the first time its page comes into view.
//!
//! Build with: `wasm-pack build --target web demos/notepad`
//!
//! Then serve `demos/notepad/` and open `index.html` in a browser.
//!
//! [`Notebook`]: quire_core::notebook::Notebook

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;
use core::ops::ControlFlow;

use kurbo::Point;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, KeyboardEvent, MouseEvent, TouchEvent,
    Window,
};

use quire_backend_web::{
    ClockFace, DateStamp, DomBook, GrowthGraph, IntervalTimer, RafLoop, init_logger,
};
use quire_core::clock::HandAngles;
use quire_core::config::NotebookConfig;
use quire_core::date::date_label;
use quire_core::input::{NavIntent, SwipeTracker, intent_for_click, intent_for_key};
use quire_core::notebook::Notebook;
use quire_core::time::FrameTick;

/// Everything the event handlers and the frame loop share.
struct Notepad {
    model: Notebook,
    pages: DomBook,
    graph: GrowthGraph,
    swipe: SwipeTracker,
}

impl Notepad {
    /// Handles one navigation request. Returns `true` if frames are needed.
    fn turn(&mut self, intent: NavIntent) -> bool {
        let now = quire_backend_web::now();
        if self.model.turn(intent, now, &mut self.pages).is_err() {
            return false;
        }
        self.pages.hide_nav_hint();
        self.model.needs_frames()
    }

    fn frame(&mut self, tick: FrameTick) -> ControlFlow<()> {
        if let Some(sample) = self.model.frame(tick.now, &mut self.pages) {
            self.graph.show(&sample);
        }
        if self.model.needs_frames() {
            ControlFlow::Continue(())
        } else {
            debug!("frame loop idle after {} frames", tick.frame_index + 1);
            ControlFlow::Break(())
        }
    }
}

/// Entry point; called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let config = NotebookConfig::web();
    let _ = init_logger(config.log_level);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    DomBook::install_style(&document)?;
    let mut pages = DomBook::query(&document)?;
    let graph = GrowthGraph::query(&document);
    if config.graph_page.is_some() && !graph.is_present() {
        debug!("growth graph elements missing; counter disabled");
    }
    graph.reset();

    let mut model = match Notebook::new(pages.page_count(), config, graph.is_present()) {
        Ok(model) => model,
        Err(err) => {
            warn!("notepad not mounted: {err}");
            return Ok(());
        }
    };
    info!("notepad mounted with {} pages", model.book().page_count());
    model.open(quire_backend_web::now(), &mut pages);
    let wants_frames = model.needs_frames();

    let state = Rc::new(RefCell::new(Notepad {
        model,
        pages,
        graph,
        swipe: SwipeTracker::new(config.swipe),
    }));

    let frame_state = Rc::clone(&state);
    let raf = Rc::new(RafLoop::new(move |tick| frame_state.borrow_mut().frame(tick)));
    if wants_frames {
        raf.start();
    }

    wire_arrows(&state, &raf)?;
    wire_keys(&document, &state, &raf)?;
    wire_touch(&document, &state, &raf)?;
    wire_screen_clicks(&window, &document, &state, &raf)?;

    if let Some(today) = quire_backend_web::wall_clock() {
        DateStamp::query(&document).set(&date_label(today.date()));
    }
    let clock = start_clock(&document, &config);

    // Keep the loop and timer alive; there is no graceful shutdown on the web.
    core::mem::forget(clock);
    core::mem::forget(raf);

    Ok(())
}

/// Sends `intent` to the notebook and wakes the frame loop if needed.
fn navigate(state: &RefCell<Notepad>, raf: &RafLoop, intent: NavIntent) {
    let wants_frames = state.borrow_mut().turn(intent);
    if wants_frames {
        raf.start();
    }
}

fn wire_arrows(state: &Rc<RefCell<Notepad>>, raf: &Rc<RafLoop>) -> Result<(), JsValue> {
    let arrows = {
        let s = state.borrow();
        [
            (s.pages.left_arrow().cloned(), NavIntent::Previous),
            (s.pages.right_arrow().cloned(), NavIntent::Next),
        ]
    };
    for (arrow, intent) in arrows {
        let Some(arrow) = arrow else {
            debug!("no {intent:?} arrow");
            continue;
        };
        let cb_state = Rc::clone(state);
        let cb_raf = Rc::clone(raf);
        let cb = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            navigate(&cb_state, &cb_raf, intent);
        }) as Box<dyn FnMut(_)>);
        arrow.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    Ok(())
}

fn wire_keys(
    document: &Document,
    state: &Rc<RefCell<Notepad>>,
    raf: &Rc<RafLoop>,
) -> Result<(), JsValue> {
    let cb_state = Rc::clone(state);
    let cb_raf = Rc::clone(raf);
    let cb = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        if let Some(intent) = intent_for_key(&event.key()) {
            event.prevent_default();
            navigate(&cb_state, &cb_raf, intent);
        }
    }) as Box<dyn FnMut(_)>);
    document.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

fn wire_touch(
    document: &Document,
    state: &Rc<RefCell<Notepad>>,
    raf: &Rc<RafLoop>,
) -> Result<(), JsValue> {
    let passive = AddEventListenerOptions::new();
    passive.set_passive(true);

    let start_state = Rc::clone(state);
    let start_cb = Closure::wrap(Box::new(move |event: TouchEvent| {
        if let Some(touch) = event.touches().get(0) {
            let at = Point::new(f64::from(touch.client_x()), f64::from(touch.client_y()));
            start_state
                .borrow_mut()
                .swipe
                .begin(at, quire_backend_web::now());
        }
    }) as Box<dyn FnMut(_)>);
    document.add_event_listener_with_callback_and_add_event_listener_options(
        "touchstart",
        start_cb.as_ref().unchecked_ref(),
        &passive,
    )?;
    start_cb.forget();

    let end_state = Rc::clone(state);
    let end_raf = Rc::clone(raf);
    let end_cb = Closure::wrap(Box::new(move |event: TouchEvent| {
        let Some(touch) = event.changed_touches().get(0) else {
            return;
        };
        let at = Point::new(f64::from(touch.client_x()), f64::from(touch.client_y()));
        let swipe = end_state
            .borrow_mut()
            .swipe
            .end(at, quire_backend_web::now());
        if let Some(swipe) = swipe {
            debug!(
                "swipe {:?}: dx {:.0}px at {:.2}px/ms",
                swipe.intent, swipe.delta.x, swipe.velocity_x
            );
            navigate(&end_state, &end_raf, swipe.intent);
        }
    }) as Box<dyn FnMut(_)>);
    document.add_event_listener_with_callback_and_add_event_listener_options(
        "touchend",
        end_cb.as_ref().unchecked_ref(),
        &passive,
    )?;
    end_cb.forget();
    Ok(())
}

fn wire_screen_clicks(
    window: &Window,
    document: &Document,
    state: &Rc<RefCell<Notepad>>,
    raf: &Rc<RafLoop>,
) -> Result<(), JsValue> {
    let cb_window = window.clone();
    let cb_state = Rc::clone(state);
    let cb_raf = Rc::clone(raf);
    let cb = Closure::wrap(Box::new(move |event: MouseEvent| {
        if targets_control(&event) {
            return;
        }
        event.prevent_default();
        let Some(width) = cb_window.inner_width().ok().and_then(|w| w.as_f64()) else {
            return;
        };
        let intent = intent_for_click(f64::from(event.client_x()), width);
        navigate(&cb_state, &cb_raf, intent);
    }) as Box<dyn FnMut(_)>);
    document.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Returns `true` for clicks on the arrows or on links, which handle
/// themselves.
fn targets_control(event: &MouseEvent) -> bool {
    let Some(target) = event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
    else {
        return false;
    };
    [".nav-arrow", "a"]
        .iter()
        .any(|selector| matches!(target.closest(selector), Ok(Some(_))))
}

/// Sets the clock hands now and on every interval.
fn start_clock(document: &Document, config: &NotebookConfig) -> Option<IntervalTimer> {
    let face = ClockFace::query(document, config.clock.pivot);
    if !face.is_present() {
        debug!("no clock hands; clock disabled");
        return None;
    }
    let tick = move || {
        if let Some(now) = quire_backend_web::wall_clock() {
            face.show(&HandAngles::from_time(&now));
        }
    };
    tick();
    Some(IntervalTimer::new(config.clock.interval, tick))
}
