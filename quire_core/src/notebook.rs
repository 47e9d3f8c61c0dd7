// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The notebook as a whole: page cursor plus the growth counter it drives.
//!
//! [`Notebook`] decides *when* things happen. A layout that comes to rest on
//! the configured graph page arms the [`GrowthCounter`] the first time,
//! whether it came from an instant turn, a settled animated turn or the
//! initial layout. A turn that is still animating never arms it.

use log::info;

use crate::backend::Presenter;
use crate::book::{Book, BookError, BookUpdate, FlipStep, Refused, Turn};
use crate::config::NotebookConfig;
use crate::growth::{GrowthCounter, GrowthSample};
use crate::input::NavIntent;
use crate::time::HostTime;

/// Page cursor and growth counter behind one set of inputs.
#[derive(Clone, Debug)]
pub struct Notebook {
    config: NotebookConfig,
    book: Book,
    growth: GrowthCounter,
    graph_present: bool,
}

impl Notebook {
    /// Creates a notebook of `page_count` pages.
    ///
    /// `graph_present` says whether the growth graph can be displayed at
    /// all; without it the counter is never armed.
    pub fn new(
        page_count: usize,
        config: NotebookConfig,
        graph_present: bool,
    ) -> Result<Self, BookError> {
        Ok(Self {
            book: Book::new(page_count, config.flip)?,
            growth: GrowthCounter::new(config.growth),
            config,
            graph_present,
        })
    }

    /// The page cursor.
    #[must_use]
    pub fn book(&self) -> &Book {
        &self.book
    }

    /// The growth counter.
    #[must_use]
    pub fn growth(&self) -> &GrowthCounter {
        &self.growth
    }

    /// Configuration the notebook was built with.
    #[must_use]
    pub fn config(&self) -> &NotebookConfig {
        &self.config
    }

    /// Presents the initial layout.
    pub fn open<P: Presenter + ?Sized>(&mut self, now: HostTime, presenter: &mut P) {
        presenter.apply(&self.book, &BookUpdate::Layout);
        self.page_shown(now);
    }

    /// Navigates, presenting the change.
    pub fn turn<P: Presenter + ?Sized>(
        &mut self,
        intent: NavIntent,
        now: HostTime,
        presenter: &mut P,
    ) -> Result<Turn, Refused> {
        let turn = self.book.turn(intent, now, presenter)?;
        if turn == Turn::Instant {
            self.page_shown(now);
        }
        Ok(turn)
    }

    /// Advances everything that animates to `now`.
    ///
    /// Returns the counter value to display this frame, if any.
    pub fn frame<P: Presenter + ?Sized>(
        &mut self,
        now: HostTime,
        presenter: &mut P,
    ) -> Option<GrowthSample> {
        if let Some(FlipStep::Settled { .. }) = self.book.step(now, presenter) {
            self.page_shown(now);
        }
        self.growth.sample(now)
    }

    /// Returns `true` while a turn or the counter still needs frames.
    #[must_use]
    pub fn needs_frames(&self) -> bool {
        self.book.is_flipping() || self.growth.is_active()
    }

    fn page_shown(&mut self, now: HostTime) {
        let current = self.book.current();
        if self
            .growth
            .page_shown(current, self.config.graph_page, self.graph_present, now)
        {
            info!("growth graph armed on page {}", current + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::config::FlipConfig;
    use crate::growth::SamplePhase;
    use crate::time::Duration;

    const PAGES: usize = 6;
    const FRAME_MS: u64 = 16;

    fn ms(ms: u64) -> HostTime {
        HostTime(Duration::from_millis(ms).micros())
    }

    #[derive(Default)]
    struct Recorder {
        layouts: usize,
    }

    impl Presenter for Recorder {
        fn apply(&mut self, _book: &Book, update: &BookUpdate) {
            if *update == BookUpdate::Layout {
                self.layouts += 1;
            }
        }
    }

    fn notebook(flip: FlipConfig, graph_page: Option<usize>, graph_present: bool) -> Notebook {
        let config = NotebookConfig {
            flip,
            graph_page,
            ..NotebookConfig::web()
        };
        Notebook::new(PAGES, config, graph_present).expect("non-empty notebook")
    }

    /// Runs frames from `t` until nothing animates; returns the next time.
    fn run_frames(
        nb: &mut Notebook,
        rec: &mut Recorder,
        mut t: u64,
        samples: &mut Vec<GrowthSample>,
    ) -> u64 {
        while nb.needs_frames() {
            samples.extend(nb.frame(ms(t), rec));
            t += FRAME_MS;
        }
        t
    }

    /// Turns `intent` at `t` and lets the turn settle; returns the next time.
    fn turn_and_settle(nb: &mut Notebook, rec: &mut Recorder, intent: NavIntent, t: u64) -> u64 {
        nb.turn(intent, ms(t), rec).expect("turn accepted");
        let mut t = t;
        while nb.book().is_flipping() {
            let _ = nb.frame(ms(t), rec);
            t += FRAME_MS;
        }
        t
    }

    #[test]
    fn empty_notebook_is_rejected() {
        let err = Notebook::new(0, NotebookConfig::web(), true).unwrap_err();
        assert_eq!(err, BookError::NoPages);
    }

    #[test]
    fn open_presents_layout_and_arms_on_graph_page() {
        let mut rec = Recorder::default();
        let mut nb = notebook(FlipConfig::animated(), Some(0), true);
        nb.open(ms(0), &mut rec);
        assert_eq!(rec.layouts, 1);
        assert!(nb.growth().is_active());
        assert!(nb.needs_frames());

        let mut nb = notebook(FlipConfig::animated(), Some(4), true);
        nb.open(ms(0), &mut rec);
        assert!(nb.growth().is_idle());
        assert!(!nb.needs_frames());
    }

    #[test]
    fn instant_arrival_arms_immediately() {
        let mut rec = Recorder::default();
        let mut nb = notebook(FlipConfig::instant(), Some(4), true);
        nb.open(ms(0), &mut rec);
        for _ in 0..3 {
            nb.turn(NavIntent::Next, ms(0), &mut rec).expect("turn");
            assert!(nb.growth().is_idle());
        }
        assert_eq!(nb.turn(NavIntent::Next, ms(5), &mut rec), Ok(Turn::Instant));
        assert_eq!(nb.book().current(), 4);
        assert!(nb.growth().is_active());
    }

    #[test]
    fn animated_arrival_arms_at_settle_not_at_turn_start() {
        let mut rec = Recorder::default();
        let mut nb = notebook(FlipConfig::animated(), Some(4), true);
        nb.open(ms(0), &mut rec);
        let mut t = 0;
        for _ in 0..3 {
            t = turn_and_settle(&mut nb, &mut rec, NavIntent::Next, t);
        }
        assert!(nb.growth().is_idle());

        let started = t;
        nb.turn(NavIntent::Next, ms(t), &mut rec).expect("turn onto graph page");
        assert_eq!(nb.book().current(), 4);
        assert!(nb.growth().is_idle(), "armed while the page was still turning");

        while nb.book().is_flipping() {
            assert!(nb.growth().is_idle(), "armed at {t} ms, before the settle");
            assert_eq!(nb.frame(ms(t), &mut rec), None);
            t += FRAME_MS;
        }
        assert!(t - started >= 600);
        assert!(nb.growth().is_active());
    }

    #[test]
    fn counter_runs_once_and_revisits_are_ignored() {
        let mut rec = Recorder::default();
        let mut nb = notebook(FlipConfig::animated(), Some(4), true);
        nb.open(ms(0), &mut rec);
        let mut t = 0;
        for _ in 0..4 {
            t = turn_and_settle(&mut nb, &mut rec, NavIntent::Next, t);
        }

        let mut samples = Vec::new();
        t = run_frames(&mut nb, &mut rec, t, &mut samples);
        assert!(nb.growth().is_finished());
        assert!(samples[0].reveal);
        assert_eq!(samples.iter().filter(|s| s.reveal).count(), 1);
        let last = samples.last().expect("samples");
        assert_eq!((last.value, last.phase), (100, SamplePhase::Finished));

        t = turn_and_settle(&mut nb, &mut rec, NavIntent::Previous, t);
        t = turn_and_settle(&mut nb, &mut rec, NavIntent::Next, t);
        assert_eq!(nb.book().current(), 4);
        assert!(nb.growth().is_finished());
        assert!(!nb.needs_frames());
        assert_eq!(nb.frame(ms(t), &mut rec), None);
    }

    #[test]
    fn leaving_before_the_reveal_keeps_counting() {
        let mut rec = Recorder::default();
        let mut nb = notebook(FlipConfig::instant(), Some(1), true);
        nb.open(ms(0), &mut rec);
        nb.turn(NavIntent::Next, ms(0), &mut rec).expect("onto graph page");
        nb.turn(NavIntent::Next, ms(10), &mut rec).expect("away again");
        assert!(nb.growth().is_active());
        assert!(nb.frame(ms(100), &mut rec).is_some_and(|s| s.reveal));
    }

    #[test]
    fn absent_graph_never_arms() {
        let mut rec = Recorder::default();
        let mut nb = notebook(FlipConfig::animated(), Some(4), false);
        nb.open(ms(0), &mut rec);
        let mut t = 0;
        for _ in 0..PAGES - 1 {
            t = turn_and_settle(&mut nb, &mut rec, NavIntent::Next, t);
            assert!(nb.growth().is_idle(), "armed on page {}", nb.book().current());
        }
        assert!(!nb.needs_frames());
        assert_eq!(nb.frame(ms(t + 10_000), &mut rec), None);
    }

    #[test]
    fn unconfigured_graph_page_never_arms() {
        let mut rec = Recorder::default();
        let mut nb = notebook(FlipConfig::instant(), None, true);
        nb.open(ms(0), &mut rec);
        while nb.turn(NavIntent::Next, ms(0), &mut rec).is_ok() {}
        assert_eq!(nb.book().current(), PAGES - 1);
        assert!(nb.growth().is_idle());
    }

    #[test]
    fn refused_turns_present_nothing() {
        let mut rec = Recorder::default();
        let mut nb = notebook(FlipConfig::instant(), Some(0), true);
        nb.open(ms(0), &mut rec);
        assert_eq!(
            nb.turn(NavIntent::Previous, ms(0), &mut rec),
            Err(Refused::AtFirstPage)
        );
        assert_eq!(rec.layouts, 1);
    }
}
