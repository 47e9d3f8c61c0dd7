// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page cursor and navigation.
//!
//! [`Book`] owns the current page index and the single in-flight turn. The
//! cursor always satisfies `0 <= current < page_count`. Requests that arrive
//! while a turn is animating are refused rather than queued, so at most one
//! turn runs at a time, and a started turn always runs to completion.
//!
//! The cursor moves as soon as a request is accepted. The turn animation is
//! the presentation of that move: the layout of every page is only rebuilt
//! from the cursor once the turning page has settled.

use log::debug;
use thiserror::Error;

use crate::backend::Presenter;
use crate::config::{FlipConfig, FlipMode};
use crate::flip::{FlipDirection, FlipPose, ShadowStyle, flip_progress};
use crate::input::NavIntent;
use crate::time::HostTime;
use crate::transform::Transform3d;

/// Stacking order of the visible page.
pub const ACTIVE_Z: i32 = 100;
/// Stacking order of the page right behind the visible one.
pub const NEXT_Z: i32 = 99;
/// Stacking order of a page while it turns.
pub const FLIPPING_Z: i32 = 101;

/// Failure to build a [`Book`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BookError {
    /// There is nothing to show.
    #[error("a book needs at least one page")]
    NoPages,
}

/// Why a navigation request was dropped.
///
/// A refusal leaves the book untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum Refused {
    /// Another turn is still animating.
    #[error("a page turn is already in progress")]
    FlipInProgress,
    /// There is no page before the current one.
    #[error("already at the first page")]
    AtFirstPage,
    /// There is no page after the current one.
    #[error("already at the last page")]
    AtLastPage,
}

/// The turn currently animating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ActiveFlip {
    /// Index of the page element that rotates.
    ///
    /// A forward turn rotates the page being left; a backward turn rotates
    /// the page being returned to.
    pub page: usize,
    /// Which way it rotates.
    pub direction: FlipDirection,
    /// When the request was accepted.
    pub started_at: HostTime,
}

/// An accepted navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    /// A turn animation has started.
    Animated(ActiveFlip),
    /// The cursor moved without animation.
    Instant,
}

/// One frame of an in-flight turn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FlipStep {
    /// The turning page's pose for this frame.
    Frame {
        /// Page element being turned.
        page: usize,
        /// Pose to apply.
        pose: FlipPose,
    },
    /// The turn completed; the page snaps to [`FlipPose::settled`].
    Settled {
        /// Page element that turned.
        page: usize,
        /// Which way it turned.
        direction: FlipDirection,
    },
}

/// A change a [`Presenter`] must reflect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BookUpdate {
    /// Restyle every page from the cursor and refresh the arrow controls.
    Layout,
    /// Raise the page that is about to turn.
    FlipStarted(ActiveFlip),
    /// Apply one step of the turn.
    Flip(FlipStep),
}

/// A page's place relative to the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageRole {
    /// Already turned away.
    Flipped,
    /// The page being read.
    Active,
    /// Directly behind the active page.
    Next,
    /// Further back in the stack.
    Hidden,
}

impl PageRole {
    /// Every role class, for clearing before a restyle.
    pub const CLASSES: [&'static str; 4] = ["active", "flipped", "next", "hidden"];

    /// CSS class carried by pages in this role.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Flipped => "flipped",
            Self::Active => "active",
            Self::Next => "next",
            Self::Hidden => "hidden",
        }
    }
}

/// Inline style of a page at rest.
///
/// `None` fields are left as they are.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageStyle {
    /// Stacking order.
    pub z_index: i32,
    /// Resting transform.
    pub transform: Option<Transform3d>,
    /// Resting opacity.
    pub opacity: Option<f64>,
    /// Whether the page is rendered.
    pub visible: bool,
    /// Whether the page receives pointer events.
    pub interactive: Option<bool>,
    /// Resting shadow.
    pub shadow: Option<ShadowStyle>,
}

/// Role and style of one page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageState {
    /// Position in the book.
    pub index: usize,
    /// Place relative to the cursor.
    pub role: PageRole,
    /// Inline style to apply.
    pub style: PageStyle,
}

impl PageState {
    fn new(index: usize, current: usize) -> Self {
        let stacked = i32::try_from(index).unwrap_or(i32::MAX);
        let face_down = FlipPose::settled(FlipDirection::Forward);
        let face_up = FlipPose::settled(FlipDirection::Backward);

        let (role, style) = if index < current {
            (
                PageRole::Flipped,
                PageStyle {
                    z_index: stacked,
                    transform: Some(face_down.transform()),
                    opacity: Some(face_down.opacity),
                    visible: false,
                    interactive: Some(false),
                    shadow: Some(ShadowStyle::Resting),
                },
            )
        } else if index == current {
            (
                PageRole::Active,
                PageStyle {
                    z_index: ACTIVE_Z,
                    transform: Some(face_up.transform()),
                    opacity: Some(face_up.opacity),
                    visible: true,
                    interactive: Some(true),
                    shadow: Some(ShadowStyle::Resting),
                },
            )
        } else if index == current + 1 {
            (
                PageRole::Next,
                PageStyle {
                    z_index: NEXT_Z,
                    transform: Some(face_up.transform()),
                    opacity: Some(face_up.opacity),
                    visible: true,
                    interactive: None,
                    shadow: Some(ShadowStyle::Resting),
                },
            )
        } else {
            (
                PageRole::Hidden,
                PageStyle {
                    z_index: stacked,
                    transform: None,
                    opacity: None,
                    visible: false,
                    interactive: None,
                    shadow: None,
                },
            )
        };

        Self { index, role, style }
    }
}

/// The page cursor.
#[derive(Clone, Debug)]
pub struct Book {
    config: FlipConfig,
    page_count: usize,
    current: usize,
    flip: Option<ActiveFlip>,
}

impl Book {
    /// Creates a book of `page_count` pages open at the first one.
    pub fn new(page_count: usize, config: FlipConfig) -> Result<Self, BookError> {
        if page_count == 0 {
            return Err(BookError::NoPages);
        }
        Ok(Self {
            config,
            page_count,
            current: 0,
            flip: None,
        })
    }

    /// Number of pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Index of the page being read.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Turn configuration.
    #[must_use]
    pub fn config(&self) -> &FlipConfig {
        &self.config
    }

    /// Returns `true` while a turn is animating.
    #[must_use]
    pub fn is_flipping(&self) -> bool {
        self.flip.is_some()
    }

    /// The turn currently animating, if any.
    #[must_use]
    pub fn active_flip(&self) -> Option<ActiveFlip> {
        self.flip
    }

    /// Returns `true` when there is no page before the current one.
    #[must_use]
    pub fn at_first_page(&self) -> bool {
        self.current == 0
    }

    /// Returns `true` when there is no page after the current one.
    #[must_use]
    pub fn at_last_page(&self) -> bool {
        self.current + 1 == self.page_count
    }

    /// Moves to the following page.
    pub fn next(&mut self, now: HostTime) -> Result<Turn, Refused> {
        if self.flip.is_some() {
            return Err(Refused::FlipInProgress);
        }
        if self.at_last_page() {
            return Err(Refused::AtLastPage);
        }
        let leaving = self.current;
        self.current += 1;
        Ok(self.begin(leaving, FlipDirection::Forward, now))
    }

    /// Moves to the preceding page.
    pub fn previous(&mut self, now: HostTime) -> Result<Turn, Refused> {
        if self.flip.is_some() {
            return Err(Refused::FlipInProgress);
        }
        if self.at_first_page() {
            return Err(Refused::AtFirstPage);
        }
        self.current -= 1;
        Ok(self.begin(self.current, FlipDirection::Backward, now))
    }

    /// Dispatches `intent` to [`next`](Self::next) or
    /// [`previous`](Self::previous).
    pub fn navigate(&mut self, intent: NavIntent, now: HostTime) -> Result<Turn, Refused> {
        match intent {
            NavIntent::Next => self.next(now),
            NavIntent::Previous => self.previous(now),
        }
    }

    fn begin(&mut self, page: usize, direction: FlipDirection, now: HostTime) -> Turn {
        debug!(
            "turn {direction:?}: page {}/{} (element {page})",
            self.current + 1,
            self.page_count
        );
        match self.config.mode {
            FlipMode::Instant => Turn::Instant,
            FlipMode::Animated => {
                let flip = ActiveFlip {
                    page,
                    direction,
                    started_at: now,
                };
                self.flip = Some(flip);
                Turn::Animated(flip)
            }
        }
    }

    /// Advances the in-flight turn to `now`.
    ///
    /// Returns `None` when nothing is turning. Once the configured duration
    /// has elapsed the turn is finished, the busy flag clears, and
    /// [`FlipStep::Settled`] is returned exactly once.
    pub fn advance(&mut self, now: HostTime) -> Option<FlipStep> {
        let flip = self.flip?;
        let elapsed = now.saturating_duration_since(flip.started_at);
        if elapsed >= self.config.duration {
            self.flip = None;
            debug!("turn settled on page {}", self.current + 1);
            return Some(FlipStep::Settled {
                page: flip.page,
                direction: flip.direction,
            });
        }
        let progress = flip_progress(elapsed, &self.config);
        Some(FlipStep::Frame {
            page: flip.page,
            pose: FlipPose::at(progress, flip.direction, &self.config),
        })
    }

    /// Navigates and tells `presenter` what changed.
    ///
    /// An instant turn is followed by a [`BookUpdate::Layout`]; an animated
    /// one by [`BookUpdate::FlipStarted`]. Refusals present nothing.
    pub fn turn<P: Presenter + ?Sized>(
        &mut self,
        intent: NavIntent,
        now: HostTime,
        presenter: &mut P,
    ) -> Result<Turn, Refused> {
        let turn = self.navigate(intent, now).inspect_err(|reason| {
            debug!("{intent:?} ignored: {reason}");
        })?;
        let update = match turn {
            Turn::Instant => BookUpdate::Layout,
            Turn::Animated(flip) => BookUpdate::FlipStarted(flip),
        };
        presenter.apply(self, &update);
        Ok(turn)
    }

    /// Advances the in-flight turn and presents it.
    ///
    /// A settle is followed by a full [`BookUpdate::Layout`].
    pub fn step<P: Presenter + ?Sized>(
        &mut self,
        now: HostTime,
        presenter: &mut P,
    ) -> Option<FlipStep> {
        let step = self.advance(now)?;
        presenter.apply(self, &BookUpdate::Flip(step));
        if matches!(step, FlipStep::Settled { .. }) {
            presenter.apply(self, &BookUpdate::Layout);
        }
        Some(step)
    }

    /// Role and resting style of page `index`, or `None` if out of range.
    #[must_use]
    pub fn page_state(&self, index: usize) -> Option<PageState> {
        (index < self.page_count).then(|| PageState::new(index, self.current))
    }

    /// Role and resting style of every page, in order.
    pub fn page_states(&self) -> impl Iterator<Item = PageState> + '_ {
        (0..self.page_count).map(|index| PageState::new(index, self.current))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::time::Duration;

    const PAGES: usize = 6;

    fn animated(pages: usize) -> Book {
        Book::new(pages, FlipConfig::animated()).expect("non-empty book")
    }

    fn ms(ms: u64) -> HostTime {
        HostTime(Duration::from_millis(ms).micros())
    }

    /// Opens a book at `page`, finishing every turn on the way.
    fn opened_at(page: usize) -> Book {
        let mut book = animated(PAGES);
        let mut t = 0;
        for _ in 0..page {
            book.next(ms(t)).expect("turn accepted");
            t += 1_000;
            while book.advance(ms(t)).is_some_and(|s| matches!(s, FlipStep::Frame { .. })) {}
        }
        book
    }

    #[derive(Default)]
    struct Recorder {
        updates: Vec<(BookUpdate, usize)>,
    }

    impl Presenter for Recorder {
        fn apply(&mut self, book: &Book, update: &BookUpdate) {
            self.updates.push((*update, book.current()));
        }
    }

    #[test]
    fn empty_book_is_rejected() {
        assert_eq!(
            Book::new(0, FlipConfig::animated()).unwrap_err(),
            BookError::NoPages
        );
    }

    #[test]
    fn next_moves_exactly_one_from_every_start() {
        for start in 0..PAGES - 1 {
            let mut book = opened_at(start);
            assert_eq!(book.current(), start);
            assert!(book.next(ms(100_000)).is_ok());
            assert_eq!(book.current(), start + 1, "from page {start}");
        }
    }

    #[test]
    fn previous_moves_exactly_one_from_every_start() {
        for start in 1..PAGES {
            let mut book = opened_at(start);
            assert!(book.previous(ms(100_000)).is_ok());
            assert_eq!(book.current(), start - 1, "from page {start}");
        }
    }

    #[test]
    fn bounds_are_no_ops() {
        let mut book = animated(PAGES);
        assert_eq!(book.previous(ms(0)), Err(Refused::AtFirstPage));
        assert_eq!(book.current(), 0);
        assert!(!book.is_flipping());

        let mut book = opened_at(PAGES - 1);
        assert!(book.at_last_page());
        assert_eq!(book.next(ms(100_000)), Err(Refused::AtLastPage));
        assert_eq!(book.current(), PAGES - 1);
        assert!(!book.is_flipping());
    }

    #[test]
    fn requests_during_a_turn_are_dropped() {
        let mut book = animated(PAGES);
        book.next(ms(0)).expect("first turn");
        assert_eq!(book.current(), 1);

        assert_eq!(book.next(ms(100)), Err(Refused::FlipInProgress));
        assert_eq!(book.previous(ms(200)), Err(Refused::FlipInProgress));
        assert_eq!(book.current(), 1);

        assert!(matches!(book.advance(ms(700)), Some(FlipStep::Settled { .. })));
        assert!(book.next(ms(800)).is_ok());
        assert_eq!(book.current(), 2);
    }

    #[test]
    fn single_page_book_cannot_move() {
        let mut book = animated(1);
        assert!(book.at_first_page() && book.at_last_page());
        assert_eq!(book.next(ms(0)), Err(Refused::AtLastPage));
        assert_eq!(book.previous(ms(0)), Err(Refused::AtFirstPage));
    }

    #[test]
    fn forward_turn_rotates_the_page_being_left() {
        let mut book = opened_at(2);
        let Ok(Turn::Animated(flip)) = book.next(ms(50_000)) else {
            panic!("animated turn expected");
        };
        assert_eq!(flip.page, 2);
        assert_eq!(flip.direction, FlipDirection::Forward);
        assert_eq!(book.active_flip(), Some(flip));
    }

    #[test]
    fn backward_turn_rotates_the_page_returned_to() {
        let mut book = opened_at(3);
        let Ok(Turn::Animated(flip)) = book.previous(ms(50_000)) else {
            panic!("animated turn expected");
        };
        assert_eq!(flip.page, 2);
        assert_eq!(flip.direction, FlipDirection::Backward);
    }

    #[test]
    fn frames_run_until_duration_then_settle_once() {
        let mut book = animated(PAGES);
        book.next(ms(1_000)).expect("turn");

        let Some(FlipStep::Frame { page, pose }) = book.advance(ms(1_000)) else {
            panic!("first frame expected");
        };
        assert_eq!(page, 0);
        assert!(pose.transform().approx_eq(&Transform3d::IDENTITY, 1e-9));

        let Some(FlipStep::Frame { pose, .. }) = book.advance(ms(1_300)) else {
            panic!("mid frame expected");
        };
        assert_eq!(pose.rotation_deg, -90.0);

        assert_eq!(
            book.advance(ms(1_600)),
            Some(FlipStep::Settled {
                page: 0,
                direction: FlipDirection::Forward,
            })
        );
        assert!(!book.is_flipping());
        assert_eq!(book.advance(ms(1_700)), None);
    }

    #[test]
    fn frame_before_start_is_clamped() {
        let mut book = animated(PAGES);
        book.next(ms(1_000)).expect("turn");
        let Some(FlipStep::Frame { pose, .. }) = book.advance(ms(990)) else {
            panic!("frame expected");
        };
        assert_eq!(pose.lift_px, 0.0);
    }

    #[test]
    fn instant_mode_never_flips() {
        let mut book = Book::new(3, FlipConfig::instant()).expect("book");
        assert_eq!(book.next(ms(0)), Ok(Turn::Instant));
        assert_eq!(book.next(ms(0)), Ok(Turn::Instant));
        assert_eq!(book.current(), 2);
        assert!(!book.is_flipping());
        assert_eq!(book.advance(ms(10)), None);
    }

    #[test]
    fn layout_roles_follow_cursor() {
        let book = opened_at(2);
        let roles: Vec<PageRole> = book.page_states().map(|s| s.role).collect();
        assert_eq!(
            roles,
            [
                PageRole::Flipped,
                PageRole::Flipped,
                PageRole::Active,
                PageRole::Next,
                PageRole::Hidden,
                PageRole::Hidden,
            ]
        );
        let z: Vec<i32> = book.page_states().map(|s| s.style.z_index).collect();
        assert_eq!(z, [0, 1, ACTIVE_Z, NEXT_Z, 4, 5]);
    }

    #[test]
    fn resting_styles() {
        let book = opened_at(1);

        let flipped = book.page_state(0).expect("page 0").style;
        assert!(!flipped.visible);
        assert_eq!(flipped.opacity, Some(0.0));
        assert_eq!(flipped.interactive, Some(false));

        let active = book.page_state(1).expect("page 1").style;
        assert!(active.visible);
        assert_eq!(active.interactive, Some(true));
        assert_eq!(active.transform, Some(Transform3d::IDENTITY));

        let hidden = book.page_state(3).expect("page 3").style;
        assert!(!hidden.visible);
        assert_eq!(hidden.transform, None);

        assert!(book.page_state(PAGES).is_none());
    }

    #[test]
    fn role_classes() {
        for role in [
            PageRole::Flipped,
            PageRole::Active,
            PageRole::Next,
            PageRole::Hidden,
        ] {
            assert!(PageRole::CLASSES.contains(&role.class_name()));
        }
    }

    #[test]
    fn animated_turn_presents_frames_then_layout() {
        let mut book = animated(PAGES);
        let mut rec = Recorder::default();

        let turn = book.turn(NavIntent::Next, ms(0), &mut rec).expect("turn");
        let Turn::Animated(flip) = turn else {
            panic!("animated turn expected");
        };
        assert_eq!(rec.updates, [(BookUpdate::FlipStarted(flip), 1)]);

        assert_eq!(book.turn(NavIntent::Next, ms(10), &mut rec), Err(Refused::FlipInProgress));
        assert_eq!(rec.updates.len(), 1);

        let mut t = 0;
        while book.step(ms(t), &mut rec).is_some() {
            t += 16;
        }
        let (last, current) = rec.updates.last().copied().expect("updates");
        assert_eq!(last, BookUpdate::Layout);
        assert_eq!(current, 1);
        let settled = rec.updates[rec.updates.len() - 2].0;
        assert!(matches!(settled, BookUpdate::Flip(FlipStep::Settled { .. })));
        assert!(rec.updates.len() > 30);
    }

    #[test]
    fn instant_turn_presents_layout() {
        let mut book = Book::new(PAGES, FlipConfig::instant()).expect("book");
        let mut rec = Recorder::default();
        assert_eq!(book.turn(NavIntent::Next, ms(0), &mut rec), Ok(Turn::Instant));
        assert_eq!(book.turn(NavIntent::Previous, ms(5), &mut rec), Ok(Turn::Instant));
        assert_eq!(
            book.turn(NavIntent::Previous, ms(9), &mut rec),
            Err(Refused::AtFirstPage)
        );
        assert_eq!(
            rec.updates,
            [(BookUpdate::Layout, 1), (BookUpdate::Layout, 0)]
        );
        assert_eq!(book.step(ms(20), &mut rec), None);
    }
}
