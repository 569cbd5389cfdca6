//! Carousel engine
//!
//! A responsive, optionally infinite, paginated slide viewport. The engine is
//! headless: it owns position, layout and control state, and rendering is a
//! pure function of that state (`view` / `render`). The host feeds it input
//! events and reports back the two things only a renderer knows about:
//! when a transition finished (`transition_end`) and how tall slides are
//! after layout (`on_frame`).
//!
//! Lifecycle of a move:
//! 1. `go_to` / `next` / `prev` resolve the target per the edge policy.
//! 2. Controls and indicators are synchronized, then move listeners run.
//! 3. Animated moves leave the engine in `Motion::Animating`; the host calls
//!    `transition_end(generation)` once the track settles, and infinite
//!    carousels re-home out of the clone region without animation.

pub mod controller;
pub mod events;
pub mod indicator;
pub mod infinite;
pub mod layout;
pub mod options;
pub mod resize;
pub mod view;

use std::collections::VecDeque;
use std::rc::Rc;

use crate::dom::Element;
use crate::error::CarouselError;

pub use events::{
    ClickTarget, MoveCause, MoveEvent, MoveListener, Navigation, SubscriptionId, TrackListener,
};
pub use indicator::{NavControls, Pager, PagerButton};
pub use infinite::InfiniteWrapper;
pub use layout::{HeightProbe, LayoutEngine};
pub use options::{CarouselOptions, DEFAULT_BREAKPOINT, EdgePolicy};
pub use controller::{Motion, PositionController};
pub use resize::{Breakpoint, ResizeResponder};
pub use view::{CarouselView, IndicatorView};

use events::MoveListeners;

/// Upper bound on navigations chained from listeners within one dispatch.
const MAX_CHAINED_NAVIGATIONS: usize = 32;

/// Headless carousel over a list of slide elements.
///
/// Owns every piece of mutable state. Hosts feed it input (navigation,
/// transition completions, paint frames, viewport widths) and read back a
/// [`CarouselView`] or a rendered element tree.
pub struct Carousel {
    options: CarouselOptions,
    slides: Vec<Element>,
    wrapper: InfiniteWrapper,
    layout: LayoutEngine,
    position: PositionController,
    nav: NavControls,
    pager: Option<Pager>,
    resize: ResizeResponder,
    listeners: MoveListeners,
    queue: VecDeque<Navigation>,
    track_listener: Option<TrackListener>,
    transition_suppressed: bool,
}

impl Carousel {
    /// Builds a carousel over pre-rendered slides.
    ///
    /// Fails with [`CarouselError::ConflictingModes`] when both `loop` and
    /// `infinite` are requested, before any slide is touched. Wrapping modes
    /// are silently disabled when there are too few slides to page through.
    pub fn new(slides: Vec<Element>, options: CarouselOptions) -> Result<Self, CarouselError> {
        let options = options.resolve(slides.len())?;
        let real_count = slides.len();

        let wrapper = InfiniteWrapper::new(options.clone_offset(), real_count);
        let slides = wrapper.extend(slides);

        let mut carousel = Self {
            nav: NavControls::new(options.loop_mode),
            pager: None,
            resize: ResizeResponder::new(Breakpoint::new(options.breakpoint)),
            position: PositionController::new(options.edge_policy),
            layout: LayoutEngine::new(),
            listeners: MoveListeners::default(),
            queue: VecDeque::new(),
            track_listener: None,
            transition_suppressed: true,
            slides,
            wrapper,
            options,
        };

        carousel.position.commit(wrapper.offset(), false);
        carousel.relayout();
        if carousel.options.slide_indicator {
            carousel.pager = Pager::build(
                real_count,
                carousel.options.slides_visible,
                carousel.options.slides_to_scroll,
                wrapper.offset(),
            );
        }
        carousel.notify(MoveCause::Initial);

        tracing::debug!(
            real_count,
            extended = carousel.slides.len(),
            offset = wrapper.offset(),
            infinite = carousel.options.infinite,
            "Carousel constructed"
        );
        Ok(carousel)
    }

    /// Options after degenerate-count downgrades.
    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// Slides as laid out on the track, clones included.
    pub fn slides(&self) -> &[Element] {
        &self.slides
    }

    /// Length of the track, clones included.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Number of slides the carousel was built with.
    pub fn real_count(&self) -> usize {
        self.wrapper.real_count()
    }

    /// Clones on each side of the real slides; 0 outside infinite mode.
    pub fn offset(&self) -> usize {
        self.wrapper.offset()
    }

    /// Index on the extended track.
    pub fn current_index(&self) -> usize {
        self.position.current()
    }

    /// Real slide shown first in the viewport.
    pub fn real_index(&self) -> usize {
        self.wrapper.real_index(self.position.current())
    }

    /// Current motion state.
    pub fn motion(&self) -> Motion {
        self.position.motion()
    }

    /// Generation the host must pass to `transition_end` for the running
    /// animation.
    pub fn pending_transition(&self) -> Option<u64> {
        self.position.pending_generation()
    }

    /// Whether the last reported viewport was below the breakpoint.
    pub fn is_mobile(&self) -> bool {
        self.resize.is_mobile()
    }

    /// Effective visible count; 1 on mobile.
    pub fn slides_visible(&self) -> usize {
        if self.is_mobile() {
            1
        } else {
            self.options.slides_visible
        }
    }

    /// Effective step; 1 on mobile.
    pub fn slides_to_scroll(&self) -> usize {
        if self.is_mobile() {
            1
        } else {
            self.options.slides_to_scroll
        }
    }

    /// Track sizing and the pending height pass.
    pub fn layout(&self) -> &LayoutEngine {
        &self.layout
    }

    /// Prev/next control visibility.
    pub fn nav(&self) -> &NavControls {
        &self.nav
    }

    /// Indicator buttons, when enabled.
    pub fn pager(&self) -> Option<&Pager> {
        self.pager.as_ref()
    }

    /// Subscribes to position changes. Listeners run synchronously after
    /// every move, in subscription order.
    pub fn on_move<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&MoveEvent) -> Option<Navigation> + 'static,
    {
        self.listeners.subscribe(Rc::new(listener))
    }

    /// Removes a move listener. Returns false for unknown ids.
    pub fn off_move(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Moves to `index`, redirecting out-of-range requests per the edge
    /// policy. `animate = false` jumps without a transition.
    pub fn go_to(&mut self, index: isize, animate: bool) {
        self.dispatch(Navigation::GoTo { index, animate });
    }

    /// Advances by the effective step. Past the last page this wraps to the
    /// start unless the edge policy clamps.
    pub fn next(&mut self) {
        self.dispatch(Navigation::Next);
    }

    /// Steps back by the effective step. A no-op at the first slide of a
    /// carousel without loop or infinite mode.
    pub fn prev(&mut self) {
        self.dispatch(Navigation::Prev);
    }

    /// Activation of the next control.
    pub fn click_next(&mut self) {
        self.next();
    }

    /// Activation of the prev control.
    pub fn click_prev(&mut self) {
        self.prev();
    }

    /// Activation of pager button `button`. Unknown buttons are ignored.
    pub fn click_indicator(&mut self, button: usize) {
        match self.pager.as_ref().and_then(|p| p.target(button)) {
            Some(target) => self.go_to(target as isize, true),
            None => tracing::debug!(button, "Ignoring click on unknown indicator button"),
        }
    }

    /// Installs the single delegated click listener for the slide track,
    /// replacing any previous one.
    pub fn set_track_listener<F>(&mut self, listener: F)
    where
        F: Fn(&ClickTarget) + 'static,
    {
        self.track_listener = Some(Rc::new(listener));
    }

    /// Forwards a click on the track to the delegated listener untouched.
    pub fn click_track(&self, target: &ClickTarget) {
        if let Some(listener) = &self.track_listener {
            listener(target);
        }
    }

    /// Reports that the track transition tagged `generation` finished.
    /// Returns false when the completion is stale and was ignored.
    pub fn transition_end(&mut self, generation: u64) -> bool {
        if !self.position.begin_settle(generation) {
            tracing::debug!(
                generation,
                motion = ?self.position.motion(),
                "Ignoring stale transition completion"
            );
            return false;
        }

        if self.options.infinite
            && let Some(home) = self.wrapper.rehome(self.position.current())
        {
            tracing::trace!(from = self.position.current(), to = home, "Re-homing out of clone region");
            self.move_to(home, false, MoveCause::Rehome);
        }
        self.position.finish_settle();
        self.drain();
        true
    }

    /// Paint-frame hook: runs the pending height normalization pass.
    pub fn on_frame(&mut self, probe: &dyn HeightProbe) -> Option<f32> {
        self.layout.run_height_pass(&self.slides, probe)
    }

    /// Reports the viewport width. Returns true when the mobile breakpoint
    /// was crossed and the carousel re-laid itself out.
    pub fn resize(&mut self, viewport_width: u32) -> bool {
        let Some(mobile) = self.resize.observe(viewport_width) else {
            return false;
        };

        self.relayout();
        if let Some(pager) = &mut self.pager {
            pager.set_hidden(mobile);
        }
        self.notify(MoveCause::Resize);
        self.drain();
        true
    }

    /// Snapshot of everything the renderer needs.
    pub fn view(&self) -> CarouselView {
        CarouselView {
            current_index: self.position.current(),
            real_index: self.real_index(),
            is_mobile: self.is_mobile(),
            slides_visible: self.slides_visible(),
            track_width_pct: self.layout.track_width_pct(),
            slide_width_pct: self.layout.slide_width_pct(),
            translate_pct: LayoutEngine::translate_pct(self.position.current(), self.slides.len()),
            transition_suppressed: self.transition_suppressed,
            slide_height_px: self.layout.uniform_height(),
            prev_hidden: self.nav.prev_hidden(),
            next_hidden: self.nav.next_hidden(),
            indicators: self
                .pager
                .as_ref()
                .map(|p| {
                    p.buttons()
                        .iter()
                        .map(|b| IndicatorView {
                            active: b.active,
                            hidden: b.hidden,
                        })
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    /// Root element to insert into the host page.
    pub fn render(&self) -> Element {
        view::render(&self.view(), &self.slides)
    }

    fn relayout(&mut self) {
        let (slide_count, visible) = (self.slides.len(), self.slides_visible());
        self.layout.apply(slide_count, visible);
    }

    fn is_plain(&self) -> bool {
        !self.options.loop_mode && !self.options.infinite
    }

    fn dispatch(&mut self, navigation: Navigation) {
        self.queue.push_back(navigation);
        self.drain();
    }

    fn drain(&mut self) {
        let mut budget = MAX_CHAINED_NAVIGATIONS;
        while let Some(navigation) = self.queue.pop_front() {
            if budget == 0 {
                tracing::warn!(
                    dropped = self.queue.len() + 1,
                    "Dropping navigations chained from move listeners"
                );
                self.queue.clear();
                break;
            }
            budget -= 1;
            self.apply(navigation);
        }
    }

    fn apply(&mut self, navigation: Navigation) {
        let current = self.position.current() as isize;
        match navigation {
            Navigation::Next => {
                // under Wrap the overflow falls through to the start
                if self.is_plain()
                    && self.nav.next_hidden()
                    && self.options.edge_policy == EdgePolicy::Clamp
                {
                    tracing::debug!(index = current, "Next ignored at the last page");
                    return;
                }
                self.go_resolved(current + self.slides_to_scroll() as isize, true);
            }
            Navigation::Prev => {
                if self.is_plain() && self.nav.prev_hidden() {
                    tracing::debug!(index = current, "Prev ignored at the first slide");
                    return;
                }
                self.go_resolved(current - self.slides_to_scroll() as isize, true);
            }
            Navigation::GoTo { index, animate } => self.go_resolved(index, animate),
        }
    }

    fn go_resolved(&mut self, requested: isize, animate: bool) {
        let target =
            self.position
                .resolve_target(requested, self.slides.len(), self.slides_visible());
        if target as isize != requested {
            tracing::debug!(requested, target, "Redirected out-of-range navigation");
        }
        self.move_to(target, animate, MoveCause::Navigate);
    }

    fn move_to(&mut self, index: usize, animate: bool, cause: MoveCause) {
        self.position.commit(index, animate);
        self.transition_suppressed = !animate;
        self.notify(cause);
    }

    fn notify(&mut self, cause: MoveCause) {
        let index = self.position.current();
        let (slide_count, visible) = (self.slides.len(), self.slides_visible());
        self.nav.sync(index, slide_count, visible);
        let real_index = self.real_index();
        if let Some(pager) = &mut self.pager {
            pager.sync(real_index);
        }

        let event = MoveEvent {
            index,
            real_index,
            cause,
        };
        for listener in self.listeners.snapshot() {
            if let Some(navigation) = listener(&event) {
                self.queue.push_back(navigation);
            }
        }
    }
}

impl std::fmt::Debug for Carousel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("options", &self.options)
            .field("slides", &self.slides.len())
            .field("current_index", &self.position.current())
            .field("motion", &self.position.motion())
            .field("is_mobile", &self.resize.is_mobile())
            .field("listeners", &self.listeners)
            .finish()
    }
}
