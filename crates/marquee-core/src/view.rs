//! The marquee widget
//!
//! [`MarqueeView`] owns its configuration, cached text metrics, animation state,
//! overlay cache and outstanding timers. The host calls [`MarqueeView::layout`]
//! when the viewport is known, [`MarqueeView::paint`] whenever
//! [`MarqueeView::needs_redraw`] is set, and feeds fired timers back through
//! [`MarqueeView::handle_task`].

use std::time::Duration;

use tracing::{debug, warn};

use crate::animation::{
    Advance, AnimationState, FiredTask, FrameScheduler, FrameTask, MarqueePhase, Scheduler,
};
use crate::color::Rgba;
use crate::config::MarqueeConfig;
use crate::metrics::{TextMeasurer, TextMetrics};
use crate::render::{OverlayKey, Renderer, Surface, TextStyle};

/// Size of the area the view draws into
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Single-line text that scrolls when it does not fit
pub struct MarqueeView<S: Scheduler> {
    config: MarqueeConfig,
    metrics: Option<TextMetrics>,
    viewport: Viewport,
    state: AnimationState,
    frames: FrameScheduler<S>,
    renderer: Renderer,
    needs_redraw: bool,
    attached: bool,
}

impl<S: Scheduler> MarqueeView<S> {
    /// Create a view; an unset pause duration takes the process-wide default
    pub fn new(mut config: MarqueeConfig, scheduler: S) -> Self {
        config.pause_duration_ms = Some(config.resolved_pause_duration());
        if config.speed < 0 {
            warn!(speed = config.speed, "Negative marquee speed, animation disabled");
        }
        Self {
            config,
            metrics: None,
            viewport: Viewport::default(),
            state: AnimationState::new(),
            frames: FrameScheduler::new(scheduler),
            renderer: Renderer::new(),
            needs_redraw: true,
            attached: true,
        }
    }

    /// Create with default configuration
    pub fn with_defaults(scheduler: S) -> Self {
        Self::new(MarqueeConfig::default(), scheduler)
    }

    // Configuration

    pub fn config(&self) -> &MarqueeConfig {
        &self.config
    }

    pub fn text(&self) -> Option<&str> {
        self.config.text.as_deref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.config.text = Some(text.into());
        self.invalidate_metrics();
    }

    /// Remove the text; painting becomes a no-op
    pub fn clear_text(&mut self) {
        self.config.text = None;
        self.invalidate_metrics();
    }

    pub fn text_size(&self) -> f32 {
        self.config.text_size
    }

    pub fn set_text_size(&mut self, size: f32) {
        self.config.text_size = size;
        self.invalidate_metrics();
    }

    pub fn text_color(&self) -> Rgba {
        self.config.text_color
    }

    pub fn set_text_color(&mut self, color: Rgba) {
        self.config.text_color = color;
        self.needs_redraw = true;
    }

    pub fn speed(&self) -> i32 {
        self.config.speed
    }

    pub fn set_speed(&mut self, speed: i32) {
        if speed < 0 {
            warn!(speed, "Negative marquee speed, animation disabled");
        }
        let resumed = self.config.speed <= 0 && speed > 0;
        self.config.speed = speed;
        if resumed {
            self.needs_redraw = true;
        }
    }

    pub fn is_marquee_enabled(&self) -> bool {
        self.config.marquee_enabled
    }

    pub fn set_marquee_enabled(&mut self, enabled: bool) {
        self.config.marquee_enabled = enabled;
        self.reset_animation();
    }

    pub fn is_edge_effect_enabled(&self) -> bool {
        self.config.show_edge_effect
    }

    pub fn set_edge_effect_enabled(&mut self, enabled: bool) {
        self.config.show_edge_effect = enabled;
        self.needs_redraw = true;
    }

    pub fn edge_effect_width(&self) -> u32 {
        self.config.edge_effect_width
    }

    /// Width of each edge overlay as a percentage of the viewport (clamped to 100)
    pub fn set_edge_effect_width(&mut self, percent: u32) {
        self.config.edge_effect_width = percent.min(100);
        self.needs_redraw = true;
    }

    pub fn edge_effect_color(&self) -> Rgba {
        self.config.edge_effect_color
    }

    pub fn set_edge_effect_color(&mut self, color: Rgba) {
        self.config.edge_effect_color = color;
        self.needs_redraw = true;
    }

    /// Pause between cycles in milliseconds; `<= 0` means pausing is disabled
    pub fn pause_duration(&self) -> i64 {
        self.config.resolved_pause_duration()
    }

    /// Change the pause length; a pause in progress restarts with the new length
    pub fn set_pause_duration(&mut self, ms: i64) {
        self.config.pause_duration_ms = Some(ms);
        if self.frames.pause_pending() {
            if ms > 0 {
                self.frames.arm_pause(Duration::from_millis(ms as u64));
            } else {
                self.frames.disarm_pause();
                self.state.resume();
                debug!("Pausing disabled mid-pause, resuming scroll");
            }
        }
        self.needs_redraw = true;
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.config.frame_interval_ms)
    }

    // Observation

    pub fn phase(&self) -> MarqueePhase {
        self.state.phase()
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn offset(&self) -> i32 {
        self.state.offset()
    }

    pub fn metrics(&self) -> Option<TextMetrics> {
        self.metrics
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn scheduler(&self) -> &S {
        self.frames.inner()
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        self.frames.inner_mut()
    }

    /// Whether the host should call [`MarqueeView::paint`]
    pub fn needs_redraw(&self) -> bool {
        self.attached && self.needs_redraw
    }

    /// Request a repaint without changing anything
    pub fn invalidate(&mut self) {
        self.needs_redraw = true;
    }

    /// Height to use when the host does not impose one
    pub fn preferred_height(&self) -> u32 {
        match self.metrics {
            Some(metrics) if metrics.height > 0 => metrics.height,
            _ => self.config.text_size.max(0.0).ceil() as u32,
        }
    }

    // Lifecycle

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Re-enter the visible tree; the animation starts over on the next paint
    pub fn attach(&mut self) {
        if !self.attached {
            self.attached = true;
            self.state.stop();
            self.needs_redraw = true;
        }
    }

    /// Leave the visible tree, cancelling every outstanding timer
    pub fn detach(&mut self) {
        if self.attached {
            debug!("Detaching marquee view");
        }
        self.frames.cancel_all();
        self.state.stop();
        self.attached = false;
    }

    // Layout and paint

    /// Accept the current viewport and refresh text metrics if they were invalidated
    pub fn layout<M: TextMeasurer + ?Sized>(&mut self, viewport: Viewport, measurer: &M) {
        if viewport != self.viewport {
            debug!(
                width = viewport.width,
                height = viewport.height,
                "Marquee viewport changed"
            );
            self.viewport = viewport;
            self.reset_animation();
        }

        if self.metrics.is_none() {
            if let Some(text) = self.config.text.as_deref() {
                self.metrics = Some(measurer.measure(text, self.config.text_size));
                self.needs_redraw = true;
            }
        }
    }

    /// Draw the current frame and advance the animation
    pub fn paint<D: Surface + ?Sized>(&mut self, surface: &mut D) {
        if !self.attached {
            return;
        }
        self.needs_redraw = false;
        self.render(surface, true);
    }

    /// Draw the current frame again without advancing or scheduling anything
    ///
    /// For immediate-mode hosts that rebuild every widget on each frame.
    pub fn redraw<D: Surface + ?Sized>(&mut self, surface: &mut D) {
        if self.attached {
            self.render(surface, false);
        }
    }

    fn render<D: Surface + ?Sized>(&mut self, surface: &mut D, advance: bool) {
        let (Some(text), Some(metrics)) = (self.config.text.as_deref(), self.metrics) else {
            return;
        };
        if self.viewport.is_empty() {
            return;
        }

        let viewport_width = self.viewport.width;
        let style = TextStyle {
            color: self.config.text_color,
            size: self.config.text_size,
        };

        if metrics.fits_within(viewport_width) {
            if self.state.is_running() {
                self.state.stop();
                self.frames.disarm_pause();
            }
            let left_margin = (viewport_width.saturating_sub(metrics.width) / 2) as i32;
            self.renderer
                .draw_text(surface, text, left_margin, metrics.baseline, style);
            return;
        }

        if !self.config.marquee_enabled {
            self.renderer.draw_text(surface, text, 0, metrics.baseline, style);
            return;
        }

        if !self.state.is_running() {
            self.state.initialize(metrics.width);
            debug!(
                text_width = metrics.width,
                viewport_width,
                wrap_at = self.state.wrap_around_point(),
                "Marquee animation started"
            );
        }

        self.renderer
            .draw_text(surface, text, self.state.offset(), metrics.baseline, style);

        let pause_ms = self.pause_duration();
        let pause_enabled = pause_ms > 0;

        if self.config.show_edge_effect {
            let key = OverlayKey {
                viewport_width,
                viewport_height: self.viewport.height,
                width_percent: self.config.edge_effect_width.min(100),
                color: self.config.edge_effect_color,
            };
            let show_left = self.state.shows_left_edge(pause_enabled);
            self.renderer.draw_edges(surface, key, show_left);
        }

        if !advance || self.state.is_paused() || self.config.speed <= 0 {
            return;
        }

        match self
            .state
            .advance(self.config.speed, viewport_width, pause_enabled)
        {
            Advance::Wrapped => debug!(offset = self.state.offset(), "Marquee wrapped"),
            Advance::CycleComplete { paused: true } => {
                self.frames.arm_pause(Duration::from_millis(pause_ms as u64));
            }
            Advance::CycleComplete { paused: false } | Advance::Scrolled => {}
        }

        let interval = self.frame_interval();
        self.frames.request_frame(interval);
    }

    /// Handle a task delivered by the scheduler
    ///
    /// Tasks for other views, cancelled tasks and anything after `detach` are ignored.
    pub fn handle_task(&mut self, fired: FiredTask) {
        if !self.attached || !self.frames.accept(fired) {
            return;
        }
        match fired.task {
            FrameTask::Frame => {}
            FrameTask::PauseExpired => {
                self.state.resume();
                debug!("Marquee pause expired");
            }
        }
        self.needs_redraw = true;
    }

    fn invalidate_metrics(&mut self) {
        self.metrics = None;
        self.reset_animation();
    }

    fn reset_animation(&mut self) {
        self.state.stop();
        self.frames.disarm_pause();
        self.needs_redraw = true;
    }
}

impl<S: Scheduler> Drop for MarqueeView<S> {
    fn drop(&mut self) {
        self.frames.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::ManualScheduler;
    use crate::render::{LinearGradient, RectF};

    /// Every character is `CHAR_WIDTH` wide
    const CHAR_WIDTH: u32 = 10;

    struct FixedWidth;

    impl TextMeasurer for FixedWidth {
        fn measure(&self, text: &str, size: f32) -> TextMetrics {
            TextMetrics {
                width: text.chars().count() as u32 * CHAR_WIDTH,
                height: size as u32,
                baseline: size as i32 - 4,
            }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Draw {
        Text { text: String, x: i32, y: i32 },
        Fill(RectF),
    }

    #[derive(Default)]
    struct Recorder(Vec<Draw>);

    impl Recorder {
        fn text_x(&self) -> Option<i32> {
            self.0.iter().find_map(|d| match d {
                Draw::Text { x, .. } => Some(*x),
                _ => None,
            })
        }

        fn fills(&self) -> Vec<RectF> {
            self.0
                .iter()
                .filter_map(|d| match d {
                    Draw::Fill(rect) => Some(*rect),
                    _ => None,
                })
                .collect()
        }
    }

    impl Surface for Recorder {
        fn draw_text(&mut self, text: &str, x: i32, y: i32, _style: TextStyle) {
            self.0.push(Draw::Text {
                text: text.to_string(),
                x,
                y,
            });
        }

        fn fill_rect(&mut self, rect: RectF, _shader: &LinearGradient) {
            self.0.push(Draw::Fill(rect));
        }
    }

    fn config(pause_ms: i64) -> MarqueeConfig {
        MarqueeConfig {
            pause_duration_ms: Some(pause_ms),
            ..Default::default()
        }
    }

    /// 50 chars -> 500 wide text in a 300 wide viewport
    fn long_view(pause_ms: i64) -> MarqueeView<ManualScheduler> {
        let mut view = MarqueeView::new(config(pause_ms), ManualScheduler::new());
        view.set_text("x".repeat(50));
        view.layout(Viewport::new(300, 20), &FixedWidth);
        view
    }

    fn paint(view: &mut MarqueeView<ManualScheduler>) -> Recorder {
        let mut recorder = Recorder::default();
        view.paint(&mut recorder);
        recorder
    }

    /// Advance virtual time to the next deadline, deliver and repaint if needed
    fn step(view: &mut MarqueeView<ManualScheduler>) {
        let fired = view.scheduler_mut().advance_to_next();
        for task in fired {
            view.handle_task(task);
        }
        if view.needs_redraw() {
            paint(view);
        }
    }

    #[test]
    fn test_short_text_is_centered_and_static() {
        let mut view = MarqueeView::new(config(1000), ManualScheduler::new());
        view.set_text("hello");
        view.layout(Viewport::new(300, 20), &FixedWidth);

        let recorder = paint(&mut view);
        assert_eq!(
            recorder.0,
            vec![Draw::Text {
                text: "hello".to_string(),
                x: 125,
                y: 16,
            }]
        );
        assert_eq!(view.phase(), MarqueePhase::Static);
        assert_eq!(view.scheduler().pending(), 0);
        assert!(!view.needs_redraw());
    }

    #[test]
    fn test_empty_text_fits() {
        let mut view = MarqueeView::new(config(1000), ManualScheduler::new());
        view.set_text("");
        view.layout(Viewport::new(300, 20), &FixedWidth);
        let recorder = paint(&mut view);
        assert_eq!(recorder.text_x(), Some(150));
        assert_eq!(view.phase(), MarqueePhase::Static);
    }

    #[test]
    fn test_absent_text_draws_nothing() {
        let mut view = MarqueeView::new(config(1000), ManualScheduler::new());
        view.layout(Viewport::new(300, 20), &FixedWidth);
        assert!(paint(&mut view).0.is_empty());

        view.set_text("hello");
        view.clear_text();
        view.layout(Viewport::new(300, 20), &FixedWidth);
        assert!(paint(&mut view).0.is_empty());
    }

    #[test]
    fn test_paint_before_layout_is_noop() {
        let mut view = MarqueeView::new(config(1000), ManualScheduler::new());
        view.set_text("x".repeat(50));
        assert!(paint(&mut view).0.is_empty());
        assert_eq!(view.scheduler().pending(), 0);
    }

    #[test]
    fn test_initialization_values() {
        let mut view = long_view(0);
        paint(&mut view);
        assert_eq!(view.phase(), MarqueePhase::Scrolling);
        assert!((view.state().wrap_around_point() - -525.0).abs() < 1e-9);
        // first frame drew at 0 then advanced
        assert_eq!(view.offset(), -10);
    }

    #[test]
    fn test_first_cycle_pauses_at_start() {
        let mut view = long_view(1000);
        let recorder = paint(&mut view);
        assert_eq!(recorder.text_x(), Some(0));
        assert_eq!(view.phase(), MarqueePhase::Paused);
        assert_eq!(view.offset(), 0);
        assert_eq!(view.scheduler().pending_of(FrameTask::PauseExpired), 1);
        assert_eq!(view.scheduler().pending_of(FrameTask::Frame), 1);
    }

    #[test]
    fn test_pause_lasts_exactly_pause_duration() {
        let mut view = long_view(1000);
        paint(&mut view);

        // frame tick at 20ms repaints without advancing
        step(&mut view);
        assert_eq!(view.phase(), MarqueePhase::Paused);
        assert_eq!(view.offset(), 0);
        assert_eq!(view.scheduler().pending_of(FrameTask::Frame), 0);

        let fired = view.scheduler_mut().advance(Duration::from_millis(979));
        assert!(fired.is_empty());
        assert_eq!(view.phase(), MarqueePhase::Paused);

        let fired = view.scheduler_mut().advance(Duration::from_millis(1));
        assert_eq!(fired.len(), 1);
        view.handle_task(fired[0]);
        assert_eq!(view.phase(), MarqueePhase::Scrolling);
        assert!(view.needs_redraw());

        paint(&mut view);
        assert_eq!(view.offset(), -10);
    }

    #[test]
    fn test_offset_decreases_by_speed_each_frame() {
        let mut view = long_view(0);
        paint(&mut view);
        let start = view.offset();
        for _ in 0..30 {
            step(&mut view);
        }
        assert_eq!(view.offset(), start - 30 * 10);
    }

    #[test]
    fn test_wrap_then_pause_after_full_cycle() {
        let mut view = long_view(1000);
        paint(&mut view);
        // initial pause
        while view.phase() == MarqueePhase::Paused {
            step(&mut view);
        }

        let mut wrapped_at = None;
        for frame in 1..=200 {
            step(&mut view);
            if view.offset() == 300 && wrapped_at.is_none() {
                wrapped_at = Some(frame);
                assert!(view.state().is_wrapped());
            }
            if view.phase() == MarqueePhase::Paused {
                break;
            }
        }

        // the first post-pause paint moved to -10; 52 more frames reach -530
        assert_eq!(wrapped_at, Some(52));
        assert_eq!(view.phase(), MarqueePhase::Paused);
        assert_eq!(view.offset(), 0);
        assert!(!view.state().is_wrapped());
    }

    #[test]
    fn test_no_pause_when_disabled() {
        let mut view = long_view(0);
        paint(&mut view);
        for _ in 0..300 {
            step(&mut view);
            assert_ne!(view.phase(), MarqueePhase::Paused);
        }
        assert_eq!(view.scheduler().pending_of(FrameTask::PauseExpired), 0);
    }

    #[test]
    fn test_rearm_mid_pause_cancels_one_arms_one() {
        let mut view = long_view(1000);
        paint(&mut view);
        let scheduled = view.scheduler().scheduled_count();
        let cancelled = view.scheduler().cancelled_count();

        view.set_pause_duration(500);
        assert_eq!(view.scheduler().scheduled_count(), scheduled + 1);
        assert_eq!(view.scheduler().cancelled_count(), cancelled + 1);
        assert_eq!(view.scheduler().pending_of(FrameTask::PauseExpired), 1);

        let fired = view.scheduler_mut().advance(Duration::from_millis(500));
        let expiries: Vec<_> = fired
            .into_iter()
            .filter(|f| f.task == FrameTask::PauseExpired)
            .collect();
        assert_eq!(expiries.len(), 1);
        view.handle_task(expiries[0]);
        assert_eq!(view.phase(), MarqueePhase::Scrolling);
    }

    #[test]
    fn test_disabling_pause_mid_pause_resumes() {
        let mut view = long_view(1000);
        paint(&mut view);
        view.set_pause_duration(0);
        assert_eq!(view.phase(), MarqueePhase::Scrolling);
        assert_eq!(view.scheduler().pending_of(FrameTask::PauseExpired), 0);
    }

    #[test]
    fn test_stale_pause_expiry_ignored() {
        let mut view = long_view(1000);
        paint(&mut view);
        let stale = FiredTask {
            token: crate::CancelToken::new(u64::MAX),
            task: FrameTask::PauseExpired,
        };
        view.handle_task(stale);
        assert_eq!(view.phase(), MarqueePhase::Paused);
    }

    #[test]
    fn test_left_edge_hidden_while_resting() {
        let mut view = long_view(1000);
        view.set_edge_effect_enabled(true);
        // paused at 0: only the right overlay
        let recorder = paint(&mut view);
        assert_eq!(recorder.fills().len(), 1);
        assert_eq!(recorder.fills()[0].left, 240.0);

        // once scrolling, both overlays
        view.set_pause_duration(1);
        let fired = view.scheduler_mut().advance(Duration::from_millis(1));
        for task in fired {
            view.handle_task(task);
        }
        paint(&mut view);
        let recorder = paint(&mut view);
        assert_eq!(recorder.fills().len(), 2);
    }

    #[test]
    fn test_left_edge_always_shown_without_pause() {
        let mut view = long_view(0);
        view.set_edge_effect_enabled(true);
        let recorder = paint(&mut view);
        assert_eq!(recorder.text_x(), Some(0));
        assert_eq!(recorder.fills().len(), 2);
    }

    #[test]
    fn test_overlay_built_once_per_distinct_geometry() {
        let mut view = long_view(0);
        view.set_edge_effect_enabled(true);
        paint(&mut view);
        for _ in 0..50 {
            step(&mut view);
        }
        assert_eq!(view.renderer().overlay_builds(), 1);

        view.set_edge_effect_width(30);
        paint(&mut view);
        view.set_edge_effect_color(Rgba::BLACK);
        paint(&mut view);
        view.layout(Viewport::new(250, 20), &FixedWidth);
        paint(&mut view);
        for _ in 0..10 {
            step(&mut view);
        }
        assert_eq!(view.renderer().overlay_builds(), 4);
    }

    #[test]
    fn test_height_change_rebuilds_overlay() {
        let mut view = long_view(0);
        view.set_edge_effect_enabled(true);
        paint(&mut view);
        step(&mut view);
        assert_eq!(view.renderer().overlay_builds(), 1);

        view.layout(Viewport::new(300, 30), &FixedWidth);
        paint(&mut view);
        step(&mut view);
        assert_eq!(view.renderer().overlay_builds(), 2);
    }

    #[test]
    fn test_text_change_restarts_animation() {
        let mut view = long_view(0);
        paint(&mut view);
        step(&mut view);
        assert!(view.offset() < 0);

        view.set_text("y".repeat(60));
        assert_eq!(view.phase(), MarqueePhase::Static);
        assert!(view.metrics().is_none());
        view.layout(Viewport::new(300, 20), &FixedWidth);
        assert_eq!(view.metrics().map(|m| m.width), Some(600));

        let recorder = paint(&mut view);
        assert_eq!(recorder.text_x(), Some(0));
        assert!((view.state().wrap_around_point() - -630.0).abs() < 1e-9);
    }

    #[test]
    fn test_text_size_change_remeasures() {
        let mut view = long_view(0);
        paint(&mut view);
        view.set_text_size(32.0);
        assert_eq!(view.phase(), MarqueePhase::Static);
        view.layout(Viewport::new(300, 40), &FixedWidth);
        assert_eq!(view.metrics().map(|m| m.height), Some(32));
        assert_eq!(view.preferred_height(), 32);
    }

    #[test]
    fn test_text_that_now_fits_stops_scrolling() {
        let mut view = long_view(1000);
        paint(&mut view);
        assert_eq!(view.phase(), MarqueePhase::Paused);

        view.layout(Viewport::new(800, 20), &FixedWidth);
        let recorder = paint(&mut view);
        assert_eq!(recorder.text_x(), Some(150));
        assert_eq!(view.phase(), MarqueePhase::Static);
        assert_eq!(view.scheduler().pending_of(FrameTask::PauseExpired), 0);
    }

    #[test]
    fn test_non_positive_speed_does_not_animate() {
        let mut view = long_view(0);
        view.set_speed(-5);
        paint(&mut view);
        assert_eq!(view.offset(), 0);
        assert_eq!(view.scheduler().pending(), 0);

        view.set_speed(5);
        assert!(view.needs_redraw());
        paint(&mut view);
        assert_eq!(view.offset(), -5);
    }

    #[test]
    fn test_marquee_disabled_draws_flush_left() {
        let mut view = long_view(0);
        view.set_marquee_enabled(false);
        let recorder = paint(&mut view);
        assert_eq!(recorder.text_x(), Some(0));
        assert_eq!(view.phase(), MarqueePhase::Static);
        assert_eq!(view.scheduler().pending(), 0);
    }

    #[test]
    fn test_detach_cancels_everything() {
        let mut view = long_view(1000);
        paint(&mut view);
        assert_eq!(view.scheduler().pending(), 2);

        view.detach();
        assert_eq!(view.scheduler().pending(), 0);
        assert!(!view.needs_redraw());
        assert!(paint(&mut view).0.is_empty());

        view.attach();
        assert!(view.needs_redraw());
        paint(&mut view);
        assert_eq!(view.phase(), MarqueePhase::Paused);
    }

    #[test]
    fn test_tasks_after_detach_ignored() {
        let mut view = long_view(1000);
        paint(&mut view);
        let fired = FiredTask {
            token: crate::CancelToken::new(1),
            task: FrameTask::Frame,
        };
        view.detach();
        view.handle_task(fired);
        assert!(!view.needs_redraw());
    }

    #[test]
    fn test_text_color_change_requests_redraw() {
        let mut view = MarqueeView::new(config(0), ManualScheduler::new());
        view.set_text("hi");
        view.layout(Viewport::new(300, 20), &FixedWidth);
        paint(&mut view);
        assert!(!view.needs_redraw());
        view.set_text_color(Rgba::WHITE);
        assert!(view.needs_redraw());
        assert_eq!(view.phase(), MarqueePhase::Static);
    }

    #[test]
    fn test_redraw_does_not_advance() {
        let mut view = long_view(0);
        paint(&mut view);
        let offset = view.offset();
        let pending = view.scheduler().pending();

        let mut recorder = Recorder::default();
        view.redraw(&mut recorder);
        view.redraw(&mut recorder);
        assert_eq!(view.offset(), offset);
        assert_eq!(view.scheduler().pending(), pending);
        assert_eq!(recorder.text_x(), Some(offset));
    }

    #[test]
    fn test_preferred_height_without_metrics() {
        let view = MarqueeView::new(config(0), ManualScheduler::new());
        assert_eq!(view.preferred_height(), 20);
    }
}
