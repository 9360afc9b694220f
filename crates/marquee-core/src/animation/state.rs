//! L4 Atomic Layer: Marquee animation state and its transition rules
//!
//! Pure data, no timers. The view drives it once per paint pass.

/// Trailing gap after the text before it re-enters, as a fraction of its width
pub const WRAP_GAP: f64 = 0.05;

/// Observable phase of the marquee
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarqueePhase {
    /// Text fits (or animation is off); drawn once, no frames scheduled
    Static,
    /// Offset advances every frame
    Scrolling,
    /// A scroll cycle finished and the pause timer is running
    Paused,
}

/// What a single advance step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Offset moved left by the speed
    Scrolled,
    /// Text left the viewport and was moved to its right edge
    Wrapped,
    /// The wrapped text came back to the start position
    CycleComplete {
        /// Offset snapped to 0 and the state entered the paused phase
        paused: bool,
    },
}

/// Horizontal scroll state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationState {
    /// Current horizontal translation; 0 means flush left
    offset: i32,
    /// Offset at which the text has fully left the viewport
    wrap_around_point: f64,
    running: bool,
    /// Set from a wrap until the offset first returns to <= 0
    wrapped: bool,
    paused: bool,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn offset(&self) -> i32 {
        self.offset
    }

    #[inline]
    pub fn wrap_around_point(&self) -> f64 {
        self.wrap_around_point
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn is_wrapped(&self) -> bool {
        self.wrapped
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn phase(&self) -> MarqueePhase {
        match (self.running, self.paused) {
            (false, _) => MarqueePhase::Static,
            (true, true) => MarqueePhase::Paused,
            (true, false) => MarqueePhase::Scrolling,
        }
    }

    /// Start a fresh cycle for text of `text_width`
    ///
    /// The state starts out wrapped, so the first return to offset 0 counts as a
    /// completed cycle and pauses before the first scroll when pausing is on.
    pub fn initialize(&mut self, text_width: u32) {
        let width = text_width as f64;
        self.offset = 0;
        self.wrap_around_point = -(width + width * WRAP_GAP);
        self.running = true;
        self.wrapped = true;
        self.paused = false;
    }

    /// Force re-initialization on the next animated paint
    pub fn stop(&mut self) {
        self.running = false;
        self.paused = false;
    }

    /// Leave the paused phase
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Move the text one frame to the left
    pub fn advance(&mut self, speed: i32, viewport_width: u32, pause_enabled: bool) -> Advance {
        let mut outcome = Advance::Scrolled;
        self.offset = self.offset.saturating_sub(speed);

        if (self.offset as f64) < self.wrap_around_point {
            self.offset = i32::try_from(viewport_width).unwrap_or(i32::MAX);
            self.wrapped = true;
            outcome = Advance::Wrapped;
        }

        if self.wrapped && self.offset <= 0 {
            self.wrapped = false;
            if pause_enabled {
                self.offset = 0;
                self.paused = true;
            }
            outcome = Advance::CycleComplete {
                paused: pause_enabled,
            };
        }

        outcome
    }

    /// Left fade is only shown once text has moved off the left edge, unless
    /// pausing is off (then the text never rests at 0)
    #[inline]
    pub fn shows_left_edge(&self, pause_enabled: bool) -> bool {
        self.offset < 0 || !pause_enabled
    }
}
