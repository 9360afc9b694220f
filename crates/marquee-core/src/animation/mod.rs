//! Marquee animation system
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `state` - Offset, wrap-around and pause flags with their per-frame transitions
//!
//! ## L3 Molecular Layer
//! - `scheduler` - Host scheduling boundary and the frame/pause bookkeeping on top of it
//! - `manual` - Virtual-clock scheduler for hosts without a timer runtime
//!
//! # Usage
//!
//! ```ignore
//! use marquee_core::{ManualScheduler, MarqueeConfig, MarqueeView, Viewport};
//!
//! let mut view = MarqueeView::new(MarqueeConfig::default(), ManualScheduler::new());
//! view.set_text("A headline that is much wider than the viewport");
//! view.layout(Viewport::new(80, 1), &measurer);
//! view.paint(&mut surface);
//!
//! // Later, when the host delivers a fired task:
//! view.handle_task(fired);
//! if view.needs_redraw() {
//!     view.paint(&mut surface);
//! }
//! ```

// L4 Atomic Layer
pub mod state;

// L3 Molecular Layer
pub mod manual;
pub mod scheduler;

pub use manual::ManualScheduler;
pub use scheduler::{CancelToken, FiredTask, FrameScheduler, FrameTask, Scheduler};
pub use state::{Advance, AnimationState, MarqueePhase};
