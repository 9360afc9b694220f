pub mod animation;
pub mod color;
pub mod config;
pub mod error;
pub mod metrics;
pub mod render;
pub mod view;

pub use animation::{
    CancelToken, FiredTask, FrameScheduler, FrameTask, ManualScheduler, MarqueePhase, Scheduler,
};
pub use color::Rgba;
pub use config::{default_pause_duration, set_default_pause_duration, AppConfig, MarqueeConfig};
pub use error::{Error, Result};
pub use metrics::{TextMeasurer, TextMetrics};
pub use render::{EdgeOverlay, LinearGradient, RectF, Surface, TextStyle};
pub use view::{MarqueeView, Viewport};
