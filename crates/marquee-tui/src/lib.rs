pub mod app;
pub mod event;
pub mod input;
pub mod scheduler;
pub mod surface;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use scheduler::TokioScheduler;
pub use surface::{BufferSurface, CellMeasurer, CELL_UNITS};
pub use theme::Theme;
