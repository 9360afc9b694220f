mod marquee;
mod marquee_list;
mod status_bar;

pub use marquee::MarqueeWidget;
pub use marquee_list::MarqueeListWidget;
pub use status_bar::StatusBarWidget;
