mod countdown;
mod display;

pub use countdown::{Countdown, Tick};
pub use display::format_clock;
