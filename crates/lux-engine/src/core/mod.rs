pub mod lifecycle;
pub mod time;

pub use lifecycle::Lifecycle;
pub use time::{FrameClock, FrameTime};
