pub mod color;
pub mod recorder;
pub mod traits;

pub use color::Color;
pub use recorder::{DrawCommand, PathArc, RecordingSurface};
pub use traits::{ColorStop, FillStyle, RadialGradient, Surface};
