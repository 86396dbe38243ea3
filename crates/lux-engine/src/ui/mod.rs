pub mod cursor;
pub mod intro;
pub mod magnetic;
pub mod sheet;
pub mod text_split;

pub use cursor::CursorFollower;
pub use intro::{IntroEvent, IntroPhase, IntroSequence, IntroTargets};
pub use magnetic::{magnetic_offset, MagneticButton};
pub use sheet::{ProjectData, ProjectSheet, SheetView};
pub use text_split::{split_chars, split_nodes, CharCell, SourceNode, SplitPart, SplitText};
