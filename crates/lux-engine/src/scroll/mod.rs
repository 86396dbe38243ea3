pub mod navbar;
pub mod smooth;
pub mod trigger;

use std::cell::RefCell;
use std::rc::Rc;

pub use navbar::{NavVisibility, SmartNavbar};
pub use smooth::{ScrollToOptions, SmoothScroll};
pub use trigger::{Marquee, Offset, RevealGroup, RevealPreset, RevealSet, Scrub, ScrollTrigger, TriggerPosition};

/// The page-wide scroller, shared by the frame loop, anchors and the sheet.
pub type SharedScroll = Rc<RefCell<SmoothScroll>>;
