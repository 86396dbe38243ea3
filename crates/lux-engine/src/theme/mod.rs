pub mod bus;
pub mod controller;
pub mod kind;
pub mod store;
pub mod style;

pub use bus::{SubscriptionId, ThemeBus, ThemeChanged};
pub use controller::{ThemeController, THEME_KEY};
pub use kind::{Theme, ToggleIcon};
pub use store::{MemoryStore, PreferenceStore};
pub use style::{StaticStyle, StyleSource, TEXT_PRIMARY};
