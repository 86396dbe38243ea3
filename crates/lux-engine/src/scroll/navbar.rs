use crate::api::config::NavbarConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavVisibility {
    Shown,
    Hidden,
}

/// Hides the navigation bar while scrolling down and brings it back on the
/// way up or near the top of the page.
#[derive(Debug, Clone)]
pub struct SmartNavbar {
    last_y: f64,
    top_buffer: f64,
    visibility: NavVisibility,
}

impl SmartNavbar {
    pub fn new(config: &NavbarConfig) -> Self {
        Self {
            last_y: 0.0,
            top_buffer: config.top_buffer,
            visibility: NavVisibility::Shown,
        }
    }

    pub fn visibility(&self) -> NavVisibility {
        self.visibility
    }

    /// Feed the latest scroll position. Returns the new visibility only when
    /// it changed.
    pub fn update(&mut self, y: f64) -> Option<NavVisibility> {
        let next = if y < self.last_y || y < self.top_buffer {
            NavVisibility::Shown
        } else if y > self.last_y && y > self.top_buffer {
            NavVisibility::Hidden
        } else {
            self.visibility
        };
        self.last_y = y;

        if next == self.visibility {
            return None;
        }
        self.visibility = next;
        Some(next)
    }
}
