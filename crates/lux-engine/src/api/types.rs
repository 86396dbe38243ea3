/// Handle for a DOM element the host registered with the engine.
///
/// The engine never touches the DOM; it computes style values per id and
/// the host writes them back to the element it mapped the id to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

/// Hands out unique element ids.
#[derive(Debug, Default)]
pub struct ElementIds {
    next: u32,
}

impl ElementIds {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> ElementId {
        let id = ElementId(self.next.max(1));
        self.next = id.0 + 1;
        id
    }

    /// Allocate `n` consecutive ids (one per split character, list item, ...).
    pub fn take(&mut self, n: usize) -> Vec<ElementId> {
        (0..n).map(|_| self.next_id()).collect()
    }
}

/// Pixel size of a host element or viewport in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn min_dim(&self) -> f64 {
        self.width.min(self.height)
    }
}

/// Axis-aligned rectangle in viewport coordinates (as from `getBoundingClientRect`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> glam::DVec2 {
        glam::DVec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}
