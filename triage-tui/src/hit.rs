//! Mouse hit testing over the regions drawn in the last frame.

use triage_lib::Target;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// The header's select-all checkbox.
    SelectAll,
    /// A row body or a row checkbox.
    Row(Target),
}

/// Clickable regions of a frame, in draw order.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Hit)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a region. Later regions are drawn on top of earlier ones.
    pub fn push(&mut self, rect: Rect, hit: Hit) {
        self.regions.push((rect, hit));
    }

    /// Find the topmost region containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<Hit> {
        // Reverse order: last drawn = on top
        self.regions
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(x, y))
            .map(|(_, hit)| *hit)
    }
}
