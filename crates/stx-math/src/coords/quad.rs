use super::Vec2;

/// Axis-aligned box given by its `min` and `max` corners.
///
/// `min <= max` per axis is expected but not checked; a flipped quad simply
/// reports negative extents.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Quad {
    pub min: Vec2,
    pub max: Vec2,
}

impl Quad {
    #[inline]
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    #[inline]
    pub const fn from_coords(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min: Vec2::new(min_x, min_y),
            max: Vec2::new(max_x, max_y),
        }
    }

    #[inline]
    pub fn size(self) -> Vec2 {
        self.max - self.min
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.max.y - self.min.y
    }

    /// True only when both corners coincide.
    ///
    /// A quad collapsed on a single axis (a line) still has a nonzero extent on
    /// the other axis and is not empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x == self.max.x && self.min.y == self.max.y
    }
}
