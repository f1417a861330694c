use super::Vec2;

/// Axis-aligned rectangle given by its top-left `position` and `size`.
///
/// The far corner is derived, never stored, so editing either field keeps
/// [`max`](Self::max) consistent. Sizes are expected to be non-negative but
/// nothing enforces it.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub position: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.position + self.size
    }

    /// Intersection of `self` and `other`.
    ///
    /// When the two do not overlap on an axis, the returned size on that axis
    /// is zero or negative. Callers that need a real overlap check the size.
    #[inline]
    pub fn clamp(self, other: Rect) -> Rect {
        let position = other.position.max(self.position);
        let size = other.max().min(self.max()) - position;
        Rect { position, size }
    }

    /// Strict interior test: points on the boundary are outside.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let d = p - self.position;
        d.x > 0.0 && d.x < self.size.x && d.y > 0.0 && d.y < self.size.y
    }

    /// True when both size components are exactly zero.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x == 0.0 && self.size.y == 0.0
    }
}
