use bytemuck::{Pod, Zeroable};

/// 2D vector.
///
/// Also the corner/extent type used by [`Quad`](super::Quad) and
/// [`Rect`](super::Rect).
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<[f32; 2]> for Vec2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Vec2> for [f32; 2] {
    #[inline]
    fn from(v: Vec2) -> Self {
        [v.x, v.y]
    }
}

vec_algebra_impl!(Vec2, 2, x, y);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn componentwise_arithmetic() {
        let a = Vec2::new(6.0, 8.0);
        let b = Vec2::new(2.0, 4.0);

        assert_eq!(a + b, Vec2::new(8.0, 12.0));
        assert_eq!(a - b, Vec2::new(4.0, 4.0));
        assert_eq!(a * b, Vec2::new(12.0, 32.0));
        assert_eq!(a / b, Vec2::new(3.0, 2.0));
        assert_eq!(a * 0.5, Vec2::new(3.0, 4.0));
        assert_eq!(2.0 * b, Vec2::new(4.0, 8.0));
        assert_eq!(8.0 / b, Vec2::new(4.0, 2.0));
    }

    #[test]
    fn max_min_pick_per_axis() {
        let a = Vec2::new(1.0, 5.0);
        let b = Vec2::new(3.0, 2.0);

        assert_eq!(a.max(b), Vec2::new(3.0, 5.0));
        assert_eq!(a.min(b), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn length_of_pythagorean_triple() {
        assert_eq!(Vec2::new(3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn compound_assignment() {
        let mut v = Vec2::splat(1.0);
        v += Vec2::new(1.0, 2.0);
        v *= 2.0;
        v -= Vec2::new(0.0, 1.0);
        assert_eq!(v, Vec2::new(4.0, 5.0));
    }
}
