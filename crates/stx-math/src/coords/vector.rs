use core::ops::{Add, Div, Mul, Sub};

/// Operations common to `Vec2`, `Vec3` and `Vec4`.
///
/// The concrete types expose the same operations as inherent methods; this
/// trait exists so generic code (the free functions below, [`Damped`]) can
/// work over any of them.
///
/// [`Damped`]: crate::time::Damped
pub trait Vector:
    Copy
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f32, Output = Self>
    + Div<f32, Output = Self>
{
    const DIMENSIONS: usize;

    fn dot(self, other: Self) -> f32;

    fn normalize(self) -> Self;

    fn mix(self, other: Self, k: f32) -> Self;

    #[inline]
    fn length2(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    fn length(self) -> f32 {
        self.length2().sqrt()
    }

    #[inline]
    fn mix_over(self, other: Self, k: f32, step: f32, unit: f32) -> Self {
        self.mix(other, k.powf(step / unit))
    }

    #[inline]
    fn mix_step(self, other: Self, k: f32, step: f32) -> Self {
        self.mix_over(other, k, step, 1.0)
    }
}

#[inline]
pub fn dot<V: Vector>(a: V, b: V) -> f32 {
    a.dot(b)
}

#[inline]
pub fn length2<V: Vector>(v: V) -> f32 {
    v.length2()
}

#[inline]
pub fn length<V: Vector>(v: V) -> f32 {
    v.length()
}

#[inline]
pub fn mix<V: Vector>(a: V, b: V, k: f32) -> V {
    a.mix(b, k)
}

#[inline]
pub fn mix_step<V: Vector>(a: V, b: V, k: f32, step: f32) -> V {
    a.mix_step(b, k, step)
}

#[inline]
pub fn mix_over<V: Vector>(a: V, b: V, k: f32, step: f32, unit: f32) -> V {
    a.mix_over(b, k, step, unit)
}
