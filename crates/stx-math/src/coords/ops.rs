//! Operator and utility impls shared by `Vec2`, `Vec3` and `Vec4`.
//!
//! Every impl is componentwise. Nothing here checks for zero divisors or
//! non-finite input; results follow IEEE-754.

macro_rules! vec_op_impl {
    ($trait:ident, $func:ident, $v:ident, $($e:ident),+) => {
        impl ::core::ops::$trait for $v {
            type Output = $v;

            #[inline]
            fn $func(self, rhs: $v) -> $v {
                $v { $( $e: ::core::ops::$trait::$func(self.$e, rhs.$e), )+ }
            }
        }
    };
}

macro_rules! vec_assign_op_impl {
    ($trait:ident, $func:ident, $op:tt, $v:ident) => {
        impl ::core::ops::$trait for $v {
            #[inline]
            fn $func(&mut self, rhs: $v) {
                *self = *self $op rhs;
            }
        }
    };
}

macro_rules! vec_scalar_op_impl {
    ($v:ident, $($e:ident),+) => {
        impl ::core::ops::Mul<f32> for $v {
            type Output = $v;

            #[inline]
            fn mul(self, rhs: f32) -> $v {
                $v { $( $e: self.$e * rhs, )+ }
            }
        }

        impl ::core::ops::Div<f32> for $v {
            type Output = $v;

            #[inline]
            fn div(self, rhs: f32) -> $v {
                $v { $( $e: self.$e / rhs, )+ }
            }
        }

        impl ::core::ops::Mul<$v> for f32 {
            type Output = $v;

            #[inline]
            fn mul(self, rhs: $v) -> $v {
                rhs * self
            }
        }

        /// `f / v` divides the scalar by each component.
        impl ::core::ops::Div<$v> for f32 {
            type Output = $v;

            #[inline]
            fn div(self, rhs: $v) -> $v {
                $v { $( $e: self / rhs.$e, )+ }
            }
        }

        impl ::core::ops::MulAssign<f32> for $v {
            #[inline]
            fn mul_assign(&mut self, rhs: f32) {
                *self = *self * rhs;
            }
        }

        impl ::core::ops::DivAssign<f32> for $v {
            #[inline]
            fn div_assign(&mut self, rhs: f32) {
                *self = *self / rhs;
            }
        }

        impl ::core::ops::Neg for $v {
            type Output = $v;

            #[inline]
            fn neg(self) -> $v {
                $v { $( $e: -self.$e, )+ }
            }
        }
    };
}

/// Inherent algebra shared by every float vector.
///
/// `max`/`min` deliberately use `a > b ? a : b` rather than `f32::max`, so a NaN
/// on either side selects the right-hand component instead of being dropped.
macro_rules! vec_algebra_impl {
    ($v:ident, $n:expr, $($e:ident),+) => {
        impl $v {
            pub const DIMENSIONS: usize = $n;

            /// Broadcasts `f` to every component.
            #[inline]
            pub const fn splat(f: f32) -> Self {
                Self { $( $e: f, )+ }
            }

            #[inline]
            pub const fn zero() -> Self {
                Self::splat(0.0)
            }

            #[inline]
            pub fn dot(self, other: Self) -> f32 {
                // Trailing -0.0 is an exact no-op, unlike +0.0 which would
                // turn a -0.0 result positive.
                $( self.$e * other.$e + )+ (-0.0)
            }

            /// Squared length; skips the square root when only relative
            /// magnitudes matter.
            #[inline]
            pub fn length2(self) -> f32 {
                self.dot(self)
            }

            #[inline]
            pub fn length(self) -> f32 {
                self.length2().sqrt()
            }

            /// Returns `self / self.length()`.
            ///
            /// A zero-length vector yields NaN in every component (`0 / 0`).
            #[inline]
            pub fn normalize(self) -> Self {
                self / self.length()
            }

            /// Normalizes in place. See [`normalize`](Self::normalize).
            #[inline]
            pub fn make_normal(&mut self) -> &mut Self {
                *self = self.normalize();
                self
            }

            #[inline]
            pub fn max(self, other: Self) -> Self {
                Self { $( $e: if self.$e > other.$e { self.$e } else { other.$e }, )+ }
            }

            #[inline]
            pub fn min(self, other: Self) -> Self {
                Self { $( $e: if self.$e < other.$e { self.$e } else { other.$e }, )+ }
            }

            /// `self.min(hi).max(lo)`. Inverted bounds are not rejected; the
            /// result is whatever that evaluation order produces.
            #[inline]
            pub fn clamp(self, lo: Self, hi: Self) -> Self {
                self.min(hi).max(lo)
            }

            #[inline]
            pub fn sum(self) -> f32 {
                $( self.$e + )+ (-0.0)
            }

            /// Linear blend `self * k + other * (1 - k)`.
            ///
            /// `k == 1` gives `self`, `k == 0` gives `other`; values outside
            /// `[0, 1]` extrapolate.
            #[inline]
            pub fn mix(self, other: Self, k: f32) -> Self {
                self * k + other * (1.0 - k)
            }

            /// Frame-rate independent blend.
            ///
            /// `k` is the blend factor calibrated for an interval of `unit`;
            /// it is rescaled to `k.powf(step / unit)` for an elapsed `step`.
            #[inline]
            pub fn mix_over(self, other: Self, k: f32, step: f32, unit: f32) -> Self {
                self.mix(other, k.powf(step / unit))
            }

            /// [`mix_over`](Self::mix_over) with a unit interval of `1`.
            #[inline]
            pub fn mix_step(self, other: Self, k: f32, step: f32) -> Self {
                self.mix_over(other, k, step, 1.0)
            }

            #[inline]
            pub fn is_finite(self) -> bool {
                true $( && self.$e.is_finite() )+
            }
        }

        impl $crate::coords::Vector for $v {
            const DIMENSIONS: usize = $n;

            #[inline]
            fn dot(self, other: Self) -> f32 {
                $v::dot(self, other)
            }

            #[inline]
            fn normalize(self) -> Self {
                $v::normalize(self)
            }

            #[inline]
            fn mix(self, other: Self, k: f32) -> Self {
                $v::mix(self, other, k)
            }
        }

        vec_op_impl!(Add, add, $v, $($e),+);
        vec_op_impl!(Sub, sub, $v, $($e),+);
        vec_op_impl!(Mul, mul, $v, $($e),+);
        vec_op_impl!(Div, div, $v, $($e),+);

        vec_assign_op_impl!(AddAssign, add_assign, +, $v);
        vec_assign_op_impl!(SubAssign, sub_assign, -, $v);
        vec_assign_op_impl!(MulAssign, mul_assign, *, $v);
        vec_assign_op_impl!(DivAssign, div_assign, /, $v);

        vec_scalar_op_impl!($v, $($e),+);
    };
}
