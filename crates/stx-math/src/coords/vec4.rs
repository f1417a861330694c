use core::mem::size_of;
use core::ops::{Index, IndexMut};

use bytemuck::{Pod, Zeroable};

use super::Vec3;

/// 4D vector, also used as a straight-alpha RGBA colour.
///
/// The colour channels are views over the same storage: `r` is `x`, `g` is `y`,
/// `b` is `z` and `a` is `w`. Writing `x` changes what `r()` returns.
///
/// The struct is `#[repr(C)]` and `Pod`, so it can be viewed as `[f32; 4]`
/// ([`as_array`](Self::as_array)) and its first three components as a [`Vec3`]
/// ([`as_vec3`](Self::as_vec3)) without copying.
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn r(self) -> f32 {
        self.x
    }

    #[inline]
    pub const fn g(self) -> f32 {
        self.y
    }

    #[inline]
    pub const fn b(self) -> f32 {
        self.z
    }

    #[inline]
    pub const fn a(self) -> f32 {
        self.w
    }

    /// Same colour with alpha replaced.
    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { w: a, ..self }
    }

    #[inline]
    pub fn as_array(&self) -> &[f32; 4] {
        bytemuck::cast_ref(self)
    }

    #[inline]
    pub fn as_array_mut(&mut self) -> &mut [f32; 4] {
        bytemuck::cast_mut(self)
    }

    /// Borrows `x, y, z` as a [`Vec3`] sharing this vector's storage.
    #[inline]
    pub fn as_vec3(&self) -> &Vec3 {
        bytemuck::from_bytes(&bytemuck::bytes_of(self)[..size_of::<Vec3>()])
    }

    /// Mutable form of [`as_vec3`](Self::as_vec3). Writes land in `x, y, z`;
    /// `w` is never touched.
    #[inline]
    pub fn as_vec3_mut(&mut self) -> &mut Vec3 {
        bytemuck::from_bytes_mut(&mut bytemuck::bytes_of_mut(self)[..size_of::<Vec3>()])
    }

    /// Copies `x, y, z` out.
    #[inline]
    pub const fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn set_xyz(&mut self, v: Vec3) {
        self.x = v.x;
        self.y = v.y;
        self.z = v.z;
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &f32 {
        &self.as_array()[index]
    }
}

impl IndexMut<usize> for Vec4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.as_array_mut()[index]
    }
}

impl From<[f32; 4]> for Vec4 {
    #[inline]
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self { x, y, z, w }
    }
}

impl From<Vec4> for [f32; 4] {
    #[inline]
    fn from(v: Vec4) -> Self {
        *v.as_array()
    }
}

vec_algebra_impl!(Vec4, 4, x, y, z, w);

/// Builds a colour from 8-bit channels and a `[0, 1]` alpha.
///
/// `r`, `g` and `b` are divided by 255; `a` is passed through unchanged.
#[inline]
pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Vec4 {
    Vec4::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32)
}

/// Opaque [`rgba`].
#[inline]
pub fn rgb(r: u8, g: u8, b: u8) -> Vec4 {
    rgba(r, g, b, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn v(x: f32, y: f32, z: f32, w: f32) -> Vec4 {
        Vec4::new(x, y, z, w)
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn default_is_zero() {
        assert_eq!(Vec4::default(), v(0.0, 0.0, 0.0, 0.0));
        assert_eq!(Vec4::zero(), Vec4::default());
    }

    #[test]
    fn splat_broadcasts() {
        assert_eq!(Vec4::splat(2.5), v(2.5, 2.5, 2.5, 2.5));
    }

    // ── arithmetic ────────────────────────────────────────────────────────

    #[test]
    fn add_then_sub_round_trips() {
        let a = v(1.5, -2.0, 8.0, 0.25);
        let b = v(4.0, 0.5, -3.0, 16.0);
        assert_eq!(a + b - b, a);
    }

    #[test]
    fn elementwise_mul_div() {
        let a = v(2.0, 4.0, 6.0, 8.0);
        let b = v(2.0, 2.0, 3.0, 4.0);
        assert_eq!(a * b, v(4.0, 8.0, 18.0, 32.0));
        assert_eq!(a / b, v(1.0, 2.0, 2.0, 2.0));
    }

    #[test]
    fn scalar_forms() {
        let a = v(1.0, 2.0, 4.0, 8.0);
        assert_eq!(a * 2.0, v(2.0, 4.0, 8.0, 16.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a / 2.0, v(0.5, 1.0, 2.0, 4.0));
        assert_eq!(8.0 / a, v(8.0, 4.0, 2.0, 1.0));
    }

    #[test]
    fn compound_assignment_matches_binary_ops() {
        let a = v(1.0, 2.0, 3.0, 4.0);
        let b = v(4.0, 3.0, 2.0, 1.0);

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
        c -= b;
        assert_eq!(c, a);
        c *= b;
        assert_eq!(c, a * b);
        c /= b;
        assert_eq!(c, a);
        c *= 3.0;
        assert_eq!(c, a * 3.0);
        c /= 3.0;
        assert_eq!(c, a);
    }

    #[test]
    fn negation() {
        assert_eq!(-v(1.0, -2.0, 0.5, 0.0), v(-1.0, 2.0, -0.5, -0.0));
    }

    #[test]
    fn divide_by_zero_component_is_ieee() {
        let r = v(1.0, -1.0, 0.0, 2.0) / v(0.0, 0.0, 0.0, 1.0);
        assert_eq!(r.x, f32::INFINITY);
        assert_eq!(r.y, f32::NEG_INFINITY);
        assert!(r.z.is_nan());
        assert_eq!(r.w, 2.0);
        assert!(!r.is_finite());
    }

    #[test]
    fn equality_is_exact() {
        assert_ne!(v(1.0 + f32::EPSILON, 0.0, 0.0, 0.0), v(1.0, 0.0, 0.0, 0.0));
        assert_eq!(v(0.5, 0.25, 0.0, -0.0), v(0.5, 0.25, -0.0, 0.0));
    }

    // ── metric ────────────────────────────────────────────────────────────

    #[test]
    fn length2_is_self_dot() {
        let a = v(1.0, 2.0, 3.0, 4.0);
        assert_eq!(a.dot(v(1.0, 0.0, -1.0, 2.0)), 6.0);
        assert_eq!(a.length2(), a.dot(a));
        assert_eq!(a.length2(), 30.0);
        assert_eq!(v(1.0, 1.0, 1.0, 1.0).length(), 2.0);
    }

    #[test]
    fn normalize_has_unit_length() {
        for a in [v(1.0, 2.0, 3.0, 4.0), v(-0.001, 0.0, 5.0, 1e3), v(0.0, 0.0, 0.0, -7.0)] {
            assert!((a.normalize().length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn normalize_zero_is_nan() {
        let n = Vec4::splat(0.0).normalize();
        assert!(n.x.is_nan() && n.y.is_nan() && n.z.is_nan() && n.w.is_nan());
    }

    #[test]
    fn make_normal_chains() {
        let mut a = v(0.0, 3.0, 0.0, 4.0);
        let len = a.make_normal().length();
        assert!((len - 1.0).abs() < EPS);
        assert_eq!(a, v(0.0, 0.6, 0.0, 0.8));
    }

    #[test]
    fn sum_adds_components() {
        assert_eq!(v(1.0, 2.0, 3.0, -4.0).sum(), 2.0);
    }

    // ── min / max / clamp ─────────────────────────────────────────────────

    #[test]
    fn max_min_componentwise() {
        let a = v(1.0, 5.0, -2.0, 0.0);
        let b = v(3.0, 2.0, -1.0, 0.0);
        assert_eq!(a.max(b), v(3.0, 5.0, -1.0, 0.0));
        assert_eq!(a.min(b), v(1.0, 2.0, -2.0, 0.0));
    }

    #[test]
    fn nan_selects_right_hand_side() {
        let a = v(f32::NAN, 1.0, 1.0, 1.0);
        let b = Vec4::splat(2.0);
        assert_eq!(a.max(b).x, 2.0);
        assert!(b.max(a).x.is_nan());
    }

    #[test]
    fn clamp_into_range() {
        let lo = Vec4::splat(0.0);
        let hi = Vec4::splat(1.0);
        assert_eq!(v(-1.0, 0.5, 2.0, 1.0).clamp(lo, hi), v(0.0, 0.5, 1.0, 1.0));
    }

    #[test]
    fn clamp_inverted_range_follows_min_then_max() {
        // lo > hi: min(hi) first gives 1, then max(lo) lifts it to 3.
        let lo = Vec4::splat(3.0);
        let hi = Vec4::splat(1.0);
        assert_eq!(Vec4::splat(2.0).clamp(lo, hi), Vec4::splat(3.0));
    }

    // ── mix ───────────────────────────────────────────────────────────────

    #[test]
    fn mix_endpoints() {
        let a = v(1.0, 2.0, 3.0, 4.0);
        let b = v(-5.0, 0.5, 8.0, 0.0);
        assert_eq!(a.mix(b, 1.0), a);
        assert_eq!(a.mix(b, 0.0), b);
        assert_eq!(a.mix(b, 0.5), v(-2.0, 1.25, 5.5, 2.0));
    }

    #[test]
    fn mix_extrapolates() {
        let a = Vec4::splat(1.0);
        let b = Vec4::splat(0.0);
        assert_eq!(a.mix(b, 2.0), Vec4::splat(2.0));
        assert_eq!(a.mix(b, -1.0), Vec4::splat(-1.0));
    }

    #[test]
    fn mix_step_rescales_k() {
        let a = Vec4::splat(0.0);
        let b = Vec4::splat(1.0);
        // 0.5^2 = 0.25
        assert_eq!(a.mix_step(b, 0.5, 2.0), a.mix(b, 0.25));
        // step == unit leaves k alone
        assert_eq!(a.mix_over(b, 0.5, 0.1, 0.1), a.mix(b, 0.5));
    }

    #[test]
    fn mix_step_pow_edges() {
        let a = Vec4::splat(4.0);
        let b = Vec4::splat(8.0);
        assert_eq!(a.mix_step(b, 0.0, 0.5), b);
        assert_eq!(a.mix_step(b, 1.0, 0.5), a);
    }

    // ── views ─────────────────────────────────────────────────────────────

    #[test]
    fn colour_accessors_alias_position() {
        let mut c = v(0.1, 0.2, 0.3, 0.4);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (0.1, 0.2, 0.3, 0.4));
        c.x = 0.9;
        assert_eq!(c.r(), 0.9);
        assert_eq!(c.with_alpha(1.0), v(0.9, 0.2, 0.3, 1.0));
    }

    #[test]
    fn array_view_shares_storage() {
        let mut a = v(1.0, 2.0, 3.0, 4.0);
        assert_eq!(a.as_array(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(a[2], 3.0);
        a[3] = 9.0;
        assert_eq!(a.w, 9.0);
        a.as_array_mut()[0] = -1.0;
        assert_eq!(a.x, -1.0);
        assert_eq!(<[f32; 4]>::from(a), [-1.0, 2.0, 3.0, 9.0]);
        assert_eq!(Vec4::from([-1.0, 2.0, 3.0, 9.0]), a);
    }

    #[test]
    #[should_panic]
    fn index_out_of_range_panics() {
        let a = Vec4::zero();
        let _ = a[4];
    }

    #[test]
    fn as_vec3_aliases_xyz() {
        let mut a = v(1.0, 2.0, 3.0, 4.0);
        assert_eq!(*a.as_vec3(), Vec3::new(1.0, 2.0, 3.0));

        let view = a.as_vec3_mut();
        view.x = 10.0;
        *view *= 2.0;
        assert_eq!(a, v(20.0, 4.0, 6.0, 4.0));

        a.y = -1.0;
        assert_eq!(a.as_vec3().y, -1.0);
    }

    #[test]
    fn xyz_copy_and_write_back() {
        let mut a = v(1.0, 2.0, 3.0, 4.0);
        let mut p = a.xyz();
        p.z = 7.0;
        assert_eq!(a.z, 3.0);
        a.set_xyz(p);
        assert_eq!(a, v(1.0, 2.0, 7.0, 4.0));
    }

    // ── rgba ──────────────────────────────────────────────────────────────

    #[test]
    fn rgba_normalizes_channels() {
        assert_eq!(rgba(255, 0, 0, 1.0), v(1.0, 0.0, 0.0, 1.0));
        assert_eq!(rgba(0, 51, 255, 0.5), v(0.0, 0.2, 1.0, 0.5));
        assert_eq!(rgb(0, 0, 255), v(0.0, 0.0, 1.0, 1.0));
    }
}
