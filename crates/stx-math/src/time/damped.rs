use crate::coords::Vector;

/// A value that chases a target at a rate independent of frame rate.
///
/// Each [`update`](Self::update) blends with
/// `value.mix_over(target, k, dt, unit)`, so after `unit` seconds the remaining
/// distance to the target has been scaled by `k`, however those seconds were
/// split into frames. `k` in `(0, 1)` gives a decay; `k = 0` snaps on the
/// first update and `k = 1` never moves.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Damped<V> {
    value: V,
    target: V,
    k: f32,
    unit: f32,
}

impl<V: Vector> Damped<V> {
    /// Starts at rest on `value`.
    pub fn new(value: V, k: f32, unit: f32) -> Self {
        Self {
            value,
            target: value,
            k,
            unit,
        }
    }

    #[inline]
    pub fn value(&self) -> V {
        self.value
    }

    #[inline]
    pub fn target(&self) -> V {
        self.target
    }

    #[inline]
    pub fn set_target(&mut self, target: V) {
        self.target = target;
    }

    /// Jumps to `value` and makes it the target.
    pub fn snap_to(&mut self, value: V) {
        self.value = value;
        self.target = value;
    }

    pub fn update(&mut self, dt: f32) -> V {
        self.value = self.value.mix_over(self.target, self.k, dt, self.unit);
        self.value
    }

    /// Exact equality with the target.
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.value == self.target
    }
}
