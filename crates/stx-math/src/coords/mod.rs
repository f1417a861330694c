//! Vector and axis-aligned box value types.
//!
//! Conventions:
//! - all components are `f32`
//! - origin top-left, +X right, +Y down (for `Rect`/`Quad`)
//! - no operation validates its input; degenerate cases surface as `inf`/`NaN`
//!   or as negative extents
//!
//! `Quad` (min/max) and `Rect` (position/size) describe the same kind of box and
//! are intentionally not convertible into one another.

#[macro_use]
mod ops;

mod quad;
mod rect;
mod vec2;
mod vec3;
mod vec4;
mod vector;

pub use quad::Quad;
pub use rect::Rect;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::{rgb, rgba, Vec4};
pub use vector::{dot, length, length2, mix, mix_over, mix_step, Vector};
