//! Small vector and rectangle toolkit.
//!
//! `coords` holds the value types (`Vec2`, `Vec3`, `Vec4`, `Quad`, `Rect`).
//! `time` adds frame timing and frame-rate independent damping on top of
//! `Vector::mix_over`. `logging` sets up the `log` backend for binaries.

pub mod coords;
pub mod logging;
pub mod time;

pub use coords::{rgb, rgba, Quad, Rect, Vec2, Vec3, Vec4, Vector};
