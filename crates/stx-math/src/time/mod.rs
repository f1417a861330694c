//! Time subsystem.
//!
//! - `FrameClock` turns timestamps into clamped per-frame deltas
//! - `Damped` feeds those deltas into `Vector::mix_over`

mod damped;
mod frame_clock;

pub use damped::Damped;
pub use frame_clock::{FrameClock, FrameTime};
