//! Time subsystem.
//!
//! Frame timing utilities, decoupled from the runtime:
//! - one `FrameClock` per render loop
//! - call `tick()` once per presented frame to obtain `FrameTime`
//!
//! The spin step is per-frame fixed, so nothing here drives the animation;
//! the clock exists for frame accounting and diagnostics.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
