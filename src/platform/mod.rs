//! Platform abstraction layer
//!
//! External collaborators of the simulation loop:
//! - Input (held keys, fire, quit)
//! - Frame pacing and FPS measurement

pub mod clock;
pub mod input;

pub use clock::{Clock, FrameClock};
pub use input::{AutopilotInput, InputSource, InputState};
