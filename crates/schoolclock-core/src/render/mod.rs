mod clock;
mod driver;
mod frame;
mod surface;

pub use clock::{Clock, FixedClock, SystemClock};
pub use driver::RenderLoop;
pub use frame::{render, Frame, Phase, COMPLETE_MESSAGE, NOT_STARTED_MESSAGE};
pub use surface::DisplaySurface;
