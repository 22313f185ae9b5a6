pub mod button;
pub mod hid;

pub use button::{Button, ButtonError, Detection};
pub use hid::HIDDevice;

#[cfg(feature = "simulation")]
pub use hid::SimulatedHID;
