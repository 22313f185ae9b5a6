#[cfg(feature = "simulation")]
use std::sync::{Arc, Mutex};

#[cfg(feature = "simulation")]
use log::debug;

/// A human-interface device that reports raw button state, usually a
/// joystick or gamepad on the driver station.
pub trait HIDDevice {
  /// Raw state of the given button. Indices are 1-based; implementations
  /// report `false` for indices the device does not have.
  fn raw_button(&self, index: usize) -> bool;
}

impl<'a, T: HIDDevice> HIDDevice for &'a T {
  fn raw_button(&self, index: usize) -> bool {
    (**self).raw_button(index)
  }
}

/// A purely in-memory HID. Clones share the same button state, so one
/// handle can drive the device while others read from it.
#[cfg(feature = "simulation")]
#[derive(Debug, Clone)]
pub struct SimulatedHID {
  buttons: Arc<Mutex<Vec<bool>>>,
}

#[cfg(feature = "simulation")]
impl SimulatedHID {
  pub fn new(n_buttons: usize) -> Self {
    Self { buttons: Arc::new(Mutex::new(vec![false; n_buttons])) }
  }

  pub fn n_buttons(&self) -> usize {
    self.buttons.lock().unwrap().len()
  }

  /// Drives a button from test or demo code. 1-based, like `raw_button`.
  /// Out of range indices are ignored.
  pub fn set_button(&self, index: usize, state: bool) {
    let mut buttons = self.buttons.lock().unwrap();
    if index >= 1 && index <= buttons.len() {
      debug!("sim button {} set to {}", index, state);
      buttons[index - 1] = state;
    }
  }
}

#[cfg(feature = "simulation")]
impl HIDDevice for SimulatedHID {
  fn raw_button(&self, index: usize) -> bool {
    let buttons = self.buttons.lock().unwrap();
    if index < 1 || index > buttons.len() {
      false
    } else {
      buttons[index - 1]
    }
  }
}

#[cfg(all(test, feature = "simulation"))]
mod tests {
  use super::{HIDDevice, SimulatedHID};

  #[test]
  fn set_and_read_back() {
    let hid = SimulatedHID::new(12);
    assert_eq!(hid.raw_button(3), false);
    hid.set_button(3, true);
    assert_eq!(hid.raw_button(3), true);
    hid.set_button(3, false);
    assert_eq!(hid.raw_button(3), false);
  }

  #[test]
  fn out_of_range_reads_are_inert() {
    let hid = SimulatedHID::new(4);
    assert_eq!(hid.raw_button(0), false);
    assert_eq!(hid.raw_button(5), false);

    hid.set_button(0, true);
    hid.set_button(5, true);
    for index in 1..=4 {
      assert_eq!(hid.raw_button(index), false);
    }
  }

  #[test]
  fn clones_share_state() {
    let hid = SimulatedHID::new(12);
    let other = hid.clone();
    hid.set_button(7, true);
    assert_eq!(other.raw_button(7), true);
  }
}
