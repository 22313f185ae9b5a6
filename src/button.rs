use log::debug;
use thiserror::Error;

use crate::hid::HIDDevice;

pub const MIN_BUTTON: usize = 1;
pub const MAX_BUTTON: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ButtonError {
  #[error("the button must be a value {MIN_BUTTON} through {MAX_BUTTON}, got {0}")]
  IndexOutOfRange(usize),
}

/// How [`Button::is_pressed`] interprets the raw button state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
  /// Fires on the sample where the button goes down, and stays low while
  /// it is held or released.
  Press,
  /// Fires on the sample where the button comes back up after a press,
  /// and stays low on the press itself and while held.
  Release,
  /// Follows the raw button state directly.
  Hold,
  /// Fires whenever two consecutive samples differ.
  Either,
}

impl Detection {
  // One step of the two-state machine: (last, current) -> (fired, new last).
  // Release latches on an unreported up sample, so it is not the mirror
  // image of Press.
  fn step(self, last: bool, current: bool) -> (bool, bool) {
    match (self, last, current) {
      (Detection::Press, false, true) => (true, true),
      (Detection::Press, true, true) => (false, true),
      (Detection::Press, _, false) => (false, false),
      (Detection::Release, true, false) => (true, false),
      (Detection::Release, false, false) => (false, true),
      (Detection::Release, _, true) => (false, true),
      (Detection::Hold, _, current) => (current, current),
      (Detection::Either, last, current) => (last != current, current),
    }
  }
}

/// Tracks one button on an HID, turning the raw state into press, release,
/// hold or either-edge events. Create one tracker per button of interest
/// and poll it once per control loop iteration.
#[derive(Debug)]
pub struct Button<H: HIDDevice> {
  hid: H,
  index: usize,
  detection: Detection,
  last: bool,
}

impl<H: HIDDevice> Button<H> {
  /// Creates a tracker for `index` on `hid`. The index must be a value
  /// [`MIN_BUTTON`] through [`MAX_BUTTON`]. The tracker starts out with an
  /// unpressed last sample.
  pub fn new(hid: H, index: usize, detection: Detection) -> Result<Self, ButtonError> {
    check_index(index)?;
    Ok(Self { hid, index, detection, last: false })
  }

  /// Samples the underlying button once and reports whether the active
  /// detection fired. Each call consumes one raw sample, so call this
  /// exactly once per control cycle.
  pub fn is_pressed(&mut self) -> bool {
    let current = self.hid.raw_button(self.index);
    let (fired, last) = self.detection.step(self.last, current);
    self.last = last;
    fired
  }

  pub fn detection(&self) -> Detection { self.detection }

  pub fn set_detection(&mut self, detection: Detection) {
    debug!("button {}: detection {:?} -> {:?}", self.index, self.detection, detection);
    self.detection = detection;
  }

  pub fn index(&self) -> usize { self.index }

  /// Retargets the tracker to another button on the same device. The edge
  /// latch carries over: the next poll compares against the last sample
  /// read from the previous button.
  pub fn set_index(&mut self, index: usize) -> Result<(), ButtonError> {
    check_index(index)?;
    debug!("button {}: retargeted to {}", self.index, index);
    self.index = index;
    Ok(())
  }

  pub fn hid(&self) -> &H { &self.hid }
}

fn check_index(index: usize) -> Result<(), ButtonError> {
  if index < MIN_BUTTON || index > MAX_BUTTON {
    Err(ButtonError::IndexOutOfRange(index))
  } else {
    Ok(())
  }
}
