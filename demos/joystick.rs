use std::{thread, time::Duration};

use hid_buttons::{Button, Detection, SimulatedHID};
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
  env_logger::builder().filter_level(log::LevelFilter::Debug).target(env_logger::Target::Stdout).init();

  let hid = SimulatedHID::new(12);

  let mut shoot = Button::new(&hid, 1, Detection::Press)?;
  let mut gear = Button::new(&hid, 2, Detection::Either)?;
  let mut winch = Button::new(&hid, 3, Detection::Hold)?;
  let mut eject = Button::new(&hid, 4, Detection::Release)?;

  // A canned driver: (tick, button, state)
  let script = [
    (1, 4, true),
    (2, 1, true),
    (3, 1, false),
    (4, 2, true),
    (5, 3, true),
    (7, 3, false),
    (8, 2, false),
    (9, 4, false),
  ];

  for tick in 0..11 {
    for &(at, index, state) in &script {
      if at == tick {
        hid.set_button(index, state);
      }
    }

    if shoot.is_pressed() {
      info!("tick {}: shoot", tick);
    }
    if gear.is_pressed() {
      info!("tick {}: gear toggled", tick);
    }
    if winch.is_pressed() {
      info!("tick {}: winch running", tick);
    }
    if eject.is_pressed() {
      info!("tick {}: eject", tick);
    }

    thread::sleep(Duration::from_millis(20));
  }

  Ok(())
}
