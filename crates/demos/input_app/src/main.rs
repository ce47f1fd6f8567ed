use crossterm::event::KeyCode;
use std::error::Error;
use weft::prelude::*;
use weft::widgets::input::NumberInput;

fn main() -> Result<(), Box<dyn Error>> {
    setup_panic_handler();

    on_global_event(KeyCode::Esc, || {
        request_exit();
        true
    });

    run(|| NumberInput)
}
