use crossterm::event::KeyCode;
use std::error::Error;
use weft::prelude::*;
use weft::widgets::counter::CounterPanel;

fn main() -> Result<(), Box<dyn Error>> {
    setup_panic_handler();

    on_global_event(KeyCode::Char('q'), || {
        request_exit();
        true
    });

    run(|| CounterPanel::new(CounterConfig::default().step(1)))
}
