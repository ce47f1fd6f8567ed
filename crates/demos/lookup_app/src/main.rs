use crossterm::event::KeyCode;
use std::error::Error;
use std::sync::Arc;
use weft::prelude::*;
use weft::widgets::lookup::UserLookup;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_panic_handler();

    on_global_event(KeyCode::Char('q'), || {
        request_exit();
        true
    });

    let client: SharedApiClient = Arc::new(HttpClient::new());
    let lookup = UserLookup::new(client, "https://jsonplaceholder.typicode.com/todos/1");

    tokio::task::block_in_place(|| run(move || lookup.clone()))
}
