use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use crate::config::Config;
use crate::store::worker::{self, StoreCommand};
use crate::store::StoreClient;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Orchestrator → worker command depth. Commands arrive at human speed.
const COMMAND_CHANNEL_CAPACITY: usize = 32;

/// Draw/handle loop. Blocks the calling thread until the user quits;
/// store requests run on the provided runtime and report back through
/// the event channel.
pub fn run(config: Config, runtime: &tokio::runtime::Runtime) -> io::Result<()> {
    let client = StoreClient::new(&config.store)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;

    let tick_rate = Duration::from_millis(config.terminal.tick_rate_ms);
    let events = EventHandler::new(tick_rate);
    let (store_tx, store_rx) =
        tokio::sync::mpsc::channel::<StoreCommand>(COMMAND_CHANNEL_CAPACITY);
    runtime.spawn(worker::run(client, store_rx, events.sender()));

    let mut app = App::new(config);
    app.set_store_sender(store_tx);
    app.request_initial_load();

    let (mut terminal, guard) = setup_terminal()?;

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.paste(&text),
            Ok(AppEvent::Resize) => {}
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Store(event)) => app.on_store_event(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
