use crate::config::Config;
use crate::directory::DirectoryClient;
use crate::phonebook::Phonebook;
use crate::ui::app::App;
use crate::ui::confirm::ModalConfirm;
use crate::ui::dispatch::Dispatcher;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::collections::VecDeque;
use std::io;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Run the interactive phonebook until the user quits.
///
/// The loop is single-threaded: every key, completion and timer is handled
/// one at a time on this thread. Network work runs on `handle`.
pub fn run(config: &Config, client: Arc<dyn DirectoryClient>, handle: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.ui.tick_rate();
    let mut app = App::new(Phonebook::new(config.notification.display_duration()));
    let events = EventHandler::new(tick_rate);
    let mut dispatcher = Dispatcher::new(handle, client, events.sender());
    let mut deferred: VecDeque<AppEvent> = VecDeque::new();

    tracing::info!(url = %config.server.collection_url(), "phonebook started");
    dispatcher.run_all(app.start());

    loop {
        terminal.draw(|frame| draw(frame, &app.screen()))?;
        if app.should_quit() {
            break;
        }

        let event = match deferred.pop_front() {
            Some(event) => event,
            None => match events.next(tick_rate) {
                Ok(event) => event,
                Err(std::sync::mpsc::RecvTimeoutError::Timeout) => continue,
                Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
            },
        };

        let effects = match event {
            AppEvent::Key(key) => {
                let mut confirm =
                    ModalConfirm::new(&mut terminal, &events, app.screen(), tick_rate);
                let effects = handle_key(&mut app, key, &mut confirm);
                deferred.extend(confirm.into_deferred());
                effects
            }
            AppEvent::Phonebook(event) => app.on_event(event),
            AppEvent::Tick | AppEvent::Resize(..) => Vec::new(),
        };
        dispatcher.run_all(effects);
    }

    dispatcher.shutdown();
    drop(guard);
    tracing::info!("phonebook stopped");
    Ok(())
}
