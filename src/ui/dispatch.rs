//! Runs controller effects on the tokio runtime.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::directory::DirectoryClient;
use crate::phonebook::{execute, Effect, Event};
use crate::ui::events::AppEvent;

/// Spawns requests and the notification timer; completions are posted
/// back as [`AppEvent::Phonebook`].
///
/// Requests are never cancelled once spawned. Only the newest expiry timer
/// is kept; scheduling another aborts the previous one.
pub struct Dispatcher {
    handle: Handle,
    client: Arc<dyn DirectoryClient>,
    sink: Sender<AppEvent>,
    expiry: Option<JoinHandle<()>>,
}

impl Dispatcher {
    pub fn new(handle: Handle, client: Arc<dyn DirectoryClient>, sink: Sender<AppEvent>) -> Self {
        Self {
            handle,
            client,
            sink,
            expiry: None,
        }
    }

    pub fn run_all(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            self.run(effect);
        }
    }

    pub fn run(&mut self, effect: Effect) {
        match effect {
            Effect::Request(request) => {
                let client = Arc::clone(&self.client);
                let sink = self.sink.clone();
                self.handle.spawn(async move {
                    let event = execute(client.as_ref(), request).await;
                    if sink.send(AppEvent::Phonebook(event)).is_err() {
                        tracing::trace!("completion dropped (ui gone)");
                    }
                });
            }
            Effect::ExpireNotification { generation, after } => {
                if let Some(previous) = self.expiry.take() {
                    previous.abort();
                }
                let sink = self.sink.clone();
                self.expiry = Some(self.handle.spawn(async move {
                    tokio::time::sleep(after).await;
                    let _ = sink.send(AppEvent::Phonebook(Event::NotificationExpired {
                        generation,
                    }));
                }));
            }
        }
    }

    /// Stop the pending timer. In-flight requests are left to finish.
    pub fn shutdown(&mut self) {
        if let Some(expiry) = self.expiry.take() {
            expiry.abort();
        }
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        self.shutdown();
    }
}
