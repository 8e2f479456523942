use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

pub enum PlayerEvent {
    Key(KeyEvent),
    /// Emitted roughly once per `tick_rate` when no input arrives; drives
    /// the playback clock.
    Tick,
    Resize(#[allow(dead_code)] u16, #[allow(dead_code)] u16),
}

/// Background pump turning terminal events into `PlayerEvent`s.
///
/// Key releases and repeats are filtered here so screen handlers only ever
/// see press events.
pub struct EventPump {
    rx: mpsc::Receiver<PlayerEvent>,
    _tx: mpsc::Sender<PlayerEvent>,
}

impl EventPump {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let _tx = tx.clone();

        thread::spawn(move || {
            loop {
                if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                            if tx.send(PlayerEvent::Key(key)).is_err() {
                                return;
                            }
                        }
                        Ok(Event::Resize(w, h)) => {
                            if tx.send(PlayerEvent::Resize(w, h)).is_err() {
                                return;
                            }
                        }
                        _ => {}
                    }
                } else if tx.send(PlayerEvent::Tick).is_err() {
                    return;
                }
            }
        });

        Self { rx, _tx }
    }

    pub fn next(&self) -> anyhow::Result<PlayerEvent> {
        Ok(self.rx.recv()?)
    }
}
