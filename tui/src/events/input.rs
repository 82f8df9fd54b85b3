use std::{sync::mpsc, thread, time::Duration};

use ratatui::crossterm::event::KeyCode;
use tokio_util::sync::CancellationToken;

pub fn watch_input_events(tx: mpsc::Sender<super::Event>, shutdown_signal: CancellationToken) {
    while !shutdown_signal.is_cancelled() {
        match ratatui::crossterm::event::read() {
            Ok(ratatui::crossterm::event::Event::Key(key_event)) => {
                // Send result back to main thread. If main thread has
                // already shutdown, then we will get error. Since our
                // event is not critical, we do not store it to disk.
                let _ = tx.send(super::Event::Input(key_event));
                // This thread blocks on `event::read()` above, so it can
                // only observe the shutdown signal after a key press. The
                // keys that can trigger an exit get a small pause, which
                // gives the main thread time to flip the signal before
                // the loop condition is checked again.
                if key_event.code == KeyCode::Char('c') || key_event.code == KeyCode::Esc {
                    thread::sleep(Duration::from_millis(10));
                }
            }
            Ok(_) => {}
            Err(_) => break,
        }
    }
}
