use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use swarm_utils::{candles::ChartPoint, gmx::Ticker, wallet::ConnectionState};

pub mod candles;
pub mod input;
pub mod tickers;
pub mod wallet;

#[derive(Debug)]
pub enum Event {
    Input(KeyEvent),

    TickersUpdate(Vec<Ticker>),
    TickersUpdateError(swarm_utils::Error),

    // Candle updates carry the symbol they were fetched for, so that a
    // response arriving after the selection moved on can be discarded.
    CandlesUpdate {
        symbol: String,
        points: Vec<ChartPoint>,
    },
    CandlesUpdateError {
        symbol: String,
        error: swarm_utils::Error,
    },

    WalletUpdate(ConnectionState),
    WalletUpdateError(String),
}

impl Event {
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        matches!(
            self,
            Event::Input(KeyEvent {
                kind: KeyEventKind::Press,
                code,
                modifiers: KeyModifiers::NONE,
                ..
            }) if *code == key
        )
    }

    pub fn key_event(&self) -> Option<&KeyEvent> {
        if let Event::Input(key_event) = self {
            Some(key_event)
        } else {
            None
        }
    }
}
