use std::sync::mpsc::Sender;

use swarm_utils::{candles::normalize, gmx::PriceApi};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::Event;

/// A one-shot candle fetch in flight. The update it produces is tagged
/// with the symbol it was issued for; cancelling stops the task without
/// sending anything.
#[derive(Debug)]
pub struct CandlesFetch {
    thread: JoinHandle<()>,
    cancel_token: CancellationToken,
}

impl CandlesFetch {
    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub async fn shutdown(self) {
        self.cancel_token.cancel();
        let _ = self.thread.await;
    }
}

pub fn spawn_candles_fetch(
    transmitter: &Sender<Event>,
    shutdown_signal: &CancellationToken,
    api_url: String,
    symbol: String,
    period: String,
) -> CandlesFetch {
    let transmitter = transmitter.clone();
    // The child token also fires on app shutdown.
    let cancel_token = shutdown_signal.child_token();
    let cancel_token_clone = cancel_token.clone();

    let thread = tokio::spawn(async move {
        let api = PriceApi::new(api_url);

        tokio::select! {
            _ = cancel_token_clone.cancelled() => {}
            result = api.fetch_candles(&symbol, &period) => {
                let _ = match result {
                    Ok(candles) => transmitter.send(Event::CandlesUpdate {
                        symbol,
                        points: normalize(candles),
                    }),
                    Err(error) => transmitter.send(Event::CandlesUpdateError { symbol, error }),
                };
            }
        }
    });

    CandlesFetch {
        thread,
        cancel_token,
    }
}
