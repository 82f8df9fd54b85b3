use std::sync::mpsc::Sender;

use swarm_utils::gmx::PriceApi;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::Event;

/// One-shot fetch of the symbol list. The caller proceeds with no
/// selection if the fetch fails.
pub fn spawn_tickers_fetch(
    transmitter: &Sender<Event>,
    shutdown_signal: &CancellationToken,
    api_url: String,
) -> JoinHandle<()> {
    let transmitter = transmitter.clone();
    let shutdown_signal = shutdown_signal.clone();

    tokio::spawn(async move {
        let api = PriceApi::new(api_url);

        tokio::select! {
            _ = shutdown_signal.cancelled() => {}
            result = api.fetch_tickers() => {
                let _ = match result {
                    Ok(tickers) => transmitter.send(Event::TickersUpdate(tickers)),
                    Err(error) => transmitter.send(Event::TickersUpdateError(error)),
                };
            }
        }
    })
}
